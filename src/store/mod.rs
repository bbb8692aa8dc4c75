// ==========================================
// 项目工时估算 - 协作方层
// ==========================================
// 职责: 行存储 / 词表提供方的接口与内存实现
// 说明: 远端数据存储不在本 crate 内,调用方实现 LineStore 接入
// ==========================================

pub mod error;
pub mod memory;
pub mod traits;

pub use error::{StoreError, StoreResult};
pub use memory::{InMemoryLineStore, StaticVocabularyProvider};
pub use traits::{LineStore, VocabularyProvider};
