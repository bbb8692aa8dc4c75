// ==========================================
// 项目工时估算 - 类别词表层
// ==========================================
// 职责: 外部标签/编码 ↔ ActivityCategory 的边界转换
// ==========================================

pub mod labelled;
pub mod labels;

pub use labelled::{recalculate_labelled, recalculate_with, LabelledLine, LabelledRecalcResult};
pub use labels::{CategoryLabels, CategoryVocabulary, OptionSetEntry, VocabularyError};
