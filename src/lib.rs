// ==========================================
// 项目工时估算 - 核心库
// ==========================================
// 职责: 估算行重算引擎 + 类别词表 + 工作表 + 模板导入
// 核心: 四遍重算（开发总量 → 支持工时派生 → 支持总量 → 最终估算）
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "en");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 引擎层 - 重算规则
pub mod engine;

// 词表层 - 外部类别标签适配
pub mod vocabulary;

// 协作方层 - 行存储与词表提供方
pub mod store;

// 工作表层 - 调用方工作集
pub mod worksheet;

// 导入层 - 估算模板文件
pub mod importer;

// 配置层
pub mod config;

// 日志系统
pub mod logging;

// 国际化
pub mod i18n;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{ActivityCategory, Complexity};

// 领域实体
pub use domain::{
    DevelopmentType, Estimation, EstimationLine, EstimationModel, EstimationTotals, LineActivity,
    LinePayload, ModelLine,
};

// 引擎
pub use engine::{RecalcEngine, RecalcResult};

// 词表
pub use vocabulary::{
    recalculate_labelled, CategoryLabels, CategoryVocabulary, LabelledLine, OptionSetEntry,
};

// 工作表
pub use worksheet::{EstimationWorksheet, LinePatch, WorksheetError};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "项目工时估算";
