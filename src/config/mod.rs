// ==========================================
// 项目工时估算 - 配置层
// ==========================================
// 职责: 语言、类别标签、外部选项集的配置加载
// 存储: JSON 文件
// ==========================================

pub mod config_loader;
pub mod estimator_config;

// 重导出
pub use config_loader::{default_config_path, ConfigError, ConfigLoader, CONFIG_ENV_VAR};
pub use estimator_config::{EstimatorConfig, DEFAULT_LOCALE};
