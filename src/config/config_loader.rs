// ==========================================
// 项目工时估算 - 配置加载
// ==========================================
// 顺序: 环境变量指定文件 → 用户配置目录 → 默认值
// ==========================================

use crate::config::estimator_config::EstimatorConfig;
use crate::vocabulary::VocabularyError;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// 显式指定配置文件的环境变量
pub const CONFIG_ENV_VAR: &str = "EFFORT_ESTIMATOR_CONFIG";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("配置文件不存在: {0}")]
    FileNotFound(String),

    #[error("配置文件读取失败 ({path}): {message}")]
    ReadError { path: String, message: String },

    #[error("配置文件格式错误 ({path}): {message}")]
    ParseError { path: String, message: String },

    #[error("类别标签配置无效: {0}")]
    InvalidVocabulary(#[from] VocabularyError),
}

/// 默认配置文件路径
///
/// 用户配置目录不可用时返回 None
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("effort-estimator").join("config.json"))
}

pub struct ConfigLoader;

impl ConfigLoader {
    /// 加载配置
    ///
    /// - `EFFORT_ESTIMATOR_CONFIG` 已设置: 该文件必须存在
    /// - 否则默认路径存在时读取
    /// - 都没有时使用默认配置
    pub fn load() -> Result<EstimatorConfig, ConfigError> {
        if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
            let trimmed = path.trim();
            if !trimmed.is_empty() {
                return Self::load_from(trimmed);
            }
        }

        match default_config_path() {
            Some(path) if path.exists() => Self::load_from(path),
            _ => {
                tracing::debug!("未找到配置文件,使用默认配置");
                Ok(EstimatorConfig::default())
            }
        }
    }

    /// 从指定文件加载并校验
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<EstimatorConfig, ConfigError> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        if !path.exists() {
            return Err(ConfigError::FileNotFound(path_str));
        }

        let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path_str.clone(),
            message: e.to_string(),
        })?;

        let config: EstimatorConfig =
            serde_json::from_str(&raw).map_err(|e| ConfigError::ParseError {
                path: path_str.clone(),
                message: e.to_string(),
            })?;

        // 标签重复/为空在加载时即报错
        config.vocabulary()?;

        tracing::info!(path = %path_str, locale = %config.locale, "配置已加载");
        Ok(config)
    }
}
