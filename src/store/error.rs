// ==========================================
// 项目工时估算 - 存储协作方错误类型
// ==========================================

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("记录不存在: {entity}(id={id})")]
    NotFound { entity: String, id: String },

    #[error("记录已存在: {entity}(id={id})")]
    AlreadyExists { entity: String, id: String },

    #[error("存储不可用: {0}")]
    Unavailable(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl StoreError {
    pub fn not_found(entity: &str, id: &str) -> Self {
        StoreError::NotFound {
            entity: entity.to_string(),
            id: id.to_string(),
        }
    }
}

pub type StoreResult<T> = Result<T, StoreError>;
