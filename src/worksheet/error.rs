// ==========================================
// 项目工时估算 - 工作表错误类型
// ==========================================

use crate::domain::types::ActivityCategory;
use crate::i18n;
use crate::store::StoreError;
use crate::vocabulary::VocabularyError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WorksheetError {
    #[error("估算行不存在: {0}")]
    LineNotFound(String),

    #[error("{category} 行不可删除: line_id={line_id}")]
    ProtectedLine {
        line_id: String,
        category: ActivityCategory,
    },

    #[error("Support 行的 sizing 由重算派生,不可录入: line_id={0}")]
    DerivedSizing(String),

    #[error("仅 Support 行可设置开发占比: line_id={0}")]
    NotSupportLine(String),

    #[error("估算 ID 格式无效: {0}")]
    InvalidEstimationId(String),

    #[error("工作表缺少估算 ID")]
    MissingEstimationId,

    #[error(transparent)]
    Vocabulary(#[from] VocabularyError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl WorksheetError {
    /// 面向用户的本地化消息（当前 locale）
    pub fn user_message(&self) -> String {
        match self {
            WorksheetError::LineNotFound(id) => {
                i18n::t_with_args("worksheet.line_not_found", &[("id", id.as_str())])
            }
            WorksheetError::ProtectedLine { .. } => i18n::t("worksheet.protected_line"),
            WorksheetError::InvalidEstimationId(id) => {
                i18n::t_with_args("worksheet.invalid_estimation_id", &[("id", id.as_str())])
            }
            WorksheetError::Store(e) => {
                let reason = e.to_string();
                i18n::t_with_args("worksheet.store_failure", &[("reason", reason.as_str())])
            }
            other => other.to_string(),
        }
    }
}

pub type WorksheetResult<T> = Result<T, WorksheetError>;
