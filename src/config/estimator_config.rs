use crate::i18n;
use crate::vocabulary::{CategoryLabels, CategoryVocabulary, OptionSetEntry, VocabularyError};
use serde::{Deserialize, Serialize};

pub const DEFAULT_LOCALE: &str = "en";

fn default_locale() -> String {
    DEFAULT_LOCALE.to_string()
}

/// 估算配置（持久化对象）
///
/// 存储位置：`<config_dir>/effort-estimator/config.json`,或 `EFFORT_ESTIMATOR_CONFIG` 指定的文件
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimatorConfig {
    /// 界面语言（en / pt-BR / zh-CN）
    #[serde(default = "default_locale")]
    pub locale: String,

    /// 类别标签（未配置时取 locale 对应的翻译）
    #[serde(default)]
    pub category_labels: Option<CategoryLabels>,

    /// 外部系统的活动类别选项集
    #[serde(default)]
    pub activity_option_set: Vec<OptionSetEntry>,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            locale: default_locale(),
            category_labels: None,
            activity_option_set: Vec::new(),
        }
    }
}

impl EstimatorConfig {
    /// 生效的类别标签
    pub fn resolved_labels(&self) -> CategoryLabels {
        self.category_labels
            .clone()
            .unwrap_or_else(|| i18n::category_labels(&self.locale))
    }

    /// 按配置构造词表
    pub fn vocabulary(&self) -> Result<CategoryVocabulary, VocabularyError> {
        CategoryVocabulary::with_option_set(self.resolved_labels(), self.activity_option_set.clone())
    }
}
