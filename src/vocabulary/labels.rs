// ==========================================
// 项目工时估算 - 类别词表适配器
// ==========================================
// 职责: 外部系统的类别表示 (本地化标签 / 选项集编码) ↔ ActivityCategory
// 红线: 引擎只接收 ActivityCategory,标签漂移在此层隔离
// ==========================================

use crate::domain::types::ActivityCategory;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum VocabularyError {
    #[error("类别标签为空: {0}")]
    BlankLabel(ActivityCategory),

    #[error("类别标签重复: {label}")]
    DuplicateLabel { label: String },

    #[error("选项集编码重复: {0}")]
    DuplicateCode(i32),
}

// ==========================================
// CategoryLabels - 本次会话的三类标签
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryLabels {
    pub development: String,
    pub process: String,
    pub support: String,
}

impl Default for CategoryLabels {
    fn default() -> Self {
        Self {
            development: ActivityCategory::Development.default_label().to_string(),
            process: ActivityCategory::Process.default_label().to_string(),
            support: ActivityCategory::Support.default_label().to_string(),
        }
    }
}

impl CategoryLabels {
    pub fn new(
        development: impl Into<String>,
        process: impl Into<String>,
        support: impl Into<String>,
    ) -> Self {
        Self {
            development: development.into(),
            process: process.into(),
            support: support.into(),
        }
    }

    pub fn label_of(&self, category: ActivityCategory) -> &str {
        match category {
            ActivityCategory::Development => &self.development,
            ActivityCategory::Process => &self.process,
            ActivityCategory::Support => &self.support,
        }
    }
}

// ==========================================
// OptionSetEntry - 外部选项集中的一项
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionSetEntry {
    pub value: i32,
    pub label: String,
}

// ==========================================
// CategoryVocabulary - 标签/编码解析
// ==========================================
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryVocabulary {
    labels: CategoryLabels,
    by_label: HashMap<String, ActivityCategory>,
    by_code: HashMap<i32, ActivityCategory>,
    codes: HashMap<ActivityCategory, i32>,
    option_set: Vec<OptionSetEntry>,
}

impl CategoryVocabulary {
    /// 仅按标签构造
    pub fn new(labels: CategoryLabels) -> Result<Self, VocabularyError> {
        Self::with_option_set(labels, Vec::new())
    }

    /// 按标签 + 选项集构造
    ///
    /// 选项集中标签与三类标签之一完全一致的项,其编码归属该类别;
    /// 其余项保留在选项集中（供界面下拉使用）,但不映射到任何类别。
    pub fn with_option_set(
        labels: CategoryLabels,
        option_set: Vec<OptionSetEntry>,
    ) -> Result<Self, VocabularyError> {
        let mut by_label = HashMap::new();
        for category in ActivityCategory::ALL {
            let label = labels.label_of(category);
            if label.trim().is_empty() {
                return Err(VocabularyError::BlankLabel(category));
            }
            if by_label.insert(label.to_string(), category).is_some() {
                return Err(VocabularyError::DuplicateLabel {
                    label: label.to_string(),
                });
            }
        }

        let mut seen = HashSet::new();
        let mut by_code = HashMap::new();
        let mut codes = HashMap::new();
        for entry in &option_set {
            if !seen.insert(entry.value) {
                return Err(VocabularyError::DuplicateCode(entry.value));
            }
            if let Some(category) = by_label.get(&entry.label) {
                by_code.insert(entry.value, *category);
                codes.insert(*category, entry.value);
            }
        }

        Ok(Self {
            labels,
            by_label,
            by_code,
            codes,
            option_set,
        })
    }

    /// 宽松构造（不校验,不失败）
    ///
    /// 空白标签取该类别的默认英文标签;多个类别共用同一标签时,
    /// 按 Development → Process → Support 的顺序先匹配者生效。
    pub fn lenient(labels: CategoryLabels) -> Self {
        let labels = CategoryLabels::new(
            label_or_default(&labels.development, ActivityCategory::Development),
            label_or_default(&labels.process, ActivityCategory::Process),
            label_or_default(&labels.support, ActivityCategory::Support),
        );

        let mut by_label = HashMap::new();
        for category in ActivityCategory::ALL {
            by_label
                .entry(labels.label_of(category).to_string())
                .or_insert(category);
        }

        Self {
            labels,
            by_label,
            by_code: HashMap::new(),
            codes: HashMap::new(),
            option_set: Vec::new(),
        }
    }

    pub fn labels(&self) -> &CategoryLabels {
        &self.labels
    }

    pub fn option_set(&self) -> &[OptionSetEntry] {
        &self.option_set
    }

    /// 标签 → 类别（逐字比较）
    pub fn resolve_label(&self, label: &str) -> Option<ActivityCategory> {
        self.by_label.get(label).copied()
    }

    /// 选项集编码 → 类别
    pub fn resolve_code(&self, code: i32) -> Option<ActivityCategory> {
        self.by_code.get(&code).copied()
    }

    pub fn label_of(&self, category: ActivityCategory) -> &str {
        self.labels.label_of(category)
    }

    pub fn code_of(&self, category: ActivityCategory) -> Option<i32> {
        self.codes.get(&category).copied()
    }

    /// 选项集编码 → 标签（编码不在选项集中返回 None）
    pub fn label_of_code(&self, code: i32) -> Option<&str> {
        self.option_set
            .iter()
            .find(|entry| entry.value == code)
            .map(|entry| entry.label.as_str())
    }
}

impl Default for CategoryVocabulary {
    fn default() -> Self {
        Self::lenient(CategoryLabels::default())
    }
}

fn label_or_default(label: &str, category: ActivityCategory) -> String {
    if label.trim().is_empty() {
        category.default_label().to_string()
    } else {
        label.to_string()
    }
}
