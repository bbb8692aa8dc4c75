// ==========================================
// 项目工时估算 - 领域类型定义
// ==========================================
// 活动类别 + 复杂度
// 红线: 引擎内部只认闭合的三类活动,外部标签由 vocabulary 层转换
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 活动类别 (Activity Category)
// ==========================================
// Development: 开发工时,最终估算按支持比例放大
// Process: 流程工时,最终估算原样透传
// Support: 支持工时,按开发总工时的百分比派生,自身最终估算恒为 0
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActivityCategory {
    Development,
    Process,
    Support,
}

impl ActivityCategory {
    pub const ALL: [ActivityCategory; 3] = [
        ActivityCategory::Development,
        ActivityCategory::Process,
        ActivityCategory::Support,
    ];

    /// 默认英文标签（外部系统未提供标签时使用）
    pub fn default_label(&self) -> &'static str {
        match self {
            ActivityCategory::Development => "Development",
            ActivityCategory::Process => "Process",
            ActivityCategory::Support => "Support",
        }
    }

    /// i18n 目录中的键
    pub fn i18n_key(&self) -> &'static str {
        match self {
            ActivityCategory::Development => "category.development",
            ActivityCategory::Process => "category.process",
            ActivityCategory::Support => "category.support",
        }
    }
}

impl fmt::Display for ActivityCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActivityCategory::Development => write!(f, "DEVELOPMENT"),
            ActivityCategory::Process => write!(f, "PROCESS"),
            ActivityCategory::Support => write!(f, "SUPPORT"),
        }
    }
}

// ==========================================
// 复杂度 (Complexity)
// ==========================================
// 仅作为行的描述性载荷,引擎不解释
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Complexity {
    #[serde(rename = "Very Low")]
    VeryLow,
    Low,
    Medium,
    High,
    #[serde(rename = "Very High")]
    VeryHigh,
}

impl Complexity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Complexity::VeryLow => "Very Low",
            Complexity::Low => "Low",
            Complexity::Medium => "Medium",
            Complexity::High => "High",
            Complexity::VeryHigh => "Very High",
        }
    }

    /// 从外部标签解析（大小写、首尾空白不敏感）
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "very low" => Some(Complexity::VeryLow),
            "low" => Some(Complexity::Low),
            "medium" => Some(Complexity::Medium),
            "high" => Some(Complexity::High),
            "very high" => Some(Complexity::VeryHigh),
            _ => None,
        }
    }
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activity_category_serde_format() {
        let json = serde_json::to_string(&ActivityCategory::Support).unwrap();
        assert_eq!(json, "\"SUPPORT\"");

        let parsed: ActivityCategory = serde_json::from_str("\"DEVELOPMENT\"").unwrap();
        assert_eq!(parsed, ActivityCategory::Development);
    }

    #[test]
    fn test_complexity_from_label() {
        assert_eq!(Complexity::from_label(" Very High "), Some(Complexity::VeryHigh));
        assert_eq!(Complexity::from_label("medium"), Some(Complexity::Medium));
        assert_eq!(Complexity::from_label("Extreme"), None);
    }
}
