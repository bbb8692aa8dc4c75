// ==========================================
// 项目工时估算 - 估算模板与查找表
// ==========================================
// 估算模板 (Estimation Model): 可重复导入的一组模板行
// 开发类型 (Development Type): 选择后复制默认描述到行
// ==========================================

use crate::domain::line::LinePayload;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimationModel {
    pub model_id: String,
    pub name: String,
}

/// 模板行
///
/// 活动类别以外部标签保存,导入时经 vocabulary 转换。
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ModelLine {
    pub model_line_id: Option<String>,
    pub model_id: Option<String>,
    pub activity_label: Option<String>,
    #[serde(default)]
    pub activity_code: Option<i32>, // 选项集编码（优先于标签）
    pub sizing: Option<f64>,
    pub development_share: Option<f64>,
    #[serde(default)]
    pub payload: LinePayload,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DevelopmentType {
    pub development_type_id: String,
    pub name: String,
    pub default_description: Option<String>,
}
