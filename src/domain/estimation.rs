// ==========================================
// 项目工时估算 - 估算头与汇总
// ==========================================

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ==========================================
// EstimationTotals - 单次重算的汇总值
// ==========================================
// 每次重算重新计算,不作为独立实体持久化
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EstimationTotals {
    pub total_development_sizing: f64, // 开发总工时
    pub total_support_sizing: f64,     // 支持总工时
    pub total_project_hours: f64,      // 项目总工时 = 开发 + 支持
}

impl EstimationTotals {
    pub fn new(total_development_sizing: f64, total_support_sizing: f64) -> Self {
        Self {
            total_development_sizing,
            total_support_sizing,
            total_project_hours: total_development_sizing + total_support_sizing,
        }
    }
}

// ==========================================
// Estimation - 估算头
// ==========================================
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Estimation {
    pub estimation_id: Option<String>,
    pub name: Option<String>,
    pub opportunity: Option<String>,          // 商机
    pub estimation_model_id: Option<String>,  // 估算模板
    pub estimation_model_name: Option<String>,
    pub estimated_start_date: Option<NaiveDate>,
    pub number_id: Option<String>,
    #[serde(default)]
    pub totals: EstimationTotals,
}

impl Estimation {
    pub fn with_id(estimation_id: impl Into<String>) -> Self {
        Self {
            estimation_id: Some(estimation_id.into()),
            ..Default::default()
        }
    }

    pub fn apply_totals(&mut self, totals: EstimationTotals) {
        self.totals = totals;
    }
}
