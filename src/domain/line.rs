// ==========================================
// 项目工时估算 - 估算行 (Estimation Line)
// ==========================================
// 红线: final_estimate 只能由重算引擎写入
// 红线: Support 行的 sizing 由引擎派生,调用方不可自由录入
// ==========================================

use crate::domain::types::{ActivityCategory, Complexity};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 尚未持久化的行 ID 前缀
pub const NEW_LINE_PREFIX: &str = "new-";

// ==========================================
// LinePayload - 描述性载荷
// ==========================================
// 引擎不解释这些字段,只原样携带
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LinePayload {
    pub phase_id: Option<String>,            // 阶段
    pub phase_name: Option<String>,
    pub subphase_id: Option<String>,         // 子阶段
    pub subphase_name: Option<String>,
    pub development_type_id: Option<String>, // 开发类型
    pub development_type_name: Option<String>,
    pub module: Option<String>,              // 模块
    pub customer_requirement: Option<String>,
    pub functionality: Option<String>,
    pub description: Option<String>,
    pub technical_notes: Option<String>,
    pub complexity: Option<Complexity>,
    pub order: Option<i32>,                  // 排序号
    pub number_id: Option<String>,           // 外部系统自动编号
}

// ==========================================
// LineActivity - 按类别区分的工时字段
// ==========================================
// Development/Process: sizing 由调用方录入
// Support: development_share 由调用方录入, sizing 由引擎派生
// Unrecognized: 外部标签无法识别,原样保留,最终估算为 0
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LineActivity {
    Development {
        sizing: f64,
    },
    Process {
        sizing: f64,
    },
    Support {
        development_share: f64,
        #[serde(default)]
        sizing: f64,
    },
    Unrecognized {
        label: Option<String>,
        sizing: f64,
    },
}

impl LineActivity {
    /// 按类别构造（Support 的 sizing 初始为 0,等待引擎派生）
    pub fn entered(category: ActivityCategory, sizing: f64, development_share: f64) -> Self {
        match category {
            ActivityCategory::Development => LineActivity::Development { sizing },
            ActivityCategory::Process => LineActivity::Process { sizing },
            ActivityCategory::Support => LineActivity::Support {
                development_share,
                sizing: 0.0,
            },
        }
    }

    pub fn category(&self) -> Option<ActivityCategory> {
        match self {
            LineActivity::Development { .. } => Some(ActivityCategory::Development),
            LineActivity::Process { .. } => Some(ActivityCategory::Process),
            LineActivity::Support { .. } => Some(ActivityCategory::Support),
            LineActivity::Unrecognized { .. } => None,
        }
    }

    pub fn sizing(&self) -> f64 {
        match self {
            LineActivity::Development { sizing }
            | LineActivity::Process { sizing }
            | LineActivity::Support { sizing, .. }
            | LineActivity::Unrecognized { sizing, .. } => *sizing,
        }
    }

    pub fn development_share(&self) -> Option<f64> {
        match self {
            LineActivity::Support {
                development_share, ..
            } => Some(*development_share),
            _ => None,
        }
    }

    /// 切换类别
    ///
    /// 录入型 sizing 在 Development/Process 之间保留;
    /// 切换到 Support 时 share 从 0 开始, 离开 Support 时派生 sizing 作为初值保留。
    pub fn with_category(self, category: ActivityCategory) -> Self {
        let sizing = self.sizing();
        let share = self.development_share().unwrap_or(0.0);
        match category {
            ActivityCategory::Support => LineActivity::Support {
                development_share: share,
                sizing,
            },
            other => LineActivity::entered(other, sizing, share),
        }
    }
}

// ==========================================
// EstimationLine - 估算行
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimationLine {
    pub line_id: String,
    pub estimation_id: Option<String>,
    pub activity: LineActivity,
    #[serde(default)]
    final_estimate: u64,
    #[serde(default)]
    pub payload: LinePayload,
}

impl EstimationLine {
    pub fn new(line_id: impl Into<String>, activity: LineActivity) -> Self {
        Self {
            line_id: line_id.into(),
            estimation_id: None,
            activity,
            final_estimate: 0,
            payload: LinePayload::default(),
        }
    }

    pub fn development(line_id: impl Into<String>, sizing: f64) -> Self {
        Self::new(line_id, LineActivity::Development { sizing })
    }

    pub fn process(line_id: impl Into<String>, sizing: f64) -> Self {
        Self::new(line_id, LineActivity::Process { sizing })
    }

    pub fn support(line_id: impl Into<String>, development_share: f64) -> Self {
        Self::new(
            line_id,
            LineActivity::Support {
                development_share,
                sizing: 0.0,
            },
        )
    }

    pub fn unrecognized(line_id: impl Into<String>, label: Option<String>, sizing: f64) -> Self {
        Self::new(line_id, LineActivity::Unrecognized { label, sizing })
    }

    /// 新建未持久化的行（ID: new-<uuid>）
    pub fn draft(estimation_id: Option<String>, activity: LineActivity) -> Self {
        let mut line = Self::new(new_line_id(), activity);
        line.estimation_id = estimation_id;
        line
    }

    pub fn with_estimation_id(mut self, estimation_id: impl Into<String>) -> Self {
        self.estimation_id = Some(estimation_id.into());
        self
    }

    pub fn with_payload(mut self, payload: LinePayload) -> Self {
        self.payload = payload;
        self
    }

    pub fn category(&self) -> Option<ActivityCategory> {
        self.activity.category()
    }

    pub fn sizing(&self) -> f64 {
        self.activity.sizing()
    }

    pub fn final_estimate(&self) -> u64 {
        self.final_estimate
    }

    /// 是否已存在于外部存储
    pub fn is_persisted(&self) -> bool {
        !self.line_id.starts_with(NEW_LINE_PREFIX)
    }

    pub(crate) fn set_final_estimate(&mut self, value: u64) {
        self.final_estimate = value;
    }

    /// 仅供存储层回填已持久化的值
    pub(crate) fn with_stored_final_estimate(mut self, value: u64) -> Self {
        self.final_estimate = value;
        self
    }
}

/// 生成未持久化行 ID
pub fn new_line_id() -> String {
    format!("{}{}", NEW_LINE_PREFIX, Uuid::new_v4())
}
