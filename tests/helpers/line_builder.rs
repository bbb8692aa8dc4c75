// ==========================================
// 测试数据构建器 - 用于集成测试
// ==========================================

use effort_estimator::domain::{
    Estimation, EstimationLine, LineActivity, LinePayload, ModelLine,
};
use effort_estimator::store::InMemoryLineStore;

pub const EST_ID: &str = "5c1d8f0e-2b7a-4e3c-9d41-6a0b2c3d4e5f";

// ==========================================
// EstimationLine 构建器
// ==========================================

pub struct LineBuilder {
    line_id: String,
    activity: LineActivity,
    estimation_id: Option<String>,
    payload: LinePayload,
}

impl LineBuilder {
    pub fn development(line_id: &str, sizing: f64) -> Self {
        Self::with_activity(line_id, LineActivity::Development { sizing })
    }

    pub fn process(line_id: &str, sizing: f64) -> Self {
        Self::with_activity(line_id, LineActivity::Process { sizing })
    }

    pub fn support(line_id: &str, development_share: f64) -> Self {
        Self::with_activity(
            line_id,
            LineActivity::Support {
                development_share,
                sizing: 0.0,
            },
        )
    }

    pub fn unrecognized(line_id: &str, label: &str, sizing: f64) -> Self {
        Self::with_activity(
            line_id,
            LineActivity::Unrecognized {
                label: Some(label.to_string()),
                sizing,
            },
        )
    }

    fn with_activity(line_id: &str, activity: LineActivity) -> Self {
        Self {
            line_id: line_id.to_string(),
            activity,
            estimation_id: None,
            payload: LinePayload::default(),
        }
    }

    pub fn estimation(mut self, estimation_id: &str) -> Self {
        self.estimation_id = Some(estimation_id.to_string());
        self
    }

    pub fn module(mut self, module: &str) -> Self {
        self.payload.module = Some(module.to_string());
        self
    }

    pub fn order(mut self, order: i32) -> Self {
        self.payload.order = Some(order);
        self
    }

    pub fn build(self) -> EstimationLine {
        let mut line = EstimationLine::new(self.line_id, self.activity).with_payload(self.payload);
        line.estimation_id = self.estimation_id;
        line
    }
}

// ==========================================
// ModelLine 构建器
// ==========================================

pub fn model_line(model_id: &str, label: &str, sizing: Option<f64>, share: Option<f64>) -> ModelLine {
    ModelLine {
        model_id: Some(model_id.to_string()),
        activity_label: Some(label.to_string()),
        sizing,
        development_share: share,
        ..Default::default()
    }
}

// ==========================================
// 预置存储
// ==========================================

/// 含一个估算头和给定行的内存存储
pub async fn seeded_store(lines: Vec<EstimationLine>) -> InMemoryLineStore {
    let store = InMemoryLineStore::new();
    store
        .insert_estimation(Estimation::with_id(EST_ID))
        .await
        .expect("写入估算头失败");
    for line in lines {
        store.seed_line(line).await;
    }
    store
}

/// 持久化风格的行 ID（非 new- 前缀）
pub fn stored_id(n: u32) -> String {
    format!("00000000-0000-0000-0000-{:012}", n)
}
