// ==========================================
// 项目工时估算 - 领域模型层
// ==========================================
// 职责: 定义估算行、估算头、模板、类别类型
// 红线: 不含数据访问逻辑,不含引擎逻辑
// ==========================================

pub mod estimation;
pub mod line;
pub mod model;
pub mod types;

// 重导出核心类型
pub use estimation::{Estimation, EstimationTotals};
pub use line::{new_line_id, EstimationLine, LineActivity, LinePayload, NEW_LINE_PREFIX};
pub use model::{DevelopmentType, EstimationModel, ModelLine};
pub use types::{ActivityCategory, Complexity};
