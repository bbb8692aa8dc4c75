// ==========================================
// 项目工时估算 - 工作表层
// ==========================================
// 职责: 调用方工作集的编辑、模板导入、加载与保存
// 红线: 每次变更后由 RecalcEngine 全量重算
// ==========================================

pub mod error;
pub mod patch;
pub mod session;

pub use error::{WorksheetError, WorksheetResult};
pub use patch::LinePatch;
pub use session::{EstimationWorksheet, SavePlan, SaveReport};
