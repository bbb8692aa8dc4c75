// ==========================================
// 项目工时估算 - 引擎层
// ==========================================
// 职责: 纯计算,不做 I/O,不持有跨调用状态
// ==========================================

pub mod calc;
pub mod recalc;

// 重导出核心引擎
pub use recalc::{RecalcEngine, RecalcResult};
