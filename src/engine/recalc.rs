// ==========================================
// 项目工时估算 - 重算引擎
// ==========================================
// 职责: 任意行变更后,重新派生 Support sizing、全部行的最终估算与三项汇总
// 输入: 估算行快照（有序）
// 输出: 新的估算行快照（同长同序） + 汇总
// ==========================================
// 红线: 四个步骤严格按序执行,每步只读取前一步的结果
//   1) 开发总工时
//   2) Support 行派生 sizing（依赖 1）
//   3) 支持总工时（依赖 2 的新值）
//   4) 每行最终估算（依赖 1 + 3）
// 红线: 不修改输入,不做 I/O,不会失败
// ==========================================

use crate::domain::estimation::EstimationTotals;
use crate::domain::line::{EstimationLine, LineActivity};
use crate::domain::types::ActivityCategory;
use crate::engine::calc;
use serde::{Deserialize, Serialize};
use tracing::instrument;

// ==========================================
// RecalcResult - 重算结果
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecalcResult {
    pub lines: Vec<EstimationLine>,
    pub totals: EstimationTotals,
}

// ==========================================
// RecalcEngine - 重算引擎
// ==========================================
// 无状态,每次调用独立
#[derive(Debug, Clone, Copy, Default)]
pub struct RecalcEngine;

impl RecalcEngine {
    pub fn new() -> Self {
        Self
    }

    /// 全量重算
    #[instrument(skip(self, lines), fields(count = lines.len()))]
    pub fn recalculate(&self, lines: &[EstimationLine]) -> RecalcResult {
        // 1. 开发总工时（Support 行的旧 sizing 不参与）
        let total_development_sizing = calc::total_sizing(lines, ActivityCategory::Development);

        // 2. 派生 Support sizing（调用方传入的值一律覆盖）
        let derived = Self::derive_support_sizing(lines, total_development_sizing);

        // 3. 支持总工时（只用第 2 步的新值）
        let total_support_sizing = calc::total_sizing(&derived, ActivityCategory::Support);

        // 4. 每行最终估算
        let lines: Vec<EstimationLine> = derived
            .into_iter()
            .map(|mut line| {
                let value = calc::final_estimate(
                    &line.activity,
                    total_development_sizing,
                    total_support_sizing,
                );
                line.set_final_estimate(value);
                line
            })
            .collect();

        // 5. 汇总（Process 不计入）
        let totals = EstimationTotals::new(total_development_sizing, total_support_sizing);

        tracing::debug!(
            total_development_sizing = totals.total_development_sizing,
            total_support_sizing = totals.total_support_sizing,
            total_project_hours = totals.total_project_hours,
            "重算完成"
        );

        RecalcResult { lines, totals }
    }

    fn derive_support_sizing(
        lines: &[EstimationLine],
        total_development_sizing: f64,
    ) -> Vec<EstimationLine> {
        lines
            .iter()
            .cloned()
            .map(|mut line| {
                if let LineActivity::Support {
                    development_share,
                    sizing,
                } = &mut line.activity
                {
                    *sizing = calc::support_sizing(*development_share, total_development_sizing);
                }
                line
            })
            .collect()
    }
}
