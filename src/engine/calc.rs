// ==========================================
// 项目工时估算 - 估算公式
// ==========================================
// 职责: 单条公式的纯函数实现,供 RecalcEngine 按顺序组合
// 红线: 任何非有限值 (NaN/Infinity) 一律按 0 处理,不得进入汇总
// ==========================================

use crate::domain::line::{EstimationLine, LineActivity};
use crate::domain::types::ActivityCategory;

/// 非有限值按 0 处理
pub fn sanitize(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// 向上取整为非负整数工时
///
/// 负数、NaN、Infinity → 0
pub fn ceil_hours(value: f64) -> u64 {
    if !value.is_finite() || value <= 0.0 {
        return 0;
    }
    value.ceil() as u64
}

/// 某类别的 sizing 合计
pub fn total_sizing(lines: &[EstimationLine], category: ActivityCategory) -> f64 {
    let total: f64 = lines
        .iter()
        .filter(|line| line.category() == Some(category))
        .map(|line| sanitize(line.sizing()))
        .sum();
    sanitize(total)
}

/// 支持比例 = 支持总工时 / 开发总工时
///
/// 以下情况返回 0:
/// - 任一参数为 NaN 或 Infinity
/// - 任一参数为负
/// - 开发总工时为 0
pub fn support_ratio(total_support_sizing: f64, total_development_sizing: f64) -> f64 {
    if !total_support_sizing.is_finite() || !total_development_sizing.is_finite() {
        return 0.0;
    }
    if total_support_sizing < 0.0 || total_development_sizing < 0.0 {
        return 0.0;
    }
    if total_development_sizing == 0.0 {
        return 0.0;
    }
    total_support_sizing / total_development_sizing
}

/// Support 行派生 sizing = ceil(development_share / 100 × 开发总工时)
///
/// development_share 不做 [0, 100] 截断。
/// 先乘后除,整数输入下结果精确,避免 0.1 × 140 一类的浮点误差把 ceil 推高一格。
pub fn support_sizing(development_share: f64, total_development_sizing: f64) -> f64 {
    let raw = sanitize(development_share) * sanitize(total_development_sizing) / 100.0;
    sanitize(raw.ceil())
}

/// Development 行最终估算 = ceil(sizing × (1 + 支持比例))
///
/// 比例有效时按 sizing × (开发 + 支持) / 开发 计算,与公式等价且整数输入下精确。
pub fn development_estimate(
    sizing: f64,
    total_support_sizing: f64,
    total_development_sizing: f64,
) -> u64 {
    let sizing = sanitize(sizing);
    let ratio = support_ratio(total_support_sizing, total_development_sizing);
    if ratio == 0.0 {
        return ceil_hours(sizing);
    }
    ceil_hours(sizing * (total_development_sizing + total_support_sizing) / total_development_sizing)
}

/// Process 行最终估算 = sizing（原样透传,小数部分向上取整）
///
/// 只有整数 sizing 满足 final_estimate == sizing; 4.2 → 5
pub fn process_estimate(sizing: f64) -> u64 {
    ceil_hours(sanitize(sizing))
}

/// 按活动类别计算最终估算
pub fn final_estimate(
    activity: &LineActivity,
    total_development_sizing: f64,
    total_support_sizing: f64,
) -> u64 {
    match activity {
        LineActivity::Development { sizing } => {
            development_estimate(*sizing, total_support_sizing, total_development_sizing)
        }
        LineActivity::Process { sizing } => process_estimate(*sizing),
        LineActivity::Support { .. } => 0,
        LineActivity::Unrecognized { .. } => 0,
    }
}
