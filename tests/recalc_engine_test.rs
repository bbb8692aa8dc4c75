// ==========================================
// RecalcEngine 集成测试
// ==========================================
// 测试范围:
// 1. 典型场景（开发 + 支持 / 仅流程 / 空输入）
// 2. 汇总恒等式与重算幂等
// 3. 各类别最终估算规则
// 4. 顺序保持与异常数值
// ==========================================

mod helpers;

use effort_estimator::domain::{ActivityCategory, EstimationLine, LineActivity};
use effort_estimator::engine::RecalcEngine;
use helpers::LineBuilder;

fn mixed_lines() -> Vec<EstimationLine> {
    vec![
        LineBuilder::development("D1", 37.5).module("Sales").build(),
        LineBuilder::support("S1", 12.0).build(),
        LineBuilder::process("P1", 4.2).build(),
        LineBuilder::development("D2", 62.5).build(),
        LineBuilder::support("S2", 7.5).build(),
        LineBuilder::unrecognized("U1", "Legacy", 9.0).build(),
    ]
}

// ==========================================
// 场景
// ==========================================

#[test]
fn test_development_with_twenty_percent_support() {
    let lines = vec![
        LineBuilder::development("D1", 10.0).build(),
        LineBuilder::support("S1", 20.0).build(),
    ];

    let result = RecalcEngine::new().recalculate(&lines);

    assert_eq!(result.lines[1].sizing(), 2.0);
    assert_eq!(result.lines[0].final_estimate(), 12);
    assert_eq!(result.lines[1].final_estimate(), 0);
    assert_eq!(result.totals.total_development_sizing, 10.0);
    assert_eq!(result.totals.total_support_sizing, 2.0);
    assert_eq!(result.totals.total_project_hours, 12.0);
}

#[test]
fn test_process_only_estimation() {
    let lines = vec![LineBuilder::process("P1", 5.0).build()];

    let result = RecalcEngine::new().recalculate(&lines);

    assert_eq!(result.lines[0].final_estimate(), 5);
    assert_eq!(result.totals.total_development_sizing, 0.0);
    assert_eq!(result.totals.total_support_sizing, 0.0);
    assert_eq!(result.totals.total_project_hours, 0.0);
}

#[test]
fn test_empty_estimation() {
    let result = RecalcEngine::new().recalculate(&[]);

    assert!(result.lines.is_empty());
    assert_eq!(result.totals.total_project_hours, 0.0);
}

#[test]
fn test_two_support_lines_share_development_total() {
    let lines = vec![
        LineBuilder::development("D1", 100.0).build(),
        LineBuilder::support("S1", 10.0).build(),
        LineBuilder::support("S2", 15.0).build(),
    ];

    let result = RecalcEngine::new().recalculate(&lines);

    assert_eq!(result.lines[1].sizing(), 10.0);
    assert_eq!(result.lines[2].sizing(), 15.0);
    assert_eq!(result.totals.total_support_sizing, 25.0);
    assert_eq!(result.lines[0].final_estimate(), 125);
}

// ==========================================
// 性质
// ==========================================

#[test]
fn test_project_hours_is_development_plus_support() {
    let result = RecalcEngine::new().recalculate(&mixed_lines());
    let totals = result.totals;

    assert_eq!(
        totals.total_project_hours,
        totals.total_development_sizing + totals.total_support_sizing
    );
    // Process 与无法识别的行不计入汇总
    assert_eq!(totals.total_development_sizing, 100.0);
    assert_eq!(totals.total_support_sizing, 12.0 + 8.0);
}

#[test]
fn test_support_sizing_formula() {
    let result = RecalcEngine::new().recalculate(&mixed_lines());
    let total_dev = result.totals.total_development_sizing;

    for line in &result.lines {
        if let LineActivity::Support {
            development_share,
            sizing,
        } = line.activity
        {
            assert_eq!(sizing, (development_share / 100.0 * total_dev).ceil());
        }
    }
}

#[test]
fn test_recalculation_is_idempotent() {
    let engine = RecalcEngine::new();
    let first = engine.recalculate(&mixed_lines());
    let second = engine.recalculate(&first.lines);

    assert_eq!(first, second);
}

#[test]
fn test_per_category_final_estimates() {
    let result = RecalcEngine::new().recalculate(&mixed_lines());

    for line in &result.lines {
        match line.category() {
            Some(ActivityCategory::Process) => {
                assert_eq!(line.final_estimate(), line.sizing().ceil() as u64)
            }
            Some(ActivityCategory::Support) | None => assert_eq!(line.final_estimate(), 0),
            Some(ActivityCategory::Development) => {
                let ratio = result.totals.total_support_sizing
                    / result.totals.total_development_sizing;
                let expected = (line.sizing() * (1.0 + ratio)).ceil() as u64;
                assert_eq!(line.final_estimate(), expected);
            }
        }
    }
    // 37.5 × 1.2 = 45; 62.5 × 1.2 = 75
    assert_eq!(result.lines[0].final_estimate(), 45);
    assert_eq!(result.lines[3].final_estimate(), 75);
}

#[test]
fn test_zero_development_total_zeroes_development_estimates() {
    let lines = vec![
        LineBuilder::development("D1", 0.0).build(),
        LineBuilder::support("S1", 50.0).build(),
        LineBuilder::process("P1", 3.0).build(),
    ];

    let result = RecalcEngine::new().recalculate(&lines);

    assert_eq!(result.lines[0].final_estimate(), 0);
    assert_eq!(result.lines[1].sizing(), 0.0);
    assert_eq!(result.lines[2].final_estimate(), 3);
    assert_eq!(result.totals.total_project_hours, 0.0);
}

#[test]
fn test_order_and_payload_preserved() {
    let input = mixed_lines();
    let result = RecalcEngine::new().recalculate(&input);

    let input_ids: Vec<_> = input.iter().map(|l| l.line_id.clone()).collect();
    let output_ids: Vec<_> = result.lines.iter().map(|l| l.line_id.clone()).collect();
    assert_eq!(input_ids, output_ids);
    assert_eq!(result.lines[0].payload.module.as_deref(), Some("Sales"));
    // 输入快照不被修改
    assert_eq!(input[1].sizing(), 0.0);
}

#[test]
fn test_non_finite_sizing_does_not_poison_totals() {
    let lines = vec![
        LineBuilder::development("D1", f64::NAN).build(),
        LineBuilder::development("D2", 10.0).build(),
        LineBuilder::support("S1", f64::INFINITY).build(),
        LineBuilder::process("P1", f64::NEG_INFINITY).build(),
    ];

    let result = RecalcEngine::new().recalculate(&lines);

    assert_eq!(result.totals.total_development_sizing, 10.0);
    assert_eq!(result.totals.total_support_sizing, 0.0);
    assert!(result.totals.total_project_hours.is_finite());
    assert_eq!(result.lines[0].final_estimate(), 0);
    assert_eq!(result.lines[1].final_estimate(), 10);
    assert_eq!(result.lines[3].final_estimate(), 0);
}

#[test]
fn test_support_share_above_hundred_not_clamped() {
    let lines = vec![
        LineBuilder::development("D1", 10.0).build(),
        LineBuilder::support("S1", 150.0).build(),
    ];

    let result = RecalcEngine::new().recalculate(&lines);

    assert_eq!(result.lines[1].sizing(), 15.0);
    assert_eq!(result.lines[0].final_estimate(), 25);
}
