// ==========================================
// 项目工时估算 - 按标签的边界记录
// ==========================================
// 职责: 外部系统的行记录（类别为字符串,数值可缺失）与 EstimationLine 互转
// 说明: 缺失的数值一律按 0 处理;无法识别的标签保留原样
// 解析顺序: 选项集编码 → 标签
// ==========================================

use crate::domain::estimation::EstimationTotals;
use crate::domain::line::{EstimationLine, LineActivity, LinePayload};
use crate::domain::types::ActivityCategory;
use crate::engine::RecalcEngine;
use crate::vocabulary::labels::{CategoryLabels, CategoryVocabulary};
use serde::{Deserialize, Serialize};

/// 外部系统中的估算行
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LabelledLine {
    pub line_id: String,
    pub estimation_id: Option<String>,
    pub activity_label: Option<String>,
    #[serde(default)]
    pub activity_code: Option<i32>,
    pub sizing: Option<f64>,
    pub development_share: Option<f64>,
    pub final_estimate: Option<u64>,
    #[serde(default)]
    pub payload: LinePayload,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelledRecalcResult {
    pub lines: Vec<LabelledLine>,
    pub totals: EstimationTotals,
}

impl CategoryVocabulary {
    /// 外部记录 → 引擎行
    pub fn to_line(&self, record: &LabelledLine) -> EstimationLine {
        let sizing = record.sizing.unwrap_or(0.0);
        let share = record.development_share.unwrap_or(0.0);

        let category = record
            .activity_code
            .and_then(|code| self.resolve_code(code))
            .or_else(|| {
                record
                    .activity_label
                    .as_deref()
                    .and_then(|label| self.resolve_label(label))
            });

        let activity = match category {
            // 外部存储中的 Support sizing 是上次派生的值,重算时覆盖
            Some(ActivityCategory::Support) => LineActivity::Support {
                development_share: share,
                sizing,
            },
            Some(category) => LineActivity::entered(category, sizing, share),
            None => LineActivity::Unrecognized {
                label: record.activity_label.clone(),
                sizing,
            },
        };

        let mut line = EstimationLine::new(record.line_id.clone(), activity)
            .with_stored_final_estimate(record.final_estimate.unwrap_or(0))
            .with_payload(record.payload.clone());
        line.estimation_id = record.estimation_id.clone();
        line
    }

    /// 引擎行 → 外部记录
    pub fn to_labelled(&self, line: &EstimationLine) -> LabelledLine {
        let activity_label = match &line.activity {
            LineActivity::Unrecognized { label, .. } => label.clone(),
            other => other
                .category()
                .map(|category| self.label_of(category).to_string()),
        };

        LabelledLine {
            line_id: line.line_id.clone(),
            estimation_id: line.estimation_id.clone(),
            activity_label,
            activity_code: line.category().and_then(|category| self.code_of(category)),
            sizing: Some(line.sizing()),
            development_share: line.activity.development_share(),
            final_estimate: Some(line.final_estimate()),
            payload: line.payload.clone(),
        }
    }
}

/// 按外部标签重算
///
/// 逐行经词表转换后交给 RecalcEngine,再把派生字段写回原记录:
/// Support 行的 sizing、全部行的 final_estimate。其余字段保持原样。
/// 标签不做校验: 空白取默认标签,重复标签按类别顺序先匹配者生效。
pub fn recalculate_labelled(records: &[LabelledLine], labels: &CategoryLabels) -> LabelledRecalcResult {
    let vocabulary = CategoryVocabulary::lenient(labels.clone());
    recalculate_with(&vocabulary, records)
}

/// 使用已构造好的词表重算
pub fn recalculate_with(
    vocabulary: &CategoryVocabulary,
    records: &[LabelledLine],
) -> LabelledRecalcResult {
    let lines: Vec<EstimationLine> = records.iter().map(|r| vocabulary.to_line(r)).collect();
    let result = RecalcEngine::new().recalculate(&lines);

    let lines = records
        .iter()
        .zip(result.lines.iter())
        .map(|(record, line)| {
            let mut updated = record.clone();
            if let LineActivity::Support { sizing, .. } = line.activity {
                updated.sizing = Some(sizing);
            }
            updated.final_estimate = Some(line.final_estimate());
            updated
        })
        .collect();

    LabelledRecalcResult {
        lines,
        totals: result.totals,
    }
}
