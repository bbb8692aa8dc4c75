// ==========================================
// 项目工时估算 - 行编辑补丁
// ==========================================
// 说明: None 表示不修改;文本字段传空串表示清空
// 顺序: 先切换类别,再按新类别校验 sizing / development_share
// ==========================================

use crate::domain::line::{EstimationLine, LineActivity, LinePayload};
use crate::domain::types::{ActivityCategory, Complexity};
use crate::engine::calc::sanitize;
use crate::worksheet::error::{WorksheetError, WorksheetResult};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LinePatch {
    pub category: Option<ActivityCategory>,
    pub sizing: Option<f64>,
    pub development_share: Option<f64>,
    pub phase: Option<(String, String)>, // (id, 名称)
    pub subphase: Option<(String, String)>,
    pub module: Option<String>,
    pub customer_requirement: Option<String>,
    pub functionality: Option<String>,
    pub description: Option<String>,
    pub technical_notes: Option<String>,
    pub complexity: Option<Complexity>,
}

impl LinePatch {
    pub fn sizing(value: f64) -> Self {
        Self {
            sizing: Some(value),
            ..Default::default()
        }
    }

    pub fn development_share(value: f64) -> Self {
        Self {
            development_share: Some(value),
            ..Default::default()
        }
    }

    pub fn category(category: ActivityCategory) -> Self {
        Self {
            category: Some(category),
            ..Default::default()
        }
    }

    /// 应用到行（返回新行,不修改原行）
    pub fn apply(&self, line: &EstimationLine) -> WorksheetResult<EstimationLine> {
        let mut updated = line.clone();

        if let Some(category) = self.category {
            updated.activity = updated.activity.with_category(category);
        }

        if let Some(value) = self.sizing {
            let value = entry_value(value);
            match &mut updated.activity {
                LineActivity::Development { sizing }
                | LineActivity::Process { sizing }
                | LineActivity::Unrecognized { sizing, .. } => *sizing = value,
                LineActivity::Support { .. } => {
                    return Err(WorksheetError::DerivedSizing(line.line_id.clone()))
                }
            }
        }

        if let Some(value) = self.development_share {
            match &mut updated.activity {
                LineActivity::Support {
                    development_share, ..
                } => *development_share = entry_value(value),
                _ => return Err(WorksheetError::NotSupportLine(line.line_id.clone())),
            }
        }

        apply_payload(&mut updated.payload, self);
        Ok(updated)
    }
}

/// 录入值: NaN/Infinity → 0,负数 → 0
fn entry_value(value: f64) -> f64 {
    sanitize(value).max(0.0)
}

fn set_text(target: &mut Option<String>, value: &Option<String>) {
    if let Some(v) = value {
        *target = if v.is_empty() { None } else { Some(v.clone()) };
    }
}

fn apply_payload(payload: &mut LinePayload, patch: &LinePatch) {
    if let Some((id, name)) = &patch.phase {
        payload.phase_id = Some(id.clone());
        payload.phase_name = Some(name.clone());
    }
    if let Some((id, name)) = &patch.subphase {
        payload.subphase_id = Some(id.clone());
        payload.subphase_name = Some(name.clone());
    }
    set_text(&mut payload.module, &patch.module);
    set_text(&mut payload.customer_requirement, &patch.customer_requirement);
    set_text(&mut payload.functionality, &patch.functionality);
    set_text(&mut payload.description, &patch.description);
    set_text(&mut payload.technical_notes, &patch.technical_notes);
    if patch.complexity.is_some() {
        payload.complexity = patch.complexity;
    }
}
