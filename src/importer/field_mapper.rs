// ==========================================
// 项目工时估算 - 字段映射器实现
// ==========================================
// 职责: 模板文件列 → ModelLine 字段映射 + 类型转换
// 说明: 列名按别名匹配（英文 / 葡萄牙语 / 中文）,不区分大小写
// ==========================================

use crate::domain::line::LinePayload;
use crate::domain::model::ModelLine;
use crate::domain::types::Complexity;
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::importer_trait::{FieldMapper, RawRow};

// 标准字段
const ACTIVITY: &str = "activity";
const ACTIVITY_CODE: &str = "activity_code";
const SIZING: &str = "sizing";
const DEVELOPMENT_SHARE: &str = "development_share";
const MODEL: &str = "model";
const PHASE: &str = "phase";
const SUBPHASE: &str = "subphase";
const DEVELOPMENT_TYPE: &str = "development_type";
const MODULE: &str = "module";
const CUSTOMER_REQUIREMENT: &str = "customer_requirement";
const FUNCTIONALITY: &str = "functionality";
const DESCRIPTION: &str = "description";
const TECHNICAL_NOTES: &str = "technical_notes";
const COMPLEXITY: &str = "complexity";
const ORDER: &str = "order";

pub struct ModelLineMapper;

impl FieldMapper for ModelLineMapper {
    fn map_to_model_line(&self, row: &RawRow, row_number: usize) -> ImportResult<ModelLine> {
        let complexity = match self.get_string(row, COMPLEXITY) {
            None => None,
            Some(label) => Some(Complexity::from_label(&label).ok_or_else(|| {
                ImportError::TypeConversionError {
                    row: row_number,
                    field: COMPLEXITY.to_string(),
                    message: format!("未知的复杂度: {}", label),
                }
            })?),
        };

        Ok(ModelLine {
            model_line_id: None,
            model_id: self.get_string(row, MODEL),
            activity_label: self.get_string(row, ACTIVITY),
            activity_code: self.parse_i32(row, ACTIVITY_CODE, row_number)?,
            sizing: self.parse_f64(row, SIZING, row_number)?,
            development_share: self.parse_f64(row, DEVELOPMENT_SHARE, row_number)?,
            payload: LinePayload {
                phase_name: self.get_string(row, PHASE),
                subphase_name: self.get_string(row, SUBPHASE),
                development_type_name: self.get_string(row, DEVELOPMENT_TYPE),
                module: self.get_string(row, MODULE),
                customer_requirement: self.get_string(row, CUSTOMER_REQUIREMENT),
                functionality: self.get_string(row, FUNCTIONALITY),
                description: self.get_string(row, DESCRIPTION),
                technical_notes: self.get_string(row, TECHNICAL_NOTES),
                complexity,
                order: self.parse_i32(row, ORDER, row_number)?,
                ..Default::default()
            },
        })
    }
}

impl ModelLineMapper {
    /// 标准字段的可接受列名
    fn aliases(key: &str) -> &'static [&'static str] {
        match key {
            ACTIVITY => &["activity", "activity type", "tipo de atividade", "atividade", "活动类别"],
            ACTIVITY_CODE => &["activity code", "código da atividade", "codigo da atividade", "活动编码"],
            SIZING => &["sizing", "dimensionamento", "工时"],
            DEVELOPMENT_SHARE => &[
                "development share",
                "development %",
                "percentual de desenvolvimento",
                "% desenvolvimento",
                "开发占比",
            ],
            MODEL => &["model", "estimation model", "modelo", "估算模板"],
            PHASE => &["phase", "fase", "阶段"],
            SUBPHASE => &["subphase", "subfase", "子阶段"],
            DEVELOPMENT_TYPE => &["development type", "tipo de desenvolvimento", "开发类型"],
            MODULE => &["module", "módulo", "modulo", "模块"],
            CUSTOMER_REQUIREMENT => &["customer requirement", "requisito do cliente", "客户需求"],
            FUNCTIONALITY => &["functionality", "funcionalidade", "功能"],
            DESCRIPTION => &["description", "descrição", "descricao", "描述"],
            TECHNICAL_NOTES => &["technical notes", "observações técnicas", "技术说明"],
            COMPLEXITY => &["complexity", "complexidade", "复杂度"],
            ORDER => &["order", "ordem", "排序号"],
            _ => &[],
        }
    }

    /// 提取字符串字段（空串视为缺失）
    fn get_string(&self, row: &RawRow, key: &str) -> Option<String> {
        let aliases = Self::aliases(key);
        row.iter()
            .find(|(header, value)| {
                !value.trim().is_empty()
                    && aliases.contains(&header.trim().to_lowercase().as_str())
            })
            .map(|(_, value)| value.trim().to_string())
    }

    /// 解析浮点数（兼容逗号小数点: "12,5"）
    fn parse_f64(&self, row: &RawRow, key: &str, row_number: usize) -> ImportResult<Option<f64>> {
        match self.get_string(row, key) {
            None => Ok(None),
            Some(value) => {
                let normalized = if value.contains('.') {
                    value.clone()
                } else {
                    value.replace(',', ".")
                };
                normalized
                    .parse::<f64>()
                    .map(Some)
                    .map_err(|_| ImportError::TypeConversionError {
                        row: row_number,
                        field: key.to_string(),
                        message: format!("无法解析为浮点数: {}", value),
                    })
            }
        }
    }

    /// 解析整数
    fn parse_i32(&self, row: &RawRow, key: &str, row_number: usize) -> ImportResult<Option<i32>> {
        match self.get_string(row, key) {
            None => Ok(None),
            Some(value) => value
                .parse::<i32>()
                .map(Some)
                .map_err(|_| ImportError::TypeConversionError {
                    row: row_number,
                    field: key.to_string(),
                    message: format!("无法解析为整数: {}", value),
                }),
        }
    }
}
