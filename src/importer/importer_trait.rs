// ==========================================
// 项目工时估算 - 模板导入接口
// ==========================================
// 流程: 文件 → 原始行 (列名 → 值) → ModelLine
// ==========================================

use crate::domain::model::ModelLine;
use crate::importer::error::ImportResult;
use std::collections::HashMap;
use std::path::Path;

/// 原始行: 表头 → 单元格文本（已去除首尾空白）
pub type RawRow = HashMap<String, String>;

/// 带源文件位置的原始行
#[derive(Debug, Clone, PartialEq)]
pub struct SourceRow {
    /// 数据行号（从 1 开始,不含表头,被跳过的空白行也计数）
    pub row_number: usize,
    pub cells: RawRow,
}

// ==========================================
// FileParser Trait
// ==========================================
pub trait FileParser: Send + Sync {
    /// 解析文件为原始行记录
    ///
    /// # 约定
    /// - 第一行为表头
    /// - 完全空白的行被跳过,但保留其余行在文件中的行号
    fn parse_to_raw_records(&self, file_path: &Path) -> ImportResult<Vec<SourceRow>>;
}

// ==========================================
// FieldMapper Trait
// ==========================================
pub trait FieldMapper: Send + Sync {
    /// 原始行 → 模板行
    ///
    /// # 参数
    /// - row_number: SourceRow::row_number,用于错误定位
    fn map_to_model_line(&self, row: &RawRow, row_number: usize) -> ImportResult<ModelLine>;
}
