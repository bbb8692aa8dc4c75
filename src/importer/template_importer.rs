// ==========================================
// 项目工时估算 - 模板导入器
// ==========================================
// 流程: 解析文件 → 逐行字段映射 → ModelLine（保持文件顺序）
// 红线: 任一行映射失败则整体失败,不返回部分结果
// ==========================================

use crate::domain::model::ModelLine;
use crate::importer::error::ImportResult;
use crate::importer::field_mapper::ModelLineMapper;
use crate::importer::file_parser::UniversalFileParser;
use crate::importer::importer_trait::{FieldMapper, FileParser, SourceRow};
use std::path::Path;
use tracing::instrument;

pub struct TemplateImporter {
    parser: Box<dyn FileParser>,
    mapper: Box<dyn FieldMapper>,
    model_id: Option<String>,
}

impl Default for TemplateImporter {
    fn default() -> Self {
        Self::new(Box::new(UniversalFileParser), Box::new(ModelLineMapper))
    }
}

impl TemplateImporter {
    pub fn new(parser: Box<dyn FileParser>, mapper: Box<dyn FieldMapper>) -> Self {
        Self {
            parser,
            mapper,
            model_id: None,
        }
    }

    /// 未在文件中指定模板的行归入该模板
    pub fn with_model_id(mut self, model_id: impl Into<String>) -> Self {
        self.model_id = Some(model_id.into());
        self
    }

    /// 从文件导入
    #[instrument(skip(self, file_path), fields(path = %file_path.as_ref().display()))]
    pub fn import_file<P: AsRef<Path>>(&self, file_path: P) -> ImportResult<Vec<ModelLine>> {
        let rows = self.parser.parse_to_raw_records(file_path.as_ref())?;
        let lines = self.import_rows(&rows)?;
        tracing::info!(rows = lines.len(), "模板文件导入完成");
        Ok(lines)
    }

    /// 从已解析的原始行导入
    pub fn import_rows(&self, rows: &[SourceRow]) -> ImportResult<Vec<ModelLine>> {
        rows.iter()
            .map(|row| {
                let mut line = self.mapper.map_to_model_line(&row.cells, row.row_number)?;
                if line.model_id.is_none() {
                    line.model_id = self.model_id.clone();
                }
                Ok(line)
            })
            .collect()
    }
}
