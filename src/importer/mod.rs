// ==========================================
// 项目工时估算 - 导入层
// ==========================================
// 职责: 估算模板文件导入,生成 ModelLine
// 支持: Excel, CSV
// ==========================================

pub mod error;
pub mod field_mapper;
pub mod file_parser;
pub mod importer_trait;
pub mod template_importer;

// 重导出核心类型
pub use error::{ImportError, ImportResult};
pub use field_mapper::ModelLineMapper;
pub use file_parser::{CsvParser, ExcelParser, UniversalFileParser};
pub use importer_trait::{FieldMapper, FileParser, RawRow, SourceRow};
pub use template_importer::TemplateImporter;
