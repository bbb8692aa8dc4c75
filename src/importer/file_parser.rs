// ==========================================
// 项目工时估算 - 文件解析器实现
// ==========================================
// 支持: Excel (.xlsx/.xls) / CSV (.csv)
// ==========================================

use crate::importer::error::{ImportError, ImportResult};
use crate::importer::importer_trait::{FileParser, RawRow, SourceRow};
use calamine::{open_workbook_auto, Reader};
use csv::ReaderBuilder;
use std::fs::File;
use std::path::Path;

fn extension_of(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase()
}

fn ensure_exists(path: &Path) -> ImportResult<()> {
    if !path.exists() {
        return Err(ImportError::FileNotFound(path.display().to_string()));
    }
    Ok(())
}

/// 按表头组装一行; 完全空白返回 None
fn assemble_row(
    headers: &[String],
    row_number: usize,
    cells: impl Iterator<Item = String>,
) -> Option<SourceRow> {
    let row: RawRow = headers
        .iter()
        .zip(cells)
        .filter(|(header, _)| !header.is_empty())
        .map(|(header, value)| (header.clone(), value.trim().to_string()))
        .collect();

    if row.values().all(|v| v.is_empty()) {
        None
    } else {
        Some(SourceRow {
            row_number,
            cells: row,
        })
    }
}

// ==========================================
// CSV Parser 实现
// ==========================================
pub struct CsvParser;

impl FileParser for CsvParser {
    fn parse_to_raw_records(&self, file_path: &Path) -> ImportResult<Vec<SourceRow>> {
        ensure_exists(file_path)?;

        let ext = extension_of(file_path);
        if ext != "csv" {
            return Err(ImportError::UnsupportedFormat(ext));
        }

        let file = File::open(file_path)?;
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true) // 允许行长度不一致
            .from_reader(file);

        let headers: Vec<String> = reader
            .headers()?
            .iter()
            .map(|h| h.trim().trim_start_matches('\u{feff}').to_string())
            .collect();

        let mut records = Vec::new();
        for (idx, result) in reader.records().enumerate() {
            let record = result?;
            // csv 会静默跳过零长度行,按文件行号（表头为第 1 行）计数
            let row_number = record
                .position()
                .map_or(idx + 1, |pos| pos.line().saturating_sub(1) as usize);
            let cells = record.iter().map(str::to_string);
            if let Some(row) = assemble_row(&headers, row_number, cells) {
                records.push(row);
            }
        }

        Ok(records)
    }
}

// ==========================================
// Excel Parser 实现
// ==========================================
pub struct ExcelParser;

impl FileParser for ExcelParser {
    fn parse_to_raw_records(&self, file_path: &Path) -> ImportResult<Vec<SourceRow>> {
        ensure_exists(file_path)?;

        let ext = extension_of(file_path);
        if ext != "xlsx" && ext != "xls" {
            return Err(ImportError::UnsupportedFormat(ext));
        }

        let mut workbook = open_workbook_auto(file_path)?;

        // 读取第一个 sheet
        let sheet_name = workbook
            .sheet_names()
            .first()
            .cloned()
            .ok_or_else(|| ImportError::ExcelParseError("Excel 文件无工作表".to_string()))?;
        let range = workbook.worksheet_range(&sheet_name)?;

        let mut rows = range.rows();
        let header_row = rows
            .next()
            .ok_or_else(|| ImportError::ExcelParseError("Excel 文件无数据行".to_string()))?;

        let headers: Vec<String> = header_row
            .iter()
            .map(|cell| cell.to_string().trim().to_string())
            .collect();

        Ok(rows
            .enumerate()
            .filter_map(|(idx, data_row)| {
                assemble_row(&headers, idx + 1, data_row.iter().map(|cell| cell.to_string()))
            })
            .collect())
    }
}

// ==========================================
// 通用文件解析器（根据扩展名自动选择）
// ==========================================
pub struct UniversalFileParser;

impl FileParser for UniversalFileParser {
    fn parse_to_raw_records(&self, file_path: &Path) -> ImportResult<Vec<SourceRow>> {
        match extension_of(file_path).as_str() {
            "csv" => CsvParser.parse_to_raw_records(file_path),
            "xlsx" | "xls" => ExcelParser.parse_to_raw_records(file_path),
            other => Err(ImportError::UnsupportedFormat(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::Builder;

    fn csv_file(lines: &[&str]) -> tempfile::NamedTempFile {
        let mut file = Builder::new().suffix(".csv").tempfile().unwrap();
        for line in lines {
            writeln!(file, "{}", line).unwrap();
        }
        file
    }

    #[test]
    fn test_csv_parser_valid_file() {
        let file = csv_file(&["Activity,Sizing", "Development,10", "Process, 5 "]);

        let records = CsvParser.parse_to_raw_records(file.path()).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].cells.get("Activity"), Some(&"Development".to_string()));
        assert_eq!(records[1].cells.get("Sizing"), Some(&"5".to_string()));
        assert_eq!(records[1].row_number, 2);
    }

    #[test]
    fn test_csv_parser_file_not_found() {
        let result = CsvParser.parse_to_raw_records(Path::new("non_existent.csv"));
        assert!(matches!(result, Err(ImportError::FileNotFound(_))));
    }

    #[test]
    fn test_csv_parser_skip_empty_rows() {
        let file = csv_file(&["Activity,Sizing", "Development,10", ",", "", "Process,3"]);

        let records = CsvParser.parse_to_raw_records(file.path()).unwrap();

        assert_eq!(records.len(), 2);
        let numbers: Vec<usize> = records.iter().map(|r| r.row_number).collect();
        assert_eq!(numbers, vec![1, 4]);
    }

    #[test]
    fn test_universal_parser_rejects_unknown_extension() {
        let file = Builder::new().suffix(".txt").tempfile().unwrap();
        let result = UniversalFileParser.parse_to_raw_records(file.path());
        assert!(matches!(result, Err(ImportError::UnsupportedFormat(ext)) if ext == "txt"));
    }
}
