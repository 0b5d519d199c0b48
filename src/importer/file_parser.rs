// ==========================================
// Camvio 库存导入 - 文件解析器实现
// ==========================================
// 职责: 上传文件 → RawTable（不假设表头位置）
// 支持: Excel (.xlsx/.xls，首个工作表) / CSV (.csv)
// ==========================================

use crate::domain::table::RawTable;
use crate::importer::error::{ImportError, ImportResult};
use calamine::{open_workbook_auto, Reader};
use csv::ReaderBuilder;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

// ==========================================
// FileParser Trait
// ==========================================
// 用途: 文件解析接口（阶段 0）
// 实现者: CsvParser, ExcelParser
pub trait FileParser: Send + Sync {
    /// 解析文件为原始表格
    ///
    /// # 返回
    /// - Ok(RawTable): 全部行（含横幅/标题行）
    /// - Err: 文件不存在、格式错误
    fn parse_to_raw_table(&self, file_path: &Path) -> ImportResult<RawTable>;
}

fn ensure_exists(path: &Path) -> ImportResult<()> {
    if !path.exists() {
        return Err(ImportError::FileNotFound(path.display().to_string()));
    }
    Ok(())
}

fn extension_of(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase()
}

// ==========================================
// CSV Parser 实现
// ==========================================
pub struct CsvParser;

impl CsvParser {
    /// 从任意 Reader 解析（上传内容已在内存中时使用）
    pub fn parse_reader<R: Read>(&self, reader: R) -> ImportResult<RawTable> {
        let mut reader = ReaderBuilder::new()
            .has_headers(false) // 表头位置未知，由 HeaderLocator 判定
            .flexible(true) // 允许行长度不一致（横幅行通常只有一列）
            .from_reader(reader);

        let mut rows = Vec::new();
        for result in reader.byte_records() {
            let record = result?;
            // 分销商文件常见 Latin-1 编码，非 UTF-8 字节做有损替换
            let row: Vec<String> = record
                .iter()
                .map(|field| String::from_utf8_lossy(field).into_owned())
                .collect();
            rows.push(row);
        }

        // 去除 UTF-8 BOM
        if let Some(first) = rows.first_mut().and_then(|r| r.first_mut()) {
            if let Some(stripped) = first.strip_prefix('\u{feff}') {
                *first = stripped.to_string();
            }
        }

        Ok(RawTable::new(rows))
    }
}

impl FileParser for CsvParser {
    fn parse_to_raw_table(&self, file_path: &Path) -> ImportResult<RawTable> {
        ensure_exists(file_path)?;

        let ext = extension_of(file_path);
        if ext != "csv" {
            return Err(ImportError::UnsupportedFormat(ext));
        }

        let file = File::open(file_path)?;
        let table = self.parse_reader(file)?;
        debug!(rows = table.len(), path = %file_path.display(), "CSV 解析完成");
        Ok(table)
    }
}

// ==========================================
// Excel Parser 实现
// ==========================================
pub struct ExcelParser;

impl FileParser for ExcelParser {
    fn parse_to_raw_table(&self, file_path: &Path) -> ImportResult<RawTable> {
        ensure_exists(file_path)?;

        let ext = extension_of(file_path);
        if ext != "xlsx" && ext != "xls" {
            return Err(ImportError::UnsupportedFormat(ext));
        }

        let mut workbook = open_workbook_auto(file_path)?;

        // 读取第一个 sheet
        let sheet_names = workbook.sheet_names();
        let sheet_name = sheet_names
            .first()
            .cloned()
            .ok_or_else(|| ImportError::ExcelParseError("Excel 文件无工作表".to_string()))?;

        let range = workbook.worksheet_range(&sheet_name)?;

        // calamine 的 Range 从首个非空单元格开始，补齐前导空行/空列以保持行号与文件一致
        let (start_row, start_col) = range
            .start()
            .map(|(r, c)| (r as usize, c as usize))
            .unwrap_or((0, 0));

        let mut rows: Vec<Vec<String>> = vec![Vec::new(); start_row];
        for data_row in range.rows() {
            let mut row = vec![String::new(); start_col];
            row.extend(data_row.iter().map(|cell| cell.to_string()));
            rows.push(row);
        }

        debug!(rows = rows.len(), sheet = %sheet_name, "Excel 解析完成");
        Ok(RawTable::new(rows))
    }
}

// ==========================================
// 通用文件解析器（根据扩展名自动选择）
// ==========================================
pub struct UniversalFileParser;

impl UniversalFileParser {
    pub fn parse<P: AsRef<Path>>(&self, file_path: P) -> ImportResult<RawTable> {
        let path = file_path.as_ref();

        match extension_of(path).as_str() {
            "csv" => CsvParser.parse_to_raw_table(path),
            "xlsx" | "xls" => ExcelParser.parse_to_raw_table(path),
            other => Err(ImportError::UnsupportedFormat(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::Builder;

    fn csv_file(content: &str) -> tempfile::NamedTempFile {
        let mut temp_file = Builder::new().suffix(".csv").tempfile().unwrap();
        write!(temp_file, "{}", content).unwrap();
        temp_file
    }

    #[test]
    fn test_csv_parser_keeps_banner_rows() {
        let temp_file = csv_file(
            "Shipment 4471\n\
             Description,MAC,Serial Number,FSAN\n\
             GS4220E ONT,00:11:22:33:44:55,SN1,CXNK0001\n",
        );

        let table = CsvParser.parse_to_raw_table(temp_file.path()).unwrap();

        assert_eq!(table.len(), 3);
        assert_eq!(table.row(0).unwrap(), &["Shipment 4471".to_string()]);
        assert_eq!(table.row(1).unwrap()[3], "FSAN");
    }

    #[test]
    fn test_csv_parser_strips_bom() {
        let temp_file = csv_file("\u{feff}Description,MAC\nx,y\n");

        let table = CsvParser.parse_to_raw_table(temp_file.path()).unwrap();

        assert_eq!(table.row(0).unwrap()[0], "Description");
    }

    #[test]
    fn test_csv_parser_file_not_found() {
        let result = CsvParser.parse_to_raw_table(Path::new("non_existent.csv"));
        assert!(matches!(result, Err(ImportError::FileNotFound(_))));
    }

    #[test]
    fn test_csv_parser_rejects_other_extension() {
        let temp_file = Builder::new().suffix(".txt").tempfile().unwrap();
        let result = CsvParser.parse_to_raw_table(temp_file.path());
        assert!(matches!(result, Err(ImportError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_universal_parser_unsupported_extension() {
        let temp_file = Builder::new().suffix(".pdf").tempfile().unwrap();
        let result = UniversalFileParser.parse(temp_file.path());
        assert!(matches!(result, Err(ImportError::UnsupportedFormat(ext)) if ext == "pdf"));
    }

    #[test]
    fn test_parse_reader_in_memory() {
        let table = CsvParser
            .parse_reader("Description\n\"GM1028H, Router\"\n".as_bytes())
            .unwrap();
        assert_eq!(table.row(1).unwrap()[0], "GM1028H, Router");
    }
}
