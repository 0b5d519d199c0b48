// ==========================================
// Camvio 库存导入 - CSV 导出
// ==========================================
// 导出表头: device_profile,device_name,device_numbers,inventory_location,inventory_status
// 失败表头: device_name,missing_fields,mac,sn,fsan
// 工具: csv crate（含逗号/引号/换行的字段按 RFC 4180 加引号）
// ==========================================

use crate::domain::device::{ExportFailure, OutputRecord};
use crate::importer::error::{ImportError, ImportResult};
use csv::Writer;
use std::fs;
use std::path::Path;
use tracing::info;

pub const EXPORT_HEADER: [&str; 5] = [
    "device_profile",
    "device_name",
    "device_numbers",
    "inventory_location",
    "inventory_status",
];

pub const FAILURE_HEADER: [&str; 5] = ["device_name", "missing_fields", "mac", "sn", "fsan"];

/// 失败字段默认分隔符
pub const DEFAULT_FIELD_SEPARATOR: &str = ";";

// ==========================================
// ExportWriter - CSV 导出器
// ==========================================
pub struct ExportWriter {
    field_separator: String,
}

impl Default for ExportWriter {
    fn default() -> Self {
        Self::new(DEFAULT_FIELD_SEPARATOR)
    }
}

impl ExportWriter {
    /// # 参数
    /// - field_separator: 失败日志中 missing_fields 的连接符
    pub fn new(field_separator: &str) -> Self {
        Self {
            field_separator: field_separator.to_string(),
        }
    }

    /// 生成导出 CSV 文本
    pub fn write(&self, records: &[OutputRecord]) -> ImportResult<String> {
        let mut wtr = Writer::from_writer(Vec::new());
        wtr.write_record(EXPORT_HEADER)?;

        for record in records {
            wtr.write_record([
                record.profile_type.code(),
                record.device_name.as_str(),
                record.attribute_string.as_str(),
                record.location.as_str(),
                record.status.as_str(),
            ])?;
        }

        Self::finish(wtr)
    }

    /// 生成失败日志 CSV 文本
    pub fn write_failures(&self, failures: &[ExportFailure]) -> ImportResult<String> {
        let mut wtr = Writer::from_writer(Vec::new());
        wtr.write_record(FAILURE_HEADER)?;

        for failure in failures {
            let missing = failure.missing_fields.join(&self.field_separator);
            wtr.write_record([
                failure.device_name.as_str(),
                missing.as_str(),
                failure.mac.as_str(),
                failure.sn.as_str(),
                failure.fsan.as_str(),
            ])?;
        }

        Self::finish(wtr)
    }

    fn finish(wtr: Writer<Vec<u8>>) -> ImportResult<String> {
        let bytes = wtr
            .into_inner()
            .map_err(|e| ImportError::ExportWriteError(e.to_string()))?;
        String::from_utf8(bytes).map_err(|e| ImportError::ExportWriteError(e.to_string()))
    }
}

/// 写出 CSV 文本到文件（自动创建父目录）
pub fn write_csv_file<P: AsRef<Path>>(path: P, content: &str) -> ImportResult<()> {
    let path = path.as_ref();
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir)
            .map_err(|e| ImportError::ExportWriteError(format!("{}: {}", dir.display(), e)))?;
    }
    fs::write(path, content)
        .map_err(|e| ImportError::ExportWriteError(format!("{}: {}", path.display(), e)))?;
    info!(path = %path.display(), bytes = content.len(), "CSV 文件已写出");
    Ok(())
}
