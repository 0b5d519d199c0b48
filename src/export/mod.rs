// ==========================================
// Camvio 库存导入 - 导出层
// ==========================================
// 职责: 导出 CSV / 失败日志的生成与文件命名
// ==========================================

pub mod export_writer;
pub mod filename;

pub use export_writer::{
    write_csv_file, ExportWriter, DEFAULT_FIELD_SEPARATOR, EXPORT_HEADER, FAILURE_HEADER,
};
pub use filename::{export_file_name, failures_file_name, sanitize_stem, DEFAULT_EXPORT_STEM};
