// ==========================================
// Camvio 库存导入 - 导入层
// ==========================================
// 职责: 读取分销商文件，定位表头，识别列语义
// 支持: Excel, CSV
// ==========================================

// 模块声明
pub mod column_resolver;
pub mod error;
pub mod file_parser;
pub mod header_locator;

// 重导出核心类型
pub use column_resolver::{ColumnResolver, HeaderPattern};
pub use error::{ImportError, ImportResult};
pub use file_parser::{CsvParser, ExcelParser, FileParser, UniversalFileParser};
pub use header_locator::{HeaderLocator, DEFAULT_HEADER_SCAN_ROWS};
