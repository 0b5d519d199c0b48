// ==========================================
// Camvio 库存导入 - 引擎层
// ==========================================
// 职责: 设备匹配、选择检查、模板替换、记录构建
// 红线: 引擎不做文件 IO；行级问题输出 ExportFailure，不中止
// ==========================================

pub mod device_matcher;
pub mod record_builder;
pub mod selection_checker;
pub mod template;

// 重导出核心引擎
pub use device_matcher::DeviceMatcher;
pub use record_builder::{BuildOutcome, RecordBuilder, FIELD_FSAN, FIELD_MAC, FIELD_SERIAL_NUMBER};
pub use selection_checker::SelectionChecker;
pub use template::{generic_template, TemplateToken, TemplateValues};
