// ==========================================
// Camvio 库存导入 - API 层
// ==========================================
// 职责: 提供转换入口，供命令行驱动调用
// ==========================================

pub mod conversion_api;
pub mod error;

// 重导出核心类型
pub use conversion_api::{
    ConversionApi, ConversionReport, ConversionSession, OutputPaths, SelectionSummary,
    TablePreview,
};
pub use error::{ApiError, ApiResult};
