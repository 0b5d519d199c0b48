// ==========================================
// Camvio 库存导入 - 核心库
// ==========================================
// 用途: 分销商设备库存表 (Excel/CSV) → Camvio 库存导入 CSV
// 定位: 操作员确认设备选择，工具负责匹配、校验与格式化
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "en");

// ==========================================
// 模块声明
// ==========================================

// 通用工具 - 文本匹配
pub mod common;

// 领域层 - 实体与类型
pub mod domain;

// 导入层 - 文件解析、表头定位、列语义
pub mod importer;

// 设备目录
pub mod catalog;

// 引擎层 - 匹配、检查、记录构建
pub mod engine;

// 导出层 - CSV 与文件命名
pub mod export;

// 配置层
pub mod config;

// API 层 - 转换入口
pub mod api;

// 日志系统
pub mod logging;

// 国际化
pub mod i18n;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{ColumnRole, ProfileType, TemplateVariant};

// 领域实体
pub use domain::{
    Advisory, ColumnRoles, DeviceCatalogEntry, DeviceMatch, DeviceSelection, ExportFailure,
    OutputRecord, RawTable, ResolvedTable, SelectionOverrides,
};

// 目录与引擎
pub use catalog::DeviceCatalog;
pub use engine::{DeviceMatcher, RecordBuilder, SelectionChecker};
pub use export::ExportWriter;

// 配置
pub use config::{ConfigManager, ConversionConfigReader};

// API
pub use api::{ApiError, ConversionApi, ConversionReport, ConversionSession};

// ==========================================
// 版本信息
// ==========================================

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const APP_NAME: &str = "Camvio Inventory Import";
