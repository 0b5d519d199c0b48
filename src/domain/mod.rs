// ==========================================
// Camvio 库存导入 - 领域模型层
// ==========================================
// 职责: 定义表格、设备、输出记录等实体与类型
// 红线: 不含文件读写逻辑,不含匹配/模板逻辑
// ==========================================

pub mod device;
pub mod table;
pub mod types;

// 重导出核心类型
pub use device::{
    Advisory, DeviceCatalogEntry, DeviceMatch, DeviceSelection, ExportFailure, OutputRecord,
    SelectionOverrides,
};
pub use table::{ColumnRoles, RawTable, ResolvedTable};
pub use types::{
    ColumnRole, ProfileType, TemplateVariant, DEFAULT_LOCATION, INVENTORY_STATUS_UNASSIGNED,
    NO_VALUE,
};
