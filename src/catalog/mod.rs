// ==========================================
// Camvio 库存导入 - 设备目录层
// ==========================================
// 职责: 加载外部设备目录资产，提供只读查找
// ==========================================

pub mod device_catalog;

pub use device_catalog::{normalize_key, CatalogAsset, DeviceCatalog, ALT_SUFFIX};
