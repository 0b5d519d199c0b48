// ==========================================
// Camvio 库存导入 - 配置层
// ==========================================
// 职责: 转换参数管理（表头扫描、无值标记、文件命名、类型不一致策略）
// 存储: 可选 JSON 文件，缺省全部使用默认值
// ==========================================

pub mod config_manager;
pub mod conversion_config_trait;

// 重导出核心配置管理器
pub use config_manager::{config_keys, default_config_path, ConfigManager};
pub use conversion_config_trait::ConversionConfigReader;
