// ==========================================
// Camvio 库存导入 - 公共工具模块
// ==========================================
// 职责: 提供列识别与设备匹配共用的文本匹配函数
// ==========================================

/// 词边界安全的大小写无关匹配
pub mod text_match;

// 重新导出常用类型
pub use text_match::{contains_ignore_case, BoundaryMatcher};
