// ==========================================
// Camvio 库存导入 - API层错误类型
// ==========================================
// 职责: 将导入层的技术错误转换为操作员可理解的分类
// 说明: 只有输入级错误会到达这里；行级问题在报告的 failures 中
// ==========================================

use crate::importer::error::ImportError;
use thiserror::Error;

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    // ==========================================
    // 输入文件错误
    // ==========================================
    #[error("输入文件不可用: {0}")]
    InputUnavailable(String),

    #[error("输入文件无法解析: {0}")]
    InputUnreadable(String),

    /// 描述列未识别，转换在匹配前中止
    #[error("缺少必需列: {0}")]
    MissingColumn(String),

    #[error("无效输入: {0}")]
    InvalidInput(String),

    // ==========================================
    // 会话 / 目录 / 配置错误
    // ==========================================
    #[error("设备目录不可用: {0}")]
    CatalogUnavailable(String),

    #[error("配置错误: {0}")]
    ConfigError(String),

    /// 已配置为阻断的类型不一致
    #[error("设备选择被拒绝: {0}")]
    SelectionRejected(String),

    // ==========================================
    // 输出错误
    // ==========================================
    #[error("导出失败: {0}")]
    ExportFailed(String),

    // ==========================================
    // 通用错误
    // ==========================================
    #[error("内部错误: {0}")]
    InternalError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// ==========================================
// 从 ImportError 转换
// ==========================================
impl From<ImportError> for ApiError {
    fn from(err: ImportError) -> Self {
        let message = err.to_string();
        match err {
            ImportError::FileNotFound(_) | ImportError::UnsupportedFormat(_) => {
                ApiError::InputUnavailable(message)
            }
            ImportError::FileReadError(_)
            | ImportError::ExcelParseError(_)
            | ImportError::CsvParseError(_) => ApiError::InputUnreadable(message),
            ImportError::MissingColumn { role } => ApiError::MissingColumn(role),
            ImportError::HeaderRowOutOfRange { .. } | ImportError::JsonParseError(_) => {
                ApiError::InvalidInput(message)
            }
            ImportError::CatalogLoadError(_) => ApiError::CatalogUnavailable(message),
            ImportError::TypeMismatchBlocked { .. } => ApiError::SelectionRejected(message),
            ImportError::ConfigReadError { .. } | ImportError::ConfigValueError { .. } => {
                ApiError::ConfigError(message)
            }
            ImportError::ExportWriteError(_) => ApiError::ExportFailed(message),
            ImportError::InternalError(_) => ApiError::InternalError(message),
            ImportError::Other(e) => ApiError::Other(e),
        }
    }
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_column_keeps_role() {
        let err: ApiError = ImportError::MissingColumn {
            role: "description".to_string(),
        }
        .into();
        assert!(matches!(err, ApiError::MissingColumn(ref role) if role == "description"));
    }

    #[test]
    fn test_blocked_mismatch_is_selection_rejected() {
        let err: ApiError = ImportError::TypeMismatchBlocked {
            device_name: "GS4220E".to_string(),
            expected: "ONT".to_string(),
            chosen: "CX_MESH".to_string(),
        }
        .into();
        assert!(matches!(err, ApiError::SelectionRejected(_)));
        assert!(err.to_string().contains("GS4220E"));
    }

    #[test]
    fn test_parse_errors_are_unreadable_input() {
        let err: ApiError = ImportError::CsvParseError("bad quote".to_string()).into();
        assert!(matches!(err, ApiError::InputUnreadable(_)));
    }
}
