// ==========================================
// Camvio 库存导入 - 导入模块错误类型
// ==========================================
// 工具: thiserror 派生宏
// 说明: 只有这里的错误会中止一次转换；行级问题走 ExportFailure
// ==========================================

use thiserror::Error;

/// 导入模块错误类型
#[derive(Error, Debug)]
pub enum ImportError {
    // ===== 文件相关错误 =====
    #[error("文件不存在: {0}")]
    FileNotFound(String),

    #[error("文件格式不支持: {0}（仅支持 .xlsx/.xls/.csv）")]
    UnsupportedFormat(String),

    #[error("文件读取失败: {0}")]
    FileReadError(String),

    #[error("Excel 解析失败: {0}")]
    ExcelParseError(String),

    #[error("CSV 解析失败: {0}")]
    CsvParseError(String),

    // ===== 列识别错误 =====
    #[error("未找到必需列: {role}（请确认表头行选择是否正确）")]
    MissingColumn { role: String },

    #[error("表头行超出范围: 行 {row}，文件共 {total} 行")]
    HeaderRowOutOfRange { row: usize, total: usize },

    // ===== 设备目录错误 =====
    #[error("设备目录加载失败: {0}")]
    CatalogLoadError(String),

    // ===== 设备选择错误 =====
    #[error("设备类型不一致 (设备 {device_name}): 目录类型 {expected}，选择类型 {chosen}")]
    TypeMismatchBlocked {
        device_name: String,
        expected: String,
        chosen: String,
    },

    // ===== 配置错误 =====
    #[error("配置读取失败 (key: {key}): {message}")]
    ConfigReadError { key: String, message: String },

    #[error("配置值格式错误 (key: {key}, value: {value}): {message}")]
    ConfigValueError {
        key: String,
        value: String,
        message: String,
    },

    #[error("JSON 解析失败: {0}")]
    JsonParseError(String),

    // ===== 导出错误 =====
    #[error("导出写入失败: {0}")]
    ExportWriteError(String),

    // ===== 通用错误 =====
    #[error("内部错误: {0}")]
    InternalError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// 实现 From<std::io::Error>
impl From<std::io::Error> for ImportError {
    fn from(err: std::io::Error) -> Self {
        ImportError::FileReadError(err.to_string())
    }
}

// 实现 From<csv::Error>
impl From<csv::Error> for ImportError {
    fn from(err: csv::Error) -> Self {
        ImportError::CsvParseError(err.to_string())
    }
}

// 实现 From<calamine::Error>
impl From<calamine::Error> for ImportError {
    fn from(err: calamine::Error) -> Self {
        ImportError::ExcelParseError(err.to_string())
    }
}

// 实现 From<serde_json::Error>
impl From<serde_json::Error> for ImportError {
    fn from(err: serde_json::Error) -> Self {
        ImportError::JsonParseError(err.to_string())
    }
}

/// Result 类型别名
pub type ImportResult<T> = Result<T, ImportError>;
