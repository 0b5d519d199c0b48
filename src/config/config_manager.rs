// ==========================================
// Camvio 库存导入 - 配置管理器
// ==========================================
// 职责: 配置加载、查询、覆写
// 存储: JSON 对象（key → value 字符串），文件可选
// 默认路径: {config_dir}/camvio-import/config.json
// ==========================================

use crate::config::conversion_config_trait::ConversionConfigReader;
use crate::importer::error::{ImportError, ImportResult};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};
use tracing::{debug, info};

// ==========================================
// 配置键
// ==========================================
pub mod config_keys {
    // 表头定位
    pub const HEADER_SCAN_ROWS: &str = "header_scan_rows";

    // 设备选择
    pub const DEFAULT_LOCATION: &str = "default_location";
    pub const BLOCK_ON_TYPE_MISMATCH: &str = "block_on_type_mismatch";

    // 记录校验
    pub const MISSING_VALUE_SENTINELS: &str = "missing_value_sentinels";

    // 导出
    pub const DEFAULT_EXPORT_STEM: &str = "default_export_stem";
    pub const FILENAME_INCLUDE_TIME: &str = "filename_include_time";
    pub const FAILURE_FIELD_SEPARATOR: &str = "failure_field_separator";

    // 界面
    pub const LOCALE: &str = "locale";
}

const APP_DIR: &str = "camvio-import";
const CONFIG_FILE: &str = "config.json";

/// 默认配置文件路径
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
}

// ==========================================
// ConfigManager - 配置管理器
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct ConfigManager {
    values: Arc<RwLock<BTreeMap<String, String>>>,
}

impl ConfigManager {
    /// 空配置（全部使用默认值）
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// 从 JSON 文件加载
    ///
    /// 值可以是字符串、数字或布尔，统一存为字符串
    pub fn load<P: AsRef<Path>>(path: P) -> ImportResult<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|e| ImportError::ConfigReadError {
            key: path.display().to_string(),
            message: e.to_string(),
        })?;

        let manager = Self::from_json(&raw)?;
        info!(path = %path.display(), keys = manager.len(), "配置加载完成");
        Ok(manager)
    }

    /// 默认路径存在则加载，否则使用默认值
    pub fn load_default() -> ImportResult<Self> {
        match default_config_path() {
            Some(path) if path.exists() => Self::load(path),
            _ => {
                debug!("未找到配置文件，使用默认配置");
                Ok(Self::in_memory())
            }
        }
    }

    /// 从 JSON 文本构建
    pub fn from_json(raw: &str) -> ImportResult<Self> {
        let object: serde_json::Map<String, serde_json::Value> = serde_json::from_str(raw)?;

        let values = object
            .into_iter()
            .map(|(key, value)| {
                let text = match value {
                    serde_json::Value::String(s) => s,
                    serde_json::Value::Array(items) => items
                        .iter()
                        .map(|v| match v {
                            serde_json::Value::String(s) => s.clone(),
                            other => other.to_string(),
                        })
                        .collect::<Vec<_>>()
                        .join(","),
                    other => other.to_string(),
                };
                (key, text)
            })
            .collect();

        Ok(Self {
            values: Arc::new(RwLock::new(values)),
        })
    }

    /// 读取配置值
    pub fn get(&self, key: &str) -> ImportResult<Option<String>> {
        let values = self.values.read().map_err(|e| ImportError::ConfigReadError {
            key: key.to_string(),
            message: format!("锁获取失败: {}", e),
        })?;
        Ok(values.get(key).cloned())
    }

    /// 覆写配置值
    pub fn set(&self, key: &str, value: &str) -> ImportResult<()> {
        let mut values = self.values.write().map_err(|e| ImportError::ConfigReadError {
            key: key.to_string(),
            message: format!("锁获取失败: {}", e),
        })?;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    /// 配置快照（JSON）
    pub fn snapshot(&self) -> ImportResult<String> {
        let values = self.values.read().map_err(|e| ImportError::ConfigReadError {
            key: "*".to_string(),
            message: format!("锁获取失败: {}", e),
        })?;
        Ok(serde_json::to_string(&*values)?)
    }

    pub fn len(&self) -> usize {
        self.values.read().map(|v| v.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn get_or_default(&self, key: &str, default: &str) -> ImportResult<String> {
        Ok(self
            .get(key)?
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| default.to_string()))
    }

    fn get_bool(&self, key: &str, default: bool) -> ImportResult<bool> {
        let Some(value) = self.get(key)? else {
            return Ok(default);
        };
        match value.trim().to_lowercase().as_str() {
            "true" | "1" | "yes" => Ok(true),
            "false" | "0" | "no" => Ok(false),
            "" => Ok(default),
            _ => Err(ImportError::ConfigValueError {
                key: key.to_string(),
                value,
                message: "应为 true/false".to_string(),
            }),
        }
    }
}

impl ConversionConfigReader for ConfigManager {
    fn get_header_scan_rows(&self) -> ImportResult<usize> {
        let value = self.get_or_default(config_keys::HEADER_SCAN_ROWS, "10")?;
        match value.trim().parse::<usize>() {
            Ok(n) if n > 0 => Ok(n),
            _ => Err(ImportError::ConfigValueError {
                key: config_keys::HEADER_SCAN_ROWS.to_string(),
                value,
                message: "应为正整数".to_string(),
            }),
        }
    }

    fn get_default_location(&self) -> ImportResult<String> {
        Ok(self
            .get_or_default(config_keys::DEFAULT_LOCATION, "WAREHOUSE")?
            .trim()
            .to_string())
    }

    fn get_missing_value_sentinels(&self) -> ImportResult<Vec<String>> {
        let value = self.get_or_default(config_keys::MISSING_VALUE_SENTINELS, "NO VALUE,NAN,NONE")?;
        Ok(value
            .split(',')
            .map(|s| s.trim().to_uppercase())
            .filter(|s| !s.is_empty())
            .collect())
    }

    fn get_default_export_stem(&self) -> ImportResult<String> {
        self.get_or_default(config_keys::DEFAULT_EXPORT_STEM, "inventory_export")
    }

    fn get_filename_include_time(&self) -> ImportResult<bool> {
        self.get_bool(config_keys::FILENAME_INCLUDE_TIME, true)
    }

    fn get_block_on_type_mismatch(&self) -> ImportResult<bool> {
        self.get_bool(config_keys::BLOCK_ON_TYPE_MISMATCH, false)
    }

    fn get_failure_field_separator(&self) -> ImportResult<String> {
        // 分隔符不 TRIM（允许 " | "）
        Ok(self
            .get(config_keys::FAILURE_FIELD_SEPARATOR)?
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| ";".to_string()))
    }

    fn get_locale(&self) -> ImportResult<String> {
        self.get_or_default(config_keys::LOCALE, "en")
    }
}
