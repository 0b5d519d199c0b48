// ==========================================
// Camvio 库存导入 - 设备相关实体
// ==========================================
// 职责: 目录条目 / 操作员选择 / 输出记录 / 失败记录 / 提示
// 生命周期: 仅在单次转换内
// ==========================================

use crate::domain::types::{ProfileType, TemplateVariant, DEFAULT_LOCATION, NO_VALUE};
use crate::i18n::t_with_args;
use serde::{Deserialize, Serialize};

// ==========================================
// DeviceCatalogEntry - 设备目录条目
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceCatalogEntry {
    pub name: String,                       // 规范设备名（大写键）
    pub profile_type: ProfileType,          // 目录档案类型
    pub template: Option<String>,           // 属性串模板
    pub alternate_template: Option<String>, // `_ALT` 模板
}

// ==========================================
// SelectionOverrides - ONT 专属覆写
// ==========================================
// 只从操作员确认的选择中读取，不从源数据行读取
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectionOverrides {
    pub ont_port: String,
    pub ont_profile_id: String,
    pub ont_momentum_password: String,
}

impl Default for SelectionOverrides {
    fn default() -> Self {
        Self {
            ont_port: String::new(),
            ont_profile_id: String::new(),
            ont_momentum_password: NO_VALUE.to_string(),
        }
    }
}

// ==========================================
// DeviceSelection - 操作员确认的设备选择
// ==========================================
// 允许重复（同名设备各自独立处理，不去重）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceSelection {
    pub device_name: String, // Camvio 设备名
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_name: Option<String>, // 文件中的型号文本（缺省 = device_name）
    pub profile_type: ProfileType,
    #[serde(default = "default_location")]
    pub location: String,
    #[serde(default)]
    pub template_variant: TemplateVariant,
    #[serde(default)]
    pub overrides: SelectionOverrides,
}

fn default_location() -> String {
    DEFAULT_LOCATION.to_string()
}

impl DeviceSelection {
    pub fn new(device_name: &str, profile_type: ProfileType, location: &str) -> Self {
        Self {
            device_name: device_name.trim().to_string(),
            model_name: None,
            profile_type,
            location: location.trim().to_string(),
            template_variant: TemplateVariant::Default,
            overrides: SelectionOverrides::default(),
        }
    }

    /// 在描述列中检索的文本
    pub fn search_text(&self) -> &str {
        self.model_name
            .as_deref()
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .unwrap_or(self.device_name.trim())
    }
}

// ==========================================
// OutputRecord - 导出记录
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputRecord {
    pub profile_type: ProfileType,
    pub device_name: String,
    pub attribute_string: String, // device_numbers 列
    pub location: String,
    pub status: String,
}

// ==========================================
// ExportFailure - 行级导出失败
// ==========================================
// 不阻断其他行
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportFailure {
    pub device_name: String,
    pub source_row: usize,           // 数据行序号（0 起）
    pub missing_fields: Vec<String>, // MAC / Serial Number / FSAN
    pub mac: String,
    pub sn: String,
    pub fsan: String,
}

// ==========================================
// DeviceMatch - 目录设备匹配结果
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceMatch {
    pub device_name: String,
    pub profile_type: ProfileType,
    pub match_count: usize,
    pub matching_rows: Vec<usize>,
}

// ==========================================
// Advisory - 非阻断提示
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Advisory {
    /// 设备名不在目录中，使用通用模板 + 操作员类型
    CatalogMiss { device_name: String },
    /// 操作员类型与目录类型不一致
    TypeMismatch {
        device_name: String,
        expected: ProfileType,
        chosen: ProfileType,
    },
    /// 自定义库位（需与 Camvio 完全一致）
    CustomLocation {
        device_name: String,
        location: String,
    },
    /// 请求 `_ALT` 模板但目录未提供
    AlternateTemplateMissing { device_name: String },
}

impl Advisory {
    pub fn device_name(&self) -> &str {
        match self {
            Advisory::CatalogMiss { device_name }
            | Advisory::TypeMismatch { device_name, .. }
            | Advisory::CustomLocation { device_name, .. }
            | Advisory::AlternateTemplateMissing { device_name } => device_name,
        }
    }

    /// 本地化提示文本
    pub fn message(&self) -> String {
        match self {
            Advisory::CatalogMiss { device_name } => {
                t_with_args("advisory.catalog_miss", &[("device", device_name.as_str())])
            }
            Advisory::TypeMismatch {
                device_name,
                expected,
                chosen,
            } => t_with_args(
                "advisory.type_mismatch",
                &[
                    ("device", device_name.as_str()),
                    ("expected", expected.code()),
                    ("chosen", chosen.code()),
                ],
            ),
            Advisory::CustomLocation {
                device_name,
                location,
            } => t_with_args(
                "advisory.custom_location",
                &[("device", device_name.as_str()), ("location", location.as_str())],
            ),
            Advisory::AlternateTemplateMissing { device_name } => {
                t_with_args("advisory.alternate_missing", &[("device", device_name.as_str())])
            }
        }
    }
}
