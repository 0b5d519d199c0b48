// ==========================================
// Camvio 库存导入 - 领域类型定义
// ==========================================
// 依据: Camvio 设备档案类型 / 库存状态约定
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ==========================================
// 设备档案类型 (Profile Type)
// ==========================================
// 闭集 + 透传: 目录中出现的未知类型原样保留
// 序列化格式: 目录代码字符串（ONT / CX_ROUTER / ...）
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum ProfileType {
    Ont,           // 光网络终端
    Router,        // 路由器
    Mesh,          // Mesh 节点
    Sfp,           // SFP 光模块
    Endpoint,      // 同轴终端（无 FSAN）
    Other(String), // 透传类型
}

impl ProfileType {
    /// 目录代码
    pub fn code(&self) -> &str {
        match self {
            ProfileType::Ont => "ONT",
            ProfileType::Router => "CX_ROUTER",
            ProfileType::Mesh => "CX_MESH",
            ProfileType::Sfp => "CX_SFP",
            ProfileType::Endpoint => "GAM_COAX_ENDPOINT",
            ProfileType::Other(code) => code,
        }
    }

    /// FSAN 字段在属性串中的标签
    ///
    /// # 返回
    /// - None: 该类型的属性串不含 FSAN（仅 MAC/SN）
    pub fn fsan_label(&self) -> Option<&'static str> {
        match self {
            ProfileType::Ont => Some("ONT_FSAN"),
            ProfileType::Router => Some("ROUTER_FSAN"),
            ProfileType::Mesh => Some("MESH_FSAN"),
            ProfileType::Sfp => Some("SIP_FSAN"),
            ProfileType::Endpoint => None,
            ProfileType::Other(_) => Some("FSAN"),
        }
    }

    pub fn is_ont(&self) -> bool {
        matches!(self, ProfileType::Ont)
    }
}

impl fmt::Display for ProfileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl From<&str> for ProfileType {
    fn from(value: &str) -> Self {
        let trimmed = value.trim();
        match trimmed.to_uppercase().as_str() {
            "ONT" => ProfileType::Ont,
            "CX_ROUTER" | "ROUTER" => ProfileType::Router,
            "CX_MESH" | "MESH" => ProfileType::Mesh,
            "CX_SFP" | "SFP" => ProfileType::Sfp,
            "GAM_COAX_ENDPOINT" | "ENDPOINT" => ProfileType::Endpoint,
            _ => ProfileType::Other(trimmed.to_string()),
        }
    }
}

impl From<String> for ProfileType {
    fn from(value: String) -> Self {
        ProfileType::from(value.as_str())
    }
}

impl From<ProfileType> for String {
    fn from(value: ProfileType) -> Self {
        value.code().to_string()
    }
}

impl FromStr for ProfileType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ProfileType::from(s))
    }
}

// ==========================================
// 模板变体 (Template Variant)
// ==========================================
// Alternate: 使用目录中的 `_ALT` 模板（通常不导出 MAC/SN）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TemplateVariant {
    #[default]
    Default,
    Alternate,
}

impl fmt::Display for TemplateVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateVariant::Default => write!(f, "DEFAULT"),
            TemplateVariant::Alternate => write!(f, "ALTERNATE"),
        }
    }
}

// ==========================================
// 列语义角色 (Column Role)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnRole {
    Description,
    Mac,
    SerialNumber,
    Fsan,
}

impl fmt::Display for ColumnRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnRole::Description => write!(f, "description"),
            ColumnRole::Mac => write!(f, "mac"),
            ColumnRole::SerialNumber => write!(f, "serial_number"),
            ColumnRole::Fsan => write!(f, "fsan"),
        }
    }
}

// ==========================================
// 库存状态 (Inventory Status)
// ==========================================
// 新入库设备固定为待分配
pub const INVENTORY_STATUS_UNASSIGNED: &str = "UNASSIGNED";

// 默认库位
pub const DEFAULT_LOCATION: &str = "WAREHOUSE";

// 保留的"无值"标记
pub const NO_VALUE: &str = "NO VALUE";
