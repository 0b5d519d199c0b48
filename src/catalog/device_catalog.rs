// ==========================================
// Camvio 库存导入 - 设备目录
// ==========================================
// 职责: 设备名 → 档案类型 / 属性串模板 的只读查找表
// 来源: 外部 JSON 资产（profiles + templates 两张并行映射）
// 规则: 键统一 TRIM + 大写；`_ALT` 结尾的模板键挂到同名基础条目
// ==========================================

use crate::domain::device::{DeviceCatalogEntry, DeviceSelection};
use crate::domain::types::ProfileType;
use crate::importer::error::{ImportError, ImportResult};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// 备用模板键后缀
pub const ALT_SUFFIX: &str = "_ALT";

// ==========================================
// CatalogAsset - 外部资产文件格式
// ==========================================
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogAsset {
    #[serde(default)]
    pub profiles: HashMap<String, String>,
    #[serde(default)]
    pub templates: HashMap<String, String>,
}

// ==========================================
// DeviceCatalog - 设备目录
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct DeviceCatalog {
    entries: BTreeMap<String, DeviceCatalogEntry>,
}

/// 目录键规范化
pub fn normalize_key(name: &str) -> String {
    name.trim().to_uppercase()
}

impl DeviceCatalog {
    /// 从两张并行映射构建目录
    ///
    /// 原始键按字典序处理；规范化后重复的键保留首个，其余告警忽略
    pub fn from_maps(
        profiles: HashMap<String, String>,
        templates: HashMap<String, String>,
    ) -> Self {
        let mut entries: BTreeMap<String, DeviceCatalogEntry> = BTreeMap::new();
        for (name, profile) in sorted(profiles) {
            let key = normalize_key(&name);
            if entries.contains_key(&key) {
                warn!(key = %key, raw = %name, "设备名规范化后重复，已忽略");
                continue;
            }
            entries.insert(
                key.clone(),
                DeviceCatalogEntry {
                    name: key,
                    profile_type: ProfileType::from(profile.as_str()),
                    template: None,
                    alternate_template: None,
                },
            );
        }

        for (name, template) in sorted(templates) {
            let key = normalize_key(&name);
            let (base, is_alt) = match key.strip_suffix(ALT_SUFFIX) {
                Some(base) => (base, true),
                None => (key.as_str(), false),
            };

            let Some(entry) = entries.get_mut(base) else {
                warn!(key = %key, "模板无对应设备条目，已忽略");
                continue;
            };
            let slot = if is_alt {
                &mut entry.alternate_template
            } else {
                &mut entry.template
            };
            if slot.is_some() {
                warn!(key = %key, raw = %name, "模板键规范化后重复，已忽略");
                continue;
            }
            *slot = Some(template);
        }

        Self { entries }
    }

    /// 从资产结构构建
    pub fn from_asset(asset: CatalogAsset) -> Self {
        Self::from_maps(asset.profiles, asset.templates)
    }

    /// 从 JSON 文件加载
    pub fn load<P: AsRef<Path>>(path: P) -> ImportResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ImportError::FileNotFound(path.display().to_string()));
        }

        let raw = fs::read_to_string(path)?;
        let asset: CatalogAsset = serde_json::from_str(&raw)
            .map_err(|e| ImportError::CatalogLoadError(format!("{}: {}", path.display(), e)))?;

        let catalog = Self::from_asset(asset);
        info!(entries = catalog.len(), path = %path.display(), "设备目录加载完成");
        Ok(catalog)
    }

    /// 按设备名查找（大小写无关）
    pub fn get(&self, name: &str) -> Option<&DeviceCatalogEntry> {
        self.entries.get(&normalize_key(name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// 按名称排序的全部条目（不含 `_ALT`）
    pub fn entries(&self) -> impl Iterator<Item = &DeviceCatalogEntry> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 为操作员输入的设备名生成建议选择
    ///
    /// # 规则
    /// - 目录命中: 类型取目录类型，ONT_PORT / ONT_PROFILE_ID 从模板中解析
    /// - 目录未命中: 类型默认 ONT，端口为空，profile id 取大写设备名
    pub fn suggest_selection(&self, device_name: &str, location: &str) -> DeviceSelection {
        match self.get(device_name) {
            Some(entry) => {
                let mut selection =
                    DeviceSelection::new(device_name, entry.profile_type.clone(), location);
                if let Some(template) = entry.template.as_deref() {
                    selection.overrides.ont_port =
                        template_field(template, "ONT_PORT").unwrap_or_default();
                    selection.overrides.ont_profile_id = template_field(template, "ONT_PROFILE_ID")
                        .map(|v| v.to_uppercase())
                        .unwrap_or_default();
                }
                selection
            }
            None => {
                let mut selection = DeviceSelection::new(device_name, ProfileType::Ont, location);
                selection.overrides.ont_profile_id = normalize_key(device_name);
                selection
            }
        }
    }
}

/// 按原始键排序
fn sorted(map: HashMap<String, String>) -> Vec<(String, String)> {
    let mut pairs: Vec<(String, String)> = map.into_iter().collect();
    pairs.sort();
    pairs
}

/// 从属性串模板中读取 `KEY=value` 的值（占位符值视为无默认）
fn template_field(template: &str, key: &str) -> Option<String> {
    template
        .split('|')
        .filter_map(|segment| segment.split_once('='))
        .find(|(k, _)| k.trim() == key)
        .map(|(_, v)| v.trim().to_string())
        .filter(|v| !(v.starts_with("<<") && v.ends_with(">>")))
}
