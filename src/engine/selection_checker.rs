// ==========================================
// Camvio 库存导入 - 设备选择检查
// ==========================================
// 职责: 对照目录检查操作员选择，生成非阻断提示
// 提示: 目录未命中 / 类型不一致 / 自定义库位 / 备用模板缺失
// 阻断: 仅当配置 block_on_type_mismatch = true 时，类型不一致中止转换
// ==========================================

use crate::catalog::DeviceCatalog;
use crate::domain::device::{Advisory, DeviceSelection};
use crate::domain::types::{TemplateVariant, DEFAULT_LOCATION};
use crate::importer::error::{ImportError, ImportResult};
use tracing::warn;

pub struct SelectionChecker {
    block_on_type_mismatch: bool,
}

impl Default for SelectionChecker {
    fn default() -> Self {
        Self::new(false)
    }
}

impl SelectionChecker {
    pub fn new(block_on_type_mismatch: bool) -> Self {
        Self {
            block_on_type_mismatch,
        }
    }

    /// 检查单个选择
    ///
    /// # 返回
    /// - Ok(Vec<Advisory>): 提示列表（可能为空）
    /// - Err(TypeMismatchBlocked): 已配置阻断且类型不一致
    pub fn check(
        &self,
        selection: &DeviceSelection,
        catalog: &DeviceCatalog,
    ) -> ImportResult<Vec<Advisory>> {
        let mut advisories = Vec::new();
        let device_name = selection.device_name.clone();

        match catalog.get(&selection.device_name) {
            None => advisories.push(Advisory::CatalogMiss {
                device_name: device_name.clone(),
            }),
            Some(entry) => {
                if entry.profile_type != selection.profile_type {
                    if self.block_on_type_mismatch {
                        return Err(ImportError::TypeMismatchBlocked {
                            device_name,
                            expected: entry.profile_type.code().to_string(),
                            chosen: selection.profile_type.code().to_string(),
                        });
                    }
                    advisories.push(Advisory::TypeMismatch {
                        device_name: device_name.clone(),
                        expected: entry.profile_type.clone(),
                        chosen: selection.profile_type.clone(),
                    });
                }

                if selection.template_variant == TemplateVariant::Alternate
                    && entry.alternate_template.is_none()
                {
                    advisories.push(Advisory::AlternateTemplateMissing {
                        device_name: device_name.clone(),
                    });
                }
            }
        }

        if selection.location != DEFAULT_LOCATION {
            advisories.push(Advisory::CustomLocation {
                device_name,
                location: selection.location.clone(),
            });
        }

        for advisory in &advisories {
            warn!(device = %advisory.device_name(), advisory = ?advisory, "设备选择提示");
        }

        Ok(advisories)
    }
}
