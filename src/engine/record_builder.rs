// ==========================================
// Camvio 库存导入 - 导出记录构建引擎
// ==========================================
// 职责: (设备选择, 命中行) → OutputRecord / ExportFailure
// 红线: 行级拒绝并继续，不做整批失败
// ==========================================
// 流程（每个命中行）:
//   1. 读取 MAC / SN / FSAN（未识别的列读作空串），TRIM
//   2. 选择模板: 备用模板 → 目录模板 → 通用模板
//   3. 校验: 模板需要的字段为空或为保留"无值"标记 → ExportFailure
//   4. 替换占位符（ONT 字段只取自操作员选择）
//   5. 输出 OutputRecord（状态固定为 UNASSIGNED）
// ==========================================

use crate::catalog::DeviceCatalog;
use crate::domain::device::{DeviceSelection, ExportFailure, OutputRecord};
use crate::domain::table::{ColumnRoles, ResolvedTable};
use crate::domain::types::{TemplateVariant, INVENTORY_STATUS_UNASSIGNED, NO_VALUE};
use crate::engine::template::{self, TemplateToken, TemplateValues};
use tracing::{debug, warn};

// 失败日志中的字段标签
pub const FIELD_MAC: &str = "MAC";
pub const FIELD_SERIAL_NUMBER: &str = "Serial Number";
pub const FIELD_FSAN: &str = "FSAN";

/// 单个设备选择的构建结果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildOutcome {
    pub records: Vec<OutputRecord>,
    pub failures: Vec<ExportFailure>,
}

// ==========================================
// RecordBuilder - 导出记录构建引擎
// ==========================================
pub struct RecordBuilder {
    missing_sentinels: Vec<String>, // 大写
}

impl Default for RecordBuilder {
    fn default() -> Self {
        Self::new(vec![NO_VALUE.to_string(), "NAN".to_string(), "NONE".to_string()])
    }
}

impl RecordBuilder {
    /// 创建构建引擎
    ///
    /// # 参数
    /// - missing_sentinels: 视为"无值"的保留标记（大小写无关）
    pub fn new(missing_sentinels: Vec<String>) -> Self {
        Self {
            missing_sentinels: missing_sentinels
                .into_iter()
                .map(|s| s.trim().to_uppercase())
                .filter(|s| !s.is_empty())
                .collect(),
        }
    }

    /// 值是否视为缺失
    pub fn is_missing(&self, value: &str) -> bool {
        let trimmed = value.trim();
        trimmed.is_empty()
            || self
                .missing_sentinels
                .iter()
                .any(|s| s == &trimmed.to_uppercase())
    }

    /// 确定该选择使用的模板
    ///
    /// # 规则
    /// - Alternate: 目录备用模板；缺失时退回目录默认模板
    /// - Default: 目录默认模板
    /// - 目录无模板 / 目录未命中: 按选择的档案类型生成通用模板
    /// - ONT: ONT_PORT / ONT_PROFILE_ID / ONT_MOMENTUM_PASSWORD 绑定到操作员选择
    pub fn resolve_template(selection: &DeviceSelection, catalog: &DeviceCatalog) -> String {
        let entry = catalog.get(&selection.device_name);

        let catalog_template = entry.and_then(|e| match selection.template_variant {
            TemplateVariant::Alternate => e
                .alternate_template
                .as_ref()
                .or(e.template.as_ref()),
            TemplateVariant::Default => e.template.as_ref(),
        });

        let resolved = catalog_template
            .cloned()
            .unwrap_or_else(|| template::generic_template(&selection.profile_type));

        // ONT 字段以操作员选择为准，覆盖目录中的字面默认值
        if selection.profile_type.is_ont() {
            template::bind_operator_fields(&resolved)
        } else {
            resolved
        }
    }

    /// 构建单个设备选择的全部记录
    pub fn build(
        &self,
        selection: &DeviceSelection,
        table: &ResolvedTable,
        matching_rows: &[usize],
        roles: &ColumnRoles,
        catalog: &DeviceCatalog,
    ) -> BuildOutcome {
        let template = Self::resolve_template(selection, catalog);
        let mut outcome = BuildOutcome::default();

        for &row in matching_rows {
            // === 步骤 1: 提取字段 ===
            let mac = ColumnRoles::value_of(table, row, roles.mac);
            let sn = ColumnRoles::value_of(table, row, roles.serial_number);
            let fsan = ColumnRoles::value_of(table, row, roles.fsan);

            // === 步骤 3: 校验 ===
            let missing_fields: Vec<String> = [
                (TemplateToken::Mac, FIELD_MAC, &mac),
                (TemplateToken::Sn, FIELD_SERIAL_NUMBER, &sn),
                (TemplateToken::Fsan, FIELD_FSAN, &fsan),
            ]
            .into_iter()
            .filter(|(token, _, value)| template::requires(&template, *token) && self.is_missing(value))
            .map(|(_, label, _)| label.to_string())
            .collect();

            if !missing_fields.is_empty() {
                warn!(
                    device = %selection.device_name,
                    row = row,
                    missing = %missing_fields.join(";"),
                    "必需字段缺失，跳过该行"
                );
                outcome.failures.push(ExportFailure {
                    device_name: selection.device_name.clone(),
                    source_row: row,
                    missing_fields,
                    mac,
                    sn,
                    fsan,
                });
                continue;
            }

            // === 步骤 4: 替换占位符 ===
            let values = TemplateValues {
                mac: &mac,
                sn: &sn,
                fsan: &fsan,
                ont_port: &selection.overrides.ont_port,
                ont_profile_id: &selection.overrides.ont_profile_id,
                ont_momentum_password: &selection.overrides.ont_momentum_password,
            };
            let attribute_string = template::expand(&template, &values);

            // === 步骤 5: 输出记录 ===
            outcome.records.push(OutputRecord {
                profile_type: selection.profile_type.clone(),
                device_name: selection.device_name.clone(),
                attribute_string,
                location: selection.location.clone(),
                status: INVENTORY_STATUS_UNASSIGNED.to_string(),
            });
        }

        debug!(
            device = %selection.device_name,
            records = outcome.records.len(),
            failures = outcome.failures.len(),
            "记录构建完成"
        );

        outcome
    }
}
