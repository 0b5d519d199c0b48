// ==========================================
// Camvio 库存导入 - 列语义识别
// ==========================================
// 职责: 表头名 → {description, mac, serial_number, fsan}
// 顺序: 列在外层、候选模式在内层，按列从左到右首个命中者胜出
// 匹配: 大小写无关；"sn" 为词边界匹配（避免命中 "SNMP"）
// ==========================================

use crate::common::text_match::{contains_ignore_case, BoundaryMatcher};
use crate::domain::table::ColumnRoles;
use crate::domain::types::ColumnRole;
use crate::importer::error::{ImportError, ImportResult};
use tracing::debug;

/// 候选模式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderPattern {
    /// 普通子串
    Substring(&'static str),
    /// 词边界子串
    Token(&'static str),
}

impl HeaderPattern {
    fn matches(&self, header: &str) -> bool {
        match self {
            HeaderPattern::Substring(p) => contains_ignore_case(header, p),
            HeaderPattern::Token(p) => BoundaryMatcher::new(p)
                .map(|m| m.is_match(header))
                .unwrap_or(false),
        }
    }
}

/// 各角色的候选模式表
pub fn patterns_for(role: ColumnRole) -> &'static [HeaderPattern] {
    use HeaderPattern::{Substring, Token};
    match role {
        ColumnRole::Description => &[
            Substring("description"),
            Substring("product description"),
            Substring("item description"),
        ],
        ColumnRole::SerialNumber => &[Substring("serial number"), Substring("serial"), Token("sn")],
        ColumnRole::Mac => &[Substring("mac"), Substring("mac address")],
        ColumnRole::Fsan => &[Substring("fsan")],
    }
}

pub struct ColumnResolver;

impl ColumnResolver {
    /// 识别列语义
    ///
    /// # 参数
    /// - columns: 已 TRIM 的表头名
    ///
    /// # 返回
    /// - Ok(ColumnRoles)
    /// - Err(MissingColumn): 未找到 description 列
    pub fn resolve(columns: &[String]) -> ImportResult<ColumnRoles> {
        let description = Self::find(columns, ColumnRole::Description).ok_or_else(|| {
            ImportError::MissingColumn {
                role: ColumnRole::Description.to_string(),
            }
        })?;

        let roles = ColumnRoles {
            description,
            mac: Self::find(columns, ColumnRole::Mac),
            serial_number: Self::find(columns, ColumnRole::SerialNumber),
            fsan: Self::find(columns, ColumnRole::Fsan),
        };

        debug!(
            description = %columns[roles.description],
            mac = ?roles.mac.map(|i| &columns[i]),
            serial_number = ?roles.serial_number.map(|i| &columns[i]),
            fsan = ?roles.fsan.map(|i| &columns[i]),
            "列语义识别完成"
        );

        Ok(roles)
    }

    /// 按列顺序查找首个命中任一模式的列
    pub fn find(columns: &[String], role: ColumnRole) -> Option<usize> {
        let patterns = patterns_for(role);
        columns
            .iter()
            .position(|col| patterns.iter().any(|p| p.matches(col)))
    }
}
