// ==========================================
// Camvio 库存导入 - 设备匹配引擎
// ==========================================
// 职责: 扫描描述列，统计每个目录设备命中的行
// 红线: 互为子串的设备名不得交叉命中（GM1028 ≠ GM1028H）
// 输入: ResolvedTable + description 列号 + DeviceCatalog
// 输出: 命中行数 > 0 的 DeviceMatch 列表（按设备名排序）
// ==========================================

use crate::catalog::DeviceCatalog;
use crate::common::text_match::BoundaryMatcher;
use crate::domain::device::DeviceMatch;
use crate::domain::table::ResolvedTable;
use crate::importer::error::{ImportError, ImportResult};
use tracing::{debug, instrument};

// ==========================================
// DeviceMatcher - 设备匹配引擎
// ==========================================
pub struct DeviceMatcher;

impl DeviceMatcher {
    /// 按目录匹配全部设备
    ///
    /// 目录中不存在 `_ALT` 条目（加载时已挂到基础条目），因此备用模板永不参与匹配。
    /// 命中 0 行的条目不出现在结果中。
    #[instrument(skip(table, catalog), fields(rows = table.row_count(), entries = catalog.len()))]
    pub fn match_catalog(
        table: &ResolvedTable,
        description_col: usize,
        catalog: &DeviceCatalog,
    ) -> ImportResult<Vec<DeviceMatch>> {
        let mut matches = Vec::new();

        for entry in catalog.entries() {
            let rows = Self::match_text(table, description_col, &entry.name)?;
            if rows.is_empty() {
                continue;
            }
            matches.push(DeviceMatch {
                device_name: entry.name.clone(),
                profile_type: entry.profile_type.clone(),
                match_count: rows.len(),
                matching_rows: rows,
            });
        }

        debug!(matched_devices = matches.len(), "目录设备匹配完成");
        Ok(matches)
    }

    /// 用任意文本（操作员输入的型号）匹配描述列
    ///
    /// # 返回
    /// - 命中的数据行序号（升序）
    pub fn match_text(
        table: &ResolvedTable,
        description_col: usize,
        text: &str,
    ) -> ImportResult<Vec<usize>> {
        let matcher = BoundaryMatcher::new(text)
            .map_err(|e| ImportError::InternalError(format!("设备名模式构建失败 {}: {}", text, e)))?;

        Ok((0..table.row_count())
            .filter(|&row| matcher.is_match(table.cell(row, description_col)))
            .collect())
    }
}
