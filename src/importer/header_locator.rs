// ==========================================
// Camvio 库存导入 - 表头行定位
// ==========================================
// 职责: 在含横幅/标题行的表格中找出真正的表头行
// 规则（只扫描前 N 行，默认 10）:
//   1. 首个同时含 "description" 与 "fsan" 单元格的行
//   2. 否则首个含 "description" 单元格的行
//   3. 否则第 0 行
// ==========================================

use crate::domain::table::RawTable;
use tracing::debug;

pub const DEFAULT_HEADER_SCAN_ROWS: usize = 10;

pub struct HeaderLocator {
    scan_rows: usize,
}

impl Default for HeaderLocator {
    fn default() -> Self {
        Self::new(DEFAULT_HEADER_SCAN_ROWS)
    }
}

impl HeaderLocator {
    pub fn new(scan_rows: usize) -> Self {
        Self { scan_rows }
    }

    /// 定位表头行（永不失败，最差返回 0）
    pub fn locate(&self, raw: &RawTable) -> usize {
        let candidates: Vec<(usize, bool, bool)> = raw
            .rows()
            .iter()
            .take(self.scan_rows)
            .enumerate()
            .map(|(idx, row)| {
                let lowered: Vec<String> =
                    row.iter().map(|c| c.trim().to_lowercase()).collect();
                let has_description = lowered.iter().any(|c| c.contains("description"));
                let has_fsan = lowered.iter().any(|c| c.contains("fsan"));
                (idx, has_description, has_fsan)
            })
            .collect();

        if let Some((idx, _, _)) = candidates.iter().find(|(_, d, f)| *d && *f) {
            debug!(header_row = idx, "表头行定位: description + fsan");
            return *idx;
        }

        if let Some((idx, _, _)) = candidates.iter().find(|(_, d, _)| *d) {
            debug!(header_row = idx, "表头行定位: description");
            return *idx;
        }

        debug!("表头行定位: 未命中，使用第 0 行");
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(rows: &[&[&str]]) -> RawTable {
        RawTable::new(
            rows.iter()
                .map(|r| r.iter().map(|c| c.to_string()).collect())
                .collect(),
        )
    }

    #[test]
    fn test_prefers_row_with_description_and_fsan() {
        let raw = table(&[
            &["Description"],
            &["Packing slip 2291"],
            &["Item Description", "MAC", "FSAN"],
            &["GS4220E", "00:11", "CXNK1"],
        ]);

        assert_eq!(HeaderLocator::default().locate(&raw), 2);
    }

    #[test]
    fn test_falls_back_to_first_description_row() {
        let raw = table(&[
            &["ACME Distribution"],
            &["Product Description", "Serial"],
            &["Description", "MAC"],
        ]);

        assert_eq!(HeaderLocator::default().locate(&raw), 1);
    }

    #[test]
    fn test_defaults_to_row_zero() {
        let raw = table(&[&["Model", "MAC"], &["GM1028H", "AA"]]);
        assert_eq!(HeaderLocator::default().locate(&raw), 0);
    }

    #[test]
    fn test_empty_table() {
        assert_eq!(HeaderLocator::default().locate(&RawTable::default()), 0);
    }

    #[test]
    fn test_ignores_rows_beyond_scan_window() {
        let banner: &[&str] = &["banner"];
        let mut rows: Vec<&[&str]> = vec![banner; 10];
        rows.push(&["Description", "FSAN"]);
        let raw = table(&rows);

        assert_eq!(HeaderLocator::default().locate(&raw), 0);
        assert_eq!(HeaderLocator::new(11).locate(&raw), 10);
    }

    #[test]
    fn test_case_and_whitespace_insensitive() {
        let raw = table(&[&["x"], &["  DESCRIPTION  ", " Fsan Number "]]);
        assert_eq!(HeaderLocator::default().locate(&raw), 1);
    }
}
