// ==========================================
// Camvio 库存导入 - 表格模型
// ==========================================
// 职责: 原始表格（无表头假设）→ 已定位表头的表格
// 红线: 载入后不可变，不含匹配/模板逻辑
// ==========================================

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

// ==========================================
// RawTable - 原始表格
// ==========================================
// 用途: 上传文件的完整内容，单元格统一为显示字符串
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawTable {
    rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn new(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Option<&[String]> {
        self.rows.get(index).map(|r| r.as_slice())
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// 按表头行切分为 ResolvedTable
    ///
    /// # 规则
    /// - 表头名 TRIM；空表头 → `Unnamed: {列号}`
    /// - 重名表头: 首个保留原名，后续依次追加 `.1` / `.2` ...
    /// - 表头之前的行（横幅/标题）丢弃
    /// - 数据行补齐/截断到表头宽度，完全空白的行跳过
    pub fn resolve(&self, header_row: usize) -> ResolvedTable {
        let header_cells = self.row(header_row).unwrap_or(&[]);
        let headers = unique_headers(header_cells);
        let width = headers.len();

        let mut rows = Vec::new();
        for raw in self.rows.iter().skip(header_row.saturating_add(1)) {
            if raw.iter().all(|c| c.trim().is_empty()) {
                continue;
            }
            let mut cells: Vec<String> = raw.iter().take(width).cloned().collect();
            cells.resize(width, String::new());
            rows.push(cells);
        }

        ResolvedTable {
            header_row,
            headers,
            rows,
        }
    }
}

fn unique_headers(cells: &[String]) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut headers = Vec::with_capacity(cells.len());

    for (idx, cell) in cells.iter().enumerate() {
        let trimmed = cell.trim();
        let base = if trimmed.is_empty() {
            format!("Unnamed: {}", idx)
        } else {
            trimmed.to_string()
        };

        let mut name = base.clone();
        let mut n = 1;
        while seen.contains(&name) {
            name = format!("{}.{}", base, n);
            n += 1;
        }
        seen.insert(name.clone());
        headers.push(name);
    }

    headers
}

// ==========================================
// ResolvedTable - 已定位表头的表格
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedTable {
    header_row: usize,     // 表头在 RawTable 中的行号
    headers: Vec<String>,  // 列号 → 列名（唯一、已 TRIM）
    rows: Vec<Vec<String>>, // 数据行（宽度 = headers.len()）
}

impl ResolvedTable {
    pub fn header_row(&self) -> usize {
        self.header_row
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// 读取单元格，越界返回空串
    pub fn cell(&self, row: usize, col: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .map(|s| s.as_str())
            .unwrap_or("")
    }

    /// 按列名查找列号（精确匹配）
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }
}

// ==========================================
// ColumnRoles - 列语义分配
// ==========================================
// description 必须存在；其余角色可缺失（读取为空串）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnRoles {
    pub description: usize,
    pub mac: Option<usize>,
    pub serial_number: Option<usize>,
    pub fsan: Option<usize>,
}

impl ColumnRoles {
    /// 读取可选列的值（TRIM），未分配时返回空串
    pub fn value_of(table: &ResolvedTable, row: usize, col: Option<usize>) -> String {
        col.map(|c| table.cell(row, c).trim().to_string())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_resolve_skips_banner_rows() {
        let raw = RawTable::new(vec![
            row(&["ACME Distribution Packing List"]),
            row(&[" Description ", "MAC", "Serial"]),
            row(&["GM1028H Router", "AA", "S1"]),
        ]);

        let table = raw.resolve(1);

        assert_eq!(table.headers(), &["Description", "MAC", "Serial"]);
        assert_eq!(table.row_count(), 1);
        assert_eq!(table.cell(0, 2), "S1");
    }

    #[test]
    fn test_resolve_duplicate_and_blank_headers() {
        let raw = RawTable::new(vec![
            row(&["Serial", "", "Serial", "Serial"]),
            row(&["a", "b", "c", "d"]),
        ]);

        let table = raw.resolve(0);

        assert_eq!(
            table.headers(),
            &["Serial", "Unnamed: 1", "Serial.1", "Serial.2"]
        );
        assert_eq!(table.column_index("Serial"), Some(0));
    }

    #[test]
    fn test_resolve_pads_and_skips_blank_rows() {
        let raw = RawTable::new(vec![
            row(&["Description", "MAC"]),
            row(&["only description"]),
            row(&["", "  "]),
            row(&["x", "y", "overflow"]),
        ]);

        let table = raw.resolve(0);

        assert_eq!(table.row_count(), 2);
        assert_eq!(table.rows()[0], row(&["only description", ""]));
        assert_eq!(table.rows()[1], row(&["x", "y"]));
    }

    #[test]
    fn test_cell_out_of_range_is_empty() {
        let table = RawTable::new(vec![row(&["Description"])]).resolve(0);
        assert_eq!(table.cell(5, 5), "");
    }

    #[test]
    fn test_resolve_header_row_past_end() {
        let raw = RawTable::new(vec![row(&["Description"]), row(&["GS4220E"])]);

        let table = raw.resolve(usize::MAX);

        assert!(table.headers().is_empty());
        assert_eq!(table.row_count(), 0);
    }
}
