// ==========================================
// Camvio 库存导入 - 导出文件名
// ==========================================
// 格式: {stem}_{YYYYMMDD}[_{HHMMSS}].csv
// stem: 公司名（删除 [A-Za-z0-9_-] 以外的字符，小写）；为空时使用默认 stem
// ==========================================

use chrono::NaiveDateTime;

/// 默认文件名前缀
pub const DEFAULT_EXPORT_STEM: &str = "inventory_export";

/// 失败日志文件名后缀
pub const FAILURES_SUFFIX: &str = "_failures";

/// 规范化公司名为文件名前缀
///
/// 只保留 ASCII 字母、数字、`_`、`-`（其余字符直接删除），转小写；结果为空返回 None
pub fn sanitize_stem(raw: &str) -> Option<String> {
    let sanitized: String = raw
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '-')
        .map(|c| c.to_ascii_lowercase())
        .collect();

    if sanitized.is_empty() {
        None
    } else {
        Some(sanitized)
    }
}

fn file_stem(
    company: Option<&str>,
    now: NaiveDateTime,
    include_time: bool,
    default_stem: &str,
) -> String {
    let stem = company
        .and_then(sanitize_stem)
        .or_else(|| sanitize_stem(default_stem))
        .unwrap_or_else(|| DEFAULT_EXPORT_STEM.to_string());

    let stamp = if include_time {
        now.format("%Y%m%d_%H%M%S").to_string()
    } else {
        now.format("%Y%m%d").to_string()
    };

    format!("{}_{}", stem, stamp)
}

/// 导出文件名
pub fn export_file_name(
    company: Option<&str>,
    now: NaiveDateTime,
    include_time: bool,
    default_stem: &str,
) -> String {
    format!("{}.csv", file_stem(company, now, include_time, default_stem))
}

/// 失败日志文件名（与导出文件同一前缀）
pub fn failures_file_name(
    company: Option<&str>,
    now: NaiveDateTime,
    include_time: bool,
    default_stem: &str,
) -> String {
    format!(
        "{}{}.csv",
        file_stem(company, now, include_time, default_stem),
        FAILURES_SUFFIX
    )
}
