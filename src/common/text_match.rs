// ==========================================
// Camvio 库存导入 - 文本匹配工具
// ==========================================
// 职责: 词边界安全的子串匹配
// 规则: 字面量前后紧邻的字符不能是 ASCII 字母/数字
//       （GM1028 不能命中 "GM1028H Router"；SN 不能命中 "SNMP"）
// ==========================================

use regex::{Regex, RegexBuilder};

/// 词边界匹配器
///
/// 空字面量不匹配任何文本。
#[derive(Debug, Clone)]
pub struct BoundaryMatcher {
    regex: Option<Regex>,
}

impl BoundaryMatcher {
    /// 构建匹配器（字面量会被转义，大小写无关）
    ///
    /// # 返回
    /// - Err: 仅在正则体积超限时出现
    pub fn new(literal: &str) -> Result<Self, regex::Error> {
        let literal = literal.trim().to_string();
        if literal.is_empty() {
            return Ok(Self { regex: None });
        }

        let pattern = format!(
            r"(?:^|[^[:alnum:]]){}(?:[^[:alnum:]]|$)",
            regex::escape(&literal)
        );
        let regex = RegexBuilder::new(&pattern).case_insensitive(true).build()?;

        Ok(Self { regex: Some(regex) })
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.regex.as_ref().is_some_and(|re| re.is_match(text))
    }
}

/// 大小写无关的普通子串匹配
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
