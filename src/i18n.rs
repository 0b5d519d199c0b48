// ==========================================
// 国际化 (i18n) 模块
// ==========================================
// 使用 rust-i18n 库
// 支持英文（默认）和中文
// ==========================================
// 注意: rust_i18n::i18n! 宏已在 lib.rs 中初始化
// ==========================================

/// 支持的语言
pub const SUPPORTED_LOCALES: [&str; 2] = ["en", "zh-CN"];

/// 获取当前语言
pub fn current_locale() -> String {
    rust_i18n::locale().to_string()
}

/// 设置语言（不支持的语言退回 en）
///
/// # 返回
/// - 实际生效的语言代码
pub fn set_locale(locale: &str) -> &'static str {
    let effective = SUPPORTED_LOCALES
        .into_iter()
        .find(|l| l.eq_ignore_ascii_case(locale.trim()))
        .unwrap_or("en");
    rust_i18n::set_locale(effective);
    effective
}

/// 翻译消息（无参数）
///
/// # 示例
/// ```no_run
/// use camvio_inventory_import::i18n::t;
/// let msg = t("summary.no_selections");
/// ```
pub fn t(key: &str) -> String {
    rust_i18n::t!(key).to_string()
}

/// 翻译消息（带参数，占位符格式 `%{name}`）
///
/// # 示例
/// ```no_run
/// use camvio_inventory_import::i18n::t_with_args;
/// let msg = t_with_args("advisory.catalog_miss", &[("device", "GS4220E")]);
/// ```
pub fn t_with_args(key: &str, args: &[(&str, &str)]) -> String {
    let mut result = rust_i18n::t!(key).to_string();
    for (k, v) in args {
        let placeholder = format!("%{{{}}}", k);
        result = result.replace(&placeholder, v);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // locale 为进程级全局状态，相关测试串行执行
    static LOCALE_TEST_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_set_locale() {
        let _guard = LOCALE_TEST_LOCK.lock().unwrap();

        assert_eq!(set_locale("zh-cn"), "zh-CN");
        assert_eq!(current_locale(), "zh-CN");

        assert_eq!(set_locale("fr"), "en");
        assert_eq!(current_locale(), "en");
    }

    #[test]
    fn test_translate_simple() {
        let _guard = LOCALE_TEST_LOCK.lock().unwrap();

        set_locale("zh-CN");
        assert_eq!(t("summary.no_selections"), "会话中没有设备选择，建议选择如下:");

        set_locale("en");
        assert_eq!(
            t("summary.no_selections"),
            "No device selections in session; suggested selections:"
        );
    }

    #[test]
    fn test_translate_with_args() {
        let _guard = LOCALE_TEST_LOCK.lock().unwrap();

        set_locale("en");
        let msg = t_with_args(
            "advisory.type_mismatch",
            &[("device", "GM1028H"), ("expected", "CX_ROUTER"), ("chosen", "CX_MESH")],
        );
        assert_eq!(msg, "GM1028H is CX_ROUTER in the catalog but CX_MESH was chosen");

        set_locale("zh-CN");
        let msg = t_with_args("advisory.custom_location", &[("device", "X1"), ("location", "TRUCK")]);
        assert!(msg.contains("TRUCK"));
        assert!(msg.contains("自定义库位"));

        set_locale("en");
    }
}
