// ==========================================
// 国际化 (i18n) 模块
// ==========================================
// 使用 rust-i18n 库
// 支持英文（默认）、葡萄牙语（巴西）、中文
// ==========================================
// 注意: rust_i18n::i18n! 宏已在 lib.rs 中初始化
// ==========================================

use crate::domain::types::ActivityCategory;
use crate::vocabulary::CategoryLabels;

/// 获取当前语言
pub fn current_locale() -> String {
    rust_i18n::locale().to_string()
}

/// 设置语言
///
/// # 参数
/// - locale: 语言代码（"en" / "pt-BR" / "zh-CN"）
pub fn set_locale(locale: &str) {
    rust_i18n::set_locale(locale);
}

/// 翻译消息（无参数）
///
/// # 示例
/// ```no_run
/// use effort_estimator::i18n::t;
/// let msg = t("worksheet.line_not_found");
/// ```
pub fn t(key: &str) -> String {
    rust_i18n::t!(key).to_string()
}

/// 翻译消息（带参数）
///
/// # 示例
/// ```no_run
/// use effort_estimator::i18n::t_with_args;
/// let msg = t_with_args("worksheet.line_not_found", &[("id", "new-1")]);
/// ```
pub fn t_with_args(key: &str, args: &[(&str, &str)]) -> String {
    let mut result = rust_i18n::t!(key).to_string();
    for (k, v) in args {
        let placeholder = format!("%{{{}}}", k);
        result = result.replace(&placeholder, v);
    }
    result
}

/// 指定语言翻译（不改变全局语言）
pub fn t_in(locale: &str, key: &str) -> String {
    rust_i18n::t!(key, locale = locale).to_string()
}

/// 某语言下的三类标签
pub fn category_labels(locale: &str) -> CategoryLabels {
    CategoryLabels::new(
        t_in(locale, ActivityCategory::Development.i18n_key()),
        t_in(locale, ActivityCategory::Process.i18n_key()),
        t_in(locale, ActivityCategory::Support.i18n_key()),
    )
}
