//! i18n - Internationalization Module
//!
//! Provides simple translation functions using HashMap-based lookups.

use std::collections::HashMap;
use std::sync::OnceLock;

use gpui::SharedString;
use serde::{Deserialize, Serialize};

/// Supported locales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Locale {
    /// English (US)
    #[default]
    #[serde(rename = "en")]
    EnUS,
    /// Chinese (Simplified)
    #[serde(rename = "zh")]
    ZhCN,
}

impl Locale {
    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Locale::EnUS => "English",
            Locale::ZhCN => "中文",
        }
    }

    /// Pick a locale from a language tag such as "zh-CN" or "en_US.UTF-8"
    pub fn from_tag(tag: &str) -> Self {
        if tag.trim().to_ascii_lowercase().starts_with("zh") {
            Locale::ZhCN
        } else {
            Locale::EnUS
        }
    }

    /// Detect the locale from the operating system
    pub fn from_system() -> Self {
        let user = locale_config::Locale::user_default();
        user.tags()
            .next()
            .map(|(_, tag)| Self::from_tag(&tag.to_string()))
            .unwrap_or_default()
    }

    /// The other supported locale
    pub fn toggled(self) -> Self {
        match self {
            Locale::ZhCN => Locale::EnUS,
            Locale::EnUS => Locale::ZhCN,
        }
    }
}

/// Translation resources
static TRANSLATIONS: OnceLock<HashMap<&'static str, (&'static str, &'static str)>> = OnceLock::new();

/// Initialize translations (key -> (en, zh))
fn init_translations() -> HashMap<&'static str, (&'static str, &'static str)> {
    let mut map = HashMap::new();

    // App
    map.insert("app-title", ("API Keys", "API 密钥"));

    // Page
    map.insert("page-title", ("API keys", "API 密钥"));
    map.insert(
        "page-description",
        (
            "Create API keys to use for your RPC and EthRPC API requests. For more information, see ",
            "创建用于 RPC 和 EthRPC API 请求的 API 密钥。更多信息请参阅",
        ),
    );
    map.insert("page-docs-link", ("“How to use an API key”", "《如何使用 API 密钥》"));
    map.insert(
        "limit-reached",
        (
            "You have added the maximum number of API keys ({limit}). Contact us to request additional keys.",
            "您已添加了最多数量的 API 密钥（{limit}）。如需更多密钥，请联系我们。",
        ),
    );
    map.insert("page-loading", ("Loading API keys...", "正在加载 API 密钥..."));
    map.insert("page-fetch-failed", ("Could not load API keys: {error}", "无法加载 API 密钥：{error}"));
    map.insert("page-last-updated", ("Last updated {time}", "更新于 {time}"));

    // Actions
    map.insert("action-add-key", ("Add API key", "添加 API 密钥"));
    map.insert("action-edit", ("Edit", "编辑"));
    map.insert("action-delete", ("Delete", "删除"));
    map.insert("action-cancel", ("Cancel", "取消"));
    map.insert("action-copy", ("Copy", "复制"));
    map.insert("action-retry", ("Retry", "重试"));
    map.insert("action-generate", ("Generate API key", "生成 API 密钥"));
    map.insert("action-save", ("Save", "保存"));

    // Table
    map.insert("table-token", ("API key token", "API 密钥令牌"));
    map.insert("table-name", ("Name", "名称"));

    // Modals
    map.insert("modal-new-title", ("New API key", "新建 API 密钥"));
    map.insert("modal-edit-title", ("Edit API key", "编辑 API 密钥"));
    map.insert("modal-token-label", ("Auto-generated API key token", "自动生成的 API 密钥令牌"));
    map.insert(
        "modal-name-label",
        ("Application name for API key (e.g. Web3 project)", "API 密钥的应用名称（例如 Web3 项目）"),
    );
    map.insert("modal-delete-title", ("Remove API key", "移除 API 密钥"));
    map.insert(
        "modal-delete-confirm",
        (
            "Do you really want to remove the API key \"{name}\"?",
            "确定要移除 API 密钥 \"{name}\" 吗？",
        ),
    );

    // Log panel
    map.insert("log-title", ("Logs", "日志"));
    map.insert("log-clear", ("Clear", "清除"));

    map
}

/// Get translations
fn translations() -> &'static HashMap<&'static str, (&'static str, &'static str)> {
    TRANSLATIONS.get_or_init(init_translations)
}

/// Translate a key
pub fn t(locale: Locale, key: &str) -> SharedString {
    if let Some(&(en, zh)) = translations().get(key) {
        match locale {
            Locale::EnUS => SharedString::from(en),
            Locale::ZhCN => SharedString::from(zh),
        }
    } else {
        // Fallback: return the key itself
        SharedString::from(key.to_string())
    }
}

/// Translate a key and substitute `{placeholder}` arguments
pub fn t_args(locale: Locale, key: &str, args: &[(&str, &str)]) -> SharedString {
    let mut text = t(locale, key).to_string();
    for (name, value) in args {
        text = text.replace(&format!("{{{name}}}"), value);
    }
    SharedString::from(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limit_message_exact_text() {
        let msg = t_args(Locale::EnUS, "limit-reached", &[("limit", "3")]);
        assert_eq!(
            msg.to_string(),
            "You have added the maximum number of API keys (3). Contact us to request additional keys."
        );
    }

    #[test]
    fn test_unknown_key_falls_back_to_key() {
        assert_eq!(t(Locale::ZhCN, "no-such-key").to_string(), "no-such-key");
    }

    #[test]
    fn test_every_key_has_both_languages() {
        for (key, (en, zh)) in translations() {
            assert!(!en.is_empty(), "missing en for {key}");
            assert!(!zh.is_empty(), "missing zh for {key}");
        }
    }

    #[test]
    fn test_from_tag() {
        assert_eq!(Locale::from_tag("zh-CN"), Locale::ZhCN);
        assert_eq!(Locale::from_tag("zh_TW.UTF-8"), Locale::ZhCN);
        assert_eq!(Locale::from_tag("en-US"), Locale::EnUS);
        assert_eq!(Locale::from_tag("de"), Locale::EnUS);
    }

    #[test]
    fn test_locale_serde_names() {
        #[derive(Deserialize)]
        struct Wrapper {
            locale: Locale,
        }
        let w: Wrapper = toml::from_str("locale = \"zh\"").expect("parse");
        assert_eq!(w.locale, Locale::ZhCN);
        assert_eq!(Locale::ZhCN.toggled(), Locale::EnUS);
    }
}
