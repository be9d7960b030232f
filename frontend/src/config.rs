//! Application configuration
//!
//! Deployments can point the dashboard at another API without rebuilding by
//! injecting `<meta>` tags or a `window.__ADMINDASH_CONFIG__` object.

use admindash_shared::DEFAULT_API_URL;
use wasm_bindgen::JsCast;

const META_PREFIX: &str = "admindash:";
const JS_CONFIG_KEY: &str = "__ADMINDASH_CONFIG__";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// API root without a trailing slash.
    pub api_url: String,
    pub timeout_ms: u32,
    /// Extra attempts for failed GET requests.
    pub query_retries: u32,
    pub app_name: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            timeout_ms: 15_000,
            query_retries: 1,
            app_name: "AdminDash".to_string(),
        }
    }
}

/// Override keys, as written in `window.__ADMINDASH_CONFIG__`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    ApiUrl,
    TimeoutMs,
    QueryRetries,
}

impl ConfigKey {
    pub const ALL: [ConfigKey; 3] = [
        ConfigKey::ApiUrl,
        ConfigKey::TimeoutMs,
        ConfigKey::QueryRetries,
    ];

    pub fn js_name(&self) -> &'static str {
        match self {
            ConfigKey::ApiUrl => "api_url",
            ConfigKey::TimeoutMs => "timeout_ms",
            ConfigKey::QueryRetries => "query_retries",
        }
    }

    pub fn meta_name(&self) -> String {
        let suffix = match self {
            ConfigKey::ApiUrl => "api-url",
            ConfigKey::TimeoutMs => "timeout-ms",
            ConfigKey::QueryRetries => "query-retries",
        };
        format!("{}{}", META_PREFIX, suffix)
    }
}

impl AppConfig {
    /// Resolves the configuration, highest priority first:
    /// 1. `<meta name="admindash:*">` tags
    /// 2. `window.__ADMINDASH_CONFIG__`
    /// 3. `ADMINDASH_API_URL` at build time
    /// 4. Defaults
    pub fn load() -> Self {
        let document = web_sys::window().and_then(|w| w.document());
        Self::resolve(|key| {
            document
                .as_ref()
                .and_then(|doc| get_meta_content(doc, &key.meta_name()))
                .filter(|v| !v.trim().is_empty())
                .or_else(|| get_js_config(key.js_name()))
                .or_else(|| match key {
                    ConfigKey::ApiUrl => option_env!("ADMINDASH_API_URL").map(str::to_string),
                    _ => None,
                })
        })
    }

    /// Builds a config from the defaults plus whatever `lookup` returns per key.
    pub fn resolve<F>(lookup: F) -> Self
    where
        F: Fn(ConfigKey) -> Option<String>,
    {
        let mut config = Self::default();
        for key in ConfigKey::ALL {
            if let Some(value) = lookup(key) {
                config.apply(key, &value);
            }
        }
        config
    }

    /// Applies one override. Values that do not parse are logged and ignored.
    pub fn apply(&mut self, key: ConfigKey, value: &str) {
        let value = value.trim();
        match key {
            ConfigKey::ApiUrl => {
                if !value.is_empty() {
                    self.api_url = value.trim_end_matches('/').to_string();
                }
            }
            ConfigKey::TimeoutMs => match value.parse() {
                Ok(ms) => self.timeout_ms = ms,
                Err(_) => log::warn!("Ignoring invalid {}: {:?}", key.js_name(), value),
            },
            ConfigKey::QueryRetries => match value.parse() {
                Ok(n) => self.query_retries = n,
                Err(_) => log::warn!("Ignoring invalid {}: {:?}", key.js_name(), value),
            },
        }
    }
}

fn get_meta_content(document: &web_sys::Document, name: &str) -> Option<String> {
    let selector = format!("meta[name=\"{}\"]", name);
    document
        .query_selector(&selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web_sys::HtmlMetaElement>().ok())
        .map(|meta| meta.content())
}

/// Reads `window.__ADMINDASH_CONFIG__[key]`. Numbers are accepted too.
fn get_js_config(key: &str) -> Option<String> {
    let window = web_sys::window()?;
    let config = js_sys::Reflect::get(&window, &JS_CONFIG_KEY.into()).ok()?;
    if config.is_undefined() || config.is_null() {
        return None;
    }

    let value = js_sys::Reflect::get(&config, &key.into()).ok()?;
    value
        .as_string()
        .or_else(|| value.as_f64().map(|n| (n as u64).to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults() {
        let config = AppConfig::resolve(|_| None);
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.api_url, "https://dummyjson.com");
        assert_eq!(config.timeout_ms, 15_000);
        assert_eq!(config.query_retries, 1);
    }

    #[test]
    fn overrides_are_applied_and_trimmed() {
        let config = AppConfig::resolve(|key| match key {
            ConfigKey::ApiUrl => Some("http://localhost:3000/".to_string()),
            ConfigKey::TimeoutMs => Some(" 5000 ".to_string()),
            ConfigKey::QueryRetries => Some("3".to_string()),
        });
        assert_eq!(config.api_url, "http://localhost:3000");
        assert_eq!(config.timeout_ms, 5000);
        assert_eq!(config.query_retries, 3);
    }

    #[test]
    fn invalid_numbers_keep_defaults() {
        let config = AppConfig::resolve(|key| match key {
            ConfigKey::TimeoutMs => Some("soon".to_string()),
            ConfigKey::QueryRetries => Some("-1".to_string()),
            ConfigKey::ApiUrl => Some("   ".to_string()),
        });
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn meta_names() {
        assert_eq!(ConfigKey::ApiUrl.meta_name(), "admindash:api-url");
        assert_eq!(ConfigKey::QueryRetries.meta_name(), "admindash:query-retries");
    }
}
