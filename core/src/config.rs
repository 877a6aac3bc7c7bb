//! Client configuration.

use serde::Deserialize;

pub const DEFAULT_BASE_URL: &str = "https://api.vk.com";
pub const DEFAULT_API_VERSION: &str = "5.131";

/// Settings shared by every call an [`ApiClient`](crate::ApiClient) makes.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Scheme and host of the API. Method URLs are `{base_url}/method/{name}`.
    pub base_url: String,
    /// Sent as the `v` parameter.
    pub api_version: String,
    /// Sent as the `lang` parameter when set.
    pub lang: Option<String>,
    /// Appended to every request after the content type.
    pub default_headers: Vec<(String, String)>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            lang: None,
            default_headers: Vec::new(),
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: &str) -> Self {
        Self::default().with_base_url(base_url)
    }

    /// Defaults overlaid with `LIKES_API_URL`, `LIKES_API_VERSION` and
    /// `LIKES_API_LANG` when those are set.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Defaults overlaid with whatever `lookup` returns for the
    /// `LIKES_API_*` variables.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(url) = lookup("LIKES_API_URL") {
            config = config.with_base_url(&url);
        }
        if let Some(version) = lookup("LIKES_API_VERSION") {
            config.api_version = version;
        }
        if let Some(lang) = lookup("LIKES_API_LANG") {
            config.lang = Some(lang);
        }
        config
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    pub fn with_api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = version.into();
        self
    }

    pub fn with_lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = Some(lang.into());
        self
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.push((name.into(), value.into()));
        self
    }

    pub fn method_url(&self, method: &str) -> String {
        format!("{}/method/{method}", self.base_url)
    }
}
