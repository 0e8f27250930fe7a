//! API endpoint configuration.

/// Base URL used when nothing else is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Environment variable overriding the base URL.
pub const API_URL_ENV: &str = "SCHEDULER_API_URL";

/// Where the scheduling API lives and how to identify ourselves to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Scheme, host and port, without a trailing slash.
    pub base_url: String,
    /// Sent as `User-Agent` on native targets. Browsers set their own.
    pub user_agent: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            user_agent: None,
        }
    }
}

impl ApiConfig {
    /// Create a config pointing at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            ..Default::default()
        }
    }

    /// Resolve the base URL from the environment.
    ///
    /// On native targets the runtime variable wins. Otherwise the value
    /// baked in at build time is used, then the default.
    pub fn from_env() -> Self {
        #[cfg(not(target_arch = "wasm32"))]
        if let Some(url) = std::env::var(API_URL_ENV).ok().filter(|url| !url.trim().is_empty()) {
            return Self::new(url);
        }

        match option_env!("SCHEDULER_API_URL") {
            Some(url) if !url.trim().is_empty() => Self::new(url),
            _ => Self::default(),
        }
    }

    /// Set the user agent.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Absolute URL for an API path such as `/api/jobs/`.
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}
