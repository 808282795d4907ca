use std::time::Duration;

/// Environment variable that overrides [`GatewayConfig::base_url`].
pub const GATEWAY_URL_ENV: &str = "BLACKROAD_GATEWAY_URL";

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8787";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);

const AGENT_PATH: &str = "/v1/agent";

/// Where the agent gateway lives and how long one call may take.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl GatewayConfig {
    /// Defaults, with the base address taken from `BLACKROAD_GATEWAY_URL` when
    /// it is set and not blank.
    pub fn from_env() -> Self {
        Self::default().with_env_override(std::env::var(GATEWAY_URL_ENV).ok())
    }

    fn with_env_override(self, value: Option<String>) -> Self {
        match value {
            Some(url) if !url.trim().is_empty() => self.with_base_url(url.trim()),
            _ => self,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Full URL of the agent endpoint.
    pub fn endpoint(&self) -> String {
        format!("{}{AGENT_PATH}", self.base_url.trim_end_matches('/'))
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}
