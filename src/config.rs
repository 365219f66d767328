use figment::{
    providers::{Env, Serialized},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Listen address (e.g. "127.0.0.1:3000"); overrides the Leptos
    /// `site-addr` when set
    pub listen: Option<String>,

    /// Unix socket path; takes precedence over `listen` when set
    pub socket: Option<String>,

    /// Contributors backend
    #[serde(default)]
    pub backend: BackendConfig,

    /// GitHub API access for the repository previews
    #[serde(default)]
    pub github: GitHubConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BackendConfig {
    /// Origin of the REST backend serving `/api/contributors/`
    #[serde(default = "default_backend_url")]
    pub url: String,
}

fn default_backend_url() -> String {
    "http://127.0.0.1:8000/".to_string()
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            url: default_backend_url(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GitHubConfig {
    /// GitHub REST API base
    #[serde(default = "default_github_api")]
    pub api: String,

    /// Personal access token (optional, raises the rate limit)
    pub token: Option<String>,
}

fn default_github_api() -> String {
    "https://api.github.com".to_string()
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            api: default_github_api(),
            token: None,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Supports the following env vars:
    /// - SHOWCASE_LISTEN
    /// - SHOWCASE_SOCKET
    /// - SHOWCASE_BACKEND_URL
    /// - SHOWCASE_GITHUB_API
    /// - SHOWCASE_GITHUB_TOKEN or GITHUB_TOKEN
    pub fn load() -> Result<Self, figment::Error> {
        Self::from_figment(Figment::new().merge(Env::prefixed("SHOWCASE_").split("_")))
    }

    fn from_figment(overrides: Figment) -> Result<Self, figment::Error> {
        let mut config: Config = Figment::new()
            .merge(Serialized::defaults(ConfigDefaults::default()))
            .merge(overrides)
            .extract()?;

        if config.github.token.is_none() {
            config.github.token = std::env::var("GITHUB_TOKEN").ok();
        }

        Ok(config)
    }

    /// TCP address to bind, falling back to the Leptos `site-addr`
    #[must_use]
    pub fn listen_addr(&self, site_addr: SocketAddr) -> String {
        self.listen.clone().unwrap_or_else(|| site_addr.to_string())
    }
}

/// Helper struct for default values in figment
#[derive(Debug, Serialize)]
struct ConfigDefaults {
    backend: BackendConfig,
    github: GitHubConfig,
}

impl Default for ConfigDefaults {
    fn default() -> Self {
        Self {
            backend: BackendConfig::default(),
            github: GitHubConfig::default(),
        }
    }
}
