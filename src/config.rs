use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

pub const DEFAULT_CONCURRENCY: usize = 10;

#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub github_token: Option<String>,
    pub concurrency: Option<usize>,
    pub search_url: Option<String>,
    pub port: Option<u16>,
}

#[derive(Clone, Serialize, Deserialize)]
pub struct Config {
    pub github_token: Option<String>,
    pub concurrency: usize,
    pub search_url: String,
    pub github_api_url: Option<String>,
    pub port: u16,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("github_token", &self.github_token.as_ref().map(|_| "[REDACTED]"))
            .field("concurrency", &self.concurrency)
            .field("search_url", &self.search_url)
            .field("github_api_url", &self.github_api_url)
            .field("port", &self.port)
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            github_token: None,
            concurrency: DEFAULT_CONCURRENCY,
            search_url: "https://api.godoc.org".to_string(),
            github_api_url: None,
            port: 9090,
        }
    }
}

impl Config {
    pub fn load(overrides: Overrides) -> Self {
        let config_file = config_dir().join("starfork").join("config.toml");

        let mut figment = Figment::from(Serialized::defaults(Config::default()));

        if config_file.exists() {
            figment = figment.merge(Toml::file(&config_file));
        }

        figment = figment.merge(Env::prefixed("STARFORK_")).merge(
            Env::raw()
                .only(&["GITHUB_TOKEN"])
                .map(|_| "github_token".into()),
        );

        match apply_overrides(figment, &overrides).extract() {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("config parse error, using defaults: {e}");
                let fallback = Figment::from(Serialized::defaults(Config::default()));
                apply_overrides(fallback, &overrides)
                    .extract()
                    .unwrap_or_default()
            }
        }
    }

    pub fn token(&self) -> Option<&str> {
        self.github_token.as_deref().filter(|t| !t.is_empty())
    }
}

fn apply_overrides(mut figment: Figment, overrides: &Overrides) -> Figment {
    if let Some(token) = &overrides.github_token {
        figment = figment.merge(Serialized::default("github_token", token));
    }
    if let Some(concurrency) = overrides.concurrency {
        figment = figment.merge(Serialized::default("concurrency", concurrency));
    }
    if let Some(url) = &overrides.search_url {
        figment = figment.merge(Serialized::default("search_url", url));
    }
    if let Some(port) = overrides.port {
        figment = figment.merge(Serialized::default("port", port));
    }
    figment
}

pub fn config_dir() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .ok()
        .map(PathBuf::from)
        .or_else(|| {
            std::env::var("HOME")
                .ok()
                .map(|h| PathBuf::from(h).join(".config"))
        })
        .unwrap_or_else(|| PathBuf::from("."))
}
