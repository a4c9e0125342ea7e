use std::io;

use anyhow::{anyhow, Context, Result};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub scoreboard: ScoreboardConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub worker_threads: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: default_host(), port: default_port(), worker_threads: Some(4) }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScoreboardConfig {
    /// Directory holding `rules.pdf` and `scoring.jpeg`.
    #[serde(default = "default_assets_dir")]
    pub assets_dir: String,
    /// Rounds at or above this index are rejected by `/add_score`.
    #[serde(default = "default_max_round_index")]
    pub max_round_index: usize,
}

impl Default for ScoreboardConfig {
    fn default() -> Self {
        Self { assets_dir: default_assets_dir(), max_round_index: default_max_round_index() }
    }
}

fn default_host() -> String { "127.0.0.1".into() }
fn default_port() -> u16 { 8080 }
fn default_assets_dir() -> String { "static".into() }
fn default_max_round_index() -> usize { 1000 }

/// Config file location: `CONFIG_PATH`, or `config.toml` in the working directory.
pub fn config_path() -> String {
    std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string())
}

pub fn from_toml_str(content: &str) -> Result<AppConfig> {
    let cfg: AppConfig = toml::from_str(content)?;
    Ok(cfg)
}

impl AppConfig {
    /// Load the config file if present, otherwise build from environment variables.
    pub fn load_or_env() -> Result<Self> {
        Self::load_or_env_from(&config_path(), |key| std::env::var(key).ok())
    }

    /// Read `path`, falling back to `lookup` only when the file does not exist.
    ///
    /// An unreadable or malformed file is an error, never a silent fallback.
    pub fn load_or_env_from<F>(path: &str, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = match std::fs::read_to_string(path) {
            Ok(content) => from_toml_str(&content)
                .with_context(|| format!("invalid config file {path}"))?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => Self::from_env_with(lookup),
            Err(e) => return Err(anyhow!("cannot read config file {path}: {e}")),
        };
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    /// Build a config from `SERVER_HOST`, `SERVER_PORT`, `TOKIO_WORKER_THREADS`,
    /// `ASSETS_DIR` and `MAX_ROUND_INDEX`, falling back to defaults.
    pub fn from_env_with<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = AppConfig::default();
        if let Some(host) = lookup("SERVER_HOST") {
            cfg.server.host = host;
        }
        if let Some(port) = lookup("SERVER_PORT").and_then(|p| p.parse::<u16>().ok()) {
            cfg.server.port = port;
        }
        if let Some(w) = lookup("TOKIO_WORKER_THREADS").and_then(|v| v.parse::<usize>().ok()) {
            cfg.server.worker_threads = Some(w);
        }
        if let Some(dir) = lookup("ASSETS_DIR") {
            cfg.scoreboard.assets_dir = dir;
        }
        if let Some(max) = lookup("MAX_ROUND_INDEX").and_then(|v| v.parse::<usize>().ok()) {
            cfg.scoreboard.max_round_index = max;
        }
        cfg
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.server.normalize()?;
        self.scoreboard.validate()?;
        Ok(())
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl ServerConfig {
    fn normalize(&mut self) -> Result<()> {
        if self.host.trim().is_empty() {
            self.host = default_host();
        }
        if self.port == 0 {
            return Err(anyhow!("server.port must be in 1..=65535"));
        }
        match self.worker_threads {
            Some(0) | None => self.worker_threads = Some(4),
            Some(_) => {}
        }
        Ok(())
    }
}

impl ScoreboardConfig {
    pub fn validate(&self) -> Result<()> {
        if self.assets_dir.trim().is_empty() {
            return Err(anyhow!("scoreboard.assets_dir is empty"));
        }
        if self.max_round_index == 0 {
            return Err(anyhow!("scoreboard.max_round_index must be >= 1"));
        }
        Ok(())
    }
}
