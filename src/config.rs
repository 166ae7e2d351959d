use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::catalog::DEFAULT_DATA_FILE;

pub const DEFAULT_CONFIG_PATH: &str = "config/server.toml";
pub const CONFIG_PATH_ENV: &str = "SERVICE_CATALOG_CONFIG";
pub const BIND_ADDR_ENV: &str = "SERVICE_CATALOG_BIND_ADDR";
pub const DATA_FILE_ENV: &str = "SERVICE_CATALOG_DATA";
pub const TRANSPORT_ENV: &str = "SERVICE_CATALOG_TRANSPORT";
pub const HTTP_PATH_ENV: &str = "SERVICE_CATALOG_HTTP_PATH";
pub const LOG_LEVEL_ENV: &str = "SERVICE_CATALOG_LOG";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Transport {
    /// Streamable HTTP at `http_path`.
    #[default]
    Http,
    Stdio,
    /// Raw MCP framing over TCP, one session per connection.
    Tcp,
}

impl FromStr for Transport {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "http" => Ok(Transport::Http),
            "stdio" => Ok(Transport::Stdio),
            "tcp" => Ok(Transport::Tcp),
            other => anyhow::bail!("unknown transport: {other} (expected http, stdio or tcp)"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub bind_addr: String,
    pub http_path: String,
    pub data_file: PathBuf,
    pub transport: Transport,
    /// Default filter directive when `RUST_LOG` is unset.
    pub log_level: String,
    #[serde(skip)]
    pub loaded_from: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:8080".to_string(),
            http_path: "/mcp".to_string(),
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            transport: Transport::default(),
            log_level: "info".to_string(),
            loaded_from: None,
        }
    }
}

impl AppConfig {
    /// Config file (if any) with environment overrides applied on top.
    /// Runs before logging is up, so nothing is logged here.
    pub fn load() -> Result<Self> {
        let path = std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        let mut cfg = Self::from_file(Path::new(&path))?;
        cfg.apply_overrides(|key| std::env::var(key).ok())?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Missing file → defaults with `loaded_from == None`.
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        let mut cfg: Self = toml::from_str(&content).with_context(|| format!("parsing {}", path.display()))?;
        cfg.loaded_from = Some(path.to_path_buf());
        Ok(cfg)
    }

    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<()> {
        let non_empty = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        if let Some(addr) = non_empty(BIND_ADDR_ENV) {
            self.bind_addr = addr;
        }
        if let Some(path) = non_empty(DATA_FILE_ENV) {
            self.data_file = PathBuf::from(path);
        }
        if let Some(path) = non_empty(HTTP_PATH_ENV) {
            self.http_path = path;
        }
        if let Some(level) = non_empty(LOG_LEVEL_ENV) {
            self.log_level = level;
        }
        if let Some(t) = lookup(TRANSPORT_ENV) {
            self.transport = t.parse()?;
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.transport == Transport::Http && (!self.http_path.starts_with('/') || self.http_path.len() < 2) {
            anyhow::bail!("http_path must start with '/' and not be the root: {:?}", self.http_path);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = AppConfig::from_file(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(cfg, AppConfig::default());
        assert_eq!(cfg.transport, Transport::Http);
        assert_eq!(cfg.http_path, "/mcp");
        assert_eq!(cfg.data_file, PathBuf::from("data/services.json"));
        assert!(cfg.loaded_from.is_none());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("server.toml");
        fs::write(&path, "transport = \"stdio\"\ndata_file = \"/srv/catalog.json\"\n").unwrap();
        let cfg = AppConfig::from_file(&path).unwrap();
        assert_eq!(cfg.transport, Transport::Stdio);
        assert_eq!(cfg.data_file, PathBuf::from("/srv/catalog.json"));
        assert_eq!(cfg.bind_addr, "127.0.0.1:8080");
        assert_eq!(cfg.log_level, "info");
        assert_eq!(cfg.loaded_from.as_deref(), Some(path.as_path()));
    }

    #[test]
    fn http_transport_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("server.toml");
        fs::write(
            &path,
            "transport = \"http\"\nbind_addr = \"0.0.0.0:8080\"\nhttp_path = \"/catalog\"\nlog_level = \"debug\"\n",
        )
        .unwrap();
        let cfg = AppConfig::from_file(&path).unwrap();
        assert_eq!(cfg.transport, Transport::Http);
        assert_eq!(cfg.http_path, "/catalog");
        assert_eq!(cfg.log_level, "debug");
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn bundled_config_parses() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join(DEFAULT_CONFIG_PATH);
        let cfg = AppConfig::from_file(&path).unwrap();
        assert_eq!(cfg.transport, Transport::Http);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("server.toml");
        fs::write(&path, "transport = [").unwrap();
        assert!(AppConfig::from_file(&path).is_err());
    }

    #[test]
    fn env_overrides_win() {
        let env: HashMap<&str, &str> = HashMap::from([
            (BIND_ADDR_ENV, "0.0.0.0:9100"),
            (DATA_FILE_ENV, "fixtures/services.json"),
            (TRANSPORT_ENV, "STDIO"),
            (LOG_LEVEL_ENV, "service_catalog_mcp=debug"),
        ]);
        let mut cfg = AppConfig::default();
        cfg.apply_overrides(|k| env.get(k).map(|v| v.to_string())).unwrap();
        assert_eq!(cfg.bind_addr, "0.0.0.0:9100");
        assert_eq!(cfg.data_file, PathBuf::from("fixtures/services.json"));
        assert_eq!(cfg.transport, Transport::Stdio);
        assert_eq!(cfg.log_level, "service_catalog_mcp=debug");
    }

    #[test]
    fn http_path_override_and_validation() {
        let mut cfg = AppConfig::default();
        cfg.apply_overrides(|k| (k == HTTP_PATH_ENV).then(|| "/api/mcp".to_string())).unwrap();
        assert_eq!(cfg.http_path, "/api/mcp");
        assert!(cfg.validate().is_ok());

        for bad in ["mcp", "/"] {
            let cfg = AppConfig {
                http_path: bad.to_string(),
                ..AppConfig::default()
            };
            assert!(cfg.validate().is_err(), "{bad}");
        }
        let stdio = AppConfig {
            http_path: "/".to_string(),
            transport: Transport::Stdio,
            ..AppConfig::default()
        };
        assert!(stdio.validate().is_ok());
    }

    #[test]
    fn bad_transport_override_is_rejected() {
        let mut cfg = AppConfig::default();
        assert!(cfg.apply_overrides(|k| (k == TRANSPORT_ENV).then(|| "sse".to_string())).is_err());
        assert_eq!("http".parse::<Transport>().unwrap(), Transport::Http);
    }
}
