use serde::Deserialize;
use std::path::Path;

use crate::error::ConfigError;

const DEFAULT_CONFIG_PATH: &str = "config/server.yaml";

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            workers: None,
        }
    }
}

/// On-disk shape of `server.yaml`; every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    host: Option<String>,
    port: Option<u16>,
    workers: Option<usize>,
}

impl ServerConfig {
    /// Defaults, then the YAML file, then `HOST` / `PORT` / `WORKERS` from the
    /// environment (after loading `.env`).
    pub fn load() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::load_with(Path::new(DEFAULT_CONFIG_PATH), |key| std::env::var(key).ok())
    }

    /// An explicit `CONFIG_PATH` must exist; the default file is optional.
    pub fn load_with<F>(default_path: &Path, env: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let yaml = match env("CONFIG_PATH") {
            Some(path) => Some(read_file(Path::new(&path))?),
            None if default_path.exists() => Some(read_file(default_path)?),
            None => None,
        };

        Self::resolve(yaml.as_deref(), env)
    }

    pub fn resolve<F>(yaml: Option<&str>, env: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(yaml) = yaml {
            let file: FileConfig = serde_yaml::from_str(yaml)?;
            if let Some(host) = file.host {
                config.host = host;
            }
            if let Some(port) = file.port {
                config.port = port;
            }
            if file.workers.is_some() {
                config.workers = file.workers;
            }
        }

        if let Some(host) = env("HOST") {
            config.host = host;
        }
        if let Some(port) = env("PORT") {
            config.port = parse_env("PORT", port)?;
        }
        if let Some(workers) = env("WORKERS") {
            config.workers = Some(parse_env("WORKERS", workers)?);
        }

        Ok(config)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn read_file(path: &Path) -> Result<String, ConfigError> {
    std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    })
}

fn parse_env<T: std::str::FromStr>(key: &'static str, value: String) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidValue { key, value })
}
