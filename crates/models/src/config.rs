use crate::SignError;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Prefix for environment overrides, e.g. `SIGNBRIDGE_SERVER__PORT=8080`.
pub const ENV_PREFIX: &str = "SIGNBRIDGE_";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub server: ServerConfig,
    pub storage: StorageConfig,
    pub cache: CacheConfig,
    pub translation: TranslationConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    pub bind: String,
    pub port: u16,
    pub workers: usize,
    pub max_content_length_mb: u64,
    pub environment: Environment,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct StorageConfig {
    pub static_dir: String,
    pub videos_dir: String,
    pub templates_dir: String,
    pub cache_dir: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct CacheConfig {
    pub enabled: bool,
    pub ttl_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct TranslationConfig {
    pub default_language: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Production,
    Development,
}

impl Environment {
    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                bind: "0.0.0.0".to_string(),
                port: 5000,
                workers: 4,
                max_content_length_mb: 16, // 16MB max request body
                environment: Environment::Production,
            },
            storage: StorageConfig {
                static_dir: "static".to_string(),
                videos_dir: "static/videos".to_string(),
                templates_dir: "templates".to_string(),
                cache_dir: "cache".to_string(),
            },
            cache: CacheConfig {
                enabled: true,
                ttl_secs: 86400, // 24 hours
            },
            translation: TranslationConfig {
                default_language: "isl".to_string(),
            },
        }
    }
}

impl Config {
    /// Layered configuration: defaults, then the TOML file (if present), then
    /// environment variables. `FLASK_ENV` is honoured for the environment
    /// but `SIGNBRIDGE_ENV` wins when both are set.
    pub fn figment(path: impl AsRef<Path>) -> Figment {
        Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::file(path.as_ref()))
            .merge(
                Env::raw()
                    .only(&["FLASK_ENV"])
                    .map(|_| "server.environment".into()),
            )
            .merge(
                Env::prefixed(ENV_PREFIX)
                    .ignore(&["CONFIG", "APP", "ENV"])
                    .split("__"),
            )
            .merge(
                Env::raw()
                    .only(&["SIGNBRIDGE_ENV"])
                    .map(|_| "server.environment".into()),
            )
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, SignError> {
        let config: Config = Self::figment(path)
            .extract()
            .map_err(|e| SignError::Config {
                reason: e.to_string(),
            })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), SignError> {
        if self.server.workers == 0 {
            return Err(SignError::Config {
                reason: "server.workers must be at least 1".to_string(),
            });
        }
        if self.server.max_content_length_mb == 0 {
            return Err(SignError::Config {
                reason: "server.max_content_length_mb must be at least 1".to_string(),
            });
        }
        if self.translation.default_language.parse::<crate::SignLanguage>().is_err() {
            return Err(SignError::Config {
                reason: format!(
                    "translation.default_language is not supported: {}",
                    self.translation.default_language
                ),
            });
        }
        Ok(())
    }

    pub fn max_content_length_bytes(&self) -> usize {
        (self.server.max_content_length_mb * 1024 * 1024) as usize
    }

    /// Directories that must exist before serving.
    pub fn required_dirs(&self) -> Vec<PathBuf> {
        let static_dir = PathBuf::from(&self.storage.static_dir);
        vec![
            PathBuf::from(&self.storage.videos_dir),
            static_dir.join("css"),
            static_dir.join("js"),
            PathBuf::from(&self.storage.templates_dir),
            PathBuf::from(&self.storage.cache_dir),
        ]
    }

    /// Point every storage directory below `root`.
    pub fn rooted_at(mut self, root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        let join = |dir: &str| root.join(dir).to_string_lossy().into_owned();
        self.storage = StorageConfig {
            static_dir: join(&self.storage.static_dir),
            videos_dir: join(&self.storage.videos_dir),
            templates_dir: join(&self.storage.templates_dir),
            cache_dir: join(&self.storage.cache_dir),
        };
        self
    }
}
