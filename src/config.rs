use gestor_core::SessionContext;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Source of a configuration value
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfigSource {
    Default,
    File,
    Environment,
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigSource::Default => write!(f, "default"),
            ConfigSource::File => write!(f, "file"),
            ConfigSource::Environment => write!(f, "environment"),
        }
    }
}

/// A configuration value with its source
#[derive(Debug, Clone, Serialize)]
pub struct ConfigValue<T> {
    pub value: T,
    pub source: ConfigSource,
}

impl<T> ConfigValue<T> {
    pub fn new(value: T, source: ConfigSource) -> Self {
        Self { value, source }
    }
}

/// Which storage backend the CLI talks to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    #[default]
    Sqlite,
    Http,
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Backend::Sqlite => write!(f, "sqlite"),
            Backend::Http => write!(f, "http"),
        }
    }
}

impl FromStr for Backend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sqlite" => Ok(Backend::Sqlite),
            "http" => Ok(Backend::Http),
            _ => Err(format!(
                "Invalid backend '{}'. Valid options: sqlite, http",
                s
            )),
        }
    }
}

/// Remote REST backend settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HttpConfig {
    /// Base URL, e.g. "https://api.example.ao/v1"
    pub base_url: Option<String>,
    /// Bearer token sent with every request
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
    /// Request timeout in seconds (default: 30)
    pub timeout_secs: Option<u64>,
}

impl HttpConfig {
    pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

    pub fn timeout_secs(&self) -> u64 {
        self.timeout_secs.unwrap_or(Self::DEFAULT_TIMEOUT_SECS)
    }
}

/// Application configuration with source tracking
#[derive(Debug, Clone, Serialize)]
pub struct Config {
    /// Path to the SQLite database
    pub database_path: ConfigValue<PathBuf>,
    /// Company the session acts for
    pub company_id: ConfigValue<Option<String>>,
    /// Operator recorded on documents
    pub operator_id: ConfigValue<Option<String>>,
    pub work_location_id: ConfigValue<Option<String>>,
    pub cash_register_id: ConfigValue<Option<String>>,
    /// Storage backend
    pub backend: ConfigValue<Backend>,
    /// Append-only audit log (JSON lines); audit goes to the log output when unset
    pub audit_log: ConfigValue<Option<PathBuf>>,
    /// Config file path used (if any)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_file: Option<PathBuf>,
    /// HTTP backend configuration
    pub http: HttpConfig,
}

/// Internal struct for deserializing config file
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct ConfigFile {
    database_path: Option<PathBuf>,
    company_id: Option<String>,
    operator_id: Option<String>,
    work_location_id: Option<String>,
    cash_register_id: Option<String>,
    backend: Option<Backend>,
    audit_log: Option<PathBuf>,
    http: Option<HttpConfig>,
}

impl Config {
    /// Load configuration with priority: env vars > config file > defaults
    pub fn load(config_path: Option<PathBuf>) -> Result<Self, ConfigError> {
        let mut config = Self {
            database_path: ConfigValue::new(
                Self::default_data_dir().join("gestor.db"),
                ConfigSource::Default,
            ),
            company_id: ConfigValue::new(None, ConfigSource::Default),
            operator_id: ConfigValue::new(None, ConfigSource::Default),
            work_location_id: ConfigValue::new(None, ConfigSource::Default),
            cash_register_id: ConfigValue::new(None, ConfigSource::Default),
            backend: ConfigValue::new(Backend::default(), ConfigSource::Default),
            audit_log: ConfigValue::new(None, ConfigSource::Default),
            config_file: None,
            http: HttpConfig::default(),
        };

        let path = config_path.unwrap_or_else(Self::default_config_path);
        if path.exists() {
            let contents = std::fs::read_to_string(&path)
                .map_err(|e| ConfigError::ReadError(path.clone(), e))?;
            let file_config: ConfigFile = serde_yaml::from_str(&contents)
                .map_err(|e| ConfigError::ParseError(path.clone(), e))?;
            config.apply_file(&path, file_config);
            config.config_file = Some(path);
        }

        config.apply_env()?;
        Ok(config)
    }

    fn apply_file(&mut self, path: &std::path::Path, file: ConfigFile) {
        // Relative paths are resolved against the config file's directory
        let resolve = |p: PathBuf| {
            if p.is_relative() {
                path.parent().map(|dir| dir.join(&p)).unwrap_or(p)
            } else {
                p
            }
        };

        if let Some(db_path) = file.database_path {
            self.database_path = ConfigValue::new(resolve(db_path), ConfigSource::File);
        }
        if let Some(log) = file.audit_log {
            self.audit_log = ConfigValue::new(Some(resolve(log)), ConfigSource::File);
        }
        if let Some(backend) = file.backend {
            self.backend = ConfigValue::new(backend, ConfigSource::File);
        }
        for (slot, value) in [
            (&mut self.company_id, file.company_id),
            (&mut self.operator_id, file.operator_id),
            (&mut self.work_location_id, file.work_location_id),
            (&mut self.cash_register_id, file.cash_register_id),
        ] {
            if value.is_some() {
                *slot = ConfigValue::new(value, ConfigSource::File);
            }
        }
        if let Some(http) = file.http {
            self.http = http;
        }
    }

    fn apply_env(&mut self) -> Result<(), ConfigError> {
        if let Ok(db_path) = std::env::var("GESTOR_DATABASE_PATH") {
            self.database_path = ConfigValue::new(PathBuf::from(db_path), ConfigSource::Environment);
        }
        if let Ok(company) = std::env::var("GESTOR_COMPANY") {
            self.company_id = ConfigValue::new(Some(company), ConfigSource::Environment);
        }
        if let Ok(operator) = std::env::var("GESTOR_OPERATOR") {
            self.operator_id = ConfigValue::new(Some(operator), ConfigSource::Environment);
        }
        if let Ok(backend) = std::env::var("GESTOR_BACKEND") {
            let backend = backend
                .parse()
                .map_err(|e| ConfigError::InvalidValue("GESTOR_BACKEND", e))?;
            self.backend = ConfigValue::new(backend, ConfigSource::Environment);
        }
        if let Ok(log) = std::env::var("GESTOR_AUDIT_LOG") {
            self.audit_log = ConfigValue::new(Some(PathBuf::from(log)), ConfigSource::Environment);
        }
        if let Ok(url) = std::env::var("GESTOR_BACKEND_URL") {
            self.http.base_url = Some(url);
        }
        if let Ok(key) = std::env::var("GESTOR_API_KEY") {
            self.http.api_key = Some(key);
        }
        Ok(())
    }

    /// Session scope derived from the configured references.
    pub fn session(&self) -> SessionContext {
        SessionContext {
            company_id: self.company_id.value.clone(),
            work_location_id: self.work_location_id.value.clone(),
            cash_register_id: self.cash_register_id.value.clone(),
            operator_id: self.operator_id.value.clone(),
        }
    }

    /// Default config directory (platform-specific):
    /// - Linux: ~/.config/gestor/
    /// - macOS: ~/Library/Application Support/gestor/
    /// - Windows: %APPDATA%/gestor/
    pub fn default_config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("gestor")
    }

    /// Default data directory (platform-specific):
    /// - Linux: ~/.local/share/gestor/
    /// - macOS: ~/Library/Application Support/gestor/
    /// - Windows: %APPDATA%/gestor/
    pub fn default_data_dir() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("gestor")
    }

    /// Default config file path (platform-specific config dir + config.yaml)
    pub fn default_config_path() -> PathBuf {
        Self::default_config_dir().join("config.yaml")
    }
}

#[derive(Debug)]
pub enum ConfigError {
    ReadError(PathBuf, std::io::Error),
    ParseError(PathBuf, serde_yaml::Error),
    InvalidValue(&'static str, String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ReadError(path, e) => {
                write!(f, "Failed to read config file '{}': {}", path.display(), e)
            }
            ConfigError::ParseError(path, e) => {
                write!(f, "Failed to parse config file '{}': {}", path.display(), e)
            }
            ConfigError::InvalidValue(var, e) => write!(f, "Invalid {}: {}", var, e),
        }
    }
}

impl std::error::Error for ConfigError {}
