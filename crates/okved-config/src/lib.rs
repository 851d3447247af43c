use std::env;
use std::fs::{self, File};
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use url::Url;

const APP_DIR: &str = "okved";
const CONFIG_FILENAME: &str = "config.toml";

pub const DEFAULT_REFERENCE_URL: &str =
    "https://raw.githubusercontent.com/bergstar/testcase/master/okved.json";
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;
pub const MAX_TIMEOUT_SECS: u64 = 300;
pub const DEFAULT_MAX_BYTES: u64 = 10 * 1024 * 1024;
pub const MAX_MAX_BYTES: u64 = 100 * 1024 * 1024;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub reference: ReferenceConfig,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceConfig {
    pub url: String,
    pub timeout_secs: u64,
    pub max_bytes: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            reference: ReferenceConfig {
                url: DEFAULT_REFERENCE_URL.to_string(),
                timeout_secs: DEFAULT_TIMEOUT_SECS,
                max_bytes: DEFAULT_MAX_BYTES,
            },
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing home directory")]
    MissingHomeDir,
    #[error("invalid config path: {0}")]
    InvalidConfigPath(PathBuf),
    #[error("config file not found: {0}")]
    MissingConfigFile(PathBuf),
    #[error("config file permissions too permissive: {0}")]
    InsecurePermissions(PathBuf),
    #[error("invalid reference url: {0}")]
    InvalidReferenceUrl(String),
    #[error("invalid reference timeout_secs value: {0}")]
    InvalidTimeout(u64),
    #[error("invalid reference max_bytes value: {0}")]
    InvalidMaxBytes(u64),
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    reference: Option<ReferenceFile>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ReferenceFile {
    url: Option<String>,
    timeout_secs: Option<u64>,
    max_bytes: Option<u64>,
}

pub fn load(config_path: Option<PathBuf>) -> Result<AppConfig> {
    let required = config_path.is_some();
    let path = match resolve_config_path(config_path) {
        Ok(path) => path,
        // Without a usable home or XDG dir there is no default file to read.
        Err(_) if !required => return Ok(AppConfig::default()),
        Err(err) => return Err(err),
    };
    read_config(&path, required).map(Option::unwrap_or_default)
}

pub fn resolve_config_path(custom: Option<PathBuf>) -> Result<PathBuf> {
    match custom {
        Some(path) if path.as_os_str().is_empty() => Err(ConfigError::InvalidConfigPath(path)),
        Some(path) => Ok(path),
        None => Ok(config_base_dir()?.join(APP_DIR).join(CONFIG_FILENAME)),
    }
}

fn config_base_dir() -> Result<PathBuf> {
    match env::var_os("XDG_CONFIG_HOME").map(PathBuf::from) {
        Some(dir) if dir.as_os_str().is_empty() => Err(ConfigError::InvalidConfigPath(dir)),
        Some(dir) => Ok(dir),
        None => dirs::home_dir()
            .map(|home| home.join(".config"))
            .ok_or(ConfigError::MissingHomeDir),
    }
}

/// Accepts absolute `http` and `https` URLs only.
pub fn validate_reference_url(raw: &str) -> Result<String> {
    let trimmed = raw.trim();
    let url = Url::parse(trimmed).map_err(|_| ConfigError::InvalidReferenceUrl(raw.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") || url.host_str().is_none() {
        return Err(ConfigError::InvalidReferenceUrl(raw.to_string()));
    }
    Ok(trimmed.to_string())
}

fn read_config(path: &Path, required: bool) -> Result<Option<AppConfig>> {
    let read_err = |source: io::Error| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    };
    let mut file = match File::open(path) {
        Ok(file) => file,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            return if required {
                Err(ConfigError::MissingConfigFile(path.to_path_buf()))
            } else {
                Ok(None)
            };
        }
        Err(err) => return Err(read_err(err)),
    };

    let metadata = file.metadata().map_err(read_err)?;
    check_private(path, &metadata)?;

    let mut contents = String::new();
    file.read_to_string(&mut contents).map_err(read_err)?;
    let parsed: ConfigFile = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    merge_config(parsed).map(Some)
}

fn merge_config(parsed: ConfigFile) -> Result<AppConfig> {
    let mut config = AppConfig::default();

    if let Some(reference) = parsed.reference {
        if let Some(url) = reference.url {
            config.reference.url = validate_reference_url(&url)?;
        }
        if let Some(timeout) = reference.timeout_secs {
            if timeout == 0 || timeout > MAX_TIMEOUT_SECS {
                return Err(ConfigError::InvalidTimeout(timeout));
            }
            config.reference.timeout_secs = timeout;
        }
        if let Some(max_bytes) = reference.max_bytes {
            if max_bytes == 0 || max_bytes > MAX_MAX_BYTES {
                return Err(ConfigError::InvalidMaxBytes(max_bytes));
            }
            config.reference.max_bytes = max_bytes;
        }
    }

    Ok(config)
}

/// Group or world access to the config file is refused.
#[cfg(unix)]
fn check_private(path: &Path, metadata: &fs::Metadata) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    if metadata.permissions().mode() & 0o077 == 0 {
        Ok(())
    } else {
        Err(ConfigError::InsecurePermissions(path.to_path_buf()))
    }
}

#[cfg(not(unix))]
fn check_private(_path: &Path, _metadata: &fs::Metadata) -> Result<()> {
    Ok(())
}
