// Configuration loading and parsing (saroo.toml).

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name of the configuration inside the config directory.
pub const CONFIG_FILE_NAME: &str = "saroo.toml";

/// Environment variable overriding the config directory.
pub const CONFIG_DIR_ENV: &str = "SAROO_CONFIG_DIR";

/// Written to the config directory on first run.
const DEFAULT_CONFIG: &str = include_str!("../defaults/saroo.toml");

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("failed to parse config file {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("validation error for field `{field}`: {message}")]
    ValidationError { field: String, message: String },

    #[error("failed to write default config: {message}")]
    DefaultsWriteError { message: String },

    #[error("could not determine a config directory; set {CONFIG_DIR_ENV}")]
    NoConfigDir,
}

// ---------------------------------------------------------------------------
// Top-level assembled Config
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct Config {
    pub roster: RosterConfig,
    pub teams: TeamsConfig,
    pub logging: LoggingConfig,
    /// Directory the config was loaded from. Relative paths in the file
    /// resolve against it.
    pub base_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            roster: RosterConfig::default(),
            teams: TeamsConfig::default(),
            logging: LoggingConfig::default(),
            base_dir: PathBuf::from("."),
        }
    }
}

impl Config {
    /// Where the log file goes: `logging.file` as-is when absolute, otherwise
    /// under `<base_dir>/logs/`.
    pub fn log_file_path(&self) -> PathBuf {
        let file = Path::new(&self.logging.file);
        if file.is_absolute() {
            file.to_path_buf()
        } else {
            self.base_dir.join("logs").join(file)
        }
    }
}

// ---------------------------------------------------------------------------
// saroo.toml structs
// ---------------------------------------------------------------------------

/// Raw deserialization target for the whole file.
#[derive(Debug, Clone, Deserialize)]
struct ConfigFile {
    roster: RosterConfig,
    #[serde(default)]
    teams: TeamsConfig,
    #[serde(default)]
    logging: LoggingConfig,
}

/// Where the champion roster comes from.
#[derive(Debug, Clone, Deserialize)]
pub struct RosterConfig {
    pub versions_url: String,
    pub cdn_base: String,
    pub locale: String,
    /// Locale supplying romanized names; `None` uses display names for both.
    #[serde(default)]
    pub canonical_locale: Option<String>,
    /// Pinned game version; `None` asks `versions_url` for the newest.
    #[serde(default)]
    pub version: Option<String>,
    /// Local champion.json to load instead of fetching.
    #[serde(default)]
    pub file: Option<PathBuf>,
    /// Local champion.json in the canonical locale, paired with `file`.
    #[serde(default)]
    pub canonical_file: Option<PathBuf>,
}

impl Default for RosterConfig {
    fn default() -> Self {
        RosterConfig {
            versions_url: "https://ddragon.leagueoflegends.com/api/versions.json".into(),
            cdn_base: "https://ddragon.leagueoflegends.com/cdn".into(),
            locale: "ko_KR".into(),
            canonical_locale: Some("en_US".into()),
            version: None,
            file: None,
            canonical_file: None,
        }
    }
}

/// Default team display names. Renaming a team to blank falls back to these.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TeamsConfig {
    pub blue: String,
    pub red: String,
}

impl Default for TeamsConfig {
    fn default() -> Self {
        TeamsConfig {
            blue: "Team X".into(),
            red: "Team Y".into(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive used when `RUST_LOG` is unset.
    pub filter: String,
    pub file: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            filter: "saroo=info,warn".into(),
            file: "saroo.log".into(),
        }
    }
}

// ---------------------------------------------------------------------------
// Loading logic
// ---------------------------------------------------------------------------

/// Resolve the config directory: `$SAROO_CONFIG_DIR` when set, otherwise the
/// platform config directory for "saroo".
pub fn config_dir() -> Result<PathBuf, ConfigError> {
    if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
        return Ok(PathBuf::from(dir));
    }
    directories::ProjectDirs::from("", "", "saroo")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or(ConfigError::NoConfigDir)
}

/// Write the bundled default config into `dir` unless a config file already
/// exists there. Returns the path when a file was written.
pub fn ensure_config_file(dir: &Path) -> Result<Option<PathBuf>, ConfigError> {
    std::fs::create_dir_all(dir).map_err(|e| ConfigError::DefaultsWriteError {
        message: format!("failed to create {}: {e}", dir.display()),
    })?;

    let target = dir.join(CONFIG_FILE_NAME);
    match std::fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&target)
    {
        Ok(mut dest) => {
            std::io::Write::write_all(&mut dest, DEFAULT_CONFIG.as_bytes()).map_err(|e| {
                ConfigError::DefaultsWriteError {
                    message: format!("failed to write {}: {e}", target.display()),
                }
            })?;
            Ok(Some(target))
        }
        Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => Ok(None),
        Err(e) => Err(ConfigError::DefaultsWriteError {
            message: format!("failed to create {}: {e}", target.display()),
        }),
    }
}

/// Load and validate `saroo.toml` from `dir`, without writing defaults.
pub fn load_config_from(dir: &Path) -> Result<Config, ConfigError> {
    let path = dir.join(CONFIG_FILE_NAME);
    let text = read_file(&path)?;
    let file: ConfigFile = toml::from_str(&text).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        source: e,
    })?;

    let mut roster = file.roster;
    roster.file = roster.file.map(|p| dir.join(p));
    roster.canonical_file = roster.canonical_file.map(|p| dir.join(p));

    let config = Config {
        roster,
        teams: file.teams,
        logging: file.logging,
        base_dir: dir.to_path_buf(),
    };

    validate(&config)?;

    Ok(config)
}

/// Load from the resolved config directory, writing the default file first
/// if none exists.
pub fn load_config() -> Result<Config, ConfigError> {
    let dir = config_dir()?;
    ensure_config_file(&dir)?;
    load_config_from(&dir)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn read_file(path: &Path) -> Result<String, ConfigError> {
    std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
        path: path.to_path_buf(),
    })
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

fn validate(config: &Config) -> Result<(), ConfigError> {
    let roster = &config.roster;

    if roster.locale.trim().is_empty() {
        return Err(ConfigError::ValidationError {
            field: "roster.locale".into(),
            message: "must not be empty".into(),
        });
    }

    if roster.canonical_locale.as_deref().is_some_and(|l| l.trim().is_empty()) {
        return Err(ConfigError::ValidationError {
            field: "roster.canonical_locale".into(),
            message: "must not be empty when set; remove it instead".into(),
        });
    }

    let urls: &[(&str, &str)] = &[
        ("roster.versions_url", &roster.versions_url),
        ("roster.cdn_base", &roster.cdn_base),
    ];
    for (name, url) in urls {
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::ValidationError {
                field: name.to_string(),
                message: format!("must be an http(s) URL, got {url:?}"),
            });
        }
    }

    if roster.canonical_file.is_some() && roster.file.is_none() {
        return Err(ConfigError::ValidationError {
            field: "roster.canonical_file".into(),
            message: "requires roster.file".into(),
        });
    }

    let teams: &[(&str, &str)] = &[("teams.blue", &config.teams.blue), ("teams.red", &config.teams.red)];
    for (name, value) in teams {
        if value.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                field: name.to_string(),
                message: "must not be blank".into(),
            });
        }
    }

    if config.logging.file.trim().is_empty() {
        return Err(ConfigError::ValidationError {
            field: "logging.file".into(),
            message: "must not be empty".into(),
        });
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
