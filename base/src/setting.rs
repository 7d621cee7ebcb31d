use directories::ProjectDirs;
use serde_derive::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

use super::{util, CLI_NAME};

static DEFAULT_DB_FILE: &str = "gigbook.db";

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Could not locate program directories")]
    Directories,
    #[error("Could not read the config file: {0}")]
    Read(#[from] io::Error),
    #[error("Invalid config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Could not serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("Could not convert path to string: {0:?}")]
    Path(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_listen_address")]
    pub listen_address: String,
    #[serde(default)]
    pub database: Database,
    #[serde(default)]
    pub home: Home,
    #[serde(default)]
    pub search: Search,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            listen_address: default_listen_address(),
            database: Database::default(),
            home: Home::default(),
            search: Search::default(),
        }
    }
}

fn default_listen_address() -> String {
    "127.0.0.1:5000".to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Database {
    #[serde(default)]
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
    /// Seconds to wait for a connection before giving up.
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout: u64,
    #[serde(default)]
    pub sqlx_logging: bool,
}

impl Default for Database {
    fn default() -> Self {
        Self {
            url: String::new(),
            max_connections: default_max_connections(),
            min_connections: default_min_connections(),
            connect_timeout: default_connect_timeout(),
            sqlx_logging: false,
        }
    }
}

fn default_max_connections() -> u32 {
    10
}

fn default_min_connections() -> u32 {
    1
}

fn default_connect_timeout() -> u64 {
    8
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Home {
    /// How many of the newest venues and artists the home page lists.
    #[serde(default = "default_recent")]
    pub recent: u64,
}

impl Default for Home {
    fn default() -> Self {
        Self {
            recent: default_recent(),
        }
    }
}

fn default_recent() -> u64 {
    10
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Search {
    /// Also match "city, state" prefixes, not only names.
    #[serde(default)]
    pub match_location: bool,
}

fn project_dirs() -> Result<ProjectDirs, SettingsError> {
    ProjectDirs::from("com", "github", CLI_NAME).ok_or(SettingsError::Directories)
}

pub fn load(path: Option<PathBuf>) -> Result<Settings, SettingsError> {
    let path = match path {
        Some(path) => path,
        None => project_dirs()?.config_dir().join("config.toml"),
    };
    tracing::info! {?path, "Loading config file"};
    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => String::new(),
        Err(e) => return Err(e.into()),
    };
    let set = parse(content.as_str())?;
    tracing::trace! {settings = ?set, "Loaded settings"};
    Ok(set)
}

pub fn parse(content: &str) -> Result<Settings, SettingsError> {
    let set: Settings = toml::from_str(content)?;
    generate_default(set)
}

pub fn generate_default(mut set: Settings) -> Result<Settings, SettingsError> {
    if set.database.url == String::default() {
        let data_dir = project_dirs()?.data_dir().to_path_buf();
        util::mkdirp(&data_dir)?;
        let db_file = data_dir.join(DEFAULT_DB_FILE);
        let db_path = util::path_to_str(&db_file).ok_or(SettingsError::Path(db_file))?;
        set.database.url = format!("sqlite://{}?mode=rwc", db_path);
    }
    Ok(set)
}

pub fn to_toml(set: &Settings) -> Result<String, SettingsError> {
    Ok(toml::to_string(set)?)
}
