use std::io;
use std::path::{Path, PathBuf};

/// Credentials and the last session key, persisted between invocations.
#[derive(serde::Deserialize, serde::Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub username: String,
    pub password: String,
    pub server: String,
    pub key: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not access config file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("could not parse config file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl Config {
    /// `angeltrax/config.json` below the user's configuration directory.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("angeltrax").join("config.json"))
    }

    /// Reads the config at `path`; a missing file yields the default config.
    ///
    /// # Errors
    /// [`ConfigError`] if the file exists but cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Config, ConfigError> {
        let contents = match std::fs::read(path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Config::default()),
            Err(source) => return Err(ConfigError::Io { path: path.to_owned(), source }),
        };
        serde_json::from_slice(&contents)
            .map_err(|source| ConfigError::Parse { path: path.to_owned(), source })
    }

    /// Writes the config to `path`, creating its directory if needed.
    ///
    /// # Errors
    /// [`ConfigError::Io`] if the directory or file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let io_err = |source| ConfigError::Io { path: path.to_owned(), source };
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }
        let contents = serde_json::to_vec_pretty(self)
            .map_err(|source| ConfigError::Parse { path: path.to_owned(), source })?;
        std::fs::write(path, contents).map_err(io_err)
    }
}
