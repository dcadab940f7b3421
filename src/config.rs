/// Store configuration
///
/// Decides which backend is used and where its file lives. The resolved
/// path is handed to `ProjectStore::open`; no operation looks up the home
/// directory on its own.

use crate::error::{ProjError, Result};
use clap::ValueEnum;
use std::fmt;
use std::path::{Path, PathBuf};

/// Which persistence backend holds the projects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Backend {
    /// Flat JSON array, rewritten on every change
    #[default]
    Json,
    /// Single-file SQLite database
    Sqlite,
}

impl Backend {
    /// File name used under the home directory when no path is given
    pub fn default_file_name(&self) -> &'static str {
        match self {
            Backend::Json => ".projects",
            Backend::Sqlite => ".projects.db",
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Backend::Json => "json",
            Backend::Sqlite => "sqlite",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub backend: Backend,
    pub store_path: PathBuf,
}

impl Config {
    pub fn new(backend: Backend, store_path: impl Into<PathBuf>) -> Self {
        Self {
            backend,
            store_path: store_path.into(),
        }
    }

    /// Use `store_path` if given, otherwise the backend's file in the
    /// user's home directory.
    pub fn resolve(backend: Backend, store_path: Option<PathBuf>) -> Result<Self> {
        let store_path = match store_path {
            Some(path) => path,
            None => {
                let home = dirs::home_dir().ok_or_else(|| {
                    ProjError::Config("Could not determine home directory".to_string())
                })?;
                Self::default_path(&home, backend)
            }
        };

        Ok(Self::new(backend, store_path))
    }

    pub fn default_path(home: &Path, backend: Backend) -> PathBuf {
        home.join(backend.default_file_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paths() {
        let home = Path::new("/home/u");
        assert_eq!(
            Config::default_path(home, Backend::Json),
            PathBuf::from("/home/u/.projects")
        );
        assert_eq!(
            Config::default_path(home, Backend::Sqlite),
            PathBuf::from("/home/u/.projects.db")
        );
    }

    #[test]
    fn test_explicit_path_wins() {
        let config =
            Config::resolve(Backend::Sqlite, Some(PathBuf::from("/tmp/p.db"))).unwrap();
        assert_eq!(config.store_path, PathBuf::from("/tmp/p.db"));
        assert_eq!(config.backend, Backend::Sqlite);
    }

    #[test]
    fn test_backend_parsing() {
        assert_eq!(Backend::from_str("json", true).unwrap(), Backend::Json);
        assert_eq!(Backend::from_str("SQLITE", true).unwrap(), Backend::Sqlite);
        assert!(Backend::from_str("bolt", true).is_err());
        assert_eq!(Backend::default().to_string(), "json");
    }
}
