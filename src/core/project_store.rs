/// Project store
///
/// One facade over both backends. Names are normalized here, so each
/// backend only ever sees lowercase keys.

use crate::config::{Backend, Config};
use crate::core::JsonStore;
use crate::db::{normalize_name, Database, ProjectRecord};
use crate::error::{ProjError, Result};
use std::path::PathBuf;

pub enum ProjectStore {
    Json(JsonStore),
    /// Only the path is held; the database is opened per operation.
    Sqlite(PathBuf),
}

impl ProjectStore {
    /// Build the store described by `config`. Nothing is read yet.
    pub fn open(config: &Config) -> Self {
        match config.backend {
            Backend::Json => ProjectStore::Json(JsonStore::new(&config.store_path)),
            Backend::Sqlite => ProjectStore::Sqlite(config.store_path.clone()),
        }
    }

    /// Bookmark `directory` under `name`, replacing any earlier entry
    pub async fn add(&self, name: &str, directory: &str) -> Result<()> {
        let record = ProjectRecord::new(name, directory)?;
        tracing::debug!(name = %record.name, dir = %record.directory, "adding project");

        match self {
            ProjectStore::Json(store) => store.add(record),
            ProjectStore::Sqlite(path) => {
                let db = Database::open(path).await?;
                let result = db.upsert_project(&record).await;
                db.close().await;
                result
            }
        }
    }

    /// Directory bookmarked under `name`
    ///
    /// # Returns
    /// * `Ok(String)` - The stored directory
    /// * `Err(ProjError::NotFound)` - If the name was never added
    pub async fn get(&self, name: &str) -> Result<String> {
        let name = normalize_name(name)?;

        let record = match self {
            ProjectStore::Json(store) => store
                .get(&name)?
                .ok_or_else(|| ProjError::NotFound(name.clone()))?,
            ProjectStore::Sqlite(path) => {
                let db = Database::open(path).await?;
                let result = db.get_project(&name).await;
                db.close().await;
                result?
            }
        };

        Ok(record.directory)
    }

    /// Remove `name`. Returns false (not an error) if it was absent.
    pub async fn delete(&self, name: &str) -> Result<bool> {
        let name = normalize_name(name)?;

        let removed = match self {
            ProjectStore::Json(store) => store.delete(&name)?,
            ProjectStore::Sqlite(path) => {
                let db = Database::open(path).await?;
                let result = db.delete_project(&name).await;
                db.close().await;
                result?
            }
        };

        tracing::debug!(name = %name, removed, "deleted project");
        Ok(removed)
    }

    /// Every project: insertion order for JSON, name order for SQLite
    pub async fn list(&self) -> Result<Vec<ProjectRecord>> {
        match self {
            ProjectStore::Json(store) => store.list(),
            ProjectStore::Sqlite(path) => {
                let db = Database::open(path).await?;
                let result = db.list_projects().await;
                db.close().await;
                result
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn json_store(temp: &TempDir) -> ProjectStore {
        ProjectStore::open(&Config::new(Backend::Json, temp.path().join(".projects")))
    }

    fn sqlite_store(temp: &TempDir) -> ProjectStore {
        ProjectStore::open(&Config::new(Backend::Sqlite, temp.path().join(".projects.db")))
    }

    fn stores(temp: &TempDir) -> [ProjectStore; 2] {
        [json_store(temp), sqlite_store(temp)]
    }

    #[tokio::test]
    async fn test_add_then_get_ignores_case() {
        let temp = TempDir::new().unwrap();

        for store in stores(&temp) {
            store.add("MyApp", "/home/u/myapp").await.unwrap();
            assert_eq!(store.get("myapp").await.unwrap(), "/home/u/myapp");
            assert_eq!(store.get("MYAPP").await.unwrap(), "/home/u/myapp");
        }
    }

    #[tokio::test]
    async fn test_last_write_wins() {
        let temp = TempDir::new().unwrap();

        for store in stores(&temp) {
            store.add("foo", "/home/u/proj1").await.unwrap();
            store.add("FOO", "/home/u/proj2").await.unwrap();

            assert_eq!(store.get("foo").await.unwrap(), "/home/u/proj2");
            assert_eq!(store.list().await.unwrap().len(), 1);
        }
    }

    #[tokio::test]
    async fn test_get_unknown_is_not_found() {
        let temp = TempDir::new().unwrap();

        for store in stores(&temp) {
            match store.get("ghost").await {
                Err(ProjError::NotFound(name)) => assert_eq!(name, "ghost"),
                other => panic!("Expected NotFound, got {:?}", other),
            }
        }
    }

    #[tokio::test]
    async fn test_delete_unknown_is_ok() {
        let temp = TempDir::new().unwrap();

        for store in stores(&temp) {
            assert!(!store.delete("ghost").await.unwrap());
        }
    }

    #[tokio::test]
    async fn test_empty_name_rejected() {
        let temp = TempDir::new().unwrap();

        for store in stores(&temp) {
            assert!(matches!(store.add("", "/x").await, Err(ProjError::MissingArgument)));
            assert!(matches!(store.get("  ").await, Err(ProjError::MissingArgument)));
            assert!(matches!(store.delete("").await, Err(ProjError::MissingArgument)));
        }
    }

    #[tokio::test]
    async fn test_list_orders() {
        let temp = TempDir::new().unwrap();
        let json = json_store(&temp);
        let sqlite = sqlite_store(&temp);

        for store in [&json, &sqlite] {
            store.add("zeta", "/z").await.unwrap();
            store.add("alpha", "/a").await.unwrap();
        }

        let names = |records: Vec<ProjectRecord>| -> Vec<String> {
            records.into_iter().map(|r| r.name).collect()
        };
        assert_eq!(names(json.list().await.unwrap()), vec!["zeta", "alpha"]);
        assert_eq!(names(sqlite.list().await.unwrap()), vec!["alpha", "zeta"]);
    }
}
