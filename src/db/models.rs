/// Data models for stored projects
///
/// The record type is shared by both backends: sqlx maps it from the
/// `projects` table and serde maps it to the `.projects` JSON array.

use crate::error::{ProjError, Result};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A named bookmark for one directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct ProjectRecord {
    pub name: String,
    #[serde(rename = "dir")]
    #[sqlx(rename = "dir")]
    pub directory: String,
}

impl ProjectRecord {
    /// Build a record, normalizing the name.
    pub fn new(name: &str, directory: impl Into<String>) -> Result<Self> {
        Ok(Self {
            name: normalize_name(name)?,
            directory: directory.into(),
        })
    }
}

/// Lowercase and trim a project name.
///
/// Empty names are rejected with `MissingArgument`.
pub fn normalize_name(name: &str) -> Result<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ProjError::MissingArgument);
    }
    Ok(trimmed.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_name() {
        assert_eq!(normalize_name("Foo").unwrap(), "foo");
        assert_eq!(normalize_name("  MyApp ").unwrap(), "myapp");
    }

    #[test]
    fn test_normalize_empty_name() {
        assert!(matches!(normalize_name(""), Err(ProjError::MissingArgument)));
        assert!(matches!(normalize_name("   "), Err(ProjError::MissingArgument)));
    }

    #[test]
    fn test_record_json_shape() {
        let record = ProjectRecord::new("Web", "/home/u/web").unwrap();
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json, serde_json::json!({"name": "web", "dir": "/home/u/web"}));
    }
}
