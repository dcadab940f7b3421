// JSON file backend
//
// The whole record set lives in one file as a JSON array of
// {"name", "dir"} objects. Every mutation loads it, changes it and
// rewrites the file.

use crate::db::ProjectRecord;
use crate::error::Result;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every record. A missing or empty file is an empty store.
    pub fn load(&self) -> Result<Vec<ProjectRecord>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        if contents.trim().is_empty() {
            return Ok(Vec::new());
        }

        let raw: Vec<ProjectRecord> = serde_json::from_str(&contents)?;
        Ok(collapse_duplicates(raw))
    }

    /// Replace the file with `records`.
    ///
    /// Written to a temp file next to the target and renamed over it,
    /// so readers see either the old array or the new one.
    pub fn save(&self, records: &[ProjectRecord]) -> Result<()> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&dir)?;

        let mut tmp = NamedTempFile::new_in(&dir)?;
        // The temp file starts out 0600; keep whatever mode the store had.
        if let Ok(meta) = fs::metadata(&self.path) {
            tmp.as_file().set_permissions(meta.permissions())?;
        }
        serde_json::to_writer(&mut tmp, records)?;
        writeln!(tmp)?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).map_err(|e| e.error)?;

        tracing::debug!(path = %self.path.display(), count = records.len(), "wrote project file");
        Ok(())
    }

    /// Insert or overwrite in place, keeping the record's position.
    pub fn add(&self, record: ProjectRecord) -> Result<()> {
        let mut records = self.load()?;

        match records.iter_mut().find(|r| r.name == record.name) {
            Some(existing) => existing.directory = record.directory,
            None => records.push(record),
        }

        self.save(&records)
    }

    pub fn get(&self, name: &str) -> Result<Option<ProjectRecord>> {
        Ok(self.load()?.into_iter().find(|r| r.name == name))
    }

    /// Remove `name`; returns whether it was present.
    ///
    /// The file is left untouched when nothing matches.
    pub fn delete(&self, name: &str) -> Result<bool> {
        let mut records = self.load()?;
        let before = records.len();
        records.retain(|r| r.name != name);

        if records.len() == before {
            return Ok(false);
        }

        self.save(&records)?;
        Ok(true)
    }

    pub fn list(&self) -> Result<Vec<ProjectRecord>> {
        self.load()
    }
}

// Older files may hold the same name more than once. The first position
// is kept and the last directory wins.
fn collapse_duplicates(raw: Vec<ProjectRecord>) -> Vec<ProjectRecord> {
    let mut records: Vec<ProjectRecord> = Vec::with_capacity(raw.len());

    for mut record in raw {
        record.name = record.name.to_lowercase();
        match records.iter_mut().find(|r| r.name == record.name) {
            Some(existing) => existing.directory = record.directory,
            None => records.push(record),
        }
    }

    records
}
