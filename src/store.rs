// Flat-file storage: the roster is persisted as plain text, one record
// per line, and every save rewrites the whole file. There is no partial
// update and no locking; the running session is the only writer.

use crate::model::Employee;
use anyhow::{Context, Result};
use log::debug;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Roster location used when `ROSTER_FILE` is not set.
const DEFAULT_ROSTER_FILE: &str = "employees.txt";

/// File-backed store holding the roster path.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Creates a store backed by the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Creates a store configured from the environment variable
    /// `ROSTER_FILE`, or the default `employees.txt` in the working
    /// directory. The on-disk format is the same either way.
    pub fn from_env() -> Self {
        let path = std::env::var("ROSTER_FILE").unwrap_or_else(|_| DEFAULT_ROSTER_FILE.into());
        Self::new(path)
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads every record from the backing file in line order.
    ///
    /// Returns `Ok(None)` when the file does not exist yet; that is a
    /// normal first-run condition, not an error. A line that fails to
    /// parse is an error: a roster file that stopped parsing is surfaced
    /// immediately instead of being loaded as a partial list.
    pub fn load(&self) -> Result<Option<Vec<Employee>>> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!("roster file {} does not exist yet", self.path.display());
                return Ok(None);
            }
            Err(err) => {
                return Err(err).with_context(|| {
                    format!("failed to read roster file {}", self.path.display())
                });
            }
        };

        let mut records = Vec::new();
        for (index, line) in contents.lines().enumerate() {
            let record = Employee::from_line(line).with_context(|| {
                format!(
                    "malformed record at line {} of {}",
                    index + 1,
                    self.path.display()
                )
            })?;
            records.push(record);
        }
        debug!(
            "loaded {} records from {}",
            records.len(),
            self.path.display()
        );
        Ok(Some(records))
    }

    /// Rewrites the backing file with one line per record in list order,
    /// truncating whatever was there before. The caller's in-memory list
    /// is left untouched by a failed save.
    pub fn save(&self, records: &[Employee]) -> Result<()> {
        let mut contents = String::new();
        for record in records {
            contents.push_str(&record.to_line());
            contents.push('\n');
        }
        std::fs::write(&self.path, contents)
            .with_context(|| format!("failed to write roster file {}", self.path.display()))?;
        debug!(
            "saved {} records to {}",
            records.len(),
            self.path.display()
        );
        Ok(())
    }
}
