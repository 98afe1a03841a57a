use super::json::JsonRoster;
use super::RosterStorage;
use crate::error::{Result, RollcallError};
use crate::roster::Roster;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Stores the roster as a single JSON file.
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent(&self) -> Result<PathBuf> {
        let parent = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };
        if !parent.exists() {
            fs::create_dir_all(&parent).map_err(RollcallError::Io)?;
        }
        Ok(parent)
    }
}

impl RosterStorage for JsonFileStorage {
    fn load(&self) -> Result<Option<Roster>> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "no roster file yet");
            return Ok(None);
        }
        let content = fs::read_to_string(&self.path).map_err(RollcallError::Io)?;
        let roster = JsonRoster::from_json(&content)?.to_roster()?;
        tracing::info!(
            path = %self.path.display(),
            students = roster.len(),
            "loaded roster"
        );
        Ok(Some(roster))
    }

    fn save(&self, roster: &Roster) -> Result<()> {
        let dir = self.ensure_parent()?;
        let content = JsonRoster::from_roster(roster).to_json()?;

        // Write beside the target, then rename over it
        let tmp_file = dir.join(format!(".roster-{}.tmp", Uuid::new_v4()));
        if let Err(e) = write_synced(&tmp_file, &content) {
            let _ = fs::remove_file(&tmp_file);
            return Err(RollcallError::Io(e));
        }
        if let Err(e) = fs::rename(&tmp_file, &self.path) {
            let _ = fs::remove_file(&tmp_file);
            return Err(RollcallError::Io(e));
        }

        tracing::info!(
            path = %self.path.display(),
            students = roster.len(),
            "saved roster"
        );
        Ok(())
    }
}

/// Writes `content` and flushes it to disk before returning, so a following rename
/// never exposes a file whose data is not yet durable.
fn write_synced(path: &Path, content: &str) -> io::Result<()> {
    let mut file = fs::File::create(path)?;
    file.write_all(content.as_bytes())?;
    file.sync_all()
}
