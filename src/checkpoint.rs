//! Checkpoint persistence for interrupted searches.
//!
//! External evaluations are expensive (a single tree-inference run can take
//! hours), so the driver snapshots the run log after every recorded outcome.
//! A snapshot is a small versioned JSON document; loading replays its entries
//! through the validating [`RunLog`] API so corrupt or tampered files fail
//! fast instead of seeding a search with bad records.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::checkpoint::{DEFAULT_CHECKPOINT_FILENAME, SNAPSHOT_VERSION};
use crate::data::RunOutcome;
use crate::errors::SearchError;
use crate::runlog::RunLog;
use crate::types::RunId;

#[derive(Debug, Serialize, Deserialize)]
struct Snapshot {
    version: u8,
    saved_at: DateTime<Utc>,
    runs: Vec<SnapshotRun>,
}

#[derive(Debug, Serialize, Deserialize)]
struct SnapshotRun {
    id: RunId,
    outcome: RunOutcome,
}

/// File-backed run-log snapshots so a search interrupted between external
/// runs can resume without re-evaluating anything.
#[derive(Clone, Debug)]
pub struct FileCheckpoint {
    path: PathBuf,
}

impl FileCheckpoint {
    /// Checkpoint stored at `path`.
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    /// Default checkpoint path inside a custom directory.
    pub fn default_path_in_dir<P: AsRef<Path>>(dir: P) -> PathBuf {
        dir.as_ref().join(DEFAULT_CHECKPOINT_FILENAME)
    }

    /// Path this checkpoint reads and writes.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Persist `log` as a snapshot, replacing any previous one.
    ///
    /// Writes to a sibling temp file first and renames it into place so an
    /// interrupted save never leaves a truncated snapshot behind.
    pub fn save(&self, log: &RunLog) -> Result<(), SearchError> {
        ensure_parent_dir(&self.path)?;
        let snapshot = Snapshot {
            version: SNAPSHOT_VERSION,
            saved_at: Utc::now(),
            runs: log
                .iter()
                .map(|(id, outcome)| SnapshotRun {
                    id: id.clone(),
                    outcome: outcome.clone(),
                })
                .collect(),
        };
        let payload = serde_json::to_vec_pretty(&snapshot)
            .map_err(|err| SearchError::Checkpoint(format!("failed to encode snapshot: {err}")))?;
        let staging = self.path.with_extension("tmp");
        fs::write(&staging, payload)?;
        fs::rename(&staging, &self.path)?;
        Ok(())
    }

    /// Load the persisted run log, or `None` when no snapshot exists yet.
    pub fn load(&self) -> Result<Option<RunLog>, SearchError> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        let snapshot: Snapshot = serde_json::from_slice(&bytes)
            .map_err(|err| SearchError::Checkpoint(format!("failed to decode snapshot: {err}")))?;
        if snapshot.version != SNAPSHOT_VERSION {
            return Err(SearchError::Checkpoint(format!(
                "snapshot version mismatch (expected {}, found {})",
                SNAPSHOT_VERSION, snapshot.version
            )));
        }
        let mut log = RunLog::new();
        for run in snapshot.runs {
            log.record(run.id, run.outcome)?;
        }
        Ok(Some(log))
    }
}

fn ensure_parent_dir(path: &Path) -> Result<(), SearchError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}
