//! Progress persistence
//!
//! The progress file is a pretty-printed JSON object keyed by word:
//!
//! ```json
//! {
//!   "gato": {
//!     "interval_days": 6,
//!     "last_reviewed": "2024-05-17",
//!     "difficulty_level": 1,
//!     "times_correct": 1,
//!     "times_wrong": 0,
//!     "ease_factor": 2.6
//!   }
//! }
//! ```
//!
//! A missing file is a first run. A file that cannot be parsed either falls
//! back to an empty mapping with a warning, or fails the load, depending on
//! [`CorruptPolicy`]. Saves go through a temporary sibling file and a rename,
//! so an interrupted write leaves the previous file intact.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use mnemo_algo::sanitize::sanitize_entry;
use mnemo_algo::ProgressMap;

use crate::error::{Result, TrainerError};

/// What to do with a progress file that exists but cannot be read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CorruptPolicy {
    /// Log a warning and start from an empty mapping
    #[default]
    FallBackToEmpty,
    /// Refuse to load
    Fail,
}

impl CorruptPolicy {
    pub fn from_strict(strict: bool) -> Self {
        if strict {
            Self::Fail
        } else {
            Self::FallBackToEmpty
        }
    }
}

#[derive(Debug, Clone)]
pub struct ProgressStore {
    path: PathBuf,
    policy: CorruptPolicy,
}

impl ProgressStore {
    pub fn new(path: impl Into<PathBuf>, policy: CorruptPolicy) -> Self {
        Self {
            path: path.into(),
            policy,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<ProgressMap> {
        load(&self.path, self.policy)
    }

    pub fn save(&self, progress: &ProgressMap) -> Result<()> {
        save(progress, &self.path)
    }
}

/// Read the mapping at `path`. Absent file gives an empty mapping.
pub fn load(path: &Path, policy: CorruptPolicy) -> Result<ProgressMap> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            tracing::info!(path = %path.display(), "no progress file, starting fresh");
            return Ok(ProgressMap::new());
        }
        Err(err) => return corrupt(path, policy, err.to_string()),
    };

    let mut progress: ProgressMap = match serde_json::from_str(&text) {
        Ok(progress) => progress,
        Err(err) => return corrupt(path, policy, err.to_string()),
    };

    let repaired = progress
        .values_mut()
        .map(sanitize_entry)
        .filter(|changed| *changed)
        .count();
    if repaired > 0 {
        tracing::warn!(path = %path.display(), repaired, "progress entries out of range were clamped");
    }

    tracing::info!(path = %path.display(), count = progress.len(), "progress loaded");
    Ok(progress)
}

fn corrupt(path: &Path, policy: CorruptPolicy, reason: String) -> Result<ProgressMap> {
    match policy {
        CorruptPolicy::FallBackToEmpty => {
            // review history in the file is lost once the next save lands
            tracing::warn!(
                path = %path.display(),
                error = %reason,
                "progress file unreadable, starting with empty progress"
            );
            Ok(ProgressMap::new())
        }
        CorruptPolicy::Fail => Err(TrainerError::CorruptProgress {
            path: path.to_path_buf(),
            reason,
        }),
    }
}

/// Write the full mapping to `path`
pub fn save(progress: &ProgressMap, path: &Path) -> Result<()> {
    write_atomic(progress, path).map_err(|source| TrainerError::Persistence {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), count = progress.len(), "progress saved");
    Ok(())
}

fn write_atomic(progress: &ProgressMap, path: &Path) -> io::Result<()> {
    let json = serde_json::to_string_pretty(progress).map_err(io::Error::from)?;

    let tmp = tmp_path(path);
    {
        let mut file = File::create(&tmp)?;
        file.write_all(json.as_bytes())?;
        file.write_all(b"\n")?;
        file.sync_all()?;
    }

    if let Err(err) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(err);
    }
    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| "progress.json".into());
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use mnemo_algo::ProgressEntry;

    fn sample() -> ProgressMap {
        let mut progress = ProgressMap::new();
        progress.insert(
            "gato".to_string(),
            ProgressEntry {
                interval_days: 6,
                last_reviewed: NaiveDate::from_ymd_opt(2024, 5, 17).unwrap(),
                times_correct: 1,
                ease_factor: 2.6,
                ..Default::default()
            },
        );
        progress.insert("perro".to_string(), ProgressEntry::default());
        progress
    }

    #[test]
    fn test_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("progress.json");
        assert!(load(&path, CorruptPolicy::Fail).unwrap().is_empty());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("progress.json");
        save(&sample(), &path).unwrap();
        assert_eq!(load(&path, CorruptPolicy::Fail).unwrap(), sample());
        assert!(!tmp_path(&path).exists());
    }

    #[test]
    fn test_saved_file_is_readable_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("progress.json");
        save(&sample(), &path).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.contains("\n  \"gato\": {"));
        assert!(text.contains("\"last_reviewed\": \"2024-05-17\""));
    }

    #[test]
    fn test_corrupt_file_policies() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("progress.json");
        fs::write(&path, "{\"gato\": {\"interval_days\": 6, \"last_rev").unwrap();

        assert!(load(&path, CorruptPolicy::FallBackToEmpty).unwrap().is_empty());
        let err = load(&path, CorruptPolicy::Fail).unwrap_err();
        assert!(matches!(err, TrainerError::CorruptProgress { .. }));
    }

    #[test]
    fn test_out_of_range_entries_are_clamped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("progress.json");
        fs::write(
            &path,
            r#"{"sol": {"interval_days": 0, "last_reviewed": "2024-01-01", "times_correct": 0, "times_wrong": 0, "ease_factor": 4.2}}"#,
        )
        .unwrap();

        let progress = load(&path, CorruptPolicy::Fail).unwrap();
        assert_eq!(progress["sol"].interval_days, 1);
        assert_eq!(progress["sol"].ease_factor, 3.0);
    }

    #[test]
    fn test_save_into_missing_dir_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope").join("progress.json");
        let err = save(&sample(), &path).unwrap_err();
        assert!(matches!(err, TrainerError::Persistence { .. }));
        assert!(!err.is_fatal());
    }
}
