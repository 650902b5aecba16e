//! Student record persistence
//!
//! Records are stored one TOML file per student under the configured records
//! directory, the same way the configuration file itself is persisted. Every
//! save rewrites the derived aggregates from the raw course data first, so a
//! loaded record's semester and overall figures always agree with its
//! courses.

use crate::core::config::Config;
use crate::core::models::StudentRecord;
use std::fs;
use std::path::PathBuf;

/// File-backed store for student records
#[derive(Debug, Clone)]
pub struct RecordStore {
    records_dir: PathBuf,
}

impl RecordStore {
    /// Create a store rooted at a records directory
    pub fn new(records_dir: impl Into<PathBuf>) -> Self {
        Self {
            records_dir: records_dir.into(),
        }
    }

    /// Create a store from the loaded configuration
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.paths.records_dir)
    }

    /// Path of the record file for a student id
    #[must_use]
    pub fn record_path(&self, student_id: &str) -> PathBuf {
        self.records_dir.join(format!("{student_id}.toml"))
    }

    /// Whether a record exists for a student id
    #[must_use]
    pub fn exists(&self, student_id: &str) -> bool {
        self.record_path(student_id).exists()
    }

    /// Load a student record
    ///
    /// # Errors
    /// Returns a user-facing message when the file is missing, unreadable,
    /// or not a valid record.
    pub fn load(&self, student_id: &str) -> Result<StudentRecord, String> {
        let path = self.record_path(student_id);
        if !path.exists() {
            return Err(format!(
                "No record found for '{student_id}'; run `register` first"
            ));
        }

        let content = fs::read_to_string(&path)
            .map_err(|e| format!("Failed to read record {}: {e}", path.display()))?;

        toml::from_str(&content)
            .map_err(|e| format!("Failed to parse record {}: {e}", path.display()))
    }

    /// Save a student record, refreshing its derived aggregates first
    ///
    /// Creates the records directory on first use. The record's semester
    /// aggregates and overall figures are recomputed through the engine
    /// before writing, so stale derived fields never reach disk.
    ///
    /// # Errors
    /// Returns a user-facing message when the directory cannot be created or
    /// the file cannot be written.
    pub fn save(&self, record: &mut StudentRecord) -> Result<(), String> {
        record.refresh_aggregates();

        fs::create_dir_all(&self.records_dir).map_err(|e| {
            format!(
                "Failed to create records directory {}: {e}",
                self.records_dir.display()
            )
        })?;

        let toml_str = toml::to_string_pretty(record)
            .map_err(|e| format!("Failed to serialize record for '{}': {e}", record.student_id))?;

        let path = self.record_path(&record.student_id);
        fs::write(&path, toml_str)
            .map_err(|e| format!("Failed to write record {}: {e}", path.display()))
    }

    /// Delete a student's record file
    ///
    /// # Errors
    /// Returns a user-facing message when the file exists but cannot be
    /// removed.
    pub fn delete(&self, student_id: &str) -> Result<bool, String> {
        let path = self.record_path(student_id);
        if !path.exists() {
            return Ok(false);
        }
        fs::remove_file(&path)
            .map_err(|e| format!("Failed to delete record {}: {e}", path.display()))?;
        Ok(true)
    }

    /// List the student ids with saved records
    ///
    /// # Errors
    /// Returns a user-facing message when the records directory cannot be
    /// read. A missing directory lists as empty.
    pub fn list(&self) -> Result<Vec<String>, String> {
        if !self.records_dir.exists() {
            return Ok(Vec::new());
        }

        let entries = fs::read_dir(&self.records_dir).map_err(|e| {
            format!(
                "Failed to read records directory {}: {e}",
                self.records_dir.display()
            )
        })?;

        let mut ids: Vec<String> = entries
            .filter_map(Result::ok)
            .filter_map(|entry| {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    path.file_stem()
                        .and_then(|stem| stem.to_str())
                        .map(str::to_string)
                } else {
                    None
                }
            })
            .collect();
        ids.sort();

        Ok(ids)
    }
}
