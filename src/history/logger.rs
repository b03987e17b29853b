//! Append-only valuation log
//!
//! Each entry is written as a single JSON line and flushed immediately.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;

use crate::error::{AppraisalError, AppraisalResult};

use super::entry::ValuationEntry;

/// Writes and reads the valuation history file (JSONL)
pub struct ValuationLog {
    log_path: PathBuf,
}

impl ValuationLog {
    /// Create a log backed by the given file
    pub fn new(log_path: PathBuf) -> Self {
        Self { log_path }
    }

    fn open_for_append(&self) -> AppraisalResult<File> {
        if let Some(parent) = self.log_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppraisalError::Storage(format!("Failed to create log directory: {}", e))
            })?;
        }

        OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .map_err(|e| AppraisalError::Storage(format!("Failed to open valuation log: {}", e)))
    }

    /// Append one entry
    pub fn log(&self, entry: &ValuationEntry) -> AppraisalResult<()> {
        self.log_batch(std::slice::from_ref(entry))
    }

    /// Append several entries with a single flush
    pub fn log_batch(&self, entries: &[ValuationEntry]) -> AppraisalResult<()> {
        if entries.is_empty() {
            return Ok(());
        }

        let mut file = self.open_for_append()?;

        for entry in entries {
            let json = serde_json::to_string(entry).map_err(|e| {
                AppraisalError::Json(format!("Failed to serialize valuation entry: {}", e))
            })?;

            writeln!(file, "{}", json).map_err(|e| {
                AppraisalError::Storage(format!("Failed to write valuation entry: {}", e))
            })?;
        }

        file.flush()
            .map_err(|e| AppraisalError::Storage(format!("Failed to flush valuation log: {}", e)))?;

        Ok(())
    }

    /// Read all entries, oldest first
    pub fn read_all(&self) -> AppraisalResult<Vec<ValuationEntry>> {
        if !self.log_path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&self.log_path)
            .map_err(|e| AppraisalError::Storage(format!("Failed to open valuation log: {}", e)))?;

        let mut entries = Vec::new();

        for (line_num, line) in BufReader::new(file).lines().enumerate() {
            let line = line.map_err(|e| {
                AppraisalError::Storage(format!(
                    "Failed to read valuation log line {}: {}",
                    line_num + 1,
                    e
                ))
            })?;

            if line.trim().is_empty() {
                continue;
            }

            let entry: ValuationEntry = serde_json::from_str(&line).map_err(|e| {
                AppraisalError::Json(format!(
                    "Failed to parse valuation entry at line {}: {}",
                    line_num + 1,
                    e
                ))
            })?;

            entries.push(entry);
        }

        Ok(entries)
    }

    /// Read the most recent `count` entries, oldest first
    pub fn read_recent(&self, count: usize) -> AppraisalResult<Vec<ValuationEntry>> {
        let mut entries = self.read_all()?;
        let start = entries.len().saturating_sub(count);
        Ok(entries.split_off(start))
    }

    /// Number of entries in the log
    pub fn entry_count(&self) -> AppraisalResult<usize> {
        Ok(self.read_all()?.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::VehicleRecord;
    use crate::services::ValuationCalculator;
    use tempfile::TempDir;

    fn entry(category: &str) -> ValuationEntry {
        let vehicle = VehicleRecord::default();
        let breakdown = ValuationCalculator::default().breakdown(&vehicle, category, 2025);
        ValuationEntry::record(&vehicle, &breakdown, 2025)
    }

    #[test]
    fn test_missing_log_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let log = ValuationLog::new(temp_dir.path().join("valuations.log"));

        assert!(log.read_all().unwrap().is_empty());
        assert_eq!(log.entry_count().unwrap(), 0);
    }

    #[test]
    fn test_log_and_read() {
        let temp_dir = TempDir::new().unwrap();
        let log = ValuationLog::new(temp_dir.path().join("valuations.log"));

        log.log(&entry("Standard")).unwrap();
        log.log(&entry("Luxury_EV")).unwrap();

        let entries = log.read_all().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].category, "Standard");
        assert_eq!(entries[1].category, "Luxury_EV");
    }

    #[test]
    fn test_batch_and_recent() {
        let temp_dir = TempDir::new().unwrap();
        let log = ValuationLog::new(temp_dir.path().join("nested").join("valuations.log"));

        log.log_batch(&[entry("Standard"), entry("Luxury_Gas"), entry("Luxury_EV")])
            .unwrap();
        log.log_batch(&[]).unwrap();

        assert_eq!(log.entry_count().unwrap(), 3);

        let recent = log.read_recent(2).unwrap();
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].category, "Luxury_Gas");
        assert_eq!(recent[1].category, "Luxury_EV");

        assert_eq!(log.read_recent(10).unwrap().len(), 3);
    }

    #[test]
    fn test_corrupt_line_reports_line_number() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("valuations.log");
        let log = ValuationLog::new(path.clone());

        log.log(&entry("Standard")).unwrap();
        let mut file = OpenOptions::new().append(true).open(&path).unwrap();
        writeln!(file, "not json").unwrap();

        let err = log.read_all().unwrap_err();
        assert!(err.to_string().contains("line 2"));
    }
}
