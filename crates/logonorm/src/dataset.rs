//! Dataset file reading and writing.

use std::path::Path;

use crate::types::{Dataset, LogoError, LogoResult};

impl Dataset {
    /// Read and parse a dataset file. Any failure here aborts the run.
    pub fn read_from_file(path: &Path) -> LogoResult<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| LogoError::Dataset(format!("failed to read {}: {e}", path.display())))?;
        serde_json::from_str(&raw)
            .map_err(|e| LogoError::Dataset(format!("failed to parse {}: {e}", path.display())))
    }

    /// Write the dataset as pretty-printed JSON (2-space indent).
    pub fn write_to_file(&self, path: &Path) -> LogoResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(self)
            .map_err(|e| LogoError::Dataset(format!("failed to serialize dataset: {e}")))?;
        std::fs::write(path, json)?;
        Ok(())
    }
}
