//! Core data types for the institution dataset and pipeline errors.

use serde::{Deserialize, Serialize};

/// Root of the institution dataset file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dataset {
    pub institutions: Vec<Institution>,
}

/// A single institution record. The pipeline never creates or removes
/// records; only `logo.local_path` is mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Institution {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<Logo>,
}

/// Logo source URL and standardized output location.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Logo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub download_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub local_path: Option<String>,
}

/// Terminal state of one record within a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordOutcome {
    Processed,
    Skipped,
    Failed,
}

/// Counters accumulated over a full pipeline run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub processed: u32,
    pub skipped: u32,
    pub failed: u32,
}

impl RunSummary {
    pub fn record(&mut self, outcome: RecordOutcome) {
        match outcome {
            RecordOutcome::Processed => self.processed += 1,
            RecordOutcome::Skipped => self.skipped += 1,
            RecordOutcome::Failed => self.failed += 1,
        }
    }
}

/// Errors that can occur in the logonorm library.
#[derive(thiserror::Error, Debug)]
pub enum LogoError {
    /// Input dataset missing or unparseable. Aborts the whole run.
    #[error("dataset error: {0}")]
    Dataset(String),

    #[error("download failed: {url} | status={status}")]
    Download { url: String, status: u16 },

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("decode error: {0}")]
    Decode(String),

    #[error("encode error: {0}")]
    Encode(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result type.
pub type LogoResult<T> = Result<T, LogoError>;
