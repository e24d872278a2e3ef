//! Sequential orchestration of a standardization run.

use std::path::{Path, PathBuf};

use crate::fetch::LogoFetcher;
use crate::policy::should_process;
use crate::standardize::{standardize, StandardizeOptions};
use crate::types::{Dataset, Institution, LogoError, LogoResult, RecordOutcome, RunSummary};

/// Immutable configuration for one pipeline run.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Dataset file to read.
    pub input_path: PathBuf,
    /// Where the updated dataset is written.
    pub output_path: PathBuf,
    /// Directory receiving the standardized `<id>.png` files.
    pub logo_dir: PathBuf,
    /// Process records even when their output already exists.
    pub force_reprocess: bool,
    pub standardize: StandardizeOptions,
}

/// Runs the fetch → standardize → write cycle over a dataset, strictly in
/// record order. One record's failure never aborts the run.
pub struct LogoPipeline {
    config: PipelineConfig,
    fetcher: LogoFetcher,
}

impl LogoPipeline {
    pub fn new(config: PipelineConfig) -> Self {
        Self {
            config,
            fetcher: LogoFetcher::new(),
        }
    }

    /// Process every record and persist the updated dataset. Only
    /// dataset-level I/O errors propagate; per-record failures are logged
    /// and counted.
    pub async fn run(&self) -> LogoResult<RunSummary> {
        let mut dataset = Dataset::read_from_file(&self.config.input_path)?;
        std::fs::create_dir_all(&self.config.logo_dir)?;

        tracing::info!(
            "standardizing {} records into {}",
            dataset.institutions.len(),
            self.config.logo_dir.display()
        );

        let mut summary = RunSummary::default();
        for institution in &mut dataset.institutions {
            let outcome = self.process_record(institution).await;
            summary.record(outcome);
        }

        dataset.write_to_file(&self.config.output_path)?;

        tracing::info!(
            processed = summary.processed,
            skipped = summary.skipped,
            failed = summary.failed,
            "run complete"
        );
        Ok(summary)
    }

    async fn process_record(&self, institution: &mut Institution) -> RecordOutcome {
        let Some(url) = institution
            .logo
            .as_ref()
            .and_then(|logo| logo.download_url.clone())
        else {
            tracing::debug!(id = %institution.id, "no download url, skipping");
            return RecordOutcome::Skipped;
        };

        let dest = self.config.logo_dir.join(logo_filename(&institution.id));
        let dest_exists = dest.exists();
        let recorded_exists = institution
            .logo
            .as_ref()
            .and_then(|logo| logo.local_path.as_deref())
            .is_some_and(|path| Path::new(path).exists());

        if !should_process(self.config.force_reprocess, dest_exists || recorded_exists) {
            // Heal records whose output exists but was never recorded.
            if dest_exists {
                if let Some(logo) = institution.logo.as_mut() {
                    if logo.local_path.as_deref().map_or(true, str::is_empty) {
                        logo.local_path = Some(dest.display().to_string());
                    }
                }
            }
            tracing::debug!(id = %institution.id, "output present, skipping");
            return RecordOutcome::Skipped;
        }

        match self.standardize_one(&url, &dest).await {
            Ok(()) => {
                if let Some(logo) = institution.logo.as_mut() {
                    logo.local_path = Some(dest.display().to_string());
                }
                println!("OK: {} -> {}", institution.name, dest.display());
                RecordOutcome::Processed
            }
            Err(e) => {
                tracing::warn!(id = %institution.id, error = %e, "record failed");
                eprintln!("ERRO: {} ({}) -> {}", institution.name, institution.id, e);
                RecordOutcome::Failed
            }
        }
    }

    async fn standardize_one(&self, url: &str, dest: &Path) -> LogoResult<()> {
        let raw = self.fetcher.fetch(url).await?;
        let png = standardize(&raw, &self.config.standardize)?;
        std::fs::write(dest, png)?;
        Ok(())
    }
}

fn logo_filename(id: &str) -> String {
    format!("{id}.png")
}
