//! logonorm — entry point.

use std::path::PathBuf;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

use logonorm::{Dataset, LogoPipeline, PipelineConfig, StandardizeOptions};

#[derive(Parser)]
#[command(
    name = "logonorm",
    about = "Fetch remote institution logos and standardize them into uniform square PNGs",
    version
)]
struct Cli {
    /// Input dataset JSON.
    #[arg(short, long, default_value = "institutions.json")]
    input: PathBuf,

    /// Output dataset JSON (input with localPath fields filled in).
    #[arg(short, long, default_value = "institutions.standard.json")]
    output: PathBuf,

    /// Directory receiving the standardized PNG files.
    #[arg(short = 'd', long, default_value = "logos")]
    logo_dir: PathBuf,

    /// Reprocess every record, ignoring existing output files.
    #[arg(long)]
    force: bool,

    /// Edge length of the output canvas in pixels.
    #[arg(long, default_value_t = 512)]
    target_size: u32,

    /// Percentage of the canvas reserved as transparent border.
    #[arg(long, default_value_t = 18)]
    padding_percent: u32,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse the input dataset and report its logo coverage.
    Validate,

    /// Generate shell completion scripts.
    Completions {
        /// Shell type (bash, zsh, fish, powershell, elvish).
        shell: Shell,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Some(Commands::Validate) => match Dataset::read_from_file(&cli.input) {
            Ok(dataset) => {
                let with_url = dataset
                    .institutions
                    .iter()
                    .filter(|i| {
                        i.logo
                            .as_ref()
                            .is_some_and(|logo| logo.download_url.is_some())
                    })
                    .count();
                let with_local = dataset
                    .institutions
                    .iter()
                    .filter(|i| i.logo.as_ref().is_some_and(|logo| logo.local_path.is_some()))
                    .count();

                println!("Valid dataset: {}", cli.input.display());
                println!("  Institutions: {}", dataset.institutions.len());
                println!("  With download URL: {with_url}");
                println!("  With local file: {with_local}");
            }
            Err(e) => {
                eprintln!("Invalid dataset: {e}");
                std::process::exit(1);
            }
        },

        Some(Commands::Completions { shell }) => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "logonorm", &mut std::io::stdout());
        }

        None => {
            let config = PipelineConfig {
                input_path: cli.input,
                output_path: cli.output.clone(),
                logo_dir: cli.logo_dir,
                force_reprocess: cli.force,
                standardize: StandardizeOptions {
                    target_size: cli.target_size,
                    padding_percent: cli.padding_percent,
                    ..StandardizeOptions::default()
                },
            };

            let summary = LogoPipeline::new(config).run().await?;

            println!();
            println!("Summary:");
            println!("- Processed: {}", summary.processed);
            println!("- Skipped:   {}", summary.skipped);
            println!("- Failed:    {}", summary.failed);
            println!();
            println!("Wrote: {}", cli.output.display());
        }
    }

    Ok(())
}
