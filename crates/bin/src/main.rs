//! Tally CLI binary.
//!
//! Runs the client order report over a delimited file and prints it to
//! stdout. Logs go to stderr.

use clap::Parser;
use std::path::{Path, PathBuf};
use std::process;
use tally::config::DEFAULT_DATA_PATH;
use tally::{PipelineConfig, ReportPipeline};
use tally_output::{ExportFormat, Exporter, ReportFormat};
use tracing::info;

#[derive(Parser)]
#[command(name = "tally")]
#[command(about = "Tally: client order report", long_about = None)]
#[command(version)]
struct Cli {
    /// Order table to report on
    #[arg(default_value = DEFAULT_DATA_PATH)]
    data: PathBuf,

    /// Number of clients to rank and summarise
    #[arg(long, default_value = "5")]
    top_clients: usize,

    /// Number of item categories to rank
    #[arg(long, default_value = "3")]
    top_categories: usize,

    /// Report format (text or markdown)
    #[arg(long, default_value = "text")]
    format: ReportFormat,

    /// Write the scaled client summary to this file
    #[arg(long)]
    export: Option<PathBuf>,

    /// Export format (csv, json or pretty-json); inferred from the file
    /// extension when omitted
    #[arg(long, requires = "export")]
    export_format: Option<ExportFormat>,

    /// Log level used when RUST_LOG is unset
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    let config = PipelineConfig {
        data_path: cli.data,
        top_clients: cli.top_clients,
        top_categories: cli.top_categories,
        ..PipelineConfig::default()
    };

    let report = ReportPipeline::new(config).run()?;
    print!("{}", report.render(cli.format));

    if let Some(path) = cli.export {
        let format = cli
            .export_format
            .unwrap_or_else(|| format_from_extension(&path));
        report.scaled_summary.export_to_file(&path, format)?;
        info!(path = %path.display(), ?format, "exported client summary");
    }

    Ok(())
}

/// Install a stderr subscriber. `RUST_LOG` wins over `level`.
fn init_tracing(level: &str) {
    use tracing_subscriber::EnvFilter;

    let directive = std::env::var("RUST_LOG")
        .ok()
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| level.to_string());
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn format_from_extension(path: &Path) -> ExportFormat {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("json") => ExportFormat::Json,
        _ => ExportFormat::Csv,
    }
}
