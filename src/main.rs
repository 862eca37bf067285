use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Parser;
use qrbatch::{run_batch, BatchConfig, LabelColumn, Redundancy};

/// Generates a QR code image for each row in the specified input file.
#[derive(Parser)]
#[command(name = "qrbatch", version, about)]
struct Cli {
    /// Input file to process
    #[arg(short, long)]
    input: PathBuf,

    /// Field separator used in the input file
    #[arg(short, long, default_value_t = ';')]
    separator: char,

    /// Skip lines starting with this marker
    #[arg(long)]
    comment: Option<char>,

    /// Zero-based index or header name of the column used for file names
    #[arg(short, long, default_value = "0")]
    label_column: LabelColumn,

    /// Destination directory for the generated images
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,

    /// Pixel size of one module
    #[arg(long, default_value_t = 10)]
    scale: u32,

    /// Error-correction tier: low, medium, quartile, or high
    #[arg(short, long, default_value = "high")]
    redundancy: Redundancy,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let config = BatchConfig {
        input: cli.input,
        output_dir: cli.output_dir,
        separator: single_byte(cli.separator, "separator")?,
        comment: cli.comment.map(|c| single_byte(c, "comment")).transpose()?,
        label_column: cli.label_column,
        scale: cli.scale,
        redundancy: cli.redundancy,
    };

    let summary = run_batch(&config)?;
    log::info!(
        "{} of {} rows written to {}",
        summary.written(),
        summary.outcomes.len(),
        config.output_dir.display()
    );
    Ok(())
}

fn single_byte(c: char, flag: &str) -> Result<u8> {
    match u8::try_from(c) {
        Ok(b) => Ok(b),
        Err(_) => bail!("{flag} must be a single-byte character, got '{c}'"),
    }
}
