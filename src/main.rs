use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use minfmt::command::{CompressReport, DecompressReport, compress_file, decompress_file};
use minfmt::engine::types::FormatVersion;
use minfmt::logging;
use minfmt::shared::config::{CONFIG, Settings};
use tracing::error;

#[derive(Parser)]
#[command(name = "minfmt")]
#[command(version, about = "Deduplicate and compress text and CSV files into MIN containers")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Deduplicate and compress files into `<name>_deduped.min`
    Compress {
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Container layout to write (1 or 2)
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=2))]
        format_version: Option<u8>,
    },

    /// Restore `.min` files to CSV or text
    #[command(
        after_help = "Reads zstd- and gzip-compressed MIN files. LZMA-compressed files \
                      written by older releases are not supported."
    )]
    Decompress {
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
}

fn format_bytes(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.2} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} bytes", bytes)
    }
}

fn file_name(path: &std::path::Path) -> String {
    path.file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .into_owned()
}

fn print_compressed(report: &CompressReport) {
    println!("• {}", file_name(&report.input));
    println!("  Removed {} duplicate/blank record(s)", report.records_removed());
    println!(
        "  {} -> {} ({:.1}% smaller)",
        format_bytes(report.original_size),
        format_bytes(report.compressed_size),
        report.reduction_ratio()
    );
    println!("  Saved to: {}", report.output.display());
}

fn print_decompressed(report: &DecompressReport) {
    println!("• {}", file_name(&report.input));
    println!("  {} {} restored", report.records, report.kind);
    println!("  Decompressed to: {}", report.output.display());
}

/// Runs `handle` on every file; a failure is reported and the rest continue.
/// Returns the number of failed files.
fn run_each<R>(
    files: &[PathBuf],
    handle: impl Fn(&std::path::Path) -> anyhow::Result<Option<R>>,
    print: impl Fn(&R),
) -> usize {
    let mut failed = 0;
    for file in files {
        match handle(file) {
            Ok(Some(report)) => print(&report),
            Ok(None) => println!("• {} skipped (missing or empty)", file_name(file)),
            Err(e) => {
                failed += 1;
                error!(target: "minfmt::main", file = %file.display(), error = ?e, "File failed");
                eprintln!("✗ {}: {:#}", file_name(file), e);
            }
        }
    }
    failed
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    let mut settings: Settings = (**CONFIG).clone();
    logging::init(&settings.logging)?;

    let failed = match cli.command {
        Commands::Compress {
            files,
            format_version,
        } => {
            if let Some(v) = format_version {
                settings.codec.write_version = FormatVersion::try_from(v)?;
            }
            run_each(&files, |f| compress_file(f, &settings), print_compressed)
        }
        Commands::Decompress { files } => {
            run_each(&files, |f| decompress_file(f, &settings), print_decompressed)
        }
    };

    if failed > 0 {
        eprintln!("{} file(s) failed", failed);
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}
