//! CLI entry point for the inactive-block annotation reporter.

use clap::Parser;
use colored::Colorize;
use irblocks::{extractor, output};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "irblocks")]
#[command(
    author,
    version,
    about = "Report inactive code block annotations embedded in LLVM IR"
)]
struct Cli {
    /// Path to the LLVM IR file to scan
    ir_file: PathBuf,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match extractor::extract_file(&cli.ir_file) {
        Ok(scan) => {
            for warning in &scan.warnings {
                eprintln!("{} {}", "warning:".yellow().bold(), warning);
            }

            print!("{}", output::format_report(&scan));
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(2)
        }
    }
}
