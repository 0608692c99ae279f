//! fontcopy CLI (made by FontLab https://www.fontlab.com/)

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, ValueHint};
use log::LevelFilter;

use fontcopy_core::config::{CopierConfig, DEFAULT_DESTINATION, DEFAULT_SOURCE};
use fontcopy_core::copier::copy_fonts;
use fontcopy_core::fs::{DiskFs, FontFs};
use fontcopy_core::report::{write_json_pretty, CopyOutcome, CopyReport};

/// Validation passed and every eligible font was copied (possibly none).
pub const EXIT_OK: i32 = 0;
/// A directory check failed, or a copy failed without `--keep-going`.
pub const EXIT_FAILURE: i32 = 1;
/// `--keep-going` finished but some fonts failed to copy.
pub const EXIT_PARTIAL: i32 = 2;

/// CLI entrypoint for copy-fonts.
#[derive(Debug, Parser)]
#[command(
    name = "copy-fonts",
    about = "Copy top-level .ttf fonts into a shared font volume (made by FontLab https://www.fontlab.com/)"
)]
pub struct Cli {
    /// Directory holding the .ttf files
    #[arg(
        long = "source",
        env = "FONTCOPY_SOURCE",
        default_value = DEFAULT_SOURCE,
        value_hint = ValueHint::DirPath
    )]
    source: PathBuf,

    /// Directory the fonts are copied into
    #[arg(
        long = "dest",
        env = "FONTCOPY_DEST",
        default_value = DEFAULT_DESTINATION,
        value_hint = ValueHint::DirPath
    )]
    dest: PathBuf,

    /// Record failed copies and continue with the remaining fonts
    #[arg(long = "keep-going", action = ArgAction::SetTrue)]
    keep_going: bool,

    /// Show what would be copied without writing anything
    #[arg(long = "dry-run", action = ArgAction::SetTrue)]
    dry_run: bool,

    /// Treat an existing destination file as a failure instead of replacing it
    #[arg(long = "no-overwrite", action = ArgAction::SetTrue)]
    no_overwrite: bool,

    /// Skip symlinks instead of copying the files they point at
    #[arg(long = "no-follow-symlinks", action = ArgAction::SetTrue)]
    no_follow_symlinks: bool,

    /// Print the copy report as JSON instead of a status line
    #[arg(long = "json", action = ArgAction::SetTrue)]
    json: bool,

    /// More log output on stderr (repeatable)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, conflicts_with = "quiet")]
    verbose: u8,

    /// Only log errors
    #[arg(short = 'q', long = "quiet", action = ArgAction::SetTrue)]
    quiet: bool,
}

impl Cli {
    fn config(&self) -> CopierConfig {
        CopierConfig::new(&self.source, &self.dest)
            .keep_going(self.keep_going)
            .dry_run(self.dry_run)
            .overwrite(!self.no_overwrite)
            .follow_symlinks(!self.no_follow_symlinks)
    }

    fn log_level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::Error;
        }
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

/// Parse CLI args, run the copy and return the process exit code.
pub fn run() -> Result<i32> {
    let cli = Cli::parse();
    init_logging(cli.log_level());

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    execute(&cli, &DiskFs, &mut handle)
}

fn init_logging(level: LevelFilter) {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(level)
        .format_timestamp(None)
        .parse_env("RUST_LOG");
    // A logger may already be installed when running under tests.
    let _ = builder.try_init();
}

fn execute(cli: &Cli, fs: &impl FontFs, mut w: impl Write) -> Result<i32> {
    let report = match copy_fonts(&cli.config(), fs) {
        Ok(report) => report,
        Err(err) if err.is_configuration() => return Err(err.into()),
        Err(err) => {
            return Err(anyhow::Error::new(err)
                .context("copy aborted; rerun with --keep-going to continue past failed fonts"))
        }
    };

    if cli.json {
        write_json_pretty(&report, &mut w).context("failed to write JSON report")?;
    } else {
        writeln!(w, "{}", report.status_message())?;
    }

    Ok(exit_code(&report))
}

fn exit_code(report: &CopyReport) -> i32 {
    match report.outcome() {
        CopyOutcome::NoFonts | CopyOutcome::Completed => EXIT_OK,
        CopyOutcome::Partial => EXIT_PARTIAL,
    }
}

#[cfg(test)]
mod tests;
