//! The copy run itself (made by FontLab https://www.fontlab.com/)

use std::ffi::OsStr;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};

use crate::config::CopierConfig;
use crate::error::{CopierError, Result};
use crate::fs::{already_exists, FontFs};
use crate::report::{CopiedFont, CopyFailure, CopyReport};

/// The only extension that gets copied. Compared literally.
pub const FONT_EXTENSION: &str = "ttf";

/// Copy every top-level `.ttf` file from `config.source` into `config.destination`.
///
/// Both directories are checked before anything is listed, so a
/// configuration error never leaves files behind. Without `keep_going` the
/// first failed copy aborts the run; with it, failures land in the report.
pub fn copy_fonts(config: &CopierConfig, fs: &impl FontFs) -> Result<CopyReport> {
    if !fs.is_dir(&config.source) {
        return Err(CopierError::SourceMissing(config.source.clone()));
    }
    if !fs.is_dir(&config.destination) {
        return Err(CopierError::DestinationMissing(config.destination.clone()));
    }

    let entries = fs
        .list_dir(&config.source, config.follow_symlinks)
        .map_err(|source| CopierError::List {
            path: config.source.clone(),
            source,
        })?;

    let mut report = CopyReport {
        dry_run: config.dry_run,
        ..CopyReport::default()
    };

    for entry in entries {
        if !is_ttf(&entry.path) {
            debug!("skipping {}", entry.path.display());
            report.skipped += 1;
            continue;
        }

        let target = config.destination.join(&entry.file_name);

        if let Some(source) = entry.error {
            record_failure(config, &mut report, entry.path, target, source)?;
            continue;
        }

        if !entry.is_file {
            debug!("skipping {}", entry.path.display());
            report.skipped += 1;
            continue;
        }

        if config.dry_run {
            if !config.overwrite && fs.exists(&target) {
                let source = already_exists(&target);
                record_failure(config, &mut report, entry.path, target, source)?;
                continue;
            }

            debug!("would copy {} -> {}", entry.path.display(), target.display());
            report.copied.push(CopiedFont {
                source: entry.path,
                destination: target,
                bytes: 0,
            });
            continue;
        }

        match fs.copy_file(&entry.path, &target, config.overwrite) {
            Ok(bytes) => {
                debug!(
                    "copied {} -> {} ({bytes} bytes)",
                    entry.path.display(),
                    target.display()
                );
                report.copied.push(CopiedFont {
                    source: entry.path,
                    destination: target,
                    bytes,
                });
            }
            Err(source) => record_failure(config, &mut report, entry.path, target, source)?,
        }
    }

    info!(
        "{} font(s) copied ({} bytes), {} failed, {} skipped",
        report.copied.len(),
        report.total_bytes(),
        report.failed.len(),
        report.skipped
    );

    Ok(report)
}

/// Abort the run, or with `keep_going` note the failure in the report.
fn record_failure(
    config: &CopierConfig,
    report: &mut CopyReport,
    from: PathBuf,
    to: PathBuf,
    source: io::Error,
) -> Result<()> {
    if !config.keep_going {
        return Err(CopierError::Copy { from, to, source });
    }

    warn!("failed to copy {}: {source}", from.display());
    report.failed.push(CopyFailure {
        source: from,
        destination: to,
        error: source.to_string(),
    });
    Ok(())
}

/// True when the final extension of `path` is exactly `ttf`.
pub fn is_ttf(path: &Path) -> bool {
    path.extension() == Some(OsStr::new(FONT_EXTENSION))
}
