//! Deployment synchronization.
//!
//! Clears stale build artifacts from the destination, then copies the
//! contents of the build directory across, stamping the build timestamp
//! into JavaScript files as they are copied. Cleanup runs fully before the
//! copy phase; within each phase every per-file step is independently
//! failable, so one bad file never blocks the rest.

use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use chrono::Local;
use filetime::FileTime;
use glob::Pattern;

/// Format of the timestamp stamped ahead of the marker, e.g.
/// `2026-08-07 14:03:55`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A recoverable per-file failure during cleanup or copy.
#[derive(Debug, Clone)]
pub struct SyncWarning {
    pub file_path: String,
    pub error: String,
}

/// Counters and warnings from one synchronization run.
#[derive(Debug, Default)]
pub struct SyncSummary {
    /// Files successfully copied from the build directory.
    pub processed: usize,
    /// Subset of `processed` that had the marker stamped.
    pub stamped: usize,
    /// Stale artifacts removed from the destination.
    pub cleaned: usize,
    /// True when the build directory existed but contained no files.
    pub empty_source: bool,
    pub warnings: Vec<SyncWarning>,
}

/// Copies a build directory into a deployment directory.
///
/// Only the immediate children of the build directory are considered;
/// subdirectories are ignored. Files whose name ends in `.js` get the
/// timestamp stamped ahead of every marker occurrence; everything else is
/// copied byte-for-byte with its modification time preserved.
pub struct Synchronizer {
    dist_root: PathBuf,
    destination: PathBuf,
    marker: String,
    stale_patterns: Vec<Pattern>,
    verbose: bool,
}

impl Synchronizer {
    pub fn new(
        dist_root: impl Into<PathBuf>,
        destination: impl Into<PathBuf>,
        marker: impl Into<String>,
        stale_patterns: &[String],
        verbose: bool,
    ) -> Result<Self> {
        let stale_patterns = stale_patterns
            .iter()
            .map(|p| {
                Pattern::new(p)
                    .with_context(|| format!("Invalid stale-artifact pattern: \"{}\"", p))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            dist_root: dist_root.into(),
            destination: destination.into(),
            marker: marker.into(),
            stale_patterns,
            verbose,
        })
    }

    /// Run the cleanup-then-copy sequence, writing progress to stdout.
    pub fn sync(&self) -> Result<SyncSummary> {
        self.sync_to(&mut std::io::stdout().lock())
    }

    /// Run the cleanup-then-copy sequence, writing progress to `progress`.
    ///
    /// Fatal errors: the build directory does not exist, or the destination
    /// directory cannot be created. Everything past those preconditions is
    /// per-file recoverable and lands in [`SyncSummary::warnings`].
    pub fn sync_to<W: Write>(&self, progress: &mut W) -> Result<SyncSummary> {
        if !self.dist_root.is_dir() {
            bail!(
                "Source directory '{}' does not exist.\n\
                 Hint: run the build first, or check the 'distRoot' setting.",
                self.dist_root.display()
            );
        }

        fs::create_dir_all(&self.destination).with_context(|| {
            format!(
                "Failed to create destination directory '{}'",
                self.destination.display()
            )
        })?;

        let mut summary = SyncSummary::default();
        self.clean_stale(&mut summary, progress);
        self.copy_files(&mut summary, progress)?;

        Ok(summary)
    }

    /// Delete destination entries matching a stale-artifact pattern.
    ///
    /// Best-effort: every failure is a warning, never an abort, so leftover
    /// artifacts from older builds cannot block a fresh deployment.
    fn clean_stale<W: Write>(&self, summary: &mut SyncSummary, progress: &mut W) {
        let _ = writeln!(
            progress,
            "Cleaning stale build artifacts in '{}'...",
            self.destination.display()
        );

        let entries = match fs::read_dir(&self.destination) {
            Ok(entries) => entries,
            Err(e) => {
                summary.warnings.push(SyncWarning {
                    file_path: self.destination.display().to_string(),
                    error: format!("Could not enumerate destination: {}", e),
                });
                return;
            }
        };

        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    summary.warnings.push(SyncWarning {
                        file_path: self.destination.display().to_string(),
                        error: e.to_string(),
                    });
                    continue;
                }
            };

            let name = entry.file_name();
            let Some(name) = name.to_str() else { continue };

            if self.is_stale(name) {
                match fs::remove_file(entry.path()) {
                    Ok(()) => {
                        summary.cleaned += 1;
                        if self.verbose {
                            let _ = writeln!(progress, "Removed stale '{}'", name);
                        }
                    }
                    Err(e) => summary.warnings.push(SyncWarning {
                        file_path: entry.path().to_string_lossy().to_string(),
                        error: format!("Could not remove stale file: {}", e),
                    }),
                }
            }
        }
    }

    fn is_stale(&self, name: &str) -> bool {
        self.stale_patterns.iter().any(|p| p.matches(name))
    }

    /// Copy every regular file from the build directory into the destination.
    fn copy_files<W: Write>(&self, summary: &mut SyncSummary, progress: &mut W) -> Result<()> {
        // One timestamp per run; every stamped file carries the same value.
        let timestamp = Local::now().format(TIMESTAMP_FORMAT).to_string();

        let mut files: Vec<PathBuf> = Vec::new();
        for entry in fs::read_dir(&self.dist_root)
            .with_context(|| format!("Failed to enumerate '{}'", self.dist_root.display()))?
        {
            let path = entry?.path();
            if path.is_file() {
                files.push(path);
            }
        }
        files.sort();

        if files.is_empty() {
            summary.empty_source = true;
            return Ok(());
        }

        for source in files {
            let Some(name) = source.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            let dest = self.destination.join(name);

            let result = if name.ends_with(".js") {
                self.stamp_and_copy(&source, &dest, &timestamp, summary, progress)
            } else {
                copy_verbatim(&source, &dest)
            };

            match result {
                Ok(()) => {
                    summary.processed += 1;
                    let _ = writeln!(progress, "File copied successfully to '{}'", dest.display());
                }
                Err(e) => summary.warnings.push(SyncWarning {
                    file_path: source.to_string_lossy().to_string(),
                    error: format!("{:#}", e),
                }),
            }
        }

        Ok(())
    }

    /// Copy a JavaScript file, stamping the timestamp ahead of the marker.
    ///
    /// When the marker is absent the content is written unchanged and no
    /// stamp is reported for the file.
    fn stamp_and_copy<W: Write>(
        &self,
        source: &Path,
        dest: &Path,
        timestamp: &str,
        summary: &mut SyncSummary,
        progress: &mut W,
    ) -> Result<()> {
        let content = fs::read_to_string(source)
            .with_context(|| format!("Failed to read '{}'", source.display()))?;

        let stamped = stamp_content(&content, &self.marker, timestamp);
        let output = stamped.as_deref().unwrap_or(&content);

        fs::write(dest, output)
            .with_context(|| format!("Failed to write '{}'", dest.display()))?;

        if stamped.is_some() {
            summary.stamped += 1;
            let _ = writeln!(
                progress,
                "Stamped build timestamp '{}' into '{}'",
                timestamp,
                dest.display()
            );
        }

        Ok(())
    }
}

/// Prefix every occurrence of `marker` with `"<timestamp> "`.
///
/// Returns `None` when the marker does not occur. This is a literal
/// substring substitution, not a templating pass: the content is otherwise
/// untouched.
pub fn stamp_content(content: &str, marker: &str, timestamp: &str) -> Option<String> {
    if marker.is_empty() || !content.contains(marker) {
        return None;
    }

    let replacement = format!("{} {}", timestamp, marker);
    Some(content.replace(marker, &replacement))
}

/// Byte-for-byte copy that carries the source modification time across.
fn copy_verbatim(source: &Path, dest: &Path) -> Result<()> {
    fs::copy(source, dest).with_context(|| {
        format!(
            "Failed to copy '{}' to '{}'",
            source.display(),
            dest.display()
        )
    })?;

    let metadata = fs::metadata(source)?;
    let mtime = FileTime::from_last_modification_time(&metadata);
    filetime::set_file_mtime(dest, mtime)
        .with_context(|| format!("Failed to preserve mtime on '{}'", dest.display()))?;

    Ok(())
}
