use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::metadata::TrackMetadata;

/// Fallback for a text field that is absent or empty.
const UNKNOWN: &str = "Unknown";

/// Result of a single rename attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenameOutcome {
    /// The file now lives at the given path.
    Renamed(PathBuf),
    /// Dry run: the rename would have produced the given path.
    Simulated(PathBuf),
    /// Nothing was done, with the reason (target already exists).
    Skipped(String),
    /// The rename was rejected or the filesystem call failed.
    Failed(String),
}

/// Sanitize a tag value for use in a filename: spaces become underscores,
/// everything that is not alphanumeric or an underscore is dropped.
pub fn sanitize(input: &str) -> String {
    input
        .chars()
        .map(|c| if c == ' ' { '_' } else { c })
        .filter(|c| c.is_alphanumeric() || *c == '_')
        .collect()
}

fn resolve<'a>(field: &'a Option<String>, default: &'a str) -> &'a str {
    match field.as_deref() {
        Some(value) if !value.is_empty() => value,
        _ => default,
    }
}

/// Zero-pad a track number to at least two digits. Non-numeric input falls
/// back to "00" rather than failing the whole rename.
fn format_track_number(raw: &str) -> String {
    match raw.trim().parse::<i64>() {
        Ok(number) => format!("{number:02}"),
        Err(_) => "00".to_string(),
    }
}

/// Build the new filename from the file's metadata:
/// `{artist} {album} {track} {title}{extension}`, each text segment
/// sanitized and the track number zero-padded to two digits.
///
/// The album artist tag is read into the record but deliberately takes no
/// part in the name. Missing or empty fields fall back to "Unknown" (or
/// track 0), so the result is always a usable filename.
pub fn build_filename(metadata: &TrackMetadata, original_path: &Path) -> String {
    let artist = sanitize(resolve(&metadata.artist, UNKNOWN));
    let album = sanitize(resolve(&metadata.album, UNKNOWN));
    let title = sanitize(resolve(&metadata.title, UNKNOWN));
    let track = format_track_number(resolve(&metadata.track_number, "0"));

    // Extension of the original file, kept verbatim with its leading dot.
    let extension = original_path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| format!(".{e}"))
        .unwrap_or_default();

    format!("{artist} {album} {track} {title}{extension}")
}

/// Rename the file at `original_path` to `new_filename` within the same
/// directory. Never overwrites: an existing file at the destination turns
/// the operation into a skip. With `dry_run` the outcome is computed and
/// reported without touching the filesystem.
///
/// Every failure is folded into the outcome; this never panics and never
/// returns an error to unwind through the caller.
pub fn execute_rename(original_path: &Path, new_filename: &str, dry_run: bool) -> RenameOutcome {
    if new_filename.is_empty() {
        return RenameOutcome::Failed("new filename is empty".to_string());
    }
    if !original_path.exists() {
        return RenameOutcome::Failed(format!(
            "source file '{}' does not exist",
            original_path.display()
        ));
    }

    // The rename stays inside the source's directory; only the base name
    // changes.
    let new_path = match original_path.parent() {
        Some(dir) => dir.join(new_filename),
        None => PathBuf::from(new_filename),
    };

    if new_path.exists() {
        return RenameOutcome::Skipped(format!("target '{}' already exists", new_path.display()));
    }

    if dry_run {
        debug!("dry run, leaving '{}' in place", original_path.display());
        return RenameOutcome::Simulated(new_path);
    }

    match fs::rename(original_path, &new_path) {
        Ok(()) => RenameOutcome::Renamed(new_path),
        Err(e) => RenameOutcome::Failed(format!(
            "failed to rename '{}' to '{}': {}",
            original_path.display(),
            new_path.display(),
            e
        )),
    }
}
