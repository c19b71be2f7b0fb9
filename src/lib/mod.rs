//! # trackmv core library
//!
//! Reads metadata tags from a single audio file and derives a new filename
//! from them. The `metadata` module wraps the tag reader; the `renamer`
//! module holds the sanitization, filename assembly, and guarded rename.

pub mod metadata;
pub mod renamer;

use std::path::Path;

/// Audio file extensions the tag reader is expected to handle.
/// Please update this list when adding new audio formats
pub const AUDIO_EXTENSIONS: &[&str] = &[
    "mp3", "aac", "m4a", "m4b", "mp4", "flac", "ogg", "opus", "ape", "aiff", "wav", "wma",
];

/// Check if a file path has a supported audio extension
pub fn is_audio_file<P: AsRef<Path>>(path: P) -> bool {
    let ext = path
        .as_ref()
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .unwrap_or_default();

    AUDIO_EXTENSIONS.contains(&ext.as_str())
}
