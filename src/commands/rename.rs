use anyhow::{anyhow, Result};
use std::path::Path;
use tracing::warn;
use trackmv::renamer::{self, RenameOutcome};
use trackmv::{is_audio_file, metadata};

/// Rename a single audio file after its metadata tags. With `dry_run` the
/// planned rename is reported without touching the filesystem.
pub fn rename_from_metadata(file_path: &str, dry_run: bool) -> Result<()> {
    let file_path = shellexpand::tilde(file_path).to_string();
    let path = Path::new(&file_path);

    if !is_audio_file(path) {
        warn!(
            "'{}' does not have a recognized audio extension",
            path.display()
        );
    }

    // A file the tag reader cannot open aborts before any filename is built.
    let metadata = metadata::read_track_metadata(path)?;
    let new_filename = renamer::build_filename(&metadata, path);

    match renamer::execute_rename(path, &new_filename, dry_run) {
        RenameOutcome::Renamed(new_path) => {
            println!("Renamed '{}' to '{}'", path.display(), new_path.display());
            Ok(())
        }
        RenameOutcome::Simulated(new_path) => {
            println!(
                "Dry run: would rename '{}' to '{}'",
                path.display(),
                new_path.display()
            );
            Ok(())
        }
        RenameOutcome::Skipped(reason) => {
            // Declining to overwrite is not an error.
            println!("Skipping: {reason}");
            Ok(())
        }
        RenameOutcome::Failed(reason) => Err(anyhow!(reason)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_rename_from_metadata_missing_file() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let file_path = temp_dir.path().join("missing.mp3");

        let result = rename_from_metadata(file_path.to_str().unwrap(), false);

        assert!(result.is_err());
        // The failed run created nothing next to the missing source.
        assert_eq!(fs::read_dir(temp_dir.path())?.count(), 0);

        Ok(())
    }

    #[test]
    fn test_rename_from_metadata_unreadable_file_leaves_it_alone() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let file_path = temp_dir.path().join("notes.mp3");
        fs::File::create(&file_path)?.write_all(b"plain text, not audio")?;

        let result = rename_from_metadata(file_path.to_str().unwrap(), false);

        assert!(result.is_err());
        assert!(file_path.exists());

        Ok(())
    }
}
