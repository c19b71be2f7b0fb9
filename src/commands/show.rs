use anyhow::Result;
use std::path::Path;
use trackmv::metadata;

/// Print the metadata tags of a single audio file, one line per field.
pub fn show_metadata(file_path: &str) -> Result<()> {
    let file_path = shellexpand::tilde(file_path).to_string();
    let metadata = metadata::read_track_metadata(Path::new(&file_path))?;

    for (label, value) in metadata.fields() {
        println!("{}: {}", label, value.unwrap_or(""));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_show_metadata_missing_file() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let file_path = temp_dir.path().join("missing.mp3");

        let result = show_metadata(file_path.to_str().unwrap());

        assert!(result.is_err());

        Ok(())
    }
}
