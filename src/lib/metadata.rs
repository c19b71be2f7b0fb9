use anyhow::{Context, Result};
use lofty::file::TaggedFileExt;
use lofty::tag::ItemKey;
use std::path::Path;

/// Tags read from a single audio file. Any field may be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrackMetadata {
    pub title: Option<String>,
    pub artist: Option<String>,
    pub album_artist: Option<String>,
    pub track_number: Option<String>,
    pub album: Option<String>,
}

impl TrackMetadata {
    /// Label/value pairs in display order.
    pub fn fields(&self) -> [(&'static str, Option<&str>); 5] {
        [
            ("Title", self.title.as_deref()),
            ("Artist", self.artist.as_deref()),
            ("Album Artist", self.album_artist.as_deref()),
            ("Track No.", self.track_number.as_deref()),
            ("Album", self.album.as_deref()),
        ]
    }
}

/// Read track metadata from a music file. A readable file without any tag
/// yields a record with every field absent.
pub fn read_track_metadata(file_path: &Path) -> Result<TrackMetadata> {
    let tagged_file = lofty::read_from_path(file_path)
        .with_context(|| format!("Failed to read tags from '{}'", file_path.display()))?;

    let mut metadata = TrackMetadata::default();
    if let Some(tag) = tagged_file.tags().first() {
        metadata.title = tag.get_string(&ItemKey::TrackTitle).map(str::to_string);
        metadata.artist = tag.get_string(&ItemKey::TrackArtist).map(str::to_string);
        metadata.album_artist = tag.get_string(&ItemKey::AlbumArtist).map(str::to_string);
        metadata.track_number = tag.get_string(&ItemKey::TrackNumber).map(str::to_string);
        metadata.album = tag.get_string(&ItemKey::AlbumTitle).map(str::to_string);
    }

    Ok(metadata)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_read_track_metadata_missing_file() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let file_path = temp_dir.path().join("missing.mp3");

        let result = read_track_metadata(&file_path);

        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Failed to read tags"));

        Ok(())
    }

    #[test]
    fn test_read_track_metadata_not_an_audio_file() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let file_path = temp_dir.path().join("notes.mp3");
        fs::File::create(&file_path)?.write_all(b"plain text, not audio")?;

        let result = read_track_metadata(&file_path);

        assert!(result.is_err());

        Ok(())
    }

    #[test]
    fn test_fields_display_order() {
        let metadata = TrackMetadata {
            title: Some("Harder".to_string()),
            artist: Some("Daft Punk".to_string()),
            album_artist: None,
            track_number: Some("3".to_string()),
            album: Some("Discovery".to_string()),
        };

        let labels: Vec<&str> = metadata.fields().iter().map(|(label, _)| *label).collect();
        assert_eq!(
            labels,
            vec!["Title", "Artist", "Album Artist", "Track No.", "Album"]
        );
        assert_eq!(metadata.fields()[0].1, Some("Harder"));
        assert_eq!(metadata.fields()[2].1, None);
    }
}
