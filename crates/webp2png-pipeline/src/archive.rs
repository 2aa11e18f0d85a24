//! In-memory ZIP packaging for batch downloads.
//!
//! Writes one deflate-compressed member per converted image into a
//! `Cursor<Vec<u8>>` and hands back the finished buffer. Nothing touches
//! the filesystem.

use std::io::{Cursor, Write};

use zip::ZipWriter;
use zip::write::FileOptions;

use crate::types::{ArchiveError, ConvertedImage};

/// Download name for the combined archive.
pub const ARCHIVE_FILENAME: &str = "converted_images.zip";

/// Package converted images into a single ZIP archive.
///
/// Members are written in batch order, each named by its derived PNG
/// filename. Duplicate names are written as-is — the pipeline does not
/// deduplicate collisions.
///
/// # Errors
///
/// Returns [`ArchiveError`] if the ZIP writer or the in-memory sink
/// fails; neither is expected for valid input.
pub fn build_archive(images: &[ConvertedImage]) -> Result<Vec<u8>, ArchiveError> {
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let options = FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    for image in images {
        zip.start_file(image.filename.as_str(), options)?;
        zip.write_all(&image.data)?;
    }

    let cursor = zip.finish()?;
    Ok(cursor.into_inner())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::io::Read;

    use super::*;

    fn sample(filename: &str, data: &[u8]) -> ConvertedImage {
        ConvertedImage {
            filename: filename.to_owned(),
            data: data.to_vec(),
        }
    }

    #[test]
    fn archive_contains_every_member_with_exact_bytes() {
        let images = vec![
            sample("a.png", b"first payload"),
            sample("b.png", b"second payload"),
            sample("c.png", b"third payload"),
        ];

        let bytes = build_archive(&images).unwrap();
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        assert_eq!(archive.len(), 3);

        for (index, expected) in images.iter().enumerate() {
            let mut entry = archive.by_index(index).unwrap();
            assert_eq!(entry.name(), expected.filename);

            let mut contents = Vec::new();
            entry.read_to_end(&mut contents).unwrap();
            assert_eq!(contents, expected.data);
        }
    }

    #[test]
    fn empty_batch_yields_empty_archive() {
        let bytes = build_archive(&[]).unwrap();
        let archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        assert_eq!(archive.len(), 0);
    }

    #[test]
    fn duplicate_member_names_are_kept() {
        let images = vec![sample("same.png", b"one"), sample("same.png", b"two")];

        let bytes = build_archive(&images).unwrap();
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        assert_eq!(archive.len(), 2);
        assert_eq!(archive.by_index(0).unwrap().name(), "same.png");
        assert_eq!(archive.by_index(1).unwrap().name(), "same.png");
    }
}
