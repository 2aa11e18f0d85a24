//! Shared types for the webp2png conversion pipeline.

use serde::{Deserialize, Serialize};

/// One uploaded file: raw bytes plus the filename the browser reported.
///
/// Ephemeral — owned by the UI layer and read by the pipeline for the
/// duration of a single batch run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadedAsset {
    /// Original filename, including its extension.
    pub filename: String,
    /// Raw file contents as read from the upload widget.
    pub data: Vec<u8>,
}

impl UploadedAsset {
    /// Create a new asset from a filename and its raw bytes.
    #[must_use]
    pub const fn new(filename: String, data: Vec<u8>) -> Self {
        Self { filename, data }
    }
}

/// One successfully converted image: the derived `.png` filename and the
/// complete PNG byte buffer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConvertedImage {
    /// Output filename — the input name with its last extension segment
    /// replaced by `.png`.
    pub filename: String,
    /// Encoded PNG bytes.
    pub data: Vec<u8>,
}

/// A per-file conversion failure, tagged with the original filename so the
/// UI can name the offending file.
#[derive(Debug)]
pub struct ConvertFailure {
    /// Filename of the asset that failed to convert.
    pub filename: String,
    /// What went wrong.
    pub error: ConvertError,
}

/// Outcome of one batch run.
///
/// `converted` preserves upload order and contains exactly one entry per
/// asset that converted successfully; failed assets appear in `failures`
/// instead, never as placeholders. The report lives until the next batch
/// replaces it — it is passed to the presentation layer as an explicit
/// value, not stashed in ambient globals.
#[derive(Debug, Default)]
pub struct ConversionReport {
    /// Successfully converted images, in upload order.
    pub converted: Vec<ConvertedImage>,
    /// Per-file failures, in upload order.
    pub failures: Vec<ConvertFailure>,
}

impl ConversionReport {
    /// Returns `true` if the batch produced no output at all.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.converted.is_empty() && self.failures.is_empty()
    }
}

/// Errors that can occur while converting a single asset.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    /// The uploaded file was empty.
    #[error("input image data is empty")]
    EmptyInput,

    /// The bytes could not be decoded as an image.
    #[error("failed to decode image: {0}")]
    Decode(#[from] image::ImageError),

    /// PNG encoding failed. Not expected for valid decoded input, but a
    /// surprise here must not abort the rest of the batch, so it is
    /// carried as a per-file failure like any other.
    #[error("failed to encode PNG: {0}")]
    Encode(image::ImageError),
}

/// Errors that can occur while packaging a batch into a ZIP archive.
#[derive(Debug, thiserror::Error)]
pub enum ArchiveError {
    /// The ZIP writer rejected the archive structure.
    #[error("failed to build ZIP archive: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// Writing into the in-memory buffer failed.
    #[error("failed to write archive data: {0}")]
    Io(#[from] std::io::Error),
}
