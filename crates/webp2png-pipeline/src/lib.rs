//! webp2png-pipeline: Pure WebP→PNG conversion (sans-IO).
//!
//! Converts uploaded image bytes to PNG, preserving transparency where
//! the source carries it, and packages multi-file batches into a single
//! ZIP archive.
//!
//! This crate has **no I/O dependencies** -- it operates on in-memory
//! byte buffers and returns structured data. All browser interaction
//! lives in `webp2png-io`.

pub mod archive;
pub mod convert;
pub mod name;
pub mod types;

pub use archive::{ARCHIVE_FILENAME, build_archive};
pub use convert::convert_to_png;
pub use name::png_filename;
pub use types::{
    ArchiveError, ConversionReport, ConvertError, ConvertFailure, ConvertedImage, UploadedAsset,
};

/// Convert a batch of uploaded assets to PNG.
///
/// Assets are processed sequentially in upload order. Each asset either
/// contributes a [`ConvertedImage`] (filename derived by
/// [`png_filename`]) or a [`ConvertFailure`] naming the offending file
/// -- one bad file never aborts the batch, and successes are unaffected
/// by sibling failures.
#[must_use]
pub fn convert_batch(assets: &[UploadedAsset]) -> ConversionReport {
    let mut report = ConversionReport::default();

    for asset in assets {
        match convert::convert_to_png(&asset.data) {
            Ok(data) => report.converted.push(ConvertedImage {
                filename: name::png_filename(&asset.filename),
                data,
            }),
            Err(error) => report.failures.push(ConvertFailure {
                filename: asset.filename.clone(),
                error,
            }),
        }
    }

    report
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use image::ExtendedColorType;

    use super::*;

    /// Encode a small solid-color RGBA image as a lossless WebP buffer.
    fn solid_webp(rgba: [u8; 4], width: u32, height: u32) -> Vec<u8> {
        let img = image::RgbaImage::from_pixel(width, height, image::Rgba(rgba));
        let mut buf = Vec::new();
        let encoder = image::codecs::webp::WebPEncoder::new_lossless(&mut buf);
        encoder
            .encode(img.as_raw(), width, height, ExtendedColorType::Rgba8)
            .unwrap();
        buf
    }

    fn asset(filename: &str, data: Vec<u8>) -> UploadedAsset {
        UploadedAsset::new(filename.to_owned(), data)
    }

    #[test]
    fn empty_batch_produces_empty_report() {
        let report = convert_batch(&[]);
        assert!(report.is_empty());
    }

    #[test]
    fn batch_preserves_upload_order_and_derives_names() {
        let assets = vec![
            asset("first.webp", solid_webp([10, 20, 30, 255], 2, 2)),
            asset("second.tar.webp", solid_webp([40, 50, 60, 128], 3, 3)),
            asset("third", solid_webp([70, 80, 90, 255], 4, 4)),
        ];

        let report = convert_batch(&assets);
        assert!(report.failures.is_empty());

        let names: Vec<&str> = report
            .converted
            .iter()
            .map(|img| img.filename.as_str())
            .collect();
        assert_eq!(names, ["first.png", "second.tar.png", "third.png"]);
    }

    #[test]
    fn one_corrupt_file_does_not_abort_the_batch() {
        let assets = vec![
            asset("good-one.webp", solid_webp([1, 2, 3, 255], 2, 2)),
            asset("broken.webp", vec![0xDE, 0xAD, 0xBE, 0xEF]),
            asset("good-two.webp", solid_webp([4, 5, 6, 200], 2, 2)),
        ];

        let report = convert_batch(&assets);
        assert_eq!(report.converted.len(), 2);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].filename, "broken.webp");
        assert!(matches!(report.failures[0].error, ConvertError::Decode(_)));

        // Siblings of the corrupt file are unaffected.
        assert_eq!(report.converted[0].filename, "good-one.png");
        assert_eq!(report.converted[1].filename, "good-two.png");
    }

    #[test]
    fn empty_file_is_reported_as_empty_input() {
        let report = convert_batch(&[asset("nothing.webp", Vec::new())]);
        assert!(report.converted.is_empty());
        assert!(matches!(
            report.failures[0].error,
            ConvertError::EmptyInput
        ));
    }

    #[test]
    fn converting_the_same_batch_twice_is_byte_identical() {
        let assets = vec![asset("stable.webp", solid_webp([9, 9, 9, 77], 6, 4))];

        let first = convert_batch(&assets);
        let second = convert_batch(&assets);
        assert_eq!(first.converted[0].data, second.converted[0].data);
    }
}
