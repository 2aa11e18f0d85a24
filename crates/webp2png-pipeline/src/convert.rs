//! Single-asset WebP→PNG transcoding.
//!
//! Raw bytes in, complete PNG byte buffer out. The only branch in the
//! pipeline lives here: images carrying transparency (RGBA,
//! luminance-alpha, or paletted transparency after the decoder expands
//! it) are re-encoded as RGBA PNG so alpha survives losslessly; anything
//! else is normalized to three-channel RGB before encoding.

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};

use crate::types::ConvertError;

/// Convert one image's raw bytes to an in-memory PNG.
///
/// The encoder configuration is fixed (`PngEncoder` defaults), so the
/// same input always produces byte-identical output.
///
/// # Errors
///
/// Returns [`ConvertError::EmptyInput`] if `bytes` is empty.
/// Returns [`ConvertError::Decode`] if the bytes are not a decodable image.
/// Returns [`ConvertError::Encode`] if PNG encoding fails.
pub fn convert_to_png(bytes: &[u8]) -> Result<Vec<u8>, ConvertError> {
    if bytes.is_empty() {
        return Err(ConvertError::EmptyInput);
    }

    let img = image::load_from_memory(bytes)?;

    let mut png = Vec::new();
    let encoder = PngEncoder::new(&mut png);

    if img.color().has_alpha() {
        // Preserve transparency: encode as 8-bit RGBA.
        let rgba = img.into_rgba8();
        encoder
            .write_image(
                rgba.as_raw(),
                rgba.width(),
                rgba.height(),
                ExtendedColorType::Rgba8,
            )
            .map_err(ConvertError::Encode)?;
    } else {
        // No transparency anywhere: flatten to opaque three-channel RGB.
        let rgb = img.into_rgb8();
        encoder
            .write_image(
                rgb.as_raw(),
                rgb.width(),
                rgb.height(),
                ExtendedColorType::Rgb8,
            )
            .map_err(ConvertError::Encode)?;
    }

    Ok(png)
}
