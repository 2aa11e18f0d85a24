//! Output filename derivation.
//!
//! The rule is deliberately simple and explicit: strip the last
//! `.`-delimited extension segment and append `.png`. A name with no dot
//! is used whole as the base. The pipeline does not deduplicate
//! collisions between derived names.

/// Derive the PNG output filename from an input filename.
///
/// # Examples
///
/// ```
/// use webp2png_pipeline::name::png_filename;
///
/// assert_eq!(png_filename("photo.webp"), "photo.png");
/// assert_eq!(png_filename("archive.tar.webp"), "archive.tar.png");
/// assert_eq!(png_filename("image"), "image.png");
/// ```
#[must_use]
pub fn png_filename(original: &str) -> String {
    let base = original.rsplit_once('.').map_or(original, |(base, _)| base);
    format!("{base}.png")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_single_extension() {
        assert_eq!(png_filename("photo.webp"), "photo.png");
    }

    #[test]
    fn strips_only_the_last_extension() {
        assert_eq!(png_filename("archive.tar.webp"), "archive.tar.png");
    }

    #[test]
    fn no_extension_uses_whole_name_as_base() {
        assert_eq!(png_filename("image"), "image.png");
    }

    #[test]
    fn hidden_file_style_name_keeps_the_literal_rule() {
        // The part before the last dot is empty, so the base is empty.
        assert_eq!(png_filename(".webp"), ".png");
    }

    #[test]
    fn already_png_name_is_rederived() {
        assert_eq!(png_filename("photo.png"), "photo.png");
    }
}
