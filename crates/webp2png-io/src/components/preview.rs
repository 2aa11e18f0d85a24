//! Inline preview gallery for uploaded images.

use dioxus::prelude::*;

/// Largest batch that still gets inline previews. Bigger batches skip
/// the gallery to keep the page responsive.
pub const MAX_PREVIEWS: usize = 5;

/// One preview entry: the original filename and a Blob object URL.
///
/// The URL's lifecycle is owned by the caller — create it with
/// [`crate::blob::bytes_to_blob_url`] and revoke it when the entry is
/// replaced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewEntry {
    /// Original filename, shown as the caption.
    pub filename: String,
    /// Blob object URL used as the `<img src>`.
    pub url: String,
}

/// Props for the [`PreviewGallery`] component.
#[derive(Props, Clone, PartialEq)]
pub struct PreviewGalleryProps {
    /// Entries to display, in upload order.
    entries: Vec<PreviewEntry>,
}

/// Renders the uploaded images inline, captioned with their filenames.
///
/// Renders nothing when the batch is larger than [`MAX_PREVIEWS`].
#[component]
pub fn PreviewGallery(props: PreviewGalleryProps) -> Element {
    if props.entries.is_empty() || props.entries.len() > MAX_PREVIEWS {
        return rsx! {};
    }

    rsx! {
        div { class: "preview",
            h2 { class: "preview-heading", "Preview" }

            for entry in &props.entries {
                figure { class: "preview-item", key: "{entry.filename}",
                    img {
                        class: "preview-image",
                        src: "{entry.url}",
                        alt: "{entry.filename}",
                    }
                    figcaption { class: "preview-caption", "{entry.filename}" }
                }
            }
        }
    }
}
