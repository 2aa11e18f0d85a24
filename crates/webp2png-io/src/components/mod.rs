//! Dioxus UI components for webp2png.
//!
//! Provides the multi-file upload zone, the converted-results panel
//! with download buttons, and the upload preview gallery.

mod preview;
mod results;
mod upload;

pub use preview::{MAX_PREVIEWS, PreviewEntry, PreviewGallery};
pub use results::ResultsPanel;
pub use upload::FileUpload;
