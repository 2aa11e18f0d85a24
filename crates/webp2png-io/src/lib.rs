//! webp2png-io: Browser I/O and Dioxus component library.
//!
//! Handles multi-file uploads, Blob URL previews, binary file
//! downloads, and provides the UI components for the webp2png web
//! application.

pub mod blob;
pub mod components;
pub mod download;

pub use components::{FileUpload, PreviewEntry, PreviewGallery, ResultsPanel};
