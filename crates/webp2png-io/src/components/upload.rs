//! Multi-file upload component with drag-and-drop and file picker.

use dioxus::html::{FileData, HasFileData};
use dioxus::prelude::*;
use webp2png_pipeline::UploadedAsset;

/// The only accepted upload extension.
const ALLOWED_EXTENSION: &str = "webp";

/// Check whether a filename has a `.webp` extension (case-insensitive).
fn has_webp_extension(name: &str) -> bool {
    name.rsplit_once('.')
        .is_some_and(|(_, ext)| ext.eq_ignore_ascii_case(ALLOWED_EXTENSION))
}

/// Props for the [`FileUpload`] component.
#[derive(Props, Clone, PartialEq)]
pub struct FileUploadProps {
    /// Called with all successfully read assets after a selection or drop.
    on_upload: EventHandler<Vec<UploadedAsset>>,
}

/// A drag-and-drop zone with a file picker button.
///
/// Accepts one or more WebP images. When files are selected (via the
/// picker or drag-and-drop), reads each file's bytes and fires
/// `on_upload` with the full list. Files with other extensions and
/// files that fail to read are reported inline and skipped.
#[component]
pub fn FileUpload(props: FileUploadProps) -> Element {
    let mut dragging = use_signal(|| false);
    let mut loaded = use_signal(|| Option::<usize>::None);
    let mut error = use_signal(|| Option::<String>::None);

    // Validate, read, and forward every file from a selection.
    //
    // Shared by the file-picker (`handle_files`) and drag-and-drop
    // (`handle_drop`) paths so the validation/read/callback logic
    // lives in one place.
    let process_files = move |files: Vec<FileData>| async move {
        let mut assets = Vec::new();
        let mut problems = Vec::new();

        for file in files {
            let name = file.name();
            if !has_webp_extension(&name) {
                problems.push(format!("Unsupported file type: {name}"));
                continue;
            }
            match file.read_bytes().await {
                Ok(bytes) => assets.push(UploadedAsset::new(name, bytes.to_vec())),
                Err(e) => problems.push(format!("Failed to read {name}: {e}")),
            }
        }

        error.set(if problems.is_empty() {
            None
        } else {
            Some(problems.join("; "))
        });

        if assets.is_empty() {
            loaded.set(None);
        } else {
            loaded.set(Some(assets.len()));
            props.on_upload.call(assets);
        }
    };

    let handle_files = move |evt: FormEvent| async move {
        process_files(evt.files()).await;
    };

    let handle_drop = move |evt: DragEvent| async move {
        evt.prevent_default();
        dragging.set(false);
        process_files(evt.files()).await;
    };

    let zone_class = if dragging() {
        "upload-zone upload-zone-active"
    } else {
        "upload-zone"
    };

    rsx! {
        div {
            class: "{zone_class}",
            ondragover: move |evt| {
                evt.prevent_default();
                dragging.set(true);
            },
            ondragleave: move |_| {
                dragging.set(false);
            },
            ondrop: handle_drop,

            if let Some(count) = loaded() {
                p { class: "upload-ok",
                    "{count} file(s) uploaded successfully"
                }
            }

            if let Some(ref err) = error() {
                p { class: "upload-error", "{err}" }
            }

            p { class: "upload-hint", "Drop WebP images here or " }

            label { class: "upload-button",
                input {
                    r#type: "file",
                    accept: ".webp",
                    multiple: true,
                    class: "hidden",
                    onchange: handle_files,
                }
                "Choose Files"
            }

            p { class: "upload-note", "You can select multiple WebP files at once" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn webp_extension_is_accepted_case_insensitively() {
        assert!(has_webp_extension("photo.webp"));
        assert!(has_webp_extension("PHOTO.WEBP"));
        assert!(has_webp_extension("archive.tar.webp"));
    }

    #[test]
    fn other_extensions_are_rejected() {
        assert!(!has_webp_extension("photo.png"));
        assert!(!has_webp_extension("webp"));
        assert!(!has_webp_extension("photo"));
    }
}
