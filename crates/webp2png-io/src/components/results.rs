//! Converted-results panel with per-file and batch download buttons.

use std::rc::Rc;

use dioxus::prelude::*;
use webp2png_pipeline::{ARCHIVE_FILENAME, ConversionReport, build_archive};

use crate::download;

/// Props for the [`ResultsPanel`] component.
#[derive(Props, Clone)]
pub struct ResultsPanelProps {
    /// The batch outcome to present. `None` hides the panel.
    /// Wrapped in `Rc` to avoid cloning image buffers on each render.
    report: Option<Rc<ConversionReport>>,
}

impl PartialEq for ResultsPanelProps {
    fn eq(&self, other: &Self) -> bool {
        match (&self.report, &other.report) {
            (Some(a), Some(b)) => Rc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        }
    }
}

/// Results panel listing converted images with download buttons.
///
/// Shows one row per converted image, an inline error line per failed
/// file, and -- when more than one conversion succeeded -- a
/// download-all button that packages the batch into a ZIP archive on
/// click.
#[component]
pub fn ResultsPanel(props: ResultsPanelProps) -> Element {
    let mut download_error = use_signal(|| Option::<String>::None);

    // Clear stale download errors when the report changes.
    let report_present = props.report.is_some();
    use_effect(move || {
        // Subscribe to report_present so this fires on each change.
        let _ = report_present;
        download_error.set(None);
    });

    let Some(report) = props.report else {
        return rsx! {};
    };

    let zip_click = {
        let report = Rc::clone(&report);
        move |_| {
            let outcome = build_archive(&report.converted)
                .map_err(|e| format!("{e}"))
                .and_then(|bytes| {
                    download::trigger_download(&bytes, ARCHIVE_FILENAME, download::ZIP_MIME)
                        .map_err(|e| format!("{e}"))
                });
            match outcome {
                Ok(()) => download_error.set(None),
                Err(e) => download_error.set(Some(format!("Download failed: {e}"))),
            }
        }
    };

    let converted_count = report.converted.len();

    rsx! {
        div { class: "results",
            h2 { class: "results-heading", "Converted Images" }

            if let Some(ref err) = download_error() {
                p { class: "results-error", "{err}" }
            }

            for failure in &report.failures {
                p { class: "results-error",
                    "Error converting {failure.filename}: {failure.error}"
                }
            }

            if converted_count > 1 {
                button {
                    class: "button-primary",
                    onclick: zip_click,
                    "Download All ({converted_count} files as ZIP)"
                }
            }

            for (index, image) in report.converted.iter().enumerate() {
                div { class: "results-row", key: "{index}",
                    span { class: "results-name", "{image.filename}" }
                    button {
                        class: "button-secondary",
                        onclick: {
                            let report = Rc::clone(&report);
                            move |_| {
                                let image = &report.converted[index];
                                match download::trigger_download(
                                    &image.data,
                                    &image.filename,
                                    download::PNG_MIME,
                                ) {
                                    Ok(()) => download_error.set(None),
                                    Err(e) => download_error
                                        .set(Some(format!("Download failed: {e}"))),
                                }
                            }
                        },
                        "Download"
                    }
                }
            }
        }
    }
}
