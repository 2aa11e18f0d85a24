use std::rc::Rc;

use dioxus::prelude::*;
use webp2png_io::components::MAX_PREVIEWS;
use webp2png_io::{FileUpload, PreviewEntry, PreviewGallery, ResultsPanel, blob};
use webp2png_pipeline::{ConversionReport, UploadedAsset, convert_batch};

fn main() {
    dioxus::launch(app);
}

/// Root application component.
///
/// Manages the session state via Dioxus signals and wires together the
/// upload zone, convert button, results panel, and preview gallery.
fn app() -> Element {
    // --- Application state ---
    let mut assets = use_signal(Vec::<UploadedAsset>::new);
    let mut previews = use_signal(Vec::<PreviewEntry>::new);
    let mut report = use_signal(|| Option::<Rc<ConversionReport>>::None);
    let mut converting = use_signal(|| false);

    // --- File upload handler ---
    let on_upload = move |uploaded: Vec<UploadedAsset>| {
        // A new selection supersedes the previous batch entirely:
        // drop the old report and revoke its preview URLs.
        report.set(None);
        for entry in previews.write().drain(..) {
            blob::revoke_blob_url(&entry.url);
        }

        // Inline previews only for small batches; creation is
        // best-effort and a failed preview never blocks conversion.
        if uploaded.len() <= MAX_PREVIEWS {
            let entries = uploaded
                .iter()
                .filter_map(|asset| {
                    blob::bytes_to_blob_url(&asset.data, "image/webp")
                        .ok()
                        .map(|url| PreviewEntry {
                            filename: asset.filename.clone(),
                            url,
                        })
                })
                .collect();
            previews.set(entries);
        }

        assets.set(uploaded);
    };

    // --- Convert button handler ---
    // Spawns an async task so the "Converting..." indicator renders
    // before the synchronous batch work blocks the thread. There is no
    // cancellation path: the button is disabled until the run finishes.
    let on_convert = move |_| {
        if converting() {
            return;
        }
        converting.set(true);

        spawn(async move {
            // Yield to the browser event loop so it can paint the
            // busy state before we block on the conversion.
            gloo_timers::future::TimeoutFuture::new(0).await;

            let batch = assets.peek().clone();
            let outcome = convert_batch(&batch);

            report.set(Some(Rc::new(outcome)));
            converting.set(false);
        });
    };

    let has_assets = !assets.read().is_empty();

    // --- Layout ---
    rsx! {
        style { dangerous_inner_html: include_str!("../assets/main.css") }

        div { class: "page",
            header { class: "page-header",
                h1 { class: "page-title", "WebP to PNG Converter" }
                p { class: "page-subtitle",
                    "Convert your WebP images to PNG format - free and private!"
                }
            }

            p { class: "page-info",
                "Your images are processed in memory and never leave your browser."
            }

            FileUpload { on_upload: on_upload }

            if has_assets {
                button {
                    class: "button-primary convert-button",
                    disabled: converting(),
                    onclick: on_convert,
                    "Convert to PNG"
                }
            }

            if converting() {
                p { class: "page-busy", "Converting images..." }
            }

            ResultsPanel { report: report() }

            PreviewGallery { entries: previews() }

            if !has_assets {
                section { class: "page-intro",
                    h2 { "How to use" }
                    ol {
                        li { "Click the upload button above" }
                        li { "Select one or more WebP images" }
                        li { "Click \"Convert to PNG\"" }
                        li { "Download your converted files" }
                    }
                    h2 { "Features" }
                    ul {
                        li { "Convert multiple files at once" }
                        li { "Complete privacy - no server storage" }
                        li { "Preserves transparency" }
                        li { "100% free to use" }
                    }
                }
            }

            footer { class: "page-footer",
                p { "All conversion happens locally in your browser." }
            }
        }
    }
}
