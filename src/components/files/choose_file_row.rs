//! Choose File Row Component
//!
//! Button opening a native file dialog filtered to the slot's extension,
//! the chosen file name (or a placeholder), and a remove action gated by a
//! Keep/Remove confirmation.

use dioxus::prelude::*;
use rfd::FileDialog;
use snapsimp_core::selection::accepts;
use snapsimp_core::{ClearDecision, FileHandle, FileSelection, PickOutcome, UploadSlot};

/// File chooser row for one upload slot.
///
/// # Examples
///
/// ```rust,ignore
/// rsx! {
///     ChooseFileRow { slot: UploadSlot::ChatHistory }
/// }
/// ```
#[component]
pub fn ChooseFileRow(
    /// Which export file this row selects
    slot: UploadSlot,
) -> Element {
    let mut selection = use_signal(FileSelection::new);
    let mut picking = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);

    let handle_pick = move |_| {
        if picking() {
            return;
        }
        picking.set(true);
        error.set(None);

        spawn(async move {
            // Native dialog blocks, so keep it off the UI task
            let picked = tokio::task::spawn_blocking(move || {
                FileDialog::new()
                    .add_filter(slot.file_name(), &[slot.accepted_extension()])
                    .set_title(format!("Select {}", slot.file_name()))
                    .pick_file()
            })
            .await;

            match picked {
                Ok(path) => {
                    if let Some(ref p) = path {
                        if !accepts(p, slot.accepted_extension()) {
                            tracing::warn!(
                                path = %p.display(),
                                "Picked file does not match the .{} filter",
                                slot.accepted_extension()
                            );
                        }
                    }
                    let outcome = selection.write().pick(path.map(FileHandle::from_path));
                    if outcome == PickOutcome::Cancelled {
                        tracing::debug!(slot = slot.button_name(), "File picker cancelled");
                    }
                }
                Err(e) => {
                    tracing::error!("File picker failed: {}", e);
                    error.set(Some(format!("File picker error: {}", e)));
                }
            }
            picking.set(false);
        });
    };

    let placeholder = slot.placeholder();
    let (label, can_clear, confirmation_open) = {
        let current = selection.read();
        (
            current.display_label(&placeholder).to_string(),
            current.can_clear(),
            current.confirmation_open(),
        )
    };

    rsx! {
        div { class: "choose-file-row",
            if confirmation_open {
                RemoveFileDialog {
                    file_name: label.clone(),
                    on_keep: move |_| selection.write().resolve(ClearDecision::Keep),
                    on_remove: move |_| selection.write().resolve(ClearDecision::Remove),
                }
            }

            button {
                class: "choose-file-btn",
                title: "{slot.tooltip()}",
                disabled: picking(),
                onclick: handle_pick,
                "{slot.button_name()}"
            }

            span {
                class: if can_clear { "choose-file-label chosen" } else { "choose-file-label" },
                "{label}"
            }

            if can_clear {
                button {
                    class: "choose-file-clear",
                    title: "Remove file",
                    "aria-label": "Remove file",
                    onclick: move |_| selection.write().request_clear(),
                    // Trash icon
                    svg {
                        width: "20",
                        height: "20",
                        view_box: "0 0 24 24",
                        fill: "none",
                        stroke: "currentColor",
                        stroke_width: "2",
                        stroke_linecap: "round",
                        stroke_linejoin: "round",
                        polyline { points: "3 6 5 6 21 6" }
                        path { d: "M19 6l-1 14a2 2 0 0 1-2 2H8a2 2 0 0 1-2-2L5 6" }
                        path { d: "M10 11v6" }
                        path { d: "M14 11v6" }
                        path { d: "M9 6V4a1 1 0 0 1 1-1h4a1 1 0 0 1 1 1v2" }
                    }
                }
            }

            if let Some(err) = error() {
                div { class: "choose-file-error", "⚠️ {err}" }
            }
        }
    }
}

/// Keep/Remove prompt. Dismissing it counts as Keep.
#[component]
fn RemoveFileDialog(
    /// Name of the file about to be removed
    file_name: String,
    on_keep: EventHandler<()>,
    on_remove: EventHandler<()>,
) -> Element {
    let handle_keydown = move |e: KeyboardEvent| {
        if e.key() == Key::Escape {
            on_keep.call(());
        }
    };

    rsx! {
        div {
            class: "modal-overlay",
            onclick: move |_| on_keep.call(()),
            onkeydown: handle_keydown,

            div {
                class: "modal remove-file-modal",
                onclick: move |e| e.stop_propagation(),

                header { class: "modal-header",
                    h2 { class: "modal-title", "Remove File Confirmation" }
                }

                p { class: "modal-body",
                    "Are you sure you want to remove {file_name}? This action cannot be undone."
                }

                div { class: "modal-actions",
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| on_keep.call(()),
                        "Keep"
                    }
                    button {
                        class: "btn btn-danger",
                        onclick: move |_| on_remove.call(()),
                        "Remove"
                    }
                }
            }
        }
    }
}
