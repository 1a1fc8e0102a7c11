//! Export Tools Page
//!
//! One file chooser row per Snapchat export file. Selections are held in
//! memory only.

use dioxus::prelude::*;
use snapsimp_core::UploadSlot;

use crate::components::files::ChooseFileRow;
use crate::components::{NavBar, NavLocation, Separator};

#[component]
pub fn ExportTools() -> Element {
    rsx! {
        div { class: "page",
            NavBar { current: NavLocation::ExportTools }

            main { class: "page-content",
                Separator {
                    text: "JSON Export Tools",
                    width_percentage: 90,
                    y_padding: 20,
                }

                for slot in UploadSlot::ALL {
                    ChooseFileRow { key: "{slot.file_name()}", slot }
                }
            }
        }
    }
}
