//! Navigation Bar Component
//!
//! Logo, app title and page links. Logo size follows [`NavLayout`], which
//! `App` recomputes whenever the window is resized.

use dioxus::prelude::*;
use snapsimp_core::NavLayout;

use crate::app::Route;
use crate::context::use_nav_layout;

/// Navigation location within the application
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum NavLocation {
    ExportTools,
    Chat,
}

impl NavLocation {
    pub const ALL: [NavLocation; 2] = [NavLocation::ExportTools, NavLocation::Chat];

    /// Get the display name for this location
    pub fn display_name(&self) -> &'static str {
        match self {
            NavLocation::ExportTools => "Export",
            NavLocation::Chat => "Chat",
        }
    }

    /// Get the route for this location
    pub fn route(&self) -> Route {
        match self {
            NavLocation::ExportTools => Route::ExportTools {},
            NavLocation::Chat => Route::Chat {},
        }
    }
}

#[component]
pub fn NavBar(current: NavLocation) -> Element {
    let layout: NavLayout = use_nav_layout()();
    let logo_px = layout.logo_max_px();

    rsx! {
        header { class: "{layout.class()}",
            div { class: "navbar-side",
                div {
                    class: "navbar-logo",
                    style: "max-width: {logo_px}px; max-height: {logo_px}px;",
                    span { class: "navbar-logo-mark", "S" }
                }
            }

            div { class: "navbar-title", "SnapSimp" }

            nav { class: "navbar-side navbar-links",
                for location in NavLocation::ALL {
                    Link {
                        to: location.route(),
                        class: if location == current { "nav-link active" } else { "nav-link" },
                        "{location.display_name()}"
                    }
                }
            }
        }
    }
}
