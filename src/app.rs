use dioxus::desktop::tao::event::{Event, WindowEvent};
use dioxus::desktop::{use_window, use_wry_event_handler};
use dioxus::prelude::*;
use snapsimp_core::NavLayout;

use crate::pages::{Chat, ExportTools};
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - JSON export tools (file choosers)
/// - `/chat` - Conversation view
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    ExportTools {},
    #[route("/chat")]
    Chat {},
}

/// Root application component.
///
/// Provides global styles, the nav layout signal, and routing.
#[component]
pub fn App() -> Element {
    let window = use_window();
    let initial_width = window
        .inner_size()
        .to_logical::<f64>(window.scale_factor())
        .width;

    let mut nav_layout = use_signal(move || NavLayout::for_width(initial_width));
    use_context_provider(|| nav_layout);

    // Track window width so the nav bar can switch layouts
    let resize_window = window.clone();
    use_wry_event_handler(move |event, _| {
        if let Event::WindowEvent {
            event: WindowEvent::Resized(size),
            ..
        } = event
        {
            let width = size.to_logical::<f64>(resize_window.scale_factor()).width;
            let layout = NavLayout::for_width(width);
            if *nav_layout.peek() != layout {
                tracing::debug!(width, ?layout, "Nav layout changed");
                nav_layout.set(layout);
            }
        }
    });

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}
