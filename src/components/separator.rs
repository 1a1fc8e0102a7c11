//! Section separator: a centered heading over a rule.

use dioxus::prelude::*;

#[component]
pub fn Separator(
    /// Heading text
    text: String,
    /// Width of the separator as a percentage of its container
    #[props(default = 100)]
    width_percentage: u8,
    /// Vertical padding in px
    #[props(default = 0)]
    y_padding: u32,
) -> Element {
    rsx! {
        div {
            class: "separator",
            style: container_style(width_percentage, y_padding),
            span { class: "separator-text", "{text}" }
            div { class: "separator-rule" }
        }
    }
}

/// Width applies to the container only; the rule fills it.
fn container_style(width_percentage: u8, y_padding: u32) -> String {
    format!("width: {}%; padding: {}px 0;", width_percentage, y_padding)
}
