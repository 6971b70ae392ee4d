//! Floating mail button, visible on every view.

use dioxus::prelude::*;

#[component]
pub fn QuickContact(mailto: String) -> Element {
    rsx! {
        a {
            class: "quick-contact",
            href: "{mailto}",
            title: "Send an email",
            "aria-label": "Send an email",
            "\u{2709}"
        }
    }
}
