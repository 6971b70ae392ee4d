//! Theme presentation: the root wrapper carrying `data-theme` and the
//! navbar toggle.

use dioxus::prelude::*;
use folio_core::Theme;

/// Wraps the whole site; the stylesheet keys its palette off `data-theme`.
#[component]
pub fn ThemedRoot(theme: Theme, children: Element) -> Element {
    rsx! {
        div {
            class: "themed-root",
            "data-theme": "{theme.token()}",
            {children}
        }
    }
}

/// Sun/moon button that flips between light and dark.
#[component]
pub fn ThemeToggle(theme: Theme, on_toggle: EventHandler<()>) -> Element {
    let label = if theme.is_dark() {
        "Switch to light theme"
    } else {
        "Switch to dark theme"
    };

    rsx! {
        button {
            class: "theme-toggle",
            title: "{label}",
            "aria-label": "{label}",
            onclick: move |_| on_toggle.call(()),
            "{theme.toggle_icon()}"
        }
    }
}
