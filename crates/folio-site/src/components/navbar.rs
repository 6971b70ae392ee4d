//! Sticky header: brand, route links, theme toggle and the mobile menu.

use dioxus::prelude::*;
use folio_core::{Route, Theme};

use crate::theme::ThemeToggle;

#[component]
pub fn Navbar(
    brand: String,
    active: Route,
    theme: Theme,
    menu_open: bool,
    on_navigate: EventHandler<Route>,
    on_toggle_theme: EventHandler<()>,
    on_toggle_menu: EventHandler<()>,
) -> Element {
    let menu_class = if menu_open { "mobile-menu open" } else { "mobile-menu" };

    rsx! {
        header {
            class: "navbar",
            div {
                class: "navbar-inner",
                a {
                    class: "brand",
                    href: "{Route::Home.path()}",
                    onclick: move |evt: MouseEvent| {
                        evt.prevent_default();
                        on_navigate.call(Route::Home);
                    },
                    "{brand}"
                }
                nav {
                    class: "nav-links desktop-only",
                    NavLinks { active, on_navigate }
                }
                div {
                    class: "navbar-actions",
                    ThemeToggle { theme, on_toggle: on_toggle_theme }
                    button {
                        class: "navbar-hamburger mobile-only",
                        "aria-label": "Toggle menu",
                        "aria-expanded": "{menu_open}",
                        onclick: move |_| on_toggle_menu.call(()),
                        if menu_open { "\u{2715}" } else { "\u{2630}" }
                    }
                }
            }
            nav {
                class: "{menu_class}",
                NavLinks { active, on_navigate }
            }
        }
    }
}

/// One link per route, with the active one highlighted.
#[component]
pub fn NavLinks(active: Route, on_navigate: EventHandler<Route>) -> Element {
    rsx! {
        for route in Route::all().iter().copied() {
            {
                let link_class = if route == active { "nav-link active" } else { "nav-link" };
                rsx! {
                    a {
                        key: "{route.path()}",
                        class: "{link_class}",
                        href: "{route.path()}",
                        onclick: move |evt: MouseEvent| {
                            evt.prevent_default();
                            on_navigate.call(route);
                        },
                        "{route.label()}"
                    }
                }
            }
        }
    }
}
