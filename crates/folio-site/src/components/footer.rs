//! Page footer with the copyright line and a mail link.

use chrono::{Datelike, Local};
use dioxus::prelude::*;

#[component]
pub fn Footer(name: String, email: String, mailto: String) -> Element {
    let year = Local::now().year();

    rsx! {
        footer {
            class: "site-footer",
            p { "\u{00A9} {year} {name}. All rights reserved." }
            p {
                a { href: "{mailto}", "{email}" }
            }
        }
    }
}
