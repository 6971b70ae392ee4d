//! About: summary paragraphs and contact details.

use dioxus::prelude::*;
use folio_core::Profile;

#[component]
pub fn AboutView(profile: &'static Profile) -> Element {
    rsx! {
        section {
            class: "about",
            h2 { class: "section-title animate-up", "About Me" }
            div {
                class: "about-grid",
                div {
                    class: "card about-summary animate-up",
                    for (i, line) in profile.summary.lines().enumerate() {
                        p { key: "{i}", "{line.trim()}" }
                    }
                }
                div {
                    class: "card about-details animate-up",
                    dl {
                        dt { "Location" }
                        dd { "{profile.location}" }
                        dt { "Email" }
                        dd {
                            a { href: "{profile.mailto()}", "{profile.email}" }
                        }
                        dt { "Phone" }
                        dd { "{profile.phone}" }
                        dt { "LinkedIn" }
                        dd {
                            a {
                                href: "{profile.social_url}",
                                target: "_blank",
                                rel: "noopener noreferrer",
                                "View profile"
                            }
                        }
                    }
                }
            }
        }
    }
}
