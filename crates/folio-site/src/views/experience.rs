//! Experience: one timeline card per position.

use dioxus::prelude::*;
use folio_core::ExperienceEntry;

#[component]
pub fn ExperienceView(entries: &'static [ExperienceEntry]) -> Element {
    rsx! {
        section {
            class: "experience",
            h2 { class: "section-title animate-up", "Experience" }
            div {
                class: "timeline",
                for entry in entries {
                    article {
                        key: "{entry.organisation}-{entry.period}",
                        class: "card timeline-entry animate-up",
                        header {
                            h3 { "{entry.role}" }
                            p { class: "timeline-org", "{entry.organisation}" }
                            p { class: "timeline-period", "{entry.period}" }
                        }
                        ul {
                            for highlight in entry.highlights {
                                li { "{highlight}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
