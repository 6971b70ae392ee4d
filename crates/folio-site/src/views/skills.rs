//! Skills: a flat grid of chips.

use dioxus::prelude::*;

#[component]
pub fn SkillsView(skills: &'static [&'static str]) -> Element {
    rsx! {
        section {
            class: "skills",
            h2 { class: "section-title animate-up", "Skills" }
            div {
                class: "skill-grid",
                for skill in skills {
                    span { key: "{skill}", class: "skill-chip animate-up", "{skill}" }
                }
            }
        }
    }
}
