//! Projects: cards in content order.

use dioxus::prelude::*;
use folio_core::Project;

#[component]
pub fn ProjectsView(projects: &'static [Project]) -> Element {
    rsx! {
        section {
            class: "projects",
            h2 { class: "section-title animate-up", "Projects" }
            div {
                class: "project-grid",
                for project in projects {
                    ProjectCard { key: "{project.id}", project }
                }
            }
        }
    }
}

#[component]
fn ProjectCard(project: &'static Project) -> Element {
    rsx! {
        article {
            class: "card project-card animate-up",
            h3 { "{project.title}" }
            div {
                class: "tag-list",
                for tag in project.tags {
                    span { class: "tag", "{tag}" }
                }
            }
            p { "{project.description}" }
        }
    }
}
