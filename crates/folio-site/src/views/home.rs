//! Home: hero with the role typewriter, headline metrics and profile links.

use std::rc::Rc;

use dioxus::prelude::*;
use tracing::{debug, warn};

use folio_core::{
    CursorBlink, Route, SiteContent, Typewriter, TypewriterTiming, ViewTasks, run_cursor_blink,
    run_typewriter,
};

#[component]
pub fn HomeView(content: &'static SiteContent, timing: TypewriterTiming) -> Element {
    let profile = &content.profile;
    let navigate = use_context::<Callback<Route>>();

    rsx! {
        section {
            class: "hero",
            div {
                class: "hero-text",
                p { class: "hero-greeting animate-up", "Hello, I'm" }
                h1 { class: "hero-name animate-up", "{profile.name}" }
                p { class: "hero-headline animate-up", "{profile.headline}" }
                h2 {
                    class: "hero-role animate-up",
                    "I'm a "
                    RoleTypewriter { roles: content.role_list(), timing }
                }
                p { class: "hero-summary animate-up", "{profile.summary_lead(2)}" }
                div {
                    class: "hero-actions animate-up",
                    a {
                        class: "btn primary",
                        href: "{profile.resume_path}",
                        download: "",
                        "Download Resume"
                    }
                    a {
                        class: "btn",
                        href: "{profile.mailto()}",
                        "Email Me"
                    }
                    button {
                        class: "btn",
                        onclick: move |_| navigate.call(Route::Contact),
                        "Get In Touch"
                    }
                }
                div {
                    class: "social-links animate-up",
                    for link in content.social_links {
                        a {
                            key: "{link.label}",
                            class: "social-link {link.accent}",
                            href: "{link.url}",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            "{link.label}"
                        }
                    }
                }
            }
            div {
                class: "hero-portrait animate-up",
                img { src: "{profile.image_path}", alt: "{profile.name}" }
            }
        }
        section {
            class: "metrics",
            for metric in content.metrics {
                div {
                    key: "{metric.label}",
                    class: "metric-card animate-up",
                    span { class: "metric-value", "{metric.value}" }
                    span { class: "metric-label", "{metric.label}" }
                }
            }
        }
    }
}

/// Types, holds, erases and cycles through `roles`, with a blinking cursor.
///
/// Both timers are registered in a [`ViewTasks`] held as a hook value, so
/// they are cancelled when this component unmounts.
#[component]
pub fn RoleTypewriter(roles: Vec<String>, timing: TypewriterTiming) -> Element {
    let mut text = use_signal(String::new);
    let mut cursor = use_signal(CursorBlink::new);

    use_hook(move || {
        let tasks = ViewTasks::new();
        match Typewriter::new(roles.as_slice(), timing) {
            Ok(machine) => {
                let typer = spawn(run_typewriter(machine, move |frame| {
                    text.set(frame.text);
                }));
                tasks.push(move || typer.cancel());
            }
            Err(e) => warn!(error = %e, "Typewriter disabled"),
        }
        let blinker = spawn(run_cursor_blink(
            timing.blink_interval,
            CursorBlink::new(),
            move |state| cursor.set(state),
        ));
        tasks.push(move || blinker.cancel());
        debug!(count = tasks.len(), "Typewriter started");
        Rc::new(tasks)
    });

    rsx! {
        span {
            class: "typewriter",
            span { class: "typewriter-text", "{text}" }
            span { class: "typewriter-cursor", "{cursor.read().glyph()}" }
        }
    }
}
