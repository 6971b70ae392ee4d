//! Contact: details column plus the message form.

use dioxus::prelude::*;
use tracing::debug;

use folio_core::{ContactForm, ContactSubmitter, Profile, SubmissionStatus};

#[component]
pub fn ContactView(profile: &'static Profile) -> Element {
    let submitter = use_context::<ContactSubmitter>();
    let mut form = use_signal(ContactForm::default);
    let mut status = use_signal(SubmissionStatus::default);
    let mut form_error = use_signal(|| None::<String>);
    let mut sending = use_signal(|| false);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        match submitter.submit(&mut form.write()) {
            Ok(pending) => {
                form_error.set(None);
                sending.set(true);
                // Owned by this view: unmounting drops the request and its result.
                spawn(async move {
                    let outcome = pending.await;
                    sending.set(false);
                    status.set(outcome);
                });
            }
            Err(e) => {
                debug!(error = %e, "Contact form rejected");
                form_error.set(Some(e.to_string()));
            }
        }
    };

    let current = status();
    let button_label = if sending() { "Sending..." } else { "Send Message" };

    rsx! {
        section {
            class: "contact",
            h2 { class: "section-title animate-up", "Get In Touch" }
            div {
                class: "contact-grid",
                div {
                    class: "card contact-details animate-up",
                    p { "Have a role, a project or a question? My inbox is open." }
                    ul {
                        li {
                            span { class: "contact-label", "Email" }
                            a { href: "{profile.mailto()}", "{profile.email}" }
                        }
                        li {
                            span { class: "contact-label", "Phone" }
                            span { "{profile.phone}" }
                        }
                        li {
                            span { class: "contact-label", "Location" }
                            span { "{profile.location}" }
                        }
                    }
                }
                form {
                    class: "card contact-form animate-up",
                    onsubmit,
                    input {
                        class: "input",
                        r#type: "text",
                        name: "name",
                        placeholder: "Your Name",
                        required: true,
                        value: "{form.read().name}",
                        oninput: move |evt| form.write().name = evt.value(),
                    }
                    input {
                        class: "input",
                        r#type: "email",
                        name: "_replyto",
                        placeholder: "Your Email",
                        required: true,
                        value: "{form.read().reply_to}",
                        oninput: move |evt| form.write().reply_to = evt.value(),
                    }
                    textarea {
                        class: "input",
                        name: "message",
                        rows: "6",
                        placeholder: "Your Message",
                        required: true,
                        value: "{form.read().message}",
                        oninput: move |evt| form.write().message = evt.value(),
                    }
                    button {
                        class: "btn primary",
                        r#type: "submit",
                        disabled: sending(),
                        "{button_label}"
                    }
                    if let Some(err) = form_error() {
                        p { class: "form-status error", "{err}" }
                    }
                    if let Some(message) = current.message() {
                        p { class: "{current.css_class()}", "{message}" }
                    }
                }
            }
        }
    }
}
