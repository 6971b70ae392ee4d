//! Contact form submission.
//!
//! The form is validated and cleared synchronously, then a single request
//! goes to the form relay. The outcome is reported as a
//! [`SubmissionStatus`] value rather than an error.

use std::future::Future;
use std::sync::Arc;

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use tracing::{info, warn};

use crate::error::{FormError, RelayError};

/// Default Formspree form the site posts to.
pub const DEFAULT_FORM_ENDPOINT: &str = "https://formspree.io/f/movknleo";

/// Outcome shown under the form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Success,
    Error,
}

impl SubmissionStatus {
    /// Inline message for the status, if any.
    pub fn message(&self) -> Option<&'static str> {
        match self {
            SubmissionStatus::Idle => None,
            SubmissionStatus::Success => Some("Message sent \u{2705}"),
            SubmissionStatus::Error => Some("Error sending message \u{274C}"),
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            SubmissionStatus::Idle => "form-status",
            SubmissionStatus::Success => "form-status success",
            SubmissionStatus::Error => "form-status error",
        }
    }
}

/// Editable form fields.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub reply_to: String,
    pub message: String,
}

impl ContactForm {
    pub fn is_blank(&self) -> bool {
        self.name.is_empty() && self.reply_to.is_empty() && self.message.is_empty()
    }

    pub fn clear(&mut self) {
        self.name.clear();
        self.reply_to.clear();
        self.message.clear();
    }

    /// Checks the required fields and trims them.
    pub fn validate(&self) -> Result<Submission, FormError> {
        let name = required("name", &self.name)?;
        let reply_to = required("email", &self.reply_to)?;
        let message = required("message", &self.message)?;

        if !looks_like_email(reply_to) {
            return Err(FormError::InvalidEmail(reply_to.to_string()));
        }

        Ok(Submission {
            name: name.to_string(),
            reply_to: reply_to.to_string(),
            message: message.to_string(),
        })
    }
}

fn required<'a>(field: &'static str, value: &'a str) -> Result<&'a str, FormError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(FormError::MissingField { field })
    } else {
        Ok(trimmed)
    }
}

fn looks_like_email(value: &str) -> bool {
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !value.chars().any(char::is_whitespace)
                && !domain.contains('@')
        }
        None => false,
    }
}

/// A validated submission, ready to send.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Submission {
    pub name: String,
    pub reply_to: String,
    pub message: String,
}

impl Submission {
    /// Form-encoded field pairs, in wire order.
    pub fn fields(&self) -> [(&'static str, &str); 3] {
        [
            ("name", self.name.as_str()),
            ("_replyto", self.reply_to.as_str()),
            ("message", self.message.as_str()),
        ]
    }
}

/// Delivers submissions to an external relay.
#[async_trait]
pub trait FormRelay: Send + Sync {
    async fn deliver(&self, submission: &Submission) -> Result<(), RelayError>;
}

/// Posts form-encoded submissions over HTTP.
#[derive(Clone, Debug)]
pub struct HttpFormRelay {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpFormRelay {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), endpoint)
    }

    pub fn with_client(client: reqwest::Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl FormRelay for HttpFormRelay {
    async fn deliver(&self, submission: &Submission) -> Result<(), RelayError> {
        let response = self
            .client
            .post(&self.endpoint)
            .header(ACCEPT, "application/json")
            .form(&submission.fields()[..])
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(RelayError::Status(status.as_u16()))
        }
    }
}

/// Turns a form into exactly one relay request.
#[derive(Clone)]
pub struct ContactSubmitter {
    relay: Arc<dyn FormRelay>,
}

impl ContactSubmitter {
    pub fn new(relay: Arc<dyn FormRelay>) -> Self {
        Self { relay }
    }

    /// Validates and clears `form`, returning the pending delivery.
    ///
    /// The form is cleared before this returns, whatever the eventual
    /// outcome. Validation failures leave the form untouched.
    pub fn submit(
        &self,
        form: &mut ContactForm,
    ) -> Result<impl Future<Output = SubmissionStatus> + Send + use<>, FormError> {
        let submission = form.validate()?;
        form.clear();

        let relay = Arc::clone(&self.relay);
        Ok(async move {
            match relay.deliver(&submission).await {
                Ok(()) => {
                    info!(reply_to = %submission.reply_to, "Contact message delivered");
                    SubmissionStatus::Success
                }
                Err(e) => {
                    warn!(error = %e, "Contact message failed");
                    SubmissionStatus::Error
                }
            }
        })
    }
}

impl std::fmt::Debug for ContactSubmitter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContactSubmitter").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use parking_lot::Mutex;

    /// Relay that answers with a fixed status code.
    struct StubRelay {
        status: u16,
        seen: Mutex<Vec<Submission>>,
    }

    impl StubRelay {
        fn answering(status: u16) -> Arc<Self> {
            Arc::new(Self {
                status,
                seen: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl FormRelay for StubRelay {
        async fn deliver(&self, submission: &Submission) -> Result<(), RelayError> {
            self.seen.lock().push(submission.clone());
            if (200..300).contains(&self.status) {
                Ok(())
            } else {
                Err(RelayError::Status(self.status))
            }
        }
    }

    fn filled() -> ContactForm {
        ContactForm {
            name: " Ada ".to_string(),
            reply_to: "ada@example.com".to_string(),
            message: "Hello there".to_string(),
        }
    }

    #[test]
    fn test_validate_requires_every_field() {
        let mut form = filled();
        form.name = "   ".to_string();
        assert_eq!(form.validate(), Err(FormError::MissingField { field: "name" }));

        let mut form = filled();
        form.reply_to.clear();
        assert_eq!(form.validate(), Err(FormError::MissingField { field: "email" }));

        let mut form = filled();
        form.message = "\n".to_string();
        assert_eq!(form.validate(), Err(FormError::MissingField { field: "message" }));
    }

    #[test]
    fn test_validate_rejects_bad_email() {
        for bad in ["ada", "@example.com", "ada@", "ada@.com", "a da@example.com"] {
            let mut form = filled();
            form.reply_to = bad.to_string();
            assert!(
                matches!(form.validate(), Err(FormError::InvalidEmail(_))),
                "{bad} accepted"
            );
        }
    }

    #[test]
    fn test_fields_use_relay_names() {
        let submission = filled().validate().unwrap();
        let names: Vec<&str> = submission.fields().iter().map(|(k, _)| *k).collect();
        assert_eq!(names, vec!["name", "_replyto", "message"]);
        assert_eq!(submission.name, "Ada");
    }

    #[tokio::test]
    async fn test_success_clears_form_and_reports_success() {
        let relay = StubRelay::answering(200);
        let submitter = ContactSubmitter::new(relay.clone());
        let mut form = filled();

        let pending = submitter.submit(&mut form).unwrap();
        assert!(form.is_blank());
        assert_eq!(pending.await, SubmissionStatus::Success);
        assert_eq!(relay.seen.lock().len(), 1);
    }

    #[tokio::test]
    async fn test_rejection_clears_form_and_reports_error() {
        for status in [400, 422, 500, 503] {
            let submitter = ContactSubmitter::new(StubRelay::answering(status));
            let mut form = filled();

            let pending = submitter.submit(&mut form).unwrap();
            assert!(form.is_blank());
            assert_eq!(pending.await, SubmissionStatus::Error);
        }
    }

    #[test]
    fn test_invalid_form_is_kept_and_nothing_is_sent() {
        let relay = StubRelay::answering(200);
        let submitter = ContactSubmitter::new(relay.clone());
        let mut form = ContactForm {
            message: "hi".to_string(),
            ..Default::default()
        };

        assert!(submitter.submit(&mut form).is_err());
        assert_eq!(form.message, "hi");
        assert!(relay.seen.lock().is_empty());
    }

    #[test]
    fn test_status_messages() {
        assert_eq!(SubmissionStatus::default(), SubmissionStatus::Idle);
        assert!(SubmissionStatus::Idle.message().is_none());
        assert!(SubmissionStatus::Success.message().is_some());
        assert!(SubmissionStatus::Error.message().is_some());
    }
}
