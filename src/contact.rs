use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const SUCCESS_MESSAGE: &str = "Message sent successfully! I'll get back to you soon.";
pub const FALLBACK_MESSAGE: &str = "Failed to send message. Please try emailing me directly.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

impl FormStatus {
    pub fn is_loading(self) -> bool {
        self == Self::Loading
    }

    /// Modifier class for the status banner.
    pub fn class(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Loading => "loading",
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

/// What the visitor typed, built at submit time and dropped after the request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    /// Honeypot, humans leave it empty.
    #[serde(default)]
    pub botcheck: String,
}

impl ContactMessage {
    /// Presence only, the same rule the form's `required` inputs apply.
    pub fn is_complete(&self) -> bool {
        [&self.name, &self.email, &self.subject, &self.message]
            .iter()
            .all(|f| !f.is_empty())
    }

    /// Multipart fields in the order the relay expects, without the access key.
    pub fn fields(&self) -> [(&'static str, &str); 5] {
        [
            ("name", self.name.as_str()),
            ("email", self.email.as_str()),
            ("subject", self.subject.as_str()),
            ("message", self.message.as_str()),
            ("botcheck", self.botcheck.as_str()),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelayReply {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

impl RelayReply {
    pub fn into_result(self) -> Result<(), ContactError> {
        if self.success {
            Ok(())
        } else {
            Err(ContactError::Rejected(self.message.filter(|m| !m.is_empty())))
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ContactError {
    #[error("Contact relay is not configured")]
    NotConfigured,
    #[error("All contact fields are required")]
    Incomplete,
    #[error("Couldn't reach the contact relay: {0}")]
    Transport(String),
    #[error("Contact relay answered with status {0}")]
    Status(http::StatusCode),
    #[error("Couldn't decode the contact relay reply: {0}")]
    Decode(String),
    #[error("Contact relay rejected the message")]
    Rejected(Option<String>),
}

impl ContactError {
    /// Text shown under the form. Only a relay rejection carries its own wording.
    pub fn user_message(&self) -> String {
        match self {
            Self::Rejected(Some(m)) => m.clone(),
            _ => FALLBACK_MESSAGE.to_string(),
        }
    }
}

/// Status machine behind the contact form.
///
/// Each submission gets an attempt number so that the delayed reset of an
/// older attempt can't wipe the status of a newer one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactForm {
    status: FormStatus,
    message: Option<String>,
    attempt: u64,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> FormStatus {
        self.status
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Moves to `Loading`. Returns `None` while another submission is in flight.
    pub fn begin(&mut self) -> Option<u64> {
        if self.status.is_loading() {
            return None;
        }
        self.attempt += 1;
        self.status = FormStatus::Loading;
        self.message = None;
        Some(self.attempt)
    }

    /// Records the relay outcome for `attempt`. Returns `true` when the fields
    /// should be cleared.
    pub fn finish(&mut self, attempt: u64, outcome: Result<(), ContactError>) -> bool {
        if attempt != self.attempt || !self.status.is_loading() {
            return false;
        }
        match outcome {
            Ok(()) => {
                self.status = FormStatus::Success;
                self.message = Some(SUCCESS_MESSAGE.to_string());
                true
            }
            Err(e) => {
                self.status = FormStatus::Error;
                self.message = Some(e.user_message());
                false
            }
        }
    }

    /// Fired by the reset timer. Ignored if a newer attempt has started.
    pub fn reset(&mut self, attempt: u64) {
        if attempt == self.attempt && !self.status.is_loading() {
            self.status = FormStatus::Idle;
            self.message = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ContactMessage {
        ContactMessage {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            subject: "Project inquiry".to_string(),
            message: "Hello there".to_string(),
            botcheck: String::new(),
        }
    }

    #[test]
    fn test_success_flow() {
        let mut form = ContactForm::new();
        assert_eq!(form.status(), FormStatus::Idle);

        let attempt = form.begin().expect("idle form should accept a submit");
        assert_eq!(form.status(), FormStatus::Loading);

        let reply = RelayReply {
            success: true,
            message: None,
        };
        assert!(form.finish(attempt, reply.into_result()));
        assert_eq!(form.status(), FormStatus::Success);
        assert_eq!(form.message(), Some(SUCCESS_MESSAGE));

        form.reset(attempt);
        assert_eq!(form.status(), FormStatus::Idle);
        assert_eq!(form.message(), None);
    }

    #[test]
    fn test_rejection_shows_relay_message() {
        let mut form = ContactForm::new();
        let attempt = form.begin().unwrap();
        let reply = RelayReply {
            success: false,
            message: Some("X".to_string()),
        };
        assert!(!form.finish(attempt, reply.into_result()));
        assert_eq!(form.status(), FormStatus::Error);
        assert_eq!(form.message(), Some("X"));
    }

    #[test]
    fn test_rejection_without_message_falls_back() {
        let mut form = ContactForm::new();
        let attempt = form.begin().unwrap();
        let reply: RelayReply = serde_json::from_str(r#"{"success": false}"#).unwrap();
        form.finish(attempt, reply.into_result());
        assert_eq!(form.message(), Some(FALLBACK_MESSAGE));

        let mut form = ContactForm::new();
        let attempt = form.begin().unwrap();
        let reply: RelayReply =
            serde_json::from_str(r#"{"success": false, "message": ""}"#).unwrap();
        form.finish(attempt, reply.into_result());
        assert_eq!(form.message(), Some(FALLBACK_MESSAGE));
    }

    #[test]
    fn test_transport_failure_uses_fallback() {
        let mut form = ContactForm::new();
        let attempt = form.begin().unwrap();
        let cleared = form.finish(
            attempt,
            Err(ContactError::Transport("connection refused".to_string())),
        );
        assert!(!cleared);
        assert_eq!(form.status(), FormStatus::Error);
        assert_eq!(form.message(), Some(FALLBACK_MESSAGE));
    }

    #[test]
    fn test_no_double_submit() {
        let mut form = ContactForm::new();
        let first = form.begin().unwrap();
        assert_eq!(form.begin(), None);
        assert_eq!(form.status(), FormStatus::Loading);

        form.finish(first, Ok(()));
        // a fresh attempt is allowed once the first has settled
        assert!(form.begin().is_some());
    }

    #[test]
    fn test_stale_reset_is_ignored() {
        let mut form = ContactForm::new();
        let first = form.begin().unwrap();
        form.finish(first, Err(ContactError::NotConfigured));
        let second = form.begin().unwrap();

        form.reset(first);
        assert_eq!(form.status(), FormStatus::Loading);

        form.finish(second, Ok(()));
        form.reset(first);
        assert_eq!(form.status(), FormStatus::Success);
        form.reset(second);
        assert_eq!(form.status(), FormStatus::Idle);
    }

    #[test]
    fn test_stale_finish_is_ignored() {
        let mut form = ContactForm::new();
        let first = form.begin().unwrap();
        assert!(!form.finish(first + 1, Ok(())));
        assert_eq!(form.status(), FormStatus::Loading);
    }

    #[test]
    fn test_message_completeness() {
        assert!(sample().is_complete());
        let mut m = sample();
        m.subject = String::new();
        assert!(!m.is_complete());

        // whitespace passes the browser's `required`, so it passes here too
        m.subject = "  ".to_string();
        assert!(m.is_complete());
    }

    #[test]
    fn test_fields_include_honeypot() {
        let keys = sample().fields().map(|(k, _)| k);
        assert_eq!(keys, ["name", "email", "subject", "message", "botcheck"]);
    }

    #[test]
    fn test_status_classes() {
        assert_eq!(FormStatus::Success.class(), "success");
        assert_eq!(FormStatus::Error.class(), "error");
        assert!(FormStatus::Loading.is_loading());
        assert!(!FormStatus::Idle.is_loading());
    }
}
