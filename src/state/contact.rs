use std::fmt;

use thiserror::Error;

use crate::email::{EmailError, TemplateParams};

use super::toast::ToastKind;

pub const SEND_SUCCESS_TOAST: &str = "Your message was sent successfully!";
pub const SEND_FAILURE_TOAST: &str = "Failed to send the message. Please try again later.";
pub const SEND_FAILURE_BANNER: &str =
    "Something went wrong while sending your message. Please try again later.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 4] = [Self::Name, Self::Email, Self::Subject, Self::Message];

    /// The form control's `name`/`id`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Subject => "subject",
            Self::Message => "message",
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: String) {
        let slot = match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Subject => &mut self.subject,
            ContactField::Message => &mut self.message,
        };
        *slot = value;
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Same rule as the HTML `required` attribute: the value must be non-empty.
    pub fn first_missing(&self) -> Option<ContactField> {
        ContactField::ALL
            .into_iter()
            .find(|f| self.get(*f).is_empty())
    }

    pub fn to_params(&self) -> TemplateParams {
        TemplateParams {
            from_name: self.name.clone(),
            from_email: self.email.clone(),
            subject: self.subject.clone(),
            message: self.message.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    Submitted,
    Error(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("a message is already being sent")]
    InProgress,
    #[error("the message was already sent")]
    AlreadySent,
    #[error("{0} is required")]
    MissingField(ContactField),
}

/// Toast to show after a send attempt settles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Notice {
    pub kind: ToastKind,
    pub message: &'static str,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactController {
    form: ContactForm,
    status: SubmitStatus,
}

impl ContactController {
    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn status(&self) -> &SubmitStatus {
        &self.status
    }

    pub fn is_submitting(&self) -> bool {
        self.status == SubmitStatus::Submitting
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.status {
            SubmitStatus::Error(msg) => Some(msg),
            _ => None,
        }
    }

    pub fn update_field(&mut self, field: ContactField, value: String) {
        self.form.set(field, value);
    }

    /// Moves to `Submitting` and returns the payload to send. Allowed from
    /// `Idle` and, as a retry, from `Error`.
    pub fn begin_submit(&mut self) -> Result<TemplateParams, ContactError> {
        match self.status {
            SubmitStatus::Submitting => return Err(ContactError::InProgress),
            SubmitStatus::Submitted => return Err(ContactError::AlreadySent),
            SubmitStatus::Idle | SubmitStatus::Error(_) => {}
        }
        if let Some(field) = self.form.first_missing() {
            return Err(ContactError::MissingField(field));
        }
        self.status = SubmitStatus::Submitting;
        Ok(self.form.to_params())
    }

    /// Settles an in-flight submission. Returns `None` if nothing was in flight.
    pub fn complete(&mut self, outcome: Result<(), EmailError>) -> Option<Notice> {
        if !self.is_submitting() {
            return None;
        }
        match outcome {
            Ok(()) => {
                log::info!("Contact message sent");
                self.status = SubmitStatus::Submitted;
                self.form.clear();
                Some(Notice {
                    kind: ToastKind::Success,
                    message: SEND_SUCCESS_TOAST,
                })
            }
            Err(e) => {
                log::error!("Failed to send contact message: {e}");
                self.status = SubmitStatus::Error(SEND_FAILURE_BANNER.to_string());
                Some(Notice {
                    kind: ToastKind::Error,
                    message: SEND_FAILURE_TOAST,
                })
            }
        }
    }

    /// "Send another message": back to `Idle` from a settled state.
    pub fn reset(&mut self) -> bool {
        match self.status {
            SubmitStatus::Submitted | SubmitStatus::Error(_) => {
                self.status = SubmitStatus::Idle;
                true
            }
            SubmitStatus::Idle | SubmitStatus::Submitting => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use futures::executor::block_on;
    use http::StatusCode;

    use super::*;
    use crate::email::EmailRelay;

    struct FakeRelay {
        outcome: Result<(), EmailError>,
        sent: RefCell<Vec<TemplateParams>>,
        calls: Cell<usize>,
    }

    impl FakeRelay {
        fn new(outcome: Result<(), EmailError>) -> Self {
            Self {
                outcome,
                sent: RefCell::new(Vec::new()),
                calls: Cell::new(0),
            }
        }
    }

    impl EmailRelay for FakeRelay {
        async fn send(&self, params: &TemplateParams) -> Result<(), EmailError> {
            self.calls.set(self.calls.get() + 1);
            self.sent.borrow_mut().push(params.clone());
            self.outcome.clone()
        }
    }

    fn filled() -> ContactController {
        let mut ctl = ContactController::default();
        ctl.update_field(ContactField::Name, "Ada".to_string());
        ctl.update_field(ContactField::Email, "ada@example.com".to_string());
        ctl.update_field(ContactField::Subject, "Project".to_string());
        ctl.update_field(ContactField::Message, "Let's talk".to_string());
        ctl
    }

    fn submit(ctl: &mut ContactController, relay: &FakeRelay) -> Option<Notice> {
        let params = ctl.begin_submit().expect("submit should start");
        assert_eq!(ctl.status(), &SubmitStatus::Submitting);
        let outcome = block_on(relay.send(&params));
        ctl.complete(outcome)
    }

    #[test]
    fn test_successful_submit_clears_fields() {
        let mut ctl = filled();
        let relay = FakeRelay::new(Ok(()));
        assert_eq!(ctl.status(), &SubmitStatus::Idle);

        let notice = submit(&mut ctl, &relay).unwrap();
        assert_eq!(notice.kind, ToastKind::Success);
        assert_eq!(ctl.status(), &SubmitStatus::Submitted);
        assert_eq!(ctl.form(), &ContactForm::default());

        let sent = relay.sent.borrow();
        assert_eq!(sent[0].from_name, "Ada");
        assert_eq!(sent[0].from_email, "ada@example.com");
        assert_eq!(sent[0].subject, "Project");
        assert_eq!(sent[0].message, "Let's talk");
    }

    #[test]
    fn test_rejected_submit_keeps_fields_and_allows_retry() {
        let mut ctl = filled();
        let before = ctl.form().clone();
        let failing = FakeRelay::new(Err(EmailError::Rejected {
            status: StatusCode::BAD_REQUEST,
            body: "The public key is invalid".to_string(),
        }));

        let notice = submit(&mut ctl, &failing).unwrap();
        assert_eq!(notice.kind, ToastKind::Error);
        assert_eq!(ctl.error_message(), Some(SEND_FAILURE_BANNER));
        assert_eq!(ctl.form(), &before);

        let working = FakeRelay::new(Ok(()));
        submit(&mut ctl, &working).unwrap();
        assert_eq!(ctl.status(), &SubmitStatus::Submitted);
        assert_eq!(failing.calls.get() + working.calls.get(), 2);
    }

    #[test]
    fn test_no_double_submit_while_in_flight() {
        let mut ctl = filled();
        ctl.begin_submit().unwrap();
        assert_eq!(ctl.begin_submit(), Err(ContactError::InProgress));
        assert!(!ctl.reset());
    }

    #[test]
    fn test_submitted_requires_reset() {
        let mut ctl = filled();
        submit(&mut ctl, &FakeRelay::new(Ok(()))).unwrap();
        assert_eq!(ctl.begin_submit(), Err(ContactError::AlreadySent));
        assert!(ctl.reset());
        assert_eq!(ctl.status(), &SubmitStatus::Idle);
        assert!(!ctl.reset());
    }

    #[test]
    fn test_missing_field_does_not_change_state() {
        let mut ctl = filled();
        ctl.update_field(ContactField::Subject, String::new());
        assert_eq!(
            ctl.begin_submit(),
            Err(ContactError::MissingField(ContactField::Subject))
        );
        assert_eq!(ctl.status(), &SubmitStatus::Idle);
    }

    #[test]
    fn test_stray_completion_ignored() {
        let mut ctl = filled();
        assert_eq!(ctl.complete(Ok(())), None);
        assert_eq!(ctl.status(), &SubmitStatus::Idle);
        assert_eq!(ctl.form().name, "Ada");
    }
}
