//! Contact form: field state, validation and the submit hand-off.
//!
//! Validation is a pure function of the three text fields. Errors are only
//! refreshed on submit; typing into a field does not clear its message.
//! A valid submission is handed to a [`ContactSink`], after which the form
//! resets to empty.

use std::collections::BTreeMap;
use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Loose email shape: something, `@`, something, `.`, something.
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\S+@\S+\.\S+").unwrap());

/// One of the three contact form inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    /// Sender's full name
    Name,
    /// Reply address
    Email,
    /// Free-form message body
    Message,
}

impl Field {
    /// All fields in display order.
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Message];

    /// Stable key used in error maps and payloads.
    pub fn key(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Message => "message",
        }
    }

    /// Human label rendered next to the input.
    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Message => "Message",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Why a single field failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    /// Empty or whitespace-only input
    #[error("{0} is required")]
    Required(Field),
    /// Email present but not shaped like an address
    #[error("Email is invalid")]
    InvalidEmail,
}

/// Field → error mapping. Empty means the form is submittable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors(BTreeMap<Field, FieldError>);

impl FormErrors {
    /// No errors at all.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error, replacing any previous one for the same field.
    pub fn insert(&mut self, field: Field, error: FieldError) {
        self.0.insert(field, error);
    }

    /// Error for `field`, if any.
    pub fn get(&self, field: Field) -> Option<&FieldError> {
        self.0.get(&field)
    }

    /// Rendered message for `field`, if any.
    pub fn message(&self, field: Field) -> Option<String> {
        self.get(field).map(ToString::to_string)
    }

    /// True when `field` has an error.
    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    /// True when no field has an error.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of invalid fields.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterate errors in field order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &FieldError)> {
        self.0.iter().map(|(field, error)| (*field, error))
    }

    /// Errors keyed by field key, the shape the view layer binds to.
    pub fn to_messages(&self) -> BTreeMap<&'static str, String> {
        self.iter()
            .map(|(field, error)| (field.key(), error.to_string()))
            .collect()
    }
}

/// Blank after trimming whitespace and byte-order marks.
fn is_blank(value: &str) -> bool {
    value
        .trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
        .is_empty()
}

/// Validate the three contact fields.
///
/// ```rust
/// use launchpad_core::contact::{validate, Field};
///
/// let errors = validate("A", "not-an-email", "hi");
/// assert_eq!(errors.len(), 1);
/// assert_eq!(errors.message(Field::Email).as_deref(), Some("Email is invalid"));
/// ```
pub fn validate(name: &str, email: &str, message: &str) -> FormErrors {
    let mut errors = FormErrors::new();

    if is_blank(name) {
        errors.insert(Field::Name, FieldError::Required(Field::Name));
    }

    if is_blank(email) {
        errors.insert(Field::Email, FieldError::Required(Field::Email));
    } else if !EMAIL_REGEX.is_match(email) {
        errors.insert(Field::Email, FieldError::InvalidEmail);
    }

    if is_blank(message) {
        errors.insert(Field::Message, FieldError::Required(Field::Message));
    }

    errors
}

/// The validated payload handed to the submission target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactPayload {
    /// Sender's name as typed
    pub name: String,
    /// Sender's email as typed
    pub email: String,
    /// Message body as typed
    pub message: String,
}

/// Failure reported by a [`ContactSink`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeliveryError {
    /// The collaborator refused the payload
    #[error("delivery rejected: {0}")]
    Rejected(String),
}

/// Why a submit did not go through.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// One or more fields failed validation; the sink was not called
    #[error("{} field(s) failed validation", .0.len())]
    Invalid(FormErrors),
    /// Validation passed but the sink failed
    #[error(transparent)]
    Delivery(#[from] DeliveryError),
}

/// Receives validated contact payloads (mail relay, ticketing API, ...).
pub trait ContactSink {
    /// Hand over one payload.
    fn deliver(&self, payload: &ContactPayload) -> Result<(), DeliveryError>;
}

impl<F> ContactSink for F
where
    F: Fn(&ContactPayload) -> Result<(), DeliveryError>,
{
    fn deliver(&self, payload: &ContactPayload) -> Result<(), DeliveryError> {
        self(payload)
    }
}

/// Sink that only logs the payload. Used until a real backend is wired in.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl ContactSink for LogSink {
    fn deliver(&self, payload: &ContactPayload) -> Result<(), DeliveryError> {
        tracing::info!(
            name = %payload.name,
            email = %payload.email,
            message_len = payload.message.len(),
            "contact form submitted"
        );
        Ok(())
    }
}

/// Contact form state: the three inputs plus the errors from the last submit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    /// Name input
    pub name: String,
    /// Email input
    pub email: String,
    /// Message textarea
    pub message: String,
    errors: FormErrors,
}

impl ContactForm {
    /// Empty form, no errors.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value of `field`.
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    /// Keystroke path: replace one field's value. Errors are left as they are.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Message => self.message = value,
        }
    }

    /// Errors stored by the last submit.
    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    /// Validate current values without touching stored errors.
    pub fn validate(&self) -> FormErrors {
        validate(&self.name, &self.email, &self.message)
    }

    /// Snapshot of the current values as a payload.
    pub fn payload(&self) -> ContactPayload {
        ContactPayload {
            name: self.name.clone(),
            email: self.email.clone(),
            message: self.message.clone(),
        }
    }

    /// Empty every field and drop stored errors.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Validate, hand off to `sink`, then reset.
    ///
    /// Invalid input stores the errors and never reaches the sink. A sink
    /// failure leaves the typed values in place so the user can retry.
    pub fn submit(&mut self, sink: &dyn ContactSink) -> Result<ContactPayload, SubmitError> {
        let errors = self.validate();
        if !errors.is_empty() {
            tracing::debug!(invalid = errors.len(), "contact form rejected");
            self.errors = errors.clone();
            return Err(SubmitError::Invalid(errors));
        }
        self.errors = FormErrors::new();

        let payload = self.payload();
        sink.deliver(&payload)?;
        self.clear();
        Ok(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;

    #[test]
    fn byte_order_mark_counts_as_blank() {
        let errors = validate("\u{FEFF}", "a@b.com", " \u{FEFF}\t");
        assert!(errors.contains(Field::Name));
        assert!(errors.contains(Field::Message));
        assert!(!errors.contains(Field::Email));
        assert!(validate("\u{FEFF}A", "a@b.com", "hi").is_empty());
    }

    #[test]
    fn empty_form_reports_all_three_fields() {
        let errors = validate("", "", "");
        let messages = errors.to_messages();

        assert_eq!(messages.len(), 3);
        assert_eq!(messages["name"], "Name is required");
        assert_eq!(messages["email"], "Email is required");
        assert_eq!(messages["message"], "Message is required");
    }

    #[test]
    fn whitespace_counts_as_empty() {
        let errors = validate("   ", "\t", "\n \n");
        assert_eq!(errors.get(Field::Name), Some(&FieldError::Required(Field::Name)));
        assert_eq!(errors.get(Field::Email), Some(&FieldError::Required(Field::Email)));
        assert_eq!(
            errors.get(Field::Message),
            Some(&FieldError::Required(Field::Message))
        );
    }

    #[test]
    fn malformed_email_is_the_only_error() {
        let errors = validate("A", "not-an-email", "hi");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.message(Field::Email).as_deref(), Some("Email is invalid"));
    }

    #[test]
    fn email_shapes() {
        for ok in ["a@b.com", "first.last@sub.example.org", "x@y.z"] {
            assert!(validate("A", ok, "hi").is_empty(), "{ok} should pass");
        }
        for bad in ["a@b", "@b.com", "a@.com", "ab.com", "a @b.c"] {
            assert!(validate("A", bad, "hi").contains(Field::Email), "{bad} should fail");
        }
    }

    #[test]
    fn submit_clears_form_and_errors() {
        let mut form = ContactForm::new();
        form.set(Field::Name, "A");
        form.set(Field::Email, "a@b.com");
        form.set(Field::Message, "hi");

        let payload = form.submit(&LogSink).expect("valid form submits");

        assert_eq!(payload.email, "a@b.com");
        assert_eq!(form, ContactForm::new());
        assert!(form.errors().is_empty());
    }

    #[test]
    fn invalid_submit_keeps_values_and_skips_sink() {
        let calls = RefCell::new(0);
        let sink = |_: &ContactPayload| -> Result<(), DeliveryError> {
            *calls.borrow_mut() += 1;
            Ok(())
        };

        let mut form = ContactForm::new();
        form.set(Field::Name, "A");
        let err = form.submit(&sink).unwrap_err();

        assert!(matches!(err, SubmitError::Invalid(ref e) if e.len() == 2));
        assert_eq!(*calls.borrow(), 0);
        assert_eq!(form.name, "A");
        assert!(form.errors().contains(Field::Email));
        assert!(form.errors().contains(Field::Message));
    }

    #[test]
    fn typing_does_not_refresh_errors() {
        let mut form = ContactForm::new();
        let _ = form.submit(&LogSink);
        form.set(Field::Name, "Ada");
        assert!(form.errors().contains(Field::Name));
    }

    #[test]
    fn delivery_failure_keeps_form_for_retry() {
        let sink = |_: &ContactPayload| -> Result<(), DeliveryError> {
            Err(DeliveryError::Rejected("mail relay offline".into()))
        };

        let mut form = ContactForm::new();
        form.set(Field::Name, "A");
        form.set(Field::Email, "a@b.com");
        form.set(Field::Message, "hi");

        let err = form.submit(&sink).unwrap_err();
        assert_eq!(
            err,
            SubmitError::Delivery(DeliveryError::Rejected("mail relay offline".into()))
        );
        assert_eq!(form.message, "hi");
        assert!(form.errors().is_empty());
    }

    #[test]
    fn payload_serializes_with_plain_keys() {
        let payload = ContactPayload {
            name: "A".into(),
            email: "a@b.com".into(),
            message: "hi".into(),
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"name": "A", "email": "a@b.com", "message": "hi"})
        );
    }
}
