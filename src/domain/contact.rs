//! Contact form model and field validation.
//!
//! Validation is synchronous and per field. A field is validated when it
//! loses focus and all fields are validated before submission; editing a
//! field clears its error.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Minimum trimmed length of the `name` field.
const MIN_NAME_CHARS: usize = 2;

/// Minimum trimmed length of the `message` field.
const MIN_MESSAGE_CHARS: usize = 10;

/// Byte order mark, which form input treats as whitespace.
const BOM: char = '\u{feff}';

/// Whitespace as form input sees it: Unicode white space plus the BOM.
fn is_form_whitespace(c: char) -> bool {
    c.is_whitespace() || c == BOM
}

/// The three required contact form fields, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactField {
    pub const ALL: [Self; 3] = [Self::Name, Self::Email, Self::Message];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Message => "Message",
        }
    }

    /// Form field name, also the key used in persisted submissions.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
        }
    }
}

/// Inline validation failure for a single field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Name must be at least 2 characters long")]
    NameTooShort,
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Message must be at least 10 characters long")]
    MessageTooShort,
}

/// Validates one field value.
///
/// # Errors
///
/// Returns the [`ValidationError`] to display next to the field.
pub fn validate(field: ContactField, value: &str) -> Result<(), ValidationError> {
    let value = value.trim_matches(is_form_whitespace);
    match field {
        ContactField::Name if value.chars().count() < MIN_NAME_CHARS => Err(ValidationError::NameTooShort),
        ContactField::Email if !is_valid_email(value) => Err(ValidationError::InvalidEmail),
        ContactField::Message if value.chars().count() < MIN_MESSAGE_CHARS => {
            Err(ValidationError::MessageTooShort)
        }
        _ => Ok(()),
    }
}

/// Checks the `local@domain.tld` shape: no whitespace, exactly one `@`, a
/// non-empty local part, and a domain containing a dot with text on both
/// sides.
///
/// ```rust
/// use folio::domain::contact::is_valid_email;
///
/// assert!(is_valid_email("a@b.com"));
/// assert!(!is_valid_email("a@b"));
/// ```
#[must_use]
pub fn is_valid_email(value: &str) -> bool {
    if value.chars().any(is_form_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(idx, c)| c == '.' && idx > 0 && idx + 1 < domain.len())
}

/// Editable form contents plus the inline error shown for each field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
    name_error: Option<ValidationError>,
    email_error: Option<ValidationError>,
    message_error: Option<ValidationError>,
}

impl ContactForm {
    #[must_use]
    pub fn value(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    fn value_mut(&mut self, field: ContactField) -> &mut String {
        match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Message => &mut self.message,
        }
    }

    fn error_slot(&mut self, field: ContactField) -> &mut Option<ValidationError> {
        match field {
            ContactField::Name => &mut self.name_error,
            ContactField::Email => &mut self.email_error,
            ContactField::Message => &mut self.message_error,
        }
    }

    #[must_use]
    pub const fn error(&self, field: ContactField) -> Option<ValidationError> {
        match field {
            ContactField::Name => self.name_error,
            ContactField::Email => self.email_error,
            ContactField::Message => self.message_error,
        }
    }

    /// Appends a character and clears the field's error.
    pub fn push_char(&mut self, field: ContactField, c: char) {
        self.value_mut(field).push(c);
        *self.error_slot(field) = None;
    }

    /// Removes the last character and clears the field's error.
    pub fn pop_char(&mut self, field: ContactField) {
        self.value_mut(field).pop();
        *self.error_slot(field) = None;
    }

    /// Validates one field, records the outcome, and returns whether it passed.
    pub fn validate_field(&mut self, field: ContactField) -> bool {
        let outcome = validate(field, self.value(field)).err();
        *self.error_slot(field) = outcome;
        outcome.is_none()
    }

    /// Validates every field (no short-circuit, so all errors show at once).
    pub fn validate_all(&mut self) -> bool {
        ContactField::ALL
            .iter()
            .fold(true, |ok, &field| self.validate_field(field) && ok)
    }

    /// Clears values and errors.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Snapshot of the current values for submission.
    #[must_use]
    pub fn fields(&self) -> ContactFields {
        ContactFields {
            name: self.name.clone(),
            email: self.email.clone(),
            message: self.message.clone(),
        }
    }
}

/// Submitted values, without a timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// A persisted submission: the submitted values plus an ISO-8601 timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    #[serde(flatten)]
    pub fields: ContactFields,
    pub timestamp: String,
}

impl ContactSubmission {
    /// Stamps `fields` with the current UTC time in millisecond precision.
    #[must_use]
    pub fn now(fields: ContactFields) -> Self {
        let timestamp = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true);
        Self { fields, timestamp }
    }
}
