//! Interaction state machines.
//!
//! - [`InputMode`]: whether keys are commands or text for a field
//! - [`ContactFocus`]: cursor position inside the contact form
//! - [`LoadStatus`]: lifecycle of the asynchronous catalog load
//! - [`FormStatus`]: the transient message under the contact form

use crate::domain::contact::ContactField;

/// How key presses are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Keys are commands.
    #[default]
    Normal,

    /// Typing into the project search box. `Enter`/`Esc` leave, keeping the
    /// query.
    Search,

    /// Typing into a contact field. `Enter`/`Esc` blur and validate it.
    Editing(ContactField),
}

impl InputMode {
    /// `true` when printable keys are text rather than commands.
    #[must_use]
    pub const fn is_text_entry(self) -> bool {
        !matches!(self, Self::Normal)
    }
}

/// Focusable rows of the contact form: the three fields, then the submit
/// button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactFocus {
    Field(ContactField),
    Submit,
}

impl Default for ContactFocus {
    fn default() -> Self {
        Self::Field(ContactField::Name)
    }
}

impl ContactFocus {
    const ORDER: [Self; 4] = [
        Self::Field(ContactField::Name),
        Self::Field(ContactField::Email),
        Self::Field(ContactField::Message),
        Self::Submit,
    ];

    fn index(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    /// Moves down, stopping at the submit row.
    #[must_use]
    pub fn next(self) -> Self {
        Self::ORDER[(self.index() + 1).min(Self::ORDER.len() - 1)]
    }

    /// Moves up, stopping at the first field.
    #[must_use]
    pub fn previous(self) -> Self {
        Self::ORDER[self.index().saturating_sub(1)]
    }
}

/// State of the catalog load.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadStatus {
    #[default]
    Loading,
    Ready,
    /// Holds the user-facing message.
    Failed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormStatusKind {
    Success,
    Error,
}

/// Message shown below the contact form until it auto-hides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormStatus {
    pub kind: FormStatusKind,
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contact_focus_clamps_at_both_ends() {
        let first = ContactFocus::default();
        assert_eq!(first.previous(), first);
        assert_eq!(first.next(), ContactFocus::Field(ContactField::Email));
        assert_eq!(ContactFocus::Submit.next(), ContactFocus::Submit);
        assert_eq!(
            ContactFocus::Submit.previous(),
            ContactFocus::Field(ContactField::Message)
        );
    }

    #[test]
    fn only_normal_mode_treats_keys_as_commands() {
        assert!(!InputMode::Normal.is_text_entry());
        assert!(InputMode::Search.is_text_entry());
        assert!(InputMode::Editing(ContactField::Email).is_text_entry());
    }
}
