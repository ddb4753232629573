//! Contact form fields and client-side validation.

use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

pub const NAME_REQUIRED: &str = "Name is required";
pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_INVALID: &str = "Invalid email format";
pub const MESSAGE_REQUIRED: &str = "Message is required";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Name,
    Email,
    Message,
}

impl FormField {
    pub const ALL: [FormField; 3] = [FormField::Name, FormField::Email, FormField::Message];

    pub fn label(self) -> &'static str {
        match self {
            FormField::Name => "Name",
            FormField::Email => "Email",
            FormField::Message => "Message",
        }
    }

    pub fn next(self) -> Self {
        match self {
            FormField::Name => FormField::Email,
            FormField::Email => FormField::Message,
            FormField::Message => FormField::Name,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            FormField::Name => FormField::Message,
            FormField::Email => FormField::Name,
            FormField::Message => FormField::Email,
        }
    }
}

/// Current form input. Serialized as the submission body.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct FormState {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl FormState {
    pub fn new(name: &str, email: &str, message: &str) -> Self {
        Self {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        }
    }

    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Message => &self.message,
        }
    }

    pub(crate) fn get_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Message => &mut self.message,
        }
    }
}

/// Per-field error messages. An empty string means no error.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldErrors {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl FieldErrors {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Message => &self.message,
        }
    }

    pub fn clear(&mut self, field: FormField) {
        match field {
            FormField::Name => self.name.clear(),
            FormField::Email => self.email.clear(),
            FormField::Message => self.message.clear(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.email.is_empty() && self.message.is_empty()
    }
}

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\S+@\S+\.\S+").expect("email regex"))
}

/// Loose address check: something, `@`, something, `.`, something.
pub fn is_valid_email(email: &str) -> bool {
    email_pattern().is_match(email)
}

/// Validate every field independently against `form`.
pub fn validate(form: &FormState) -> (FieldErrors, bool) {
    let mut errors = FieldErrors::default();

    if form.name.trim().is_empty() {
        errors.name = NAME_REQUIRED.to_string();
    }
    if form.email.trim().is_empty() {
        errors.email = EMAIL_REQUIRED.to_string();
    } else if !is_valid_email(&form.email) {
        errors.email = EMAIL_INVALID.to_string();
    }
    if form.message.trim().is_empty() {
        errors.message = MESSAGE_REQUIRED.to_string();
    }

    let valid = errors.is_empty();
    (errors, valid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_pattern_is_loose() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("a b@c.d"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("@b.co"));
    }

    #[test]
    fn missing_name_only() {
        let (errors, valid) = validate(&FormState::new("", "x@y.com", "hi"));
        assert!(!valid);
        assert_eq!(
            errors,
            FieldErrors {
                name: NAME_REQUIRED.into(),
                email: String::new(),
                message: String::new(),
            }
        );
    }

    #[test]
    fn whitespace_counts_as_empty() {
        let (errors, valid) = validate(&FormState::new("  ", "   ", "\n"));
        assert!(!valid);
        assert_eq!(errors.name, NAME_REQUIRED);
        assert_eq!(errors.email, EMAIL_REQUIRED);
        assert_eq!(errors.message, MESSAGE_REQUIRED);
    }

    #[test]
    fn malformed_email() {
        let (errors, valid) = validate(&FormState::new("Ada", "ada@home", "hello"));
        assert!(!valid);
        assert_eq!(errors.email, EMAIL_INVALID);
        assert!(errors.name.is_empty());
    }

    #[test]
    fn field_cycle_wraps() {
        assert_eq!(FormField::Message.next(), FormField::Name);
        assert_eq!(FormField::Name.previous(), FormField::Message);
    }
}
