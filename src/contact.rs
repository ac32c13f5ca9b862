//! Contact form validation.
//!
//! Messages come from the request locale's dictionary. Submissions are only
//! validated; nothing is stored or forwarded.

use std::sync::OnceLock;

use regex::Regex;
use serde::Deserialize;

use crate::i18n::ValidationMessages;

/// Submitted contact form fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub message: String,
}

/// Per-field validation messages. `None` means the field is fine.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    pub name: Option<String>,
    pub email: Option<String>,
    pub subject: Option<String>,
    pub message: Option<String>,
}

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.subject.is_none() && self.message.is_none()
    }
}

static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();

fn looks_like_email(email: &str) -> bool {
    EMAIL_REGEX
        .get_or_init(|| Regex::new(r"\S+@\S+\.\S+").unwrap())
        .is_match(email)
}

fn required(value: &str, message: &str) -> Option<String> {
    value.trim().is_empty().then(|| message.to_string())
}

/// Validate a submission against the localized messages.
pub fn validate(form: &ContactForm, messages: &ValidationMessages) -> FormErrors {
    let email = required(&form.email, &messages.email_required).or_else(|| {
        (!looks_like_email(&form.email)).then(|| messages.email_invalid.clone())
    });

    FormErrors {
        name: required(&form.name, &messages.name_required),
        email,
        subject: required(&form.subject, &messages.subject_required),
        message: required(&form.message, &messages.message_required),
    }
}
