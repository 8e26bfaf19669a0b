use std::sync::LazyLock;

use folio_utils::trimmed_len;
use regex::Regex;

use crate::contact::ContactField;

pub static NAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z ]+$").unwrap());

pub static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// The outcome of validating the current value of a single field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationState {
    pub valid: bool,
    pub message: Option<&'static str>,
}

impl ValidationState {
    pub const fn valid() -> Self {
        Self {
            valid: true,
            message: None,
        }
    }

    pub const fn invalid(message: &'static str) -> Self {
        Self {
            valid: false,
            message: Some(message),
        }
    }

    /// The text to write into the field's error container.
    pub fn message_text(&self) -> &'static str {
        self.message.unwrap_or_default()
    }
}

/// A condition a trimmed field value has to satisfy.
#[derive(Debug, Clone, Copy)]
pub enum Check {
    Required,
    MinLen(usize),
    MaxLen(usize),
    Pattern(&'static LazyLock<Regex>),
}

impl Check {
    fn holds(self, value: &str) -> bool {
        match self {
            Self::Required => !value.is_empty(),
            Self::MinLen(min) => trimmed_len(value) >= min,
            Self::MaxLen(max) => trimmed_len(value) <= max,
            Self::Pattern(regex) => regex.is_match(value),
        }
    }
}

/// The checks of one field, in the order they are evaluated.
#[derive(Debug)]
pub struct FieldRule {
    pub field: ContactField,
    pub checks: &'static [(Check, &'static str)],
}

pub static FIELD_RULES: [FieldRule; 4] = [
    FieldRule {
        field: ContactField::Name,
        checks: &[
            (Check::Required, "Full name is required"),
            (Check::MinLen(2), "Name must be at least 2 characters"),
            (
                Check::Pattern(&NAME_REGEX),
                "Name can only contain letters and spaces",
            ),
        ],
    },
    FieldRule {
        field: ContactField::Email,
        checks: &[
            (Check::Required, "Email is required"),
            (
                Check::Pattern(&EMAIL_REGEX),
                "Please enter a valid email address",
            ),
        ],
    },
    FieldRule {
        field: ContactField::Subject,
        checks: &[
            (Check::Required, "Subject is required"),
            (Check::MinLen(3), "Subject must be at least 3 characters"),
        ],
    },
    FieldRule {
        field: ContactField::Message,
        checks: &[
            (Check::Required, "Message is required"),
            (Check::MinLen(10), "Message must be at least 10 characters"),
            (Check::MaxLen(1000), "Message must be less than 1000 characters"),
        ],
    },
];

impl FieldRule {
    pub fn of(field: ContactField) -> &'static Self {
        &FIELD_RULES[field.index()]
    }

    /// Returns the message of the first failing check.
    pub fn first_violation(&self, value: &str) -> Option<&'static str> {
        let value = value.trim();
        self.checks
            .iter()
            .find(|(check, _)| !check.holds(value))
            .map(|&(_, message)| message)
    }
}

/// Validates the current value of `field`.
pub fn validate_field(field: ContactField, value: &str) -> ValidationState {
    match FieldRule::of(field).first_violation(value) {
        Some(message) => ValidationState::invalid(message),
        None => ValidationState::valid(),
    }
}

/// The validation states of all contact form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldStates([ValidationState; 4]);

impl FieldStates {
    pub fn from_fn(f: impl FnMut(ContactField) -> ValidationState) -> Self {
        Self(ContactField::ALL.map(f))
    }

    pub fn get(&self, field: ContactField) -> ValidationState {
        self.0[field.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (ContactField, ValidationState)> + '_ {
        ContactField::ALL.into_iter().zip(self.0.iter().copied())
    }

    pub fn all_valid(&self) -> bool {
        self.0.iter().all(|state| state.valid)
    }

    /// The invalid fields in declared order.
    pub fn invalid(&self) -> impl Iterator<Item = ContactField> + '_ {
        self.iter()
            .filter(|(_, state)| !state.valid)
            .map(|(field, _)| field)
    }

    pub fn first_invalid(&self) -> Option<ContactField> {
        self.invalid().next()
    }
}
