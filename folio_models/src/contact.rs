use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::validation::{self, FieldStates};

/// One of the named text inputs of the contact form, in declared order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    pub const ALL: [Self; 4] = [Self::Name, Self::Email, Self::Subject, Self::Message];

    pub const fn index(self) -> usize {
        self as usize
    }

    /// The id of the input element bound to this field.
    pub const fn element_id(self) -> &'static str {
        match self {
            Self::Name => "fullName",
            Self::Email => "email",
            Self::Subject => "subject",
            Self::Message => "message",
        }
    }

    /// The id of the element that displays this field's error message.
    pub const fn error_element_id(self) -> &'static str {
        match self {
            Self::Name => "fullName-error",
            Self::Email => "email-error",
            Self::Subject => "subject-error",
            Self::Message => "message-error",
        }
    }

    pub fn from_element_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.element_id() == id)
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Subject => "subject",
            Self::Message => "message",
        })
    }
}

/// The raw, unvalidated values of the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFormData {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactFormData {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        let value = value.into();
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Subject => self.subject = value,
            ContactField::Message => self.message = value,
        }
    }

    /// Validates every field without short-circuiting.
    ///
    /// Returns the states of all fields if at least one of them is invalid.
    pub fn validate(self) -> Result<ValidatedContactForm, FieldStates> {
        let states =
            FieldStates::from_fn(|field| validation::validate_field(field, self.get(field)));
        if states.all_valid() {
            Ok(ValidatedContactForm(self))
        } else {
            Err(states)
        }
    }
}

/// A contact form whose fields have all passed validation.
///
/// Can only be obtained from [`ContactFormData::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedContactForm(ContactFormData);

impl ValidatedContactForm {
    pub fn get(&self, field: ContactField) -> &str {
        self.0.get(field)
    }

    pub fn into_inner(self) -> ContactFormData {
        self.0
    }
}

/// The stored representation of one successful submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormRecord {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    #[serde(rename = "timestamp")]
    pub submitted_at: DateTime<Utc>,
}

impl FormRecord {
    pub fn new(form: ValidatedContactForm, submitted_at: DateTime<Utc>) -> Self {
        let ContactFormData {
            name,
            email,
            subject,
            message,
        } = form.into_inner();
        Self {
            name,
            email,
            subject,
            message,
            submitted_at,
        }
    }
}
