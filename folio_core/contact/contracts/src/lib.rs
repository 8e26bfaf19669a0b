use folio_models::{
    contact::{ContactField, FormRecord},
    validation::FieldStates,
};
use thiserror::Error;

pub mod record;
pub mod submit;

/// Messages shown to the user by the contact form.
pub mod messages {
    pub const REJECTED: &str = "Please fix the errors in the form";
    pub const SUCCEEDED: &str = "Thank you! Your message has been sent successfully.";
    pub const FAILED: &str = "Your message could not be sent. Please try again.";
    pub const BUSY_LABEL: &str = "Sending…";
}

/// A user interaction with one of the contact form inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactFormEvent {
    Focus(ContactField),
    Input(ContactField),
    Blur(ContactField),
}

/// How a submit request ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// At least one field is invalid, nothing was submitted.
    Rejected(FieldStates),
    /// The form was submitted and reset.
    Succeeded(FormRecord),
    /// The submission failed, the entered values are kept.
    Failed,
    /// Another submission is still in progress.
    Ignored,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactFormAttachError {
    #[error("The page does not contain a contact form.")]
    MissingForm,
    #[error("The page does not contain an input for the {0} field.")]
    MissingInput(ContactField),
    #[error("The page does not contain an error element for the {0} field.")]
    MissingErrorTarget(ContactField),
    #[error("The page does not contain a submit control.")]
    MissingSubmitControl,
}
