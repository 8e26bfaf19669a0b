//! The boundary between the contact form component and the page it is
//! attached to.

use folio_models::contact::ContactField;

/// The css class marking an input whose value failed validation.
pub const ERROR_CLASS: &str = "error";

/// The elements of the contact page that the contact form reads and writes.
///
/// Every element except the inputs may be absent from a page, so lookups
/// return `Option`s and writes to absent elements do nothing.
pub trait FormView: Send + Sync + 'static {
    /// Whether the page contains the contact form at all.
    fn has_form(&self) -> bool;

    /// Whether the page contains the input element of `field`.
    fn has_input(&self, field: ContactField) -> bool;

    /// Resolves the element that displays the error message of `field`.
    fn error_target(&self, field: ContactField) -> Option<ErrorTarget>;

    /// Reads the current value of the input of `field`.
    fn value(&self, field: ContactField) -> Option<String>;

    fn set_value(&self, field: ContactField, value: &str);

    /// Sets `aria-invalid` on the input of `field` and toggles [`ERROR_CLASS`].
    fn set_invalid(&self, field: ContactField, invalid: bool);

    fn set_error_text(&self, target: &ErrorTarget, text: &str);

    /// Moves keyboard focus to the input of `field`.
    fn focus(&self, field: ContactField);

    fn submit_control(&self) -> Option<SubmitControl>;

    fn set_submit_control(&self, control: &SubmitControl);

    /// Shows or hides the success container.
    ///
    /// Returns `false` if the page has no success container.
    fn set_success_visible(&self, visible: bool) -> bool;
}

/// An element displaying the error message of one field.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ErrorTarget {
    pub element_id: String,
}

/// The observable state of the submit button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitControl {
    pub label: String,
    pub disabled: bool,
}

impl SubmitControl {
    pub fn enabled(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            disabled: false,
        }
    }

    pub fn busy(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            disabled: true,
        }
    }
}
