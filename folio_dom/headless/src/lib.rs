//! An in-memory rendition of the contact page, used wherever no browser
//! document is available.

use std::{
    collections::{BTreeMap, BTreeSet},
    sync::{Mutex, MutexGuard, PoisonError},
};

use folio_dom_contracts::{ErrorTarget, FormView, SubmitControl, ERROR_CLASS};
use folio_models::contact::{ContactField, ContactFormData};
use tracing::debug;

pub const DEFAULT_SUBMIT_LABEL: &str = "Send Message";

#[derive(Debug)]
pub struct HeadlessFormView {
    page: Mutex<Page>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Input {
    pub value: String,
    pub aria_invalid: Option<bool>,
    pub classes: BTreeSet<String>,
}

#[derive(Debug)]
struct Page {
    form: bool,
    inputs: BTreeMap<ContactField, Input>,
    errors: BTreeMap<String, String>,
    focused: Option<ContactField>,
    submit: Option<SubmitControl>,
    success_visible: Option<bool>,
}

impl HeadlessFormView {
    /// A contact page containing every element the contact form uses.
    pub fn contact_page() -> Self {
        Self {
            page: Mutex::new(Page {
                form: true,
                inputs: ContactField::ALL
                    .into_iter()
                    .map(|field| (field, Input::default()))
                    .collect(),
                errors: ContactField::ALL
                    .into_iter()
                    .map(|field| (field.error_element_id().into(), String::new()))
                    .collect(),
                focused: None,
                submit: Some(SubmitControl::enabled(DEFAULT_SUBMIT_LABEL)),
                success_visible: Some(false),
            }),
        }
    }

    pub fn without_form(self) -> Self {
        self.edit(|page| page.form = false)
    }

    pub fn without_input(self, field: ContactField) -> Self {
        self.edit(|page| {
            page.inputs.remove(&field);
        })
    }

    pub fn without_error_target(self, field: ContactField) -> Self {
        self.edit(|page| {
            page.errors.remove(field.error_element_id());
        })
    }

    pub fn without_submit_control(self) -> Self {
        self.edit(|page| page.submit = None)
    }

    pub fn without_success_container(self) -> Self {
        self.edit(|page| page.success_visible = None)
    }

    fn edit(self, f: impl FnOnce(&mut Page)) -> Self {
        f(&mut self.page());
        self
    }

    fn page(&self) -> MutexGuard<'_, Page> {
        self.page.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Fills every input with the corresponding value of `data`.
    pub fn fill(&self, data: &ContactFormData) {
        for field in ContactField::ALL {
            self.set_value(field, data.get(field));
        }
    }

    /// Reads the values of all inputs, absent inputs read as empty.
    pub fn values(&self) -> ContactFormData {
        let mut data = ContactFormData::default();
        for field in ContactField::ALL {
            data.set(field, self.value(field).unwrap_or_default());
        }
        data
    }

    pub fn input(&self, field: ContactField) -> Option<Input> {
        self.page().inputs.get(&field).cloned()
    }

    /// The `aria-invalid` attribute of the input of `field`.
    pub fn aria_invalid(&self, field: ContactField) -> Option<&'static str> {
        let invalid = self.page().inputs.get(&field)?.aria_invalid?;
        Some(if invalid { "true" } else { "false" })
    }

    pub fn has_error_class(&self, field: ContactField) -> bool {
        self.page()
            .inputs
            .get(&field)
            .is_some_and(|input| input.classes.contains(ERROR_CLASS))
    }

    pub fn error_text(&self, field: ContactField) -> Option<String> {
        self.page().errors.get(field.error_element_id()).cloned()
    }

    pub fn focused(&self) -> Option<ContactField> {
        self.page().focused
    }

    pub fn success_visible(&self) -> Option<bool> {
        self.page().success_visible
    }
}

impl FormView for HeadlessFormView {
    fn has_form(&self) -> bool {
        self.page().form
    }

    fn has_input(&self, field: ContactField) -> bool {
        self.page().inputs.contains_key(&field)
    }

    fn error_target(&self, field: ContactField) -> Option<ErrorTarget> {
        let id = field.error_element_id();
        self.page().errors.contains_key(id).then(|| ErrorTarget {
            element_id: id.into(),
        })
    }

    fn value(&self, field: ContactField) -> Option<String> {
        self.page()
            .inputs
            .get(&field)
            .map(|input| input.value.clone())
    }

    fn set_value(&self, field: ContactField, value: &str) {
        match self.page().inputs.get_mut(&field) {
            Some(input) => input.value = value.into(),
            None => debug!(%field, "input element missing"),
        }
    }

    fn set_invalid(&self, field: ContactField, invalid: bool) {
        let mut page = self.page();
        let Some(input) = page.inputs.get_mut(&field) else {
            debug!(%field, "input element missing");
            return;
        };
        input.aria_invalid = Some(invalid);
        if invalid {
            input.classes.insert(ERROR_CLASS.into());
        } else {
            input.classes.remove(ERROR_CLASS);
        }
    }

    fn set_error_text(&self, target: &ErrorTarget, text: &str) {
        match self.page().errors.get_mut(&target.element_id) {
            Some(content) => *content = text.into(),
            None => debug!(element_id = %target.element_id, "error element missing"),
        }
    }

    fn focus(&self, field: ContactField) {
        let mut page = self.page();
        if page.inputs.contains_key(&field) {
            page.focused = Some(field);
        }
    }

    fn submit_control(&self) -> Option<SubmitControl> {
        self.page().submit.clone()
    }

    fn set_submit_control(&self, control: &SubmitControl) {
        if let Some(submit) = &mut self.page().submit {
            *submit = control.clone();
        }
    }

    fn set_success_visible(&self, visible: bool) -> bool {
        match &mut self.page().success_visible {
            Some(current) => {
                *current = visible;
                true
            }
            None => false,
        }
    }
}
