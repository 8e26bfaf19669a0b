use std::{
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc,
    },
    time::Duration,
};

use folio_core_contact_contracts::{
    messages, record::ContactRecordRepository, submit::ContactSubmitService,
    ContactFormAttachError, ContactFormEvent, SubmitOutcome,
};
use folio_dom_contracts::{ErrorTarget, FormView, SubmitControl};
use folio_models::{
    contact::{ContactField, ContactFormData, FormRecord},
    notification::Severity,
    validation::{self, FieldStates, ValidationState},
};
use folio_shared_contracts::{notification::NotificationService, time::TimeService};
use tokio::runtime::Handle;
use tracing::{debug, info, warn};

#[cfg(test)]
mod tests;

/// The contact form component.
///
/// Owns its subscription to the page: it is created by [`ContactForm::attach`]
/// and torn down by [`ContactForm::detach`]. Events are dispatched through
/// [`ContactForm::handle`] and [`ContactForm::submit`].
#[derive(Debug)]
pub struct ContactForm<View, Submit, Records, Notify, Time> {
    view: Arc<View>,
    deps: ContactFormDeps<Submit, Records, Notify, Time>,
    error_targets: ErrorTargets,
    success_generation: Arc<AtomicU64>,
    config: ContactFormConfig,
}

#[derive(Debug, Clone)]
pub struct ContactFormDeps<Submit, Records, Notify, Time> {
    pub submit: Submit,
    pub records: Records,
    pub notification: Notify,
    pub time: Time,
}

#[derive(Debug, Clone, Copy)]
pub struct ContactFormConfig {
    /// How long the success container stays visible after a submission.
    pub success_message_ttl: Duration,
}

/// The error element of every field, resolved once on attach.
#[derive(Debug, Clone)]
struct ErrorTargets([ErrorTarget; 4]);

impl ErrorTargets {
    fn resolve(view: &impl FormView) -> Result<Self, ContactFormAttachError> {
        let [name, email, subject, message] = ContactField::ALL.map(|field| {
            view.error_target(field)
                .ok_or(ContactFormAttachError::MissingErrorTarget(field))
        });
        Ok(Self([name?, email?, subject?, message?]))
    }

    fn get(&self, field: ContactField) -> &ErrorTarget {
        &self.0[field.index()]
    }
}

impl<View, Submit, Records, Notify, Time> ContactForm<View, Submit, Records, Notify, Time>
where
    View: FormView,
    Submit: ContactSubmitService,
    Records: ContactRecordRepository,
    Notify: NotificationService,
    Time: TimeService,
{
    /// Binds the component to `view`.
    ///
    /// Fails if the page lacks the form, one of the inputs, one of the error
    /// elements or the submit control. Callers are expected to log the error
    /// and leave the page without an active contact form.
    pub fn attach(
        view: Arc<View>,
        deps: ContactFormDeps<Submit, Records, Notify, Time>,
        config: ContactFormConfig,
    ) -> Result<Self, ContactFormAttachError> {
        if !view.has_form() {
            return Err(ContactFormAttachError::MissingForm);
        }
        if let Some(field) = ContactField::ALL
            .into_iter()
            .find(|&field| !view.has_input(field))
        {
            return Err(ContactFormAttachError::MissingInput(field));
        }
        let error_targets = ErrorTargets::resolve(&*view)?;
        if view.submit_control().is_none() {
            return Err(ContactFormAttachError::MissingSubmitControl);
        }

        debug!("contact form attached");

        Ok(Self {
            view,
            deps,
            error_targets,
            success_generation: Default::default(),
            config,
        })
    }

    /// Unsubscribes from the page and hands it back.
    pub fn detach(self) -> Arc<View> {
        debug!("contact form detached");
        self.view
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    /// Reacts to an interaction with one of the inputs.
    ///
    /// Focusing or typing only clears the error of the field; the value is
    /// validated again once the field loses focus.
    pub fn handle(&self, event: ContactFormEvent) {
        match event {
            ContactFormEvent::Focus(field) | ContactFormEvent::Input(field) => {
                self.show_state(field, ValidationState::valid())
            }
            ContactFormEvent::Blur(field) => {
                self.validate_field(field);
            }
        }
    }

    /// Validates the current value of `field` and shows the outcome next to
    /// the input.
    pub fn validate_field(&self, field: ContactField) -> ValidationState {
        let value = self.view.value(field).unwrap_or_default();
        let state = validation::validate_field(field, &value);
        self.show_state(field, state);
        state
    }

    /// Validates all fields and, if they are valid, submits the form.
    ///
    /// Requests made while a previous submission is still in progress are
    /// ignored.
    pub async fn submit(&self) -> SubmitOutcome {
        let Some(control) = self.view.submit_control() else {
            return SubmitOutcome::Ignored;
        };
        if control.disabled {
            debug!("submission already in progress");
            return SubmitOutcome::Ignored;
        }

        let form = match self.values().validate() {
            Ok(form) => form,
            Err(states) => return self.reject(states),
        };
        for field in ContactField::ALL {
            self.show_state(field, ValidationState::valid());
        }

        self.view
            .set_submit_control(&SubmitControl::busy(messages::BUSY_LABEL));

        if let Err(err) = self.deps.submit.submit(&form).await {
            warn!("Failed to submit contact form: {err:#}");
            self.view.set_submit_control(&control);
            self.deps
                .notification
                .notify(messages::FAILED, Severity::Error);
            return SubmitOutcome::Failed;
        }

        let record = FormRecord::new(form, self.deps.time.now());
        if let Err(err) = self.deps.records.append(&record).await {
            warn!("Could not save submission: {err:#}");
        }

        self.deps
            .notification
            .notify(messages::SUCCEEDED, Severity::Success);
        self.show_success_message();
        self.reset();
        self.view.set_submit_control(&control);

        info!("contact form submitted");
        SubmitOutcome::Succeeded(record)
    }

    fn reject(&self, states: FieldStates) -> SubmitOutcome {
        for (field, state) in states.iter() {
            self.show_state(field, state);
        }
        if let Some(field) = states.first_invalid() {
            self.view.focus(field);
        }
        self.deps
            .notification
            .notify(messages::REJECTED, Severity::Error);

        let invalid = states.invalid().collect::<Vec<_>>();
        debug!(?invalid, "contact form rejected");
        SubmitOutcome::Rejected(states)
    }

    fn values(&self) -> ContactFormData {
        let mut data = ContactFormData::default();
        for field in ContactField::ALL {
            data.set(field, self.view.value(field).unwrap_or_default());
        }
        data
    }

    fn show_state(&self, field: ContactField, state: ValidationState) {
        self.view
            .set_error_text(self.error_targets.get(field), state.message_text());
        self.view.set_invalid(field, !state.valid);
    }

    fn reset(&self) {
        for field in ContactField::ALL {
            self.view.set_value(field, "");
            self.show_state(field, ValidationState::valid());
        }
    }

    /// Shows the success container and hides it again after the configured
    /// time, unless a later submission has shown it again in the meantime.
    fn show_success_message(&self) {
        if !self.view.set_success_visible(true) {
            return;
        }

        let generation = self.success_generation.fetch_add(1, Ordering::Relaxed) + 1;
        let Ok(handle) = Handle::try_current() else {
            warn!("No runtime available, success message will not be hidden");
            return;
        };

        let view = Arc::clone(&self.view);
        let current = Arc::clone(&self.success_generation);
        let ttl = self.config.success_message_ttl;
        handle.spawn(async move {
            tokio::time::sleep(ttl).await;
            if current.load(Ordering::Relaxed) == generation {
                view.set_success_visible(false);
            }
        });
    }
}
