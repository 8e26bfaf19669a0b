use std::{sync::Arc, time::Duration};

use folio_core_contact_contracts::{
    messages,
    record::MockContactRecordRepository,
    submit::{ContactSubmitError, MockContactSubmitService},
    ContactFormEvent, SubmitOutcome,
};
use folio_demo::{FOO, FOO_RECORD, FOO_SUBMITTED_AT, INVALID};
use folio_dom_contracts::{FormView, SubmitControl};
use folio_dom_headless::{HeadlessFormView, DEFAULT_SUBMIT_LABEL};
use folio_models::{
    contact::{ContactField, ContactFormData},
    notification::Severity,
};
use folio_shared_contracts::{notification::MockNotificationService, time::MockTimeService};
use folio_utils::assert_matches;
use pretty_assertions::assert_eq;

use super::{attach, config, Deps, SUCCESS_MESSAGE_TTL};
use crate::{
    form::{ContactForm, ContactFormDeps},
    SimulatedContactSubmitService, SimulatedContactSubmitServiceConfig,
};

fn assert_no_errors(view: &HeadlessFormView) {
    for field in ContactField::ALL {
        assert_eq!(view.error_text(field).as_deref(), Some(""), "{field}");
        assert!(!view.has_error_class(field), "{field}");
    }
}

#[tokio::test]
async fn ok() {
    // Arrange
    let deps = Deps {
        submit: MockContactSubmitService::new()
            .with_submit(FOO.clone().validate().unwrap(), Ok(())),
        records: MockContactRecordRepository::new().with_append(FOO_RECORD.clone()),
        notification: MockNotificationService::new()
            .with_notify(messages::SUCCEEDED, Severity::Success),
        time: MockTimeService::new().with_now(*FOO_SUBMITTED_AT),
    };
    let (sut, view) = attach(deps);
    view.fill(&FOO);

    // Act
    let result = sut.submit().await;

    // Assert
    assert_eq!(result, SubmitOutcome::Succeeded(FOO_RECORD.clone()));
    assert_eq!(view.values(), ContactFormData::default());
    assert_no_errors(&view);
    assert_eq!(
        view.submit_control(),
        Some(SubmitControl::enabled(DEFAULT_SUBMIT_LABEL))
    );
    assert_eq!(view.success_visible(), Some(true));

    tokio::time::sleep(SUCCESS_MESSAGE_TTL * 4).await;
    assert_eq!(view.success_visible(), Some(false));
}

#[tokio::test]
async fn ok_clears_previous_errors() {
    // Arrange
    let deps = Deps {
        submit: MockContactSubmitService::new()
            .with_submit(FOO.clone().validate().unwrap(), Ok(())),
        records: MockContactRecordRepository::new().with_append(FOO_RECORD.clone()),
        notification: MockNotificationService::new()
            .with_notify(messages::SUCCEEDED, Severity::Success),
        time: MockTimeService::new().with_now(*FOO_SUBMITTED_AT),
    };
    let (sut, view) = attach(deps);
    for field in ContactField::ALL {
        sut.validate_field(field);
    }
    view.fill(&FOO);

    // Act
    let result = sut.submit().await;

    // Assert
    assert_matches!(result, SubmitOutcome::Succeeded(_));
    assert_no_errors(&view);
    for field in ContactField::ALL {
        assert_eq!(view.aria_invalid(field), Some("false"));
    }
}

#[tokio::test]
async fn ok_without_success_container() {
    // Arrange
    let deps = Deps {
        submit: MockContactSubmitService::new()
            .with_submit(FOO.clone().validate().unwrap(), Ok(())),
        records: MockContactRecordRepository::new().with_append(FOO_RECORD.clone()),
        notification: MockNotificationService::new()
            .with_notify(messages::SUCCEEDED, Severity::Success),
        time: MockTimeService::new().with_now(*FOO_SUBMITTED_AT),
    };
    let view = Arc::new(HeadlessFormView::contact_page().without_success_container());
    let sut = ContactForm::attach(Arc::clone(&view), deps, config()).unwrap();
    view.fill(&FOO);

    // Act
    let result = sut.submit().await;

    // Assert
    assert_eq!(result, SubmitOutcome::Succeeded(FOO_RECORD.clone()));
    assert_eq!(view.success_visible(), None);
}

#[tokio::test]
async fn ok_when_record_cannot_be_stored() {
    // Arrange
    let deps = Deps {
        submit: MockContactSubmitService::new()
            .with_submit(FOO.clone().validate().unwrap(), Ok(())),
        records: MockContactRecordRepository::new().with_append_error(FOO_RECORD.clone()),
        notification: MockNotificationService::new()
            .with_notify(messages::SUCCEEDED, Severity::Success),
        time: MockTimeService::new().with_now(*FOO_SUBMITTED_AT),
    };
    let (sut, view) = attach(deps);
    view.fill(&FOO);

    // Act
    let result = sut.submit().await;

    // Assert
    assert_eq!(result, SubmitOutcome::Succeeded(FOO_RECORD.clone()));
    assert_eq!(view.values(), ContactFormData::default());
    assert_eq!(view.success_visible(), Some(true));
}

#[tokio::test]
async fn rejected() {
    // Arrange
    let deps = Deps {
        notification: MockNotificationService::new()
            .with_notify(messages::REJECTED, Severity::Error),
        ..Default::default()
    };
    let (sut, view) = attach(deps);
    view.fill(&INVALID);

    // Act
    let result = sut.submit().await;

    // Assert
    let SubmitOutcome::Rejected(states) = result else {
        panic!("expected the submission to be rejected");
    };
    assert_eq!(states.invalid().collect::<Vec<_>>(), ContactField::ALL);
    for (field, message) in [
        (ContactField::Name, "Name must be at least 2 characters"),
        (ContactField::Email, "Please enter a valid email address"),
        (ContactField::Subject, "Subject must be at least 3 characters"),
        (ContactField::Message, "Message must be at least 10 characters"),
    ] {
        assert_eq!(view.error_text(field).as_deref(), Some(message));
        assert_eq!(view.aria_invalid(field), Some("true"));
        assert!(view.has_error_class(field));
    }
    assert_eq!(view.focused(), Some(ContactField::Name));
    assert_eq!(view.values(), *INVALID);
    assert_eq!(
        view.submit_control(),
        Some(SubmitControl::enabled(DEFAULT_SUBMIT_LABEL))
    );
    assert_eq!(view.success_visible(), Some(false));
}

#[tokio::test]
async fn rejected_focuses_first_invalid_field() {
    // Arrange
    let deps = Deps {
        notification: MockNotificationService::new()
            .with_notify(messages::REJECTED, Severity::Error),
        ..Default::default()
    };
    let (sut, view) = attach(deps);
    view.fill(&ContactFormData {
        email: "a@b".into(),
        message: " ".into(),
        ..FOO.clone()
    });

    // Act
    let result = sut.submit().await;

    // Assert
    assert_matches!(
        result,
        SubmitOutcome::Rejected(states) if states.first_invalid() == Some(ContactField::Email)
    );
    assert_eq!(view.focused(), Some(ContactField::Email));
    assert_eq!(view.error_text(ContactField::Name).as_deref(), Some(""));
    assert_eq!(view.aria_invalid(ContactField::Name), Some("false"));
    assert_eq!(
        view.error_text(ContactField::Message).as_deref(),
        Some("Message is required")
    );
}

#[tokio::test]
async fn failed() {
    // Arrange
    let deps = Deps {
        submit: MockContactSubmitService::new().with_submit(
            FOO.clone().validate().unwrap(),
            Err(ContactSubmitError::Send),
        ),
        notification: MockNotificationService::new()
            .with_notify(messages::FAILED, Severity::Error),
        ..Default::default()
    };
    let (sut, view) = attach(deps);
    view.fill(&FOO);

    // Act
    let result = sut.submit().await;

    // Assert
    assert_eq!(result, SubmitOutcome::Failed);
    assert_eq!(view.values(), *FOO);
    assert_no_errors(&view);
    assert_eq!(
        view.submit_control(),
        Some(SubmitControl::enabled(DEFAULT_SUBMIT_LABEL))
    );
    assert_eq!(view.success_visible(), Some(false));
}

#[tokio::test]
async fn ignored_while_busy() {
    // Arrange
    let deps = Deps::default();
    let (sut, view) = attach(deps);
    view.fill(&FOO);
    view.set_submit_control(&SubmitControl::busy(messages::BUSY_LABEL));

    // Act
    let result = sut.submit().await;

    // Assert
    assert_eq!(result, SubmitOutcome::Ignored);
    assert_eq!(view.values(), *FOO);
    assert_eq!(
        view.submit_control(),
        Some(SubmitControl::busy(messages::BUSY_LABEL))
    );
}

type SimulatedSut = ContactForm<
    HeadlessFormView,
    SimulatedContactSubmitService,
    MockContactRecordRepository,
    MockNotificationService,
    MockTimeService,
>;

const SUBMIT_DELAY: Duration = Duration::from_millis(50);

fn attach_simulated() -> (SimulatedSut, Arc<HeadlessFormView>) {
    let deps = ContactFormDeps {
        submit: SimulatedContactSubmitService::new(SimulatedContactSubmitServiceConfig {
            delay: SUBMIT_DELAY,
        }),
        records: MockContactRecordRepository::new().with_append(FOO_RECORD.clone()),
        notification: MockNotificationService::new()
            .with_notify(messages::SUCCEEDED, Severity::Success),
        time: MockTimeService::new().with_now(*FOO_SUBMITTED_AT),
    };
    let view = Arc::new(HeadlessFormView::contact_page());
    let sut = ContactForm::attach(Arc::clone(&view), deps, config()).unwrap();
    view.fill(&FOO);
    (sut, view)
}

#[tokio::test]
async fn busy_while_submitting() {
    // Arrange
    let (sut, view) = attach_simulated();

    // Act
    let (result, control) = tokio::join!(sut.submit(), async {
        tokio::time::sleep(SUBMIT_DELAY / 2).await;
        view.submit_control()
    });

    // Assert
    assert_eq!(control, Some(SubmitControl::busy(messages::BUSY_LABEL)));
    assert_eq!(result, SubmitOutcome::Succeeded(FOO_RECORD.clone()));
    assert_eq!(
        view.submit_control(),
        Some(SubmitControl::enabled(DEFAULT_SUBMIT_LABEL))
    );
}

#[tokio::test]
async fn reentrant_submit_is_ignored() {
    // Arrange
    let (sut, view) = attach_simulated();

    // Act
    let (first, second) = tokio::join!(sut.submit(), sut.submit());

    // Assert
    assert_eq!(first, SubmitOutcome::Succeeded(FOO_RECORD.clone()));
    assert_eq!(second, SubmitOutcome::Ignored);
    assert_eq!(view.values(), ContactFormData::default());
}

#[tokio::test]
async fn ok_clears_errors_raised_while_submitting() {
    // Arrange
    let (sut, view) = attach_simulated();

    // Act
    let (result, ()) = tokio::join!(sut.submit(), async {
        tokio::time::sleep(SUBMIT_DELAY / 2).await;
        view.set_value(ContactField::Email, "");
        sut.handle(ContactFormEvent::Blur(ContactField::Email));
        assert_eq!(view.aria_invalid(ContactField::Email), Some("true"));
    });

    // Assert
    assert_eq!(result, SubmitOutcome::Succeeded(FOO_RECORD.clone()));
    assert_eq!(view.values(), ContactFormData::default());
    assert_no_errors(&view);
    for field in ContactField::ALL {
        assert_eq!(view.aria_invalid(field), Some("false"), "{field}");
    }
}
