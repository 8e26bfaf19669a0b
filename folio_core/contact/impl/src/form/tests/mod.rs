use std::{sync::Arc, time::Duration};

use folio_core_contact_contracts::{
    record::MockContactRecordRepository, submit::MockContactSubmitService,
};
use folio_dom_headless::HeadlessFormView;
use folio_shared_contracts::{notification::MockNotificationService, time::MockTimeService};

use super::{ContactForm, ContactFormConfig, ContactFormDeps};

mod submit;

const SUCCESS_MESSAGE_TTL: Duration = Duration::from_millis(40);

type Sut = ContactForm<
    HeadlessFormView,
    MockContactSubmitService,
    MockContactRecordRepository,
    MockNotificationService,
    MockTimeService,
>;

type Deps = ContactFormDeps<
    MockContactSubmitService,
    MockContactRecordRepository,
    MockNotificationService,
    MockTimeService,
>;

fn config() -> ContactFormConfig {
    ContactFormConfig {
        success_message_ttl: SUCCESS_MESSAGE_TTL,
    }
}

impl Default for Deps {
    fn default() -> Self {
        Self {
            submit: MockContactSubmitService::new(),
            records: MockContactRecordRepository::new(),
            notification: MockNotificationService::new(),
            time: MockTimeService::new(),
        }
    }
}

/// Attaches a form with the given dependencies to a complete contact page.
fn attach(deps: Deps) -> (Sut, Arc<HeadlessFormView>) {
    let view = Arc::new(HeadlessFormView::contact_page());
    let sut = Sut::attach(Arc::clone(&view), deps, config()).unwrap();
    (sut, view)
}
