//! Wires the contact form to the local implementations of its boundaries.

use std::sync::Arc;

use folio_config::Config;
use folio_core_contact_contracts::ContactFormAttachError;
use folio_core_contact_impl::{
    ContactForm, ContactFormConfig, ContactFormDeps, ContactRecordRepositoryConfig,
    ContactRecordRepositoryImpl, SimulatedContactSubmitService,
    SimulatedContactSubmitServiceConfig,
};
use folio_dom_headless::HeadlessFormView;
use folio_shared_impl::{
    notification::{BannerNotificationService, BannerNotificationServiceConfig},
    time::TimeServiceImpl,
};
use folio_storage_local::{FileStore, FileStoreConfig};

pub type Records = ContactRecordRepositoryImpl<FileStore>;

pub type Form = ContactForm<
    HeadlessFormView,
    SimulatedContactSubmitService,
    Records,
    BannerNotificationService,
    TimeServiceImpl,
>;

/// Opens the file store configured in `[storage]`.
pub async fn store(config: &Config) -> anyhow::Result<FileStore> {
    FileStore::open(&FileStoreConfig {
        path: config.storage.path.clone(),
    })
    .await
}

pub fn records(store: FileStore, config: &Config) -> Records {
    ContactRecordRepositoryImpl::new(
        store,
        ContactRecordRepositoryConfig {
            key: config.storage.submissions_key.clone(),
        },
    )
}

/// Attaches a contact form to `view`.
pub fn contact_form(
    view: Arc<HeadlessFormView>,
    records: Records,
    config: &Config,
) -> Result<Form, ContactFormAttachError> {
    let deps = ContactFormDeps {
        submit: SimulatedContactSubmitService::new(SimulatedContactSubmitServiceConfig {
            delay: config.contact.submit_delay.into(),
        }),
        records,
        notification: BannerNotificationService::new(BannerNotificationServiceConfig {
            ttl: config.notification.ttl.into(),
        }),
        time: TimeServiceImpl,
    };

    ContactForm::attach(
        view,
        deps,
        ContactFormConfig {
            success_message_ttl: config.contact.success_message_ttl.into(),
        },
    )
}
