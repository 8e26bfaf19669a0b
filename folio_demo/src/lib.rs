use std::sync::LazyLock;

use chrono::{DateTime, TimeZone, Utc};
use folio_models::{
    contact::{ContactFormData, FormRecord},
    storage::StorageKey,
};

pub static SUBMISSIONS_KEY: LazyLock<StorageKey> =
    LazyLock::new(|| StorageKey::try_new("contactSubmissions").unwrap());

pub static FOO: LazyLock<ContactFormData> = LazyLock::new(|| ContactFormData {
    name: "Max Mustermann".into(),
    email: "max.mustermann@example.de".into(),
    subject: "Collaboration".into(),
    message: "Hello World! I would love to work with you.".into(),
});

pub static BAR: LazyLock<ContactFormData> = LazyLock::new(|| ContactFormData {
    name: "Erika Musterfrau".into(),
    email: "erika@example.com".into(),
    subject: "Question".into(),
    message: "Do you also take on small projects?".into(),
});

/// A form in which every field is invalid.
pub static INVALID: LazyLock<ContactFormData> = LazyLock::new(|| ContactFormData {
    name: "J".into(),
    email: "not-an-email".into(),
    subject: "Hi".into(),
    message: "Too short".into(),
});

pub static FOO_SUBMITTED_AT: LazyLock<DateTime<Utc>> =
    LazyLock::new(|| Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap());

pub static BAR_SUBMITTED_AT: LazyLock<DateTime<Utc>> =
    LazyLock::new(|| Utc.with_ymd_and_hms(2024, 6, 13, 8, 15, 42).unwrap());

pub static FOO_RECORD: LazyLock<FormRecord> = LazyLock::new(|| record(&FOO, *FOO_SUBMITTED_AT));

pub static BAR_RECORD: LazyLock<FormRecord> = LazyLock::new(|| record(&BAR, *BAR_SUBMITTED_AT));

fn record(data: &ContactFormData, submitted_at: DateTime<Utc>) -> FormRecord {
    FormRecord::new(data.clone().validate().unwrap(), submitted_at)
}
