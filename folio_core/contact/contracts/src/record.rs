use std::future::Future;

use folio_models::contact::FormRecord;

/// The locally persisted, append-only list of submitted forms.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactRecordRepository: Send + Sync + 'static {
    /// Returns all stored records, oldest first.
    fn list(&self) -> impl Future<Output = anyhow::Result<Vec<FormRecord>>> + Send;

    /// Appends `record` to the stored list.
    fn append(&self, record: &FormRecord) -> impl Future<Output = anyhow::Result<()>> + Send;

    /// Removes all stored records.
    fn clear(&self) -> impl Future<Output = anyhow::Result<()>> + Send;
}

#[cfg(feature = "mock")]
impl MockContactRecordRepository {
    pub fn with_list(mut self, result: Vec<FormRecord>) -> Self {
        self.expect_list()
            .once()
            .return_once(|| Box::pin(std::future::ready(Ok(result))));
        self
    }

    pub fn with_append(mut self, record: FormRecord) -> Self {
        self.expect_append()
            .once()
            .with(mockall::predicate::eq(record))
            .return_once(|_| Box::pin(std::future::ready(Ok(()))));
        self
    }

    pub fn with_append_error(mut self, record: FormRecord) -> Self {
        self.expect_append()
            .once()
            .with(mockall::predicate::eq(record))
            .return_once(|_| {
                Box::pin(std::future::ready(Err(anyhow::anyhow!(
                    "quota exceeded"
                ))))
            });
        self
    }
}
