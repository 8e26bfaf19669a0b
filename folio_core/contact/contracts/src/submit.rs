use std::future::Future;

use folio_models::contact::ValidatedContactForm;
use thiserror::Error;

/// Delivers a validated contact form to its recipient.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactSubmitService: Send + Sync + 'static {
    fn submit(
        &self,
        form: &ValidatedContactForm,
    ) -> impl Future<Output = Result<(), ContactSubmitError>> + Send;
}

#[derive(Debug, Error)]
pub enum ContactSubmitError {
    #[error("Failed to send message.")]
    Send,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[cfg(feature = "mock")]
impl MockContactSubmitService {
    pub fn with_submit(
        mut self,
        form: ValidatedContactForm,
        result: Result<(), ContactSubmitError>,
    ) -> Self {
        self.expect_submit()
            .once()
            .with(mockall::predicate::eq(form))
            .return_once(|_| Box::pin(std::future::ready(result)));
        self
    }
}
