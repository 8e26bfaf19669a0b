use folio_models::notification::Severity;

/// Renders transient banners that dismiss themselves after a while.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait NotificationService: Send + Sync + 'static {
    /// Shows `message` with the given severity.
    ///
    /// Returns immediately, dismissal happens in the background.
    fn notify(&self, message: &str, severity: Severity);
}

#[cfg(feature = "mock")]
impl MockNotificationService {
    pub fn with_notify(mut self, message: &'static str, severity: Severity) -> Self {
        self.expect_notify()
            .once()
            .withf(move |m, s| m == message && *s == severity)
            .return_const(());
        self
    }
}
