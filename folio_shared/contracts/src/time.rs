use chrono::{DateTime, Utc};

/// Clock used to stamp submitted contact forms.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait TimeService: Send + Sync + 'static {
    fn now(&self) -> DateTime<Utc>;
}

#[cfg(feature = "mock")]
impl MockTimeService {
    /// Expects exactly one submission to be stamped with `submitted_at`.
    pub fn with_now(mut self, submitted_at: DateTime<Utc>) -> Self {
        self.expect_now().once().return_const(submitted_at);
        self
    }
}
