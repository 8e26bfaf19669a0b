use std::time::Duration;

use folio_core_contact_contracts::submit::{ContactSubmitError, ContactSubmitService};
use folio_models::contact::{ContactField, ValidatedContactForm};
use tracing::info;

/// Stands in for a real backend: waits for a fixed delay and then reports
/// success.
#[derive(Debug, Clone, Copy)]
pub struct SimulatedContactSubmitService {
    config: SimulatedContactSubmitServiceConfig,
}

#[derive(Debug, Clone, Copy)]
pub struct SimulatedContactSubmitServiceConfig {
    pub delay: Duration,
}

impl SimulatedContactSubmitService {
    pub fn new(config: SimulatedContactSubmitServiceConfig) -> Self {
        Self { config }
    }
}

impl ContactSubmitService for SimulatedContactSubmitService {
    async fn submit(&self, form: &ValidatedContactForm) -> Result<(), ContactSubmitError> {
        tokio::time::sleep(self.config.delay).await;
        info!(
            subject = form.get(ContactField::Subject),
            "contact form delivered"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use folio_demo::FOO;
    use tokio::time::Instant;

    use super::*;

    #[tokio::test]
    async fn ok_after_delay() {
        // Arrange
        let config = SimulatedContactSubmitServiceConfig {
            delay: Duration::from_millis(30),
        };
        let sut = SimulatedContactSubmitService::new(config);
        let form = FOO.clone().validate().unwrap();
        let start = Instant::now();

        // Act
        let result = sut.submit(&form).await;

        // Assert
        result.unwrap();
        assert!(start.elapsed() >= config.delay);
    }
}
