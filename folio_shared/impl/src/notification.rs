use std::{
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc, Mutex, MutexGuard, PoisonError,
    },
    time::Duration,
};

use folio_models::notification::{Notification, Severity};
use folio_shared_contracts::notification::NotificationService;
use tokio::runtime::Handle;
use tracing::{info, warn};

/// Keeps the currently visible banners and dismisses each one after
/// [`BannerNotificationServiceConfig::ttl`].
#[derive(Debug, Clone)]
pub struct BannerNotificationService {
    banners: Arc<Banners>,
    config: BannerNotificationServiceConfig,
}

#[derive(Debug, Clone, Copy)]
pub struct BannerNotificationServiceConfig {
    pub ttl: Duration,
}

#[derive(Debug, Default)]
struct Banners {
    next_id: AtomicU64,
    visible: Mutex<Vec<(u64, Notification)>>,
}

impl Banners {
    fn visible(&self) -> MutexGuard<'_, Vec<(u64, Notification)>> {
        self.visible.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn dismiss(&self, id: u64) {
        self.visible().retain(|&(x, _)| x != id);
    }
}

impl BannerNotificationService {
    pub fn new(config: BannerNotificationServiceConfig) -> Self {
        Self {
            banners: Default::default(),
            config,
        }
    }

    /// Returns the banners that are currently shown, oldest first.
    pub fn visible(&self) -> Vec<Notification> {
        self.banners
            .visible()
            .iter()
            .map(|(_, notification)| notification.clone())
            .collect()
    }
}

impl NotificationService for BannerNotificationService {
    fn notify(&self, message: &str, severity: Severity) {
        match severity {
            Severity::Success | Severity::Info => info!(%severity, "{message}"),
            Severity::Error | Severity::Warning => warn!(%severity, "{message}"),
        }

        let id = self.banners.next_id.fetch_add(1, Ordering::Relaxed);
        self.banners.visible().push((
            id,
            Notification {
                message: message.into(),
                severity,
            },
        ));

        let Ok(handle) = Handle::try_current() else {
            warn!("No runtime available, notification will not be dismissed");
            return;
        };

        let banners = Arc::clone(&self.banners);
        let ttl = self.config.ttl;
        handle.spawn(async move {
            tokio::time::sleep(ttl).await;
            banners.dismiss(id);
        });
    }
}
