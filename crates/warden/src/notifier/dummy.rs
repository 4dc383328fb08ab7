use futures::lock::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::{Error, Success};

use super::definition::AbstractNotifier;

/// Message captured by the dummy notifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mail {
    pub to: String,
    pub subject: String,
    pub body: String,
}

/// Notifier which keeps messages in memory instead of delivering them
#[derive(Default, Clone)]
pub struct DummyNotifier {
    pub outbox: Arc<Mutex<Vec<Mail>>>,
    failing: Arc<AtomicBool>,
}

impl DummyNotifier {
    /// Notifier which refuses every message
    pub fn failing() -> DummyNotifier {
        let notifier = DummyNotifier::default();
        notifier.set_failing(true);
        notifier
    }

    /// Toggle simulated delivery failures
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// All messages sent so far to an address
    pub async fn mail_for(&self, address: &str) -> Vec<Mail> {
        self.outbox
            .lock()
            .await
            .iter()
            .filter(|mail| mail.to == address)
            .cloned()
            .collect()
    }
}

#[async_trait]
impl AbstractNotifier for DummyNotifier {
    async fn send(&self, address: &str, subject: &str, body: &str) -> Success {
        if self.failing.load(Ordering::SeqCst) {
            return Err(Error::EmailFailed);
        }

        debug!("Captured email for {} ({})", address, subject);
        self.outbox.lock().await.push(Mail {
            to: address.into(),
            subject: subject.into(),
            body: body.into(),
        });

        Ok(())
    }
}
