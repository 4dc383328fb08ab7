use crate::Success;

#[async_trait]
pub trait AbstractNotifier: std::marker::Sync {
    /// Deliver a message to an address
    ///
    /// Fails with `EmailFailed` if the message could not be handed off.
    async fn send(&self, address: &str, subject: &str, body: &str) -> Success;
}
