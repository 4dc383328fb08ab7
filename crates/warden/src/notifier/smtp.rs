use lettre::transport::smtp::authentication::Credentials;
use lettre::transport::smtp::client::Tls;
use lettre::{Message, SmtpTransport, Transport};

use crate::{Error, Result, Success};

use super::definition::AbstractNotifier;

/// SMTP mail server configuration
#[derive(Serialize, Deserialize, Clone)]
pub struct SMTPSettings {
    /// Sender address
    pub from: String,

    /// Reply-To address
    pub reply_to: Option<String>,

    /// SMTP host
    pub host: String,

    /// SMTP port
    pub port: Option<u16>,

    /// SMTP username
    pub username: String,

    /// SMTP password
    pub password: String,

    /// Whether to use TLS
    pub use_tls: Option<bool>,
}

/// Notifier delivering mail through an SMTP relay
#[derive(Clone)]
pub struct SmtpNotifier {
    settings: SMTPSettings,
    transport: SmtpTransport,
}

impl SmtpNotifier {
    pub fn new(settings: SMTPSettings) -> Result<SmtpNotifier> {
        let relay = SmtpTransport::relay(&settings.host).map_err(|_| Error::InternalError)?;
        let relay = if let Some(port) = settings.port {
            relay.port(port)
        } else {
            relay
        };

        let relay = if let Some(false) = settings.use_tls {
            relay.tls(Tls::None)
        } else {
            relay
        };

        let transport = relay
            .credentials(Credentials::new(
                settings.username.clone(),
                settings.password.clone(),
            ))
            .build();

        Ok(SmtpNotifier {
            settings,
            transport,
        })
    }
}

#[async_trait]
impl AbstractNotifier for SmtpNotifier {
    async fn send(&self, address: &str, subject: &str, body: &str) -> Success {
        let message = Message::builder()
            .from(self.settings.from.parse().map_err(|_| Error::InternalError)?)
            .to(address
                .parse()
                .map_err(|_| Error::IncorrectData { with: "email" })?)
            .subject(subject);

        let message = if let Some(reply_to) = &self.settings.reply_to {
            message.reply_to(reply_to.parse().map_err(|_| Error::InternalError)?)
        } else {
            message
        };

        let message = message
            .body(body.to_string())
            .map_err(|_| Error::InternalError)?;

        if let Err(error) = self.transport.send(&message) {
            error!("Failed to send email to {}! lettre error: {}", address, error);
            return Err(Error::EmailFailed);
        }

        Ok(())
    }
}
