use std::ops::Deref;

mod definition;
mod dummy;

#[cfg(feature = "smtp")]
mod smtp;

pub use definition::AbstractNotifier;
pub use dummy::{DummyNotifier, Mail};

#[cfg(feature = "smtp")]
pub use smtp::{SMTPSettings, SmtpNotifier};

#[derive(Clone)]
pub enum Notifier {
    Dummy(DummyNotifier),
    #[cfg(feature = "smtp")]
    Smtp(SmtpNotifier),
}

impl Default for Notifier {
    fn default() -> Self {
        Self::Dummy(Default::default())
    }
}

impl Deref for Notifier {
    type Target = dyn AbstractNotifier;

    fn deref(&self) -> &Self::Target {
        match self {
            Notifier::Dummy(dummy) => dummy,
            #[cfg(feature = "smtp")]
            Notifier::Smtp(smtp) => smtp,
        }
    }
}
