#[macro_use]
extern crate serde;
#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate async_trait;
#[macro_use]
extern crate nanoid;
#[macro_use]
extern crate log;
#[macro_use]
extern crate serde_json;

mod result;
pub use result::*;

pub mod config;
pub mod database;
pub mod events;
pub mod r#impl;
pub mod lifecycle;
pub mod models;
pub mod notifier;
pub mod util;


pub use config::Config;
pub use database::Database;
pub use events::WardenEvent;
pub use notifier::Notifier;

use async_std::channel::Sender;

/// Warden state
#[derive(Default, Clone)]
pub struct Warden {
    pub config: Config,
    pub database: Database,
    pub notifier: Notifier,
    pub event_channel: Option<Sender<WardenEvent>>,
}

impl Warden {
    pub async fn publish_event(&self, event: WardenEvent) {
        if let Some(sender) = &self.event_channel {
            if let Err(err) = sender.send(event).await {
                error!("Failed to publish a Warden event: {:?}", err);
            }
        }
    }
}
