use iso8601_timestamp::Timestamp;

use crate::models::Session;

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(tag = "event_type")]
pub enum WardenEvent {
    CreateAccount {
        account_id: String,
        username: String,
        email: String,
    },
    ConfirmEmail {
        account_id: String,
    },
    CreateSession {
        session: Session,
    },
    ChangePassword {
        account_id: String,
    },
    LockAccount {
        account_id: String,
        until: Timestamp,
    },
}
