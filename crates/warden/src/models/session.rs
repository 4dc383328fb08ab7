use iso8601_timestamp::Timestamp;

/// Session information
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Session {
    /// Unique Id
    #[serde(rename = "_id")]
    pub id: String,

    /// Account Id
    pub account_id: String,

    /// Session token
    pub token: String,

    /// Whether the session should outlive the browser session ("remember me")
    pub persistent: bool,

    /// When the session was created
    pub created_at: Timestamp,
}
