use iso8601_timestamp::Timestamp;

/// What a token authorises
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenPurpose {
    EmailConfirmation,
    PasswordReset,
}

/// Single-use token
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Token {
    /// Unique Id
    #[serde(rename = "_id")]
    pub id: String,

    /// Account this token was issued to
    pub account_id: String,

    /// What this token may be used for
    pub purpose: TokenPurpose,

    /// Secret value sent to the user
    pub token: String,

    /// Time at which this token was issued
    pub issued_at: Timestamp,

    /// Time at which this token expires
    pub expiry: Timestamp,

    /// Whether this token has been used
    pub consumed: bool,
}

impl std::fmt::Debug for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Token")
            .field("id", &self.id)
            .field("account_id", &self.account_id)
            .field("purpose", &self.purpose)
            .field("expiry", &self.expiry)
            .field("consumed", &self.consumed)
            .finish_non_exhaustive()
    }
}
