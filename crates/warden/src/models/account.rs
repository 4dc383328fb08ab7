use iso8601_timestamp::Timestamp;

/// Lockout information
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct Lockout {
    /// Consecutive failed sign-in attempts
    pub attempts: u32,
    /// Time at which this lockout expires
    pub expiry: Option<Timestamp>,
}

/// Account model
#[derive(Serialize, Deserialize, Clone)]
pub struct Account {
    /// Unique Id
    #[serde(rename = "_id")]
    pub id: String,

    /// Username, fixed at creation
    pub username: String,

    /// Lower-cased username used for uniqueness
    pub username_normalised: String,

    /// User's email
    pub email: String,

    /// Normalised email
    ///
    /// Aliases and dots are stripped so that one inbox maps to one account.
    pub email_normalised: String,

    /// Display name
    pub full_name: String,

    /// Argon2 hashed password
    pub password: String,

    /// Whether the email address has been confirmed
    #[serde(default)]
    pub verified: bool,

    /// Account lockout
    #[serde(default)]
    pub lockout: Lockout,
}

impl std::fmt::Debug for Account {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Account")
            .field("id", &self.id)
            .field("username", &self.username)
            .field("email", &self.email)
            .field("full_name", &self.full_name)
            .field("verified", &self.verified)
            .field("lockout", &self.lockout)
            .finish_non_exhaustive()
    }
}
