use std::time::Duration;

/// Token expiration config
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct TokenExpiryConfig {
    /// How long email verification codes should last for (in seconds)
    pub expire_verification: u64,
    /// How long password reset codes should last for (in seconds)
    pub expire_password_reset: u64,
}

impl Default for TokenExpiryConfig {
    fn default() -> TokenExpiryConfig {
        TokenExpiryConfig {
            expire_verification: 3600 * 24,
            expire_password_reset: 3600,
        }
    }
}

impl TokenExpiryConfig {
    pub fn verification_ttl(&self) -> Duration {
        Duration::from_secs(self.expire_verification)
    }

    pub fn password_reset_ttl(&self) -> Duration {
        Duration::from_secs(self.expire_password_reset)
    }
}
