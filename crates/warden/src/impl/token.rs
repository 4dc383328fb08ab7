use std::time::Duration;

use iso8601_timestamp::Timestamp;

use crate::{
    models::{Token, TokenPurpose},
    util::offset_timestamp,
    Result, Success, Warden,
};

impl Token {
    /// Issue and store a new token
    pub async fn issue(
        warden: &Warden,
        account_id: &str,
        purpose: TokenPurpose,
        ttl: Duration,
    ) -> Result<Token> {
        let issued_at = Timestamp::now_utc();
        let token = Token {
            id: ulid::Ulid::new().to_string(),
            account_id: account_id.to_string(),
            purpose,
            token: nanoid!(32),
            issued_at,
            expiry: offset_timestamp(issued_at, ttl),
            consumed: false,
        };

        warden.database.insert_token(&token).await?;
        Ok(token)
    }

    /// Validate a token presented for an account and mark it used
    pub async fn consume(
        warden: &Warden,
        value: &str,
        purpose: TokenPurpose,
        account_id: &str,
    ) -> Result<Token> {
        warden
            .database
            .consume_token(purpose, value, account_id, Timestamp::now_utc())
            .await
    }

    /// Give back a consumed token after the operation it authorised failed
    pub async fn release(&self, warden: &Warden) -> Success {
        warden.database.release_token(&self.id).await
    }

    /// Revoke every outstanding token of a purpose for an account
    pub async fn revoke_all(warden: &Warden, account_id: &str, purpose: TokenPurpose) -> Success {
        warden.database.revoke_tokens(account_id, purpose).await
    }

    /// Whether this token has expired
    pub fn is_expired(&self, now: Timestamp) -> bool {
        now > self.expiry
    }
}
