//! Resend account verification email
use crate::{
    models::{Token, TokenPurpose},
    Error, Success, Warden,
};

impl Warden {
    /// # Resend Verification
    ///
    /// Replace any outstanding confirmation token with a new one and send it.
    pub async fn resend_verification(&self, email: &str) -> Success {
        let account = self.account_by_email(email).await?;
        if account.verified {
            return Err(Error::AlreadyVerified);
        }

        Token::revoke_all(self, &account.id, TokenPurpose::EmailConfirmation).await?;
        let token = Token::issue(
            self,
            &account.id,
            TokenPurpose::EmailConfirmation,
            self.config.expiry.verification_ttl(),
        )
        .await?;

        account
            .send_token(self, &self.config.templates.verify, &token)
            .await;

        Ok(())
    }
}
