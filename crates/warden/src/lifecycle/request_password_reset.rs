//! Send a password reset email
use crate::{
    models::{Token, TokenPurpose},
    Error, Success, Warden,
};

impl Warden {
    /// # Request Password Reset
    ///
    /// Send a password reset token to the account's email.
    ///
    /// Succeeds without sending anything when no account matches.
    pub async fn request_password_reset(&self, email: &str) -> Success {
        // Make sure email is valid and not blocked
        self.config.email_block_list.validate_email(email)?;

        let account = match self.account_by_email(email).await {
            Ok(account) => account,
            Err(Error::UnknownUser) => {
                info!("Password reset requested for unknown email");
                return Ok(());
            }
            Err(err) => return Err(err),
        };

        let token = Token::issue(
            self,
            &account.id,
            TokenPurpose::PasswordReset,
            self.config.expiry.password_reset_ttl(),
        )
        .await?;

        info!("Issued password reset for {}", account.id);
        account
            .send_token(self, &self.config.templates.reset, &token)
            .await;

        Ok(())
    }
}
