//! Confirm an email address
use crate::{
    models::{Token, TokenPurpose},
    Error, Success, Warden, WardenEvent,
};

impl Warden {
    /// # Confirm Email
    ///
    /// Mark an account's email as verified using the token sent to it.
    pub async fn confirm_email(&self, email: &str, token: &str) -> Success {
        let account = self.account_by_email(email).await?;
        if account.verified {
            return Err(Error::AlreadyVerified);
        }

        let token = Token::consume(self, token, TokenPurpose::EmailConfirmation, &account.id)
            .await
            .map_err(|err| {
                info!("Refused confirmation token for {}: {:?}", account.id, err);
                err
            })?;

        let result = self
            .database
            .update_account(&account.id, &|account| {
                if account.verified {
                    return Err(Error::AlreadyVerified);
                }

                account.verified = true;
                Ok(())
            })
            .await;

        if let Err(err) = result {
            if let Err(release_err) = token.release(self).await {
                error!("Failed to release token {}: {:?}", token.id, release_err);
            }

            return Err(err);
        }

        info!("Confirmed email for {}", account.id);
        self.publish_event(WardenEvent::ConfirmEmail {
            account_id: account.id,
        })
        .await;

        Ok(())
    }
}
