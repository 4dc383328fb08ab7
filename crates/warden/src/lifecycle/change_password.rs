//! Change account password
use crate::{
    models::{Token, TokenPurpose},
    util::hash_password,
    Error, Success, Warden, WardenEvent,
};

impl Warden {
    /// # Change Password
    ///
    /// Replace the password of an authenticated account.
    ///
    /// The caller is responsible for authenticating `account_id`.
    pub async fn change_password(
        &self,
        account_id: &str,
        current_password: &str,
        new_password: &str,
    ) -> Success {
        let account = self.database.find_account(account_id).await?;

        // Verify the current password is correct
        if !self.database.verify_credential(&account, current_password) {
            info!("Wrong current password for {}", account.id);
            return Err(Error::InvalidCredentials);
        }

        // Make sure the new password is acceptable
        self.config.password_scanning.assert_safe(new_password)?;

        let password = hash_password(new_password)?;
        self.database
            .update_account(&account.id, &|account| {
                account.password = password.clone();
                Ok(())
            })
            .await?;

        // Outstanding reset links no longer apply
        if let Err(err) = Token::revoke_all(self, &account.id, TokenPurpose::PasswordReset).await
        {
            error!("Failed to revoke reset tokens for {}: {:?}", account.id, err);
        }

        info!("Changed password for {}", account.id);
        self.publish_event(WardenEvent::ChangePassword {
            account_id: account.id,
        })
        .await;

        Ok(())
    }
}
