//! Confirm a password reset
use crate::{
    models::{Token, TokenPurpose},
    util::hash_password,
    Error, Success, TokenError, Warden, WardenEvent,
};

impl Warden {
    /// # Reset Password
    ///
    /// Replace the password using a token from a reset email.
    ///
    /// An unknown email is reported like an unknown token.
    pub async fn reset_password(&self, email: &str, token: &str, new_password: &str) -> Success {
        // Make sure the new password is acceptable before using the token
        self.config.password_scanning.assert_safe(new_password)?;

        let account = match self.account_by_email(email).await {
            Ok(account) => account,
            Err(Error::UnknownUser) => {
                info!("Password reset attempted for unknown email");
                return Err(Error::InvalidToken {
                    reason: TokenError::NotFound,
                });
            }
            Err(err) => return Err(err),
        };

        let password = hash_password(new_password)?;

        let token = Token::consume(self, token, TokenPurpose::PasswordReset, &account.id)
            .await
            .map_err(|err| {
                info!("Refused reset token for {}: {:?}", account.id, err);
                err
            })?;

        let result = self
            .database
            .update_account(&account.id, &|account| {
                account.password = password.clone();
                Ok(())
            })
            .await;

        if let Err(err) = result {
            if let Err(release_err) = token.release(self).await {
                error!("Failed to release token {}: {:?}", token.id, release_err);
            }

            return Err(err);
        }

        // Any other outstanding reset links are now stale
        if let Err(err) = Token::revoke_all(self, &account.id, TokenPurpose::PasswordReset).await
        {
            error!("Failed to revoke reset tokens for {}: {:?}", account.id, err);
        }

        info!("Reset password for {}", account.id);
        self.publish_event(WardenEvent::ChangePassword {
            account_id: account.id,
        })
        .await;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::test::*;

    #[async_std::test]
    async fn success() {
        let (warden, notifier, _) = for_test().await;
        register_alice(&warden).await;
        let confirmation = token_from(&notifier, "a@x.com").await;

        warden.request_password_reset("a@x.com").await.unwrap();
        let reset = token_from(&notifier, "a@x.com").await;

        assert_eq!(
            warden.reset_password("a@x.com", &reset, "NewP@ss1").await,
            Ok(())
        );

        assert_eq!(
            warden.sign_in("alice", "P@ssw0rd1", false).await.map(|_| ()),
            Err(Error::InvalidCredentials)
        );

        warden.confirm_email("a@x.com", &confirmation).await.unwrap();
        assert!(warden.sign_in("alice", "NewP@ss1", false).await.is_ok());

        // The token can't be used again
        assert_eq!(
            warden.reset_password("a@x.com", &reset, "Other123!").await,
            Err(Error::InvalidToken {
                reason: TokenError::AlreadyConsumed
            })
        );
    }

    #[async_std::test]
    async fn success_revokes_older_tokens() {
        let (warden, notifier, _) = for_test().await;
        register_alice(&warden).await;

        warden.request_password_reset("a@x.com").await.unwrap();
        let first = token_from(&notifier, "a@x.com").await;
        warden.request_password_reset("a@x.com").await.unwrap();
        let second = token_from(&notifier, "a@x.com").await;

        warden
            .reset_password("a@x.com", &second, "NewP@ss1")
            .await
            .unwrap();

        assert_eq!(
            warden.reset_password("a@x.com", &first, "Other123!").await,
            Err(Error::InvalidToken {
                reason: TokenError::NotFound
            })
        );
    }

    #[async_std::test]
    async fn fail_token_for_other_account() {
        let (warden, notifier, _) = for_test().await;
        register_alice(&warden).await;
        warden
            .register(
                "bob".into(),
                "b@x.com".into(),
                "Bob B".into(),
                "P@ssw0rd2".into(),
            )
            .await
            .unwrap();

        warden.request_password_reset("a@x.com").await.unwrap();
        let token = token_from(&notifier, "a@x.com").await;

        assert_eq!(
            warden.reset_password("b@x.com", &token, "NewP@ss1").await,
            Err(Error::InvalidToken {
                reason: TokenError::Mismatch
            })
        );

        // Neither password changed
        assert!(matches!(
            warden.sign_in("bob", "P@ssw0rd2", false).await,
            Err(Error::UnverifiedAccount)
        ));
        assert!(matches!(
            warden.sign_in("alice", "P@ssw0rd1", false).await,
            Err(Error::UnverifiedAccount)
        ));
    }

    #[async_std::test]
    async fn fail_weak_password_keeps_token() {
        let (warden, notifier, _) = for_test().await;
        register_alice(&warden).await;

        warden.request_password_reset("a@x.com").await.unwrap();
        let token = token_from(&notifier, "a@x.com").await;

        assert_eq!(
            warden.reset_password("a@x.com", &token, "short").await,
            Err(Error::ShortPassword)
        );
        assert_eq!(
            warden.reset_password("a@x.com", &token, "NewP@ss1").await,
            Ok(())
        );
    }

    #[async_std::test]
    async fn fail_unknown_user() {
        let (warden, _, _) = for_test().await;
        register_alice(&warden).await;

        let unknown = warden
            .reset_password("nobody@x.com", "guess", "NewP@ss1")
            .await;
        assert_eq!(
            unknown,
            Err(Error::InvalidToken {
                reason: TokenError::NotFound
            })
        );

        // Same answer as a registered email with a wrong token
        assert_eq!(
            warden.reset_password("a@x.com", "guess", "NewP@ss1").await,
            unknown
        );
        assert_eq!(
            warden
                .reset_password("nobody@x.com", "guess", "short")
                .await,
            warden.reset_password("a@x.com", "guess", "short").await
        );
    }

    #[async_std::test]
    async fn fail_expired_token() {
        let (warden, notifier, _) = for_test_with_config(Config {
            expiry: TokenExpiryConfig {
                expire_password_reset: 0,
                ..Default::default()
            },
            ..test_config()
        })
        .await;
        register_alice(&warden).await;

        warden.request_password_reset("a@x.com").await.unwrap();
        let token = token_from(&notifier, "a@x.com").await;
        async_std::task::sleep(std::time::Duration::from_millis(5)).await;

        assert_eq!(
            warden.reset_password("a@x.com", &token, "NewP@ss1").await,
            Err(Error::InvalidToken {
                reason: TokenError::Expired
            })
        );
    }
}
