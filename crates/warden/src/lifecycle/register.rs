//! Create a new account
use crate::{
    models::{Account, Token, TokenPurpose},
    util::validate_username,
    Error, Result, Warden, WardenEvent,
};

impl Warden {
    /// # Register
    ///
    /// Create an unverified account and send it a confirmation token.
    pub async fn register(
        &self,
        username: String,
        email: String,
        full_name: String,
        password: String,
    ) -> Result<Account> {
        // Validate input
        validate_username(&username)?;
        self.config.email_block_list.validate_email(&email)?;

        let full_name = full_name.trim().to_string();
        if full_name.is_empty() {
            return Err(Error::IncorrectData { with: "full_name" });
        }

        self.config.password_scanning.assert_safe(&password)?;

        // Create the account, the store enforces uniqueness
        let account = Account::new(username, email, full_name, &password)?;
        if let Err(err) = self.database.insert_account(&account).await {
            info!("Rejected registration for {}: {:?}", account.username, err);
            return Err(err);
        }

        info!("Registered account {} ({})", account.id, account.username);

        self.publish_event(WardenEvent::CreateAccount {
            account_id: account.id.clone(),
            username: account.username.clone(),
            email: account.email.clone(),
        })
        .await;

        // Send email verification, the account stands even if this fails
        match Token::issue(
            self,
            &account.id,
            TokenPurpose::EmailConfirmation,
            self.config.expiry.verification_ttl(),
        )
        .await
        {
            Ok(token) => {
                account
                    .send_token(self, &self.config.templates.verify, &token)
                    .await
            }
            Err(err) => error!(
                "Failed to issue confirmation token for {}: {:?}",
                account.id, err
            ),
        }

        Ok(account)
    }
}

#[cfg(test)]
mod tests {
    use crate::test::*;

    #[async_std::test]
    async fn success() {
        let (warden, notifier, receiver) = for_test().await;

        let account = register_alice(&warden).await;

        let stored = warden
            .database
            .find_account_by_username("alice")
            .await
            .unwrap()
            .expect("an account");

        assert_eq!(stored.id, account.id);
        assert_eq!(stored.full_name, "Alice A");
        assert!(!stored.verified);
        assert_eq!(stored.lockout.attempts, 0);

        let mail = notifier.mail_for("a@x.com").await;
        assert_eq!(mail.len(), 1);
        assert_eq!(mail[0].subject, "verify");

        let event = receiver.try_recv().expect("an event");
        if !matches!(event, WardenEvent::CreateAccount { .. }) {
            panic!("Received incorrect event type. {:?}", event);
        }
    }

    #[async_std::test]
    async fn success_with_failing_notifier() {
        let (warden, notifier, _) = for_test().await;
        notifier.set_failing(true);

        let account = register_alice(&warden).await;
        assert!(warden.database.find_account(&account.id).await.is_ok());
        assert!(notifier.mail_for("a@x.com").await.is_empty());

        // Verification can be retried once delivery works again
        notifier.set_failing(false);
        warden.resend_verification("a@x.com").await.unwrap();
        let token = token_from(&notifier, "a@x.com").await;
        assert_eq!(warden.confirm_email("a@x.com", &token).await, Ok(()));
    }

    #[async_std::test]
    async fn success_when_token_cannot_be_stored() {
        let (warden, notifier, _) = for_test().await;
        let Database::Dummy(db) = &warden.database;
        db.set_rejecting_tokens(true);

        let account = register_alice(&warden).await;
        assert!(!warden.database.find_account(&account.id).await.unwrap().verified);
        assert!(notifier.mail_for("a@x.com").await.is_empty());

        db.set_rejecting_tokens(false);
        warden.resend_verification("a@x.com").await.unwrap();
        let token = token_from(&notifier, "a@x.com").await;
        assert_eq!(warden.confirm_email("a@x.com", &token).await, Ok(()));
    }

    #[async_std::test]
    async fn fail_duplicate() {
        let (warden, _, _) = for_test().await;
        register_alice(&warden).await;

        assert_eq!(
            warden
                .register(
                    "ALICE".into(),
                    "other@x.com".into(),
                    "Alice B".into(),
                    "P@ssw0rd1".into(),
                )
                .await
                .map(|_| ()),
            Err(Error::DuplicateAccount { with: "username" })
        );

        assert_eq!(
            warden
                .register(
                    "alice2".into(),
                    "A@x.com".into(),
                    "Alice B".into(),
                    "P@ssw0rd1".into(),
                )
                .await
                .map(|_| ()),
            Err(Error::DuplicateAccount { with: "email" })
        );
    }

    #[async_std::test]
    async fn fail_invalid_input() {
        let (warden, notifier, _) = for_test().await;

        let cases = [
            ("bad name", "a@x.com", "Alice A", "P@ssw0rd1", Error::IncorrectData { with: "username" }),
            ("alice", "invalid", "Alice A", "P@ssw0rd1", Error::IncorrectData { with: "email" }),
            ("alice", "a@x.com", "   ", "P@ssw0rd1", Error::IncorrectData { with: "full_name" }),
            ("alice", "a@x.com", "Alice A", "short", Error::ShortPassword),
        ];

        for (username, email, full_name, password, error) in cases {
            assert_eq!(
                warden
                    .register(
                        username.into(),
                        email.into(),
                        full_name.into(),
                        password.into()
                    )
                    .await
                    .map(|_| ()),
                Err(error)
            );
        }

        assert!(warden
            .database
            .find_account_by_username("alice")
            .await
            .unwrap()
            .is_none());
        assert!(notifier.mail_for("a@x.com").await.is_empty());
    }
}
