use iso8601_timestamp::Timestamp;

use crate::{
    config::Template,
    models::{Account, Lockout, Session, Token},
    util::{hash_password, normalise_email, normalise_username},
    Result, Warden,
};

impl Account {
    /// Build a new, unverified account
    ///
    /// Input is expected to be validated already.
    pub fn new(
        username: String,
        email: String,
        full_name: String,
        plaintext_password: &str,
    ) -> Result<Account> {
        Ok(Account {
            id: ulid::Ulid::new().to_string(),

            username_normalised: normalise_username(&username),
            username,
            email_normalised: normalise_email(&email),
            email,
            full_name,
            password: hash_password(plaintext_password)?,

            verified: false,
            lockout: Lockout::default(),
        })
    }

    /// Send a message carrying a token to this account
    ///
    /// Delivery failure is logged and otherwise ignored, the state
    /// change the token belongs to has already been committed.
    pub async fn send_token(&self, warden: &Warden, template: &Template, token: &Token) {
        let rendered = match template.render(
            &token.token,
            json!({
                "email": self.email,
                "username": self.username,
                "full_name": self.full_name,
            }),
        ) {
            Ok(rendered) => rendered,
            Err(err) => {
                error!("Failed to render {:?} email for {}: {:?}", token.purpose, self.id, err);
                return;
            }
        };

        if let Err(err) = warden
            .notifier
            .send(&self.email, &rendered.subject, &rendered.body)
            .await
        {
            warn!(
                "Failed to deliver {:?} email for {}: {:?}",
                token.purpose, self.id, err
            );
        }
    }

    /// Create a new session descriptor
    pub fn create_session(&self, persistent: bool) -> Session {
        Session {
            id: ulid::Ulid::new().to_string(),
            account_id: self.id.clone(),
            token: nanoid!(64),
            persistent,
            created_at: Timestamp::now_utc(),
        }
    }
}
