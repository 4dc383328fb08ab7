//! Sign in to an account
use iso8601_timestamp::Timestamp;

use crate::{
    models::Session, util::normalise_username, Error, Result, Warden, WardenEvent,
};

impl Warden {
    /// # Sign In
    ///
    /// Check credentials and hand out a session.
    ///
    /// Unknown usernames fail with `UnknownUser`, use [`Error::public`]
    /// before reporting failures to the remote client.
    pub async fn sign_in(
        &self,
        username: &str,
        password: &str,
        remember_me: bool,
    ) -> Result<Session> {
        let account = self
            .database
            .find_account_by_username(&normalise_username(username))
            .await?
            .ok_or_else(|| {
                info!("Sign-in attempt for unknown user {}", username);
                Error::UnknownUser
            })?;

        // Hashing is slow so happens outside the store's lock
        let valid = self.database.verify_credential(&account, password);

        // Check for account lockout and record the attempt in one step
        let now = Timestamp::now_utc();
        let policy = &self.config.lockout;
        let account = self
            .database
            .update_account(&account.id, &|account| {
                if let Some(remaining) = policy.remaining(&account.lockout, now) {
                    return Err(Error::LockedOut { remaining });
                }

                account.lockout = if valid {
                    policy.record_success(&account.lockout)
                } else {
                    policy.record_failure(&account.lockout, now)
                };

                Ok(())
            })
            .await
            .map_err(|err| {
                if let Error::LockedOut { .. } = err {
                    info!("Refused sign-in for locked account {}", account.id);
                }

                err
            })?;

        if !valid {
            // This attempt may have engaged the lockout
            if let Some(remaining) = policy.remaining(&account.lockout, now) {
                if let Some(until) = account.lockout.expiry {
                    warn!(
                        "Locked account {} after {} failed attempts",
                        account.id, account.lockout.attempts
                    );

                    self.publish_event(WardenEvent::LockAccount {
                        account_id: account.id.clone(),
                        until,
                    })
                    .await;
                }

                return Err(Error::LockedOut { remaining });
            }

            info!(
                "Wrong password for {} ({} failed attempts)",
                account.id, account.lockout.attempts
            );

            return Err(Error::InvalidCredentials);
        }

        // Make sure the account has been verified
        if !account.verified {
            return Err(Error::UnverifiedAccount);
        }

        let session = account.create_session(remember_me);
        self.publish_event(WardenEvent::CreateSession {
            session: session.clone(),
        })
        .await;

        Ok(session)
    }
}
