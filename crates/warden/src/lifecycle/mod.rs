//! Credential lifecycle operations
//!
//! Every operation validates its preconditions, commits the state change
//! to the store, and only then notifies the user. Tokens consumed by an
//! operation whose store update fails are handed back.
use crate::{models::Account, util::normalise_email, Error, Result, Warden};

mod change_password;
mod confirm_email;
mod register;
mod request_password_reset;
mod resend_verification;
mod reset_password;
mod sign_in;

impl Warden {
    /// Look up an account by email
    async fn account_by_email(&self, email: &str) -> Result<Account> {
        self.database
            .find_account_by_normalised_email(&normalise_email(email))
            .await?
            .ok_or(Error::UnknownUser)
    }
}
