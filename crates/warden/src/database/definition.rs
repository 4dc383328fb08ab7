use iso8601_timestamp::Timestamp;

use crate::{
    models::{Account, Token, TokenPurpose},
    util::verify_password,
    Result, Success,
};

#[async_trait]
pub trait AbstractDatabase: std::marker::Sync {
    /// Find account by id
    async fn find_account(&self, id: &str) -> Result<Account>;

    /// Find account by normalised username
    async fn find_account_by_username(
        &self,
        normalised_username: &str,
    ) -> Result<Option<Account>>;

    /// Find account by normalised email
    async fn find_account_by_normalised_email(
        &self,
        normalised_email: &str,
    ) -> Result<Option<Account>>;

    /// Insert new account
    ///
    /// Fails if the username or email is taken.
    async fn insert_account(&self, account: &Account) -> Success;

    /// Atomically update an account, returning the stored result
    ///
    /// The mutator runs against the current record under the store's lock.
    /// Returning an error aborts the write. Stores may run the mutator more
    /// than once when retrying a conflicting update.
    async fn update_account(
        &self,
        id: &str,
        mutator: &(dyn for<'a> Fn(&'a mut Account) -> Success + Send + Sync),
    ) -> Result<Account>;

    /// Check a plaintext password against the account's stored hash
    fn verify_credential(&self, account: &Account, plaintext_password: &str) -> bool {
        verify_password(&account.password, plaintext_password)
    }

    /// Insert new token
    ///
    /// Stores may drop tokens that had expired by the time this one was issued.
    async fn insert_token(&self, token: &Token) -> Success;

    /// Validate and consume a token in one step
    ///
    /// Fails with the reason the token was refused. A token bound to
    /// another account is left untouched.
    async fn consume_token(
        &self,
        purpose: TokenPurpose,
        token: &str,
        account_id: &str,
        now: Timestamp,
    ) -> Result<Token>;

    /// Mark a consumed token as unused again
    async fn release_token(&self, id: &str) -> Success;

    /// Delete all unconsumed tokens of a purpose for an account
    async fn revoke_tokens(&self, account_id: &str, purpose: TokenPurpose) -> Success;
}
