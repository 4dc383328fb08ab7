use crate::{
    models::{Account, Token, TokenPurpose},
    Error, Result, Success, TokenError,
};

use futures::lock::Mutex;
use iso8601_timestamp::Timestamp;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use super::definition::AbstractDatabase;

/// In-memory store
///
/// Every operation holds the collection lock for its whole duration,
/// which serialises updates to the same account.
#[derive(Default, Clone)]
pub struct DummyDb {
    pub accounts: Arc<Mutex<HashMap<String, Account>>>,
    pub tokens: Arc<Mutex<HashMap<String, Token>>>,
    rejecting_tokens: Arc<AtomicBool>,
}

impl DummyDb {
    /// Toggle simulated failures when storing new tokens
    pub fn set_rejecting_tokens(&self, rejecting: bool) {
        self.rejecting_tokens.store(rejecting, Ordering::SeqCst);
    }
}

#[async_trait]
impl AbstractDatabase for DummyDb {
    /// Find account by id
    async fn find_account(&self, id: &str) -> Result<Account> {
        let accounts = self.accounts.lock().await;
        accounts.get(id).cloned().ok_or(Error::UnknownUser)
    }

    /// Find account by normalised username
    async fn find_account_by_username(
        &self,
        normalised_username: &str,
    ) -> Result<Option<Account>> {
        let accounts = self.accounts.lock().await;
        Ok(accounts
            .values()
            .find(|account| account.username_normalised == normalised_username)
            .cloned())
    }

    /// Find account by normalised email
    async fn find_account_by_normalised_email(
        &self,
        normalised_email: &str,
    ) -> Result<Option<Account>> {
        let accounts = self.accounts.lock().await;
        Ok(accounts
            .values()
            .find(|account| account.email_normalised == normalised_email)
            .cloned())
    }

    /// Insert new account
    async fn insert_account(&self, account: &Account) -> Success {
        let mut accounts = self.accounts.lock().await;
        for existing in accounts.values() {
            if existing.username_normalised == account.username_normalised {
                return Err(Error::DuplicateAccount { with: "username" });
            }

            if existing.email_normalised == account.email_normalised {
                return Err(Error::DuplicateAccount { with: "email" });
            }
        }

        if accounts.contains_key(&account.id) {
            return Err(Error::DatabaseError {
                operation: "insert_one",
                with: "account",
            });
        }

        accounts.insert(account.id.to_string(), account.clone());
        Ok(())
    }

    /// Atomically update an account
    async fn update_account(
        &self,
        id: &str,
        mutator: &(dyn for<'a> Fn(&'a mut Account) -> Success + Send + Sync),
    ) -> Result<Account> {
        let mut accounts = self.accounts.lock().await;
        let account = accounts.get_mut(id).ok_or(Error::UnknownUser)?;

        // Work on a copy so a failed mutator leaves the record untouched
        let mut updated = account.clone();
        mutator(&mut updated)?;
        *account = updated.clone();

        Ok(updated)
    }

    /// Insert new token
    async fn insert_token(&self, token: &Token) -> Success {
        if self.rejecting_tokens.load(Ordering::SeqCst) {
            return Err(Error::DatabaseError {
                operation: "insert_one",
                with: "token",
            });
        }

        let mut tokens = self.tokens.lock().await;

        // Drop anything that had already expired when this token was issued
        tokens.retain(|_, existing| !existing.is_expired(token.issued_at));

        if tokens
            .values()
            .any(|existing| existing.purpose == token.purpose && existing.token == token.token)
        {
            return Err(Error::DatabaseError {
                operation: "insert_one",
                with: "token",
            });
        }

        tokens.insert(token.id.to_string(), token.clone());
        Ok(())
    }

    /// Validate and consume a token in one step
    async fn consume_token(
        &self,
        purpose: TokenPurpose,
        token_to_match: &str,
        account_id: &str,
        now: Timestamp,
    ) -> Result<Token> {
        let mut tokens = self.tokens.lock().await;
        let token = tokens
            .values_mut()
            .find(|token| token.purpose == purpose && token.token == token_to_match)
            .ok_or(Error::InvalidToken {
                reason: TokenError::NotFound,
            })?;

        if token.account_id != account_id {
            return Err(Error::InvalidToken {
                reason: TokenError::Mismatch,
            });
        }

        if token.consumed {
            return Err(Error::InvalidToken {
                reason: TokenError::AlreadyConsumed,
            });
        }

        if token.is_expired(now) {
            return Err(Error::InvalidToken {
                reason: TokenError::Expired,
            });
        }

        token.consumed = true;
        Ok(token.clone())
    }

    /// Mark a consumed token as unused again
    async fn release_token(&self, id: &str) -> Success {
        let mut tokens = self.tokens.lock().await;
        let token = tokens.get_mut(id).ok_or(Error::InvalidToken {
            reason: TokenError::NotFound,
        })?;

        token.consumed = false;
        Ok(())
    }

    /// Delete all unconsumed tokens of a purpose for an account
    async fn revoke_tokens(&self, account_id: &str, purpose: TokenPurpose) -> Success {
        let mut tokens = self.tokens.lock().await;
        tokens.retain(|_, token| {
            token.consumed || token.account_id != account_id || token.purpose != purpose
        });

        Ok(())
    }
}
