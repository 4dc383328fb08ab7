use std::time::Duration;

/// Reason a single-use token was refused
#[derive(Serialize, Debug, PartialEq, Eq, Clone, Copy)]
pub enum TokenError {
    /// No token of the requested purpose carries this value
    NotFound,
    /// Token has passed its expiry
    Expired,
    /// Token was already used once
    AlreadyConsumed,
    /// Token belongs to a different account
    Mismatch,
}

#[derive(Serialize, Debug, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum Error {
    IncorrectData {
        with: &'static str,
    },
    DatabaseError {
        operation: &'static str,
        with: &'static str,
    },
    InternalError,
    RenderFail,

    DuplicateAccount {
        with: &'static str,
    },
    UnknownUser,
    UnverifiedAccount,
    AlreadyVerified,

    EmailFailed,
    InvalidToken {
        reason: TokenError,
    },
    InvalidCredentials,
    LockedOut {
        remaining: Duration,
    },

    CompromisedPassword,
    ShortPassword,
    Blacklisted,
}

impl Error {
    /// Error as it may be shown to the remote client
    ///
    /// Unknown accounts are reported as bad credentials so callers
    /// cannot probe which usernames or emails exist.
    pub fn public(self) -> Error {
        match self {
            Error::UnknownUser => Error::InvalidCredentials,
            other => other,
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
pub type Success = Result<()>;
