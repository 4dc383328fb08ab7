use std::time::Duration;

use iso8601_timestamp::{Duration as Span, Timestamp};
use regex::Regex;

use crate::{Error, Result};

lazy_static! {
    static ref ARGON_CONFIG: argon2::Config<'static> = argon2::Config::default();
}

/// Strip special characters and aliases from emails
pub fn normalise_email(original: &str) -> String {
    lazy_static! {
        static ref SPLIT: Regex = Regex::new("([^@]+)(@.+)").unwrap();
        static ref SYMBOL_RE: Regex = Regex::new("\\+.+|\\.").unwrap();
    }

    let lowercase = original.trim().to_lowercase();
    let Some(split) = SPLIT.captures(&lowercase) else {
        return lowercase;
    };

    let mut clean = SYMBOL_RE.replace_all(&split[1], "").to_string();
    clean.push_str(&split[2]);

    clean
}

/// Representation of a username used for uniqueness checks
pub fn normalise_username(original: &str) -> String {
    original.trim().to_lowercase()
}

/// Check a username is usable
///
/// Usernames may contain letters, digits and `-._@+`.
pub fn validate_username(username: &str) -> Result<()> {
    lazy_static! {
        static ref USERNAME: Regex = Regex::new("^[A-Za-z0-9\\-._@+]{1,64}$").unwrap();
    }

    if USERNAME.is_match(username) {
        Ok(())
    } else {
        Err(Error::IncorrectData { with: "username" })
    }
}

/// Hash a password using argon2
pub fn hash_password(plaintext_password: &str) -> Result<String> {
    argon2::hash_encoded(
        plaintext_password.as_bytes(),
        nanoid!(24).as_bytes(),
        &ARGON_CONFIG,
    )
    .map_err(|_| Error::InternalError)
}

/// Check a plaintext password against an encoded argon2 hash
///
/// Malformed hashes are treated as a mismatch.
pub fn verify_password(encoded: &str, plaintext_password: &str) -> bool {
    argon2::verify_encoded(encoded, plaintext_password.as_bytes()).unwrap_or(false)
}

/// Timestamp a given duration after another
///
/// Clamps to the latest representable timestamp.
pub fn offset_timestamp(from: Timestamp, duration: Duration) -> Timestamp {
    from.saturating_add(Span::try_from(duration).unwrap_or(Span::MAX))
}

/// Time left from `now` until `until`, if it lies in the future
pub fn time_until(now: Timestamp, until: Timestamp) -> Option<Duration> {
    let difference = until.duration_since(now);
    if difference.is_positive() {
        Duration::try_from(difference).ok()
    } else {
        None
    }
}
