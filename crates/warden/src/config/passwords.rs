use std::collections::HashSet;

use crate::{Error, Result};

/// Minimum accepted password length
const MINIMUM_LENGTH: usize = 8;

#[derive(Default, Serialize, Deserialize, Clone)]
pub enum PasswordScanning {
    /// Only enforce the minimum length
    #[default]
    None,
    /// Additionally reject passwords from a custom list
    Custom { passwords: HashSet<String> },
}

impl PasswordScanning {
    /// Check whether a password can be used
    pub fn assert_safe(&self, password: &str) -> Result<()> {
        // Make sure the password is long enough.
        if password.chars().count() < MINIMUM_LENGTH {
            return Err(Error::ShortPassword);
        }

        match self {
            PasswordScanning::None => Ok(()),
            PasswordScanning::Custom { passwords } => {
                if passwords.contains(password) {
                    Err(Error::CompromisedPassword)
                } else {
                    Ok(())
                }
            }
        }
    }
}
