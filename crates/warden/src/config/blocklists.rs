use std::collections::HashSet;

use crate::{Error, Result};

#[derive(Default, Serialize, Deserialize, Clone)]
pub enum EmailBlockList {
    /// Don't block any emails
    #[default]
    Disabled,
    /// Block a custom list of domains
    Custom { domains: HashSet<String> },
}

impl EmailBlockList {
    /// Get active list
    pub fn get_list(&self) -> Option<&HashSet<String>> {
        match self {
            EmailBlockList::Disabled => None,
            EmailBlockList::Custom { domains } => Some(domains),
        }
    }

    /// Validate a given email is allowed
    pub fn validate_email(&self, email: &str) -> Result<()> {
        // Make sure this is an actual email
        if !validator::validate_email(email) {
            return Err(Error::IncorrectData { with: "email" });
        }

        // Check if the email is blacklisted
        if let Some(list) = self.get_list() {
            if let Some(domain) = email.split('@').last() {
                if list.contains(&domain.to_lowercase()) {
                    return Err(Error::Blacklisted);
                }
            }
        }

        Ok(())
    }
}
