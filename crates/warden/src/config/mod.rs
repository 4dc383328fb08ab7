mod blocklists;
mod expiry;
mod lockout;
mod passwords;
mod templates;

pub use blocklists::*;
pub use expiry::*;
pub use lockout::*;
pub use passwords::*;
pub use templates::*;

/// Warden configuration
#[derive(Default, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    /// Check if passwords are compromised
    pub password_scanning: PasswordScanning,

    /// Email block list
    ///
    /// Use to block common disposable mail providers.
    pub email_block_list: EmailBlockList,

    /// Sign-in lockout policy
    pub lockout: LockoutConfig,

    /// Token lifetimes
    pub expiry: TokenExpiryConfig,

    /// Email templates
    pub templates: Templates,
}
