mod account;
mod session;
mod token;

pub use account::*;
pub use session::*;
pub use token::*;
