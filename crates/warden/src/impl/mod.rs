mod account;
mod token;
