pub mod chain;
pub mod token;
