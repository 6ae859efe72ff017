pub mod ed25519_parser;
pub mod token_utils;

pub use token_utils::*;
