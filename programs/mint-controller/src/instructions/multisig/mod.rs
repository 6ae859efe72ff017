pub mod mint_with_multisig;

pub use mint_with_multisig::*;
