pub mod bridge_mint;

pub use bridge_mint::*;
