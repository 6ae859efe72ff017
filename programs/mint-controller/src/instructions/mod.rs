pub mod admin;
pub mod bridge;
pub mod initialization;
pub mod multisig;

pub use admin::*;
pub use bridge::*;
pub use initialization::*;
pub use multisig::*;
