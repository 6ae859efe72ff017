pub mod mint_initial_supply;
pub mod update_admin;
pub mod update_oracle_signers;

pub use mint_initial_supply::*;
pub use update_admin::*;
pub use update_oracle_signers::*;
