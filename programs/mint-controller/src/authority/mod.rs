//! Quorum-controlled mint authorization.
//!
//! Everything in this module is plain Rust over [`crate::state::MintController`],
//! independent of the account plumbing in `instructions`, so the invariants can
//! be exercised without a validator.

pub mod attestations;
pub mod engine;
pub mod message;
pub mod quorum;

pub use attestations::*;
pub use engine::*;
pub use message::*;
pub use quorum::*;
