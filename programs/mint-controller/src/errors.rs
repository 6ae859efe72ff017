use anchor_lang::prelude::*;

/// Errors returned by every mint controller instruction.
///
/// Each variant is raised before any account is mutated, so a failed
/// instruction can be resubmitted with corrected inputs.
#[error_code]
pub enum MintControllerError {
    // Authorization
    #[msg("Quorum not reached")]
    QuorumNotReached,
    #[msg("Invalid signature")]
    InvalidSignature,
    #[msg("Unauthorized")]
    Unauthorized,

    // State validation
    #[msg("Invalid quorum setting")]
    InvalidQuorum,
    #[msg("Too many signers (max 10)")]
    TooManySigners,
    #[msg("Oracle signer listed more than once")]
    DuplicateSigner,
    #[msg("Oracle signer cannot be the default address")]
    InvalidSigner,
    #[msg("Authority address is invalid or conflicts with another role")]
    InvalidAuthority,
    #[msg("Invalid nonce (must be greater than current)")]
    InvalidNonce,
    #[msg("Initial mint already completed")]
    InitialMintAlreadyDone,
    #[msg("Mint amount must be greater than zero")]
    InvalidAmount,
    #[msg("Mint reason is too long")]
    ReasonTooLong,
    #[msg("Provided mint does not match the controlled mint")]
    InvalidMint,
    #[msg("Controller does not hold mint authority for this token")]
    NoMintAuthority,
    #[msg("Recipient token account does not belong to the recipient")]
    InvalidRecipient,
    #[msg("Malformed Ed25519 instruction")]
    MalformedEd25519Instruction,

    // Arithmetic
    #[msg("Exceeds maximum supply")]
    ExceedsMaxSupply,
    #[msg("Arithmetic overflow")]
    Overflow,
}
