use anchor_lang::prelude::*;
use instructions::*;

// Program ID declaration
cfg_if::cfg_if! {
    if #[cfg(feature = "devnet")] {
        declare_id!("6HT9VD7Z5fWjM3autwAZ2CDXowDUYXzoerPufyLa5rUj");
    } else {
        declare_id!("ETpgTx8nrLMVodYxb8PEmhLJskDr38qxcdPcrgfLs1V3");
    }
}

pub mod authority;
pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod state;
pub mod utils;

/// The main program module for the SDM mint controller.
///
/// The controller PDA is the sole mint authority of the SDM token. Every unit
/// that enters circulation goes through one of three paths, all bounded by a
/// single cumulative supply cap:
/// - A one-time founder mint to the treasury (`mint_initial_supply`).
/// - Quorum-approved mints, authorized by Ed25519 signatures from a rotating
///   set of oracle signers over a canonical message (`mint_with_multisig`).
/// - Bridge mints from a designated cross-chain bridge authority (`bridge_mint`).
///
/// # Replay protection
/// Each multisig mint carries a nonce that must be strictly greater than the
/// last accepted one. Oracle signatures cover the amount, recipient, nonce and
/// reason, so a captured approval cannot be redirected or replayed.
///
/// # Security
/// - The admin can rotate the signer set and transfer the admin role but cannot
///   mint outside the founder mint.
/// - Signatures are checked by the Ed25519 precompile in the same transaction and
///   matched against the message rebuilt on-chain.
/// - Events are emitted for every state change for off-chain traceability.
#[program]
pub mod mint_controller {
    use super::*;

    /// Creates the controller account. Only the program upgrade authority may call it.
    ///
    /// Delegates to `initialization::initialize`.
    ///
    /// # Arguments
    /// - `ctx`: Context for `Initialize`.
    /// - `admin`: Administrative identity.
    /// - `quorum`: Required oracle signatures per multisig mint.
    /// - `oracle_signers`: Initial oracle signer set, at most ten keys.
    /// - `bridge_authority`: Identity allowed to call `bridge_mint`.
    /// - `treasury`: Wallet receiving the founder mint.
    pub fn initialize(
        ctx: Context<Initialize>,
        admin: Pubkey,
        quorum: u8,
        oracle_signers: Vec<Pubkey>,
        bridge_authority: Pubkey,
        treasury: Pubkey,
    ) -> Result<()> {
        initialization::initialize(
            ctx,
            admin,
            quorum,
            oracle_signers,
            bridge_authority,
            treasury,
        )
    }

    /// Mints the founder supply to the treasury.
    ///
    /// Delegates to `admin::mint_initial_supply`.
    /// Only the admin can call this instruction, and only once.
    pub fn mint_initial_supply(ctx: Context<MintInitialSupply>) -> Result<()> {
        admin::mint_initial_supply(ctx)
    }

    /// Mints tokens approved by a quorum of oracle signers.
    ///
    /// Delegates to `multisig::mint_with_multisig`.
    /// The Ed25519 verification instructions must precede this one in the
    /// transaction. Emits a `MultisigMintEvent` upon success.
    ///
    /// # Arguments
    /// - `ctx`: Context for `MintWithMultisig`.
    /// - `amount`: Base units to mint.
    /// - `recipient`: Wallet receiving the tokens.
    /// - `nonce`: Strictly increasing request counter.
    /// - `reason`: Free-form justification covered by the signatures.
    pub fn mint_with_multisig(
        ctx: Context<MintWithMultisig>,
        amount: u64,
        recipient: Pubkey,
        nonce: u64,
        reason: String,
    ) -> Result<()> {
        multisig::mint_with_multisig(ctx, amount, recipient, nonce, reason)
    }

    /// Replaces the oracle signer set and quorum.
    ///
    /// Delegates to `admin::update_oracle_signers`.
    pub fn update_oracle_signers(
        ctx: Context<UpdateOracleSigners>,
        new_signers: Vec<Pubkey>,
        new_quorum: u8,
    ) -> Result<()> {
        admin::update_oracle_signers(ctx, new_signers, new_quorum)
    }

    /// Transfers the admin role.
    ///
    /// Delegates to `admin::update_admin`.
    pub fn update_admin(ctx: Context<UpdateAdmin>, new_admin: Pubkey) -> Result<()> {
        admin::update_admin(ctx, new_admin)
    }

    /// Mints tokens arriving through the cross-chain bridge.
    ///
    /// Delegates to `bridge::bridge_mint`.
    /// Only the bridge authority can call this instruction.
    pub fn bridge_mint(ctx: Context<BridgeMint>, amount: u64, recipient: Pubkey) -> Result<()> {
        bridge::bridge_mint(ctx, amount, recipient)
    }
}
