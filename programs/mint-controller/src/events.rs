use anchor_lang::prelude::*;

/// Emitted once when the controller account is created.
#[event]
pub struct MintControllerInitialized {
    pub controller: Pubkey,
    pub admin: Pubkey,
    pub mint: Pubkey,
    pub bridge_authority: Pubkey,
    pub treasury: Pubkey,
    pub quorum: u8,
    pub oracle_signers: Vec<Pubkey>,
}

/// Emitted when the founder supply lands in the treasury.
#[event]
pub struct InitialSupplyMinted {
    pub treasury: Pubkey,
    pub amount: u64,
    pub total_minted: u64,
}

/// Emitted for every quorum-approved mint.
///
/// `signers` is the deduplicated set of oracle signers whose signatures counted
/// toward the quorum.
#[event]
pub struct MultisigMintEvent {
    pub recipient: Pubkey,
    pub amount: u64,
    pub reason: String,
    pub nonce: u64,
    pub signers: Vec<Pubkey>,
}

/// Emitted when the bridge authority mints tokens that arrived cross-chain.
#[event]
pub struct BridgeMinted {
    pub bridge_authority: Pubkey,
    pub recipient: Pubkey,
    pub amount: u64,
    pub total_minted: u64,
}

/// Emitted when the admin replaces the oracle signer set and quorum.
#[event]
pub struct OracleSignersUpdated {
    pub old_signers: Vec<Pubkey>,
    pub new_signers: Vec<Pubkey>,
    pub old_quorum: u8,
    pub new_quorum: u8,
}

/// Emitted when the admin role moves to a new key.
#[event]
pub struct AdminUpdated {
    pub old_admin: Pubkey,
    pub new_admin: Pubkey,
}
