/// PDA seeds used throughout the program for account derivation
pub mod seeds {
    /// Namespace seed for the controller account
    pub const CONFIG: &[u8] = b"config";

    /// Program-specific seed; together with `CONFIG` and the bump it derives the
    /// controller PDA that also holds the mint authority
    pub const MINT_CONTROLLER: &[u8] = b"sdm_mint_ctrl";
}

/// Maximum number of oracle signers the controller can track
pub const MAX_ORACLE_SIGNERS: usize = 10;

/// Number of decimals of the controlled token
pub const TOKEN_DECIMALS: u8 = 6;

/// Hard cap on the cumulative amount the controller may ever mint (5B tokens)
pub const MAX_SUPPLY: u64 = 5_000_000_000 * 10u64.pow(TOKEN_DECIMALS as u32);

/// Amount minted once to the treasury by `mint_initial_supply` (4B tokens)
pub const INITIAL_MINT: u64 = 4_000_000_000 * 10u64.pow(TOKEN_DECIMALS as u32);

/// Maximum length in bytes of the free-form reason attached to a multisig mint
pub const MAX_REASON_LEN: usize = 200;
