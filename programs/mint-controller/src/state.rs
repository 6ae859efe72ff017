use crate::constants::MAX_ORACLE_SIGNERS;
use crate::errors::MintControllerError;
use crate::events::{AdminUpdated, OracleSignersUpdated};
use anchor_lang::prelude::*;

/// Controller account governing every mint of the SDM token
///
/// The account lives at the PDA derived from `[CONFIG, MINT_CONTROLLER]` and is
/// also the mint authority of `mint`, so minting privilege belongs to this
/// record rather than to any individual key. All fields are mutated only
/// through the methods below and the mint engine.
#[account]
#[derive(InitSpace)]
pub struct MintController {
    /// Identity allowed to rotate signers, transfer admin and run the founder mint
    pub admin: Pubkey,
    /// Token mint controlled by this account; immutable after initialization
    pub mint: Pubkey,
    /// External bridge identity allowed to mint without a quorum
    pub bridge_authority: Pubkey,
    /// Wallet whose token account receives the founder mint
    pub treasury: Pubkey,
    /// Minimum number of distinct oracle signatures required per multisig mint
    pub quorum: u8,
    /// Current set of trusted oracle signers
    #[max_len(10)]
    pub oracle_signers: Vec<Pubkey>,
    /// Last nonce consumed by a multisig mint
    pub nonce: u64,
    /// Cumulative amount minted through every path
    pub total_minted: u64,
    /// Supply cap fixed at initialization
    pub max_supply: u64,
    /// Set once the founder mint has been performed
    pub initial_mint_done: bool,
    /// PDA bump seed for account derivation
    pub bump: u8,
    /// Reserved space for future layout extensions
    pub reserved: [u8; 64],
}

/// Parameters accepted by `initialize`, validated by [`MintController::configure`].
pub struct ControllerConfig {
    pub admin: Pubkey,
    pub mint: Pubkey,
    pub bridge_authority: Pubkey,
    pub treasury: Pubkey,
    pub quorum: u8,
    pub oracle_signers: Vec<Pubkey>,
    pub max_supply: u64,
    pub bump: u8,
}

impl MintController {
    /// Validates a candidate oracle signer set and quorum.
    ///
    /// The set must hold at most [`MAX_ORACLE_SIGNERS`] distinct, non-default keys
    /// and the quorum must lie in `1..=signers.len()`.
    pub fn validate_signer_set(signers: &[Pubkey], quorum: u8) -> Result<()> {
        require!(
            signers.len() <= MAX_ORACLE_SIGNERS,
            MintControllerError::TooManySigners
        );

        for (i, signer) in signers.iter().enumerate() {
            require!(
                *signer != Pubkey::default(),
                MintControllerError::InvalidSigner
            );
            require!(
                !signers[..i].contains(signer),
                MintControllerError::DuplicateSigner
            );
        }

        require!(
            quorum > 0 && usize::from(quorum) <= signers.len(),
            MintControllerError::InvalidQuorum
        );

        Ok(())
    }

    /// Populates a freshly allocated controller.
    ///
    /// The bridge authority must stay separate from the admin and from every
    /// oracle signer so that the quorum-free path cannot be reached through
    /// another role.
    pub fn configure(&mut self, config: ControllerConfig) -> Result<()> {
        Self::validate_signer_set(&config.oracle_signers, config.quorum)?;
        require!(
            config.admin != Pubkey::default()
                && config.bridge_authority != Pubkey::default()
                && config.treasury != Pubkey::default(),
            MintControllerError::InvalidAuthority
        );
        require_keys_neq!(
            config.bridge_authority,
            config.admin,
            MintControllerError::InvalidAuthority
        );
        require!(
            !config.oracle_signers.contains(&config.bridge_authority),
            MintControllerError::InvalidAuthority
        );

        self.admin = config.admin;
        self.mint = config.mint;
        self.bridge_authority = config.bridge_authority;
        self.treasury = config.treasury;
        self.quorum = config.quorum;
        self.oracle_signers = config.oracle_signers;
        self.nonce = 0;
        self.total_minted = 0;
        self.max_supply = config.max_supply;
        self.initial_mint_done = false;
        self.bump = config.bump;
        self.reserved = [0; 64];

        Ok(())
    }

    pub fn ensure_admin(&self, caller: &Pubkey) -> Result<()> {
        require_keys_eq!(*caller, self.admin, MintControllerError::Unauthorized);
        Ok(())
    }

    pub fn ensure_bridge_authority(&self, caller: &Pubkey) -> Result<()> {
        require_keys_eq!(
            *caller,
            self.bridge_authority,
            MintControllerError::Unauthorized
        );
        Ok(())
    }

    /// Returns the supply total after minting `amount`, without committing it.
    ///
    /// Fails with `InvalidAmount` for zero, `Overflow` when the addition wraps
    /// and `ExceedsMaxSupply` when the result is above the cap.
    pub fn supply_after(&self, amount: u64) -> Result<u64> {
        require!(amount > 0, MintControllerError::InvalidAmount);
        let new_total = self
            .total_minted
            .checked_add(amount)
            .ok_or(MintControllerError::Overflow)?;
        require!(
            new_total <= self.max_supply,
            MintControllerError::ExceedsMaxSupply
        );
        Ok(new_total)
    }

    /// Replaces the oracle signer set and quorum in one step.
    pub fn rotate_oracle_signers(
        &mut self,
        caller: &Pubkey,
        new_signers: Vec<Pubkey>,
        new_quorum: u8,
    ) -> Result<OracleSignersUpdated> {
        self.ensure_admin(caller)?;
        Self::validate_signer_set(&new_signers, new_quorum)?;
        require!(
            !new_signers.contains(&self.bridge_authority),
            MintControllerError::InvalidAuthority
        );

        let old_signers = std::mem::replace(&mut self.oracle_signers, new_signers);
        let old_quorum = std::mem::replace(&mut self.quorum, new_quorum);

        Ok(OracleSignersUpdated {
            old_signers,
            new_signers: self.oracle_signers.clone(),
            old_quorum,
            new_quorum,
        })
    }

    pub fn transfer_admin(&mut self, caller: &Pubkey, new_admin: Pubkey) -> Result<AdminUpdated> {
        self.ensure_admin(caller)?;
        require!(
            new_admin != Pubkey::default(),
            MintControllerError::InvalidAuthority
        );
        require_keys_neq!(
            new_admin,
            self.bridge_authority,
            MintControllerError::InvalidAuthority
        );

        let old_admin = std::mem::replace(&mut self.admin, new_admin);
        Ok(AdminUpdated {
            old_admin,
            new_admin,
        })
    }
}
