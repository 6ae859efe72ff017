use crate::constants::{seeds, MAX_SUPPLY};
use crate::errors::MintControllerError;
use crate::events::MintControllerInitialized;
use crate::state::{ControllerConfig, MintController};
use anchor_lang::prelude::*;
use anchor_lang::Accounts;
use anchor_spl::token_interface::Mint;

/// Account structure for creating the mint controller.
///
/// # Preconditions
/// - The `controller` account must not exist prior to execution; it will be initialized here,
///   so a second `initialize` always fails.
/// - `payer` must be the program's upgrade authority, so nobody can front-run the deployer
///   with their own admin and signer set.
#[derive(Accounts)]
pub struct Initialize<'info> {
    /// The controller account, also the mint authority PDA.
    ///
    /// # Note
    /// - Space is allocated as `8 + MintController::INIT_SPACE` bytes, where 8 bytes are for the discriminator.
    /// - Seeded with `["config", "sdm_mint_ctrl"]` and a bump for PDA derivation.
    #[account(
        init,
        payer = payer,
        space = 8 + MintController::INIT_SPACE,
        seeds = [seeds::CONFIG, seeds::MINT_CONTROLLER],
        bump
    )]
    pub controller: Account<'info, MintController>,

    /// The token mint this controller governs.
    pub mint: InterfaceAccount<'info, Mint>,

    /// Funds the controller account; must be the program upgrade authority.
    #[account(mut)]
    pub payer: Signer<'info>,

    /// This program, used to locate its ProgramData account.
    #[account(constraint = program.programdata_address()? == Some(program_data.key()))]
    pub program: Program<'info, crate::program::MintController>,

    /// ProgramData of this program holding the upgrade authority.
    #[account(
        constraint = program_data.upgrade_authority_address == Some(payer.key())
            @ MintControllerError::Unauthorized
    )]
    pub program_data: Account<'info, ProgramData>,

    /// Solana System program for account creation and rent payment.
    pub system_program: Program<'info, System>,
}

/// Creates the controller with its admin, oracle signer set and quorum.
///
/// The mint's authority is not required to be the controller yet; every
/// minting instruction checks it, so the authority can be handed over after
/// initialization.
///
/// # Arguments
/// - `ctx`: Context containing the accounts to initialize.
/// - `admin`: Identity allowed to run administrative instructions.
/// - `quorum`: Minimum number of distinct oracle signatures per multisig mint.
/// - `oracle_signers`: Up to ten distinct oracle signer keys.
/// - `bridge_authority`: Identity allowed to call `bridge_mint`.
/// - `treasury`: Wallet receiving the founder mint.
///
/// # Errors
/// `Unauthorized` when the payer is not the upgrade authority, then
/// `TooManySigners`, `DuplicateSigner`, `InvalidSigner`, `InvalidQuorum`, `InvalidAuthority`.
pub fn initialize(
    ctx: Context<Initialize>,
    admin: Pubkey,
    quorum: u8,
    oracle_signers: Vec<Pubkey>,
    bridge_authority: Pubkey,
    treasury: Pubkey,
) -> Result<()> {
    let controller_key = ctx.accounts.controller.key();
    let mint = ctx.accounts.mint.key();
    let controller = &mut ctx.accounts.controller;

    controller.configure(ControllerConfig {
        admin,
        mint,
        bridge_authority,
        treasury,
        quorum,
        oracle_signers,
        max_supply: MAX_SUPPLY,
        bump: ctx.bumps.controller,
    })?;

    msg!(
        "SDM Mint Controller initialized with {} signers, quorum: {}",
        controller.oracle_signers.len(),
        quorum
    );

    emit!(MintControllerInitialized {
        controller: controller_key,
        admin,
        mint,
        bridge_authority,
        treasury,
        quorum,
        oracle_signers: controller.oracle_signers.clone(),
    });

    Ok(())
}
