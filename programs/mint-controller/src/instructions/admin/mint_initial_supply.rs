use crate::authority::engine;
use crate::constants::{seeds, INITIAL_MINT};
use crate::errors::MintControllerError;
use crate::state::MintController;
use crate::utils::token_utils::{has_mint_authority, TokenMintLedger};
use anchor_lang::prelude::*;
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

/// Account structure for the one-time founder mint
///
/// The treasury's associated token account is created if it does not exist yet,
/// paid for by the admin.
#[derive(Accounts)]
pub struct MintInitialSupply<'info> {
    /// Controller state; its PDA signs the mint
    #[account(
        mut,
        seeds = [seeds::CONFIG, seeds::MINT_CONTROLLER],
        bump = controller.bump
    )]
    pub controller: Account<'info, MintController>,

    /// The admin running the founder mint; checked against the controller by the engine
    #[account(mut)]
    pub admin: Signer<'info>,

    /// The controlled token mint
    #[account(
        mut,
        address = controller.mint @ MintControllerError::InvalidMint,
        constraint = has_mint_authority(&mint, &controller.key()) @ MintControllerError::NoMintAuthority
    )]
    pub mint: InterfaceAccount<'info, Mint>,

    /// Treasury wallet recorded at initialization
    /// CHECK: address is validated against the controller state
    #[account(address = controller.treasury @ MintControllerError::InvalidRecipient)]
    pub treasury: UncheckedAccount<'info>,

    /// Treasury token account receiving the founder supply
    #[account(
        init_if_needed,
        payer = admin,
        associated_token::mint = mint,
        associated_token::authority = treasury,
        associated_token::token_program = token_program
    )]
    pub treasury_token_account: InterfaceAccount<'info, TokenAccount>,

    /// SPL Token or Token-2022 program owning the mint
    pub token_program: Interface<'info, TokenInterface>,

    /// Associated Token Program for treasury account creation
    pub associated_token_program: Program<'info, AssociatedToken>,

    /// System program required for account creation and rent payment
    pub system_program: Program<'info, System>,
}

/// Mints the fixed founder supply to the treasury, exactly once
///
/// # Arguments
/// * `ctx` - The instruction context containing validated accounts
///
/// # Errors
/// * `InitialMintAlreadyDone` - The founder mint already happened
/// * `Unauthorized` - Signer is not the current admin
/// * `Overflow` / `ExceedsMaxSupply` - The founder amount does not fit under the cap
///
/// # Events
/// * `InitialSupplyMinted`
pub fn mint_initial_supply(ctx: Context<MintInitialSupply>) -> Result<()> {
    let caller = ctx.accounts.admin.key();
    let mut ledger = TokenMintLedger::new(
        &ctx.accounts.token_program,
        &ctx.accounts.mint,
        &ctx.accounts.treasury_token_account,
        ctx.accounts.controller.to_account_info(),
        ctx.accounts.controller.bump,
    );

    let event = engine::mint_initial_supply(
        &mut ctx.accounts.controller,
        &mut ledger,
        &caller,
        INITIAL_MINT,
    )?;

    msg!("Initial supply minted: {} SDM base units", event.amount);
    emit!(event);

    Ok(())
}
