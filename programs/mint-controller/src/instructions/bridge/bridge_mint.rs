use crate::authority::engine;
use crate::constants::seeds;
use crate::errors::MintControllerError;
use crate::state::MintController;
use crate::utils::token_utils::{has_mint_authority, TokenMintLedger};
use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

/// Account structure for a bridge-initiated mint
#[derive(Accounts)]
pub struct BridgeMint<'info> {
    #[account(
        mut,
        seeds = [seeds::CONFIG, seeds::MINT_CONTROLLER],
        bump = controller.bump
    )]
    pub controller: Account<'info, MintController>,

    /// The bridge authority recorded at initialization
    pub bridge_authority: Signer<'info>,

    #[account(
        mut,
        address = controller.mint @ MintControllerError::InvalidMint,
        constraint = has_mint_authority(&mint, &controller.key()) @ MintControllerError::NoMintAuthority
    )]
    pub mint: InterfaceAccount<'info, Mint>,

    /// Token account credited with the bridged amount; must be owned by `recipient`
    #[account(
        mut,
        token::mint = mint,
        token::token_program = token_program
    )]
    pub recipient_token_account: InterfaceAccount<'info, TokenAccount>,

    pub token_program: Interface<'info, TokenInterface>,
}

/// Mints tokens arriving through the cross-chain bridge
///
/// Skips the signature quorum and the nonce; the caller's identity is the
/// only authorization. Still bounded by the supply cap.
///
/// # Errors
/// * `Unauthorized` - Signer is not the bridge authority
/// * `InvalidAmount` - Zero amount
/// * `ExceedsMaxSupply` / `Overflow` - Supply cap would be broken
/// * `InvalidRecipient` - Token account not owned by `recipient`
pub fn bridge_mint(ctx: Context<BridgeMint>, amount: u64, recipient: Pubkey) -> Result<()> {
    let caller = ctx.accounts.bridge_authority.key();
    let mut ledger = TokenMintLedger::new(
        &ctx.accounts.token_program,
        &ctx.accounts.mint,
        &ctx.accounts.recipient_token_account,
        ctx.accounts.controller.to_account_info(),
        ctx.accounts.controller.bump,
    );

    let event = engine::bridge_mint(
        &mut ctx.accounts.controller,
        &mut ledger,
        &caller,
        &recipient,
        amount,
    )?;

    msg!("Bridge mint: {} to {}", event.amount, event.recipient);
    emit!(event);

    Ok(())
}
