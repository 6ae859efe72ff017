use crate::authority::{engine, Ed25519Attestations, MintRequest};
use crate::constants::seeds;
use crate::errors::MintControllerError;
use crate::state::MintController;
use crate::utils::token_utils::{has_mint_authority, TokenMintLedger};
use anchor_lang::{prelude::*, Accounts};
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

/// Account structure for a quorum-approved mint
///
/// The oracle signatures travel as Ed25519 precompile instructions placed
/// before this one in the same transaction. Anyone may submit the
/// transaction; authority comes from the signatures alone.
#[derive(Accounts)]
pub struct MintWithMultisig<'info> {
    /// Controller state holding signer set, quorum, nonce and supply totals
    #[account(
        mut,
        seeds = [seeds::CONFIG, seeds::MINT_CONTROLLER],
        bump = controller.bump
    )]
    pub controller: Account<'info, MintController>,

    /// The controlled token mint
    #[account(
        mut,
        address = controller.mint @ MintControllerError::InvalidMint,
        constraint = has_mint_authority(&mint, &controller.key()) @ MintControllerError::NoMintAuthority
    )]
    pub mint: InterfaceAccount<'info, Mint>,

    /// Token account credited with the minted amount; must be owned by `recipient`
    #[account(
        mut,
        token::mint = mint,
        token::token_program = token_program
    )]
    pub recipient_token_account: InterfaceAccount<'info, TokenAccount>,

    /// CHECK: sysvar to read the preceding Ed25519 instructions
    #[account(address = solana_instructions_sysvar::id())]
    pub instructions_sysvar: UncheckedAccount<'info>,

    /// SPL Token or Token-2022 program owning the mint
    pub token_program: Interface<'info, TokenInterface>,
}

/// Mints `amount` to `recipient` once a quorum of oracle signers approved it
///
/// Each oracle signs `amount (u64 LE) || recipient || nonce (u64 LE) || reason`.
/// Only signatures verified by the Ed25519 precompile over exactly that message
/// and made by a current oracle signer are counted.
///
/// # Arguments
/// * `ctx` - The instruction context containing validated accounts
/// * `amount` - Base units to mint, must be non-zero
/// * `recipient` - Wallet owning `recipient_token_account`
/// * `nonce` - Must be strictly greater than the last accepted nonce
/// * `reason` - Free-form justification, at most 200 bytes
///
/// # Errors
/// * `InvalidNonce` - Replayed or out-of-order request
/// * `QuorumNotReached` / `InvalidSignature` - Not enough valid approvals
/// * `ExceedsMaxSupply` / `Overflow` - Supply cap would be broken
/// * `InvalidRecipient` - Token account not owned by `recipient`
///
/// # Events
/// * `MultisigMintEvent`
pub fn mint_with_multisig(
    ctx: Context<MintWithMultisig>,
    amount: u64,
    recipient: Pubkey,
    nonce: u64,
    reason: String,
) -> Result<()> {
    let attestations =
        Ed25519Attestations::from_instructions_sysvar(&ctx.accounts.instructions_sysvar)?;
    let signatures = attestations.signatures();
    msg!(
        "Collected {} Ed25519 attestations",
        attestations.signature_count()
    );

    let mut ledger = TokenMintLedger::new(
        &ctx.accounts.token_program,
        &ctx.accounts.mint,
        &ctx.accounts.recipient_token_account,
        ctx.accounts.controller.to_account_info(),
        ctx.accounts.controller.bump,
    );

    let event = engine::mint_with_multisig(
        &mut ctx.accounts.controller,
        &mut ledger,
        &attestations,
        MintRequest {
            amount,
            recipient,
            nonce,
            reason,
        },
        &signatures,
    )?;

    msg!(
        "Multisig mint: {} to {} (nonce {}, {} signers)",
        event.amount,
        event.recipient,
        event.nonce,
        event.signers.len()
    );
    emit!(event);

    Ok(())
}
