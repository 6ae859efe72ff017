use crate::constants::seeds;
use crate::state::MintController;
use anchor_lang::prelude::*;

/// Account structure for transferring the admin role
#[derive(Accounts)]
pub struct UpdateAdmin<'info> {
    #[account(
        mut,
        seeds = [seeds::CONFIG, seeds::MINT_CONTROLLER],
        bump = controller.bump
    )]
    pub controller: Account<'info, MintController>,

    /// The current admin
    pub admin: Signer<'info>,
}

/// Hands the admin role to `new_admin` in a single step
///
/// # Errors
/// * `Unauthorized` - Signer is not the current admin
/// * `InvalidAuthority` - `new_admin` is the default key or the bridge authority
pub fn update_admin(ctx: Context<UpdateAdmin>, new_admin: Pubkey) -> Result<()> {
    let caller = ctx.accounts.admin.key();
    let event = ctx.accounts.controller.transfer_admin(&caller, new_admin)?;

    msg!("Admin updated to: {}", new_admin);
    emit!(event);

    Ok(())
}
