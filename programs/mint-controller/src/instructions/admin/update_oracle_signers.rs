use crate::constants::seeds;
use crate::state::MintController;
use anchor_lang::prelude::*;

/// Account structure for rotating the oracle signer set
#[derive(Accounts)]
pub struct UpdateOracleSigners<'info> {
    /// Controller state holding the signer set and quorum
    #[account(
        mut,
        seeds = [seeds::CONFIG, seeds::MINT_CONTROLLER],
        bump = controller.bump
    )]
    pub controller: Account<'info, MintController>,

    /// The current admin
    pub admin: Signer<'info>,
}

/// Replaces the oracle signer set and quorum
///
/// The new set applies to every multisig mint executed after this
/// instruction; signatures from removed signers stop counting immediately.
///
/// # Arguments
/// * `ctx` - The instruction context containing validated accounts
/// * `new_signers` - Up to ten distinct signer keys
/// * `new_quorum` - Required signatures, between 1 and `new_signers.len()`
///
/// # Errors
/// `Unauthorized`, `TooManySigners`, `DuplicateSigner`, `InvalidSigner`,
/// `InvalidQuorum`, `InvalidAuthority` (bridge authority listed as signer)
///
/// # Events
/// * `OracleSignersUpdated`
pub fn update_oracle_signers(
    ctx: Context<UpdateOracleSigners>,
    new_signers: Vec<Pubkey>,
    new_quorum: u8,
) -> Result<()> {
    let caller = ctx.accounts.admin.key();
    let event = ctx
        .accounts
        .controller
        .rotate_oracle_signers(&caller, new_signers, new_quorum)?;

    msg!(
        "Oracle signers updated: {} signers, quorum: {}",
        event.new_signers.len(),
        new_quorum
    );
    emit!(event);

    Ok(())
}
