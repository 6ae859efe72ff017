use crate::authority::MintLedger;
use crate::constants::seeds;
use crate::errors::MintControllerError;
use anchor_lang::prelude::*;
use anchor_spl::token_interface::{self, Mint, MintTo, TokenAccount, TokenInterface};

/// Returns whether `authority` currently holds the mint authority of `mint`
pub fn has_mint_authority(mint: &Mint, authority: &Pubkey) -> bool {
    Option::<Pubkey>::from(mint.mint_authority) == Some(*authority)
}

/// [`MintLedger`] that mints SPL / Token-2022 tokens through a CPI signed by
/// the controller PDA.
///
/// Holds the only copy of the controller's signer seeds used for minting, so
/// the token program is reached exclusively through the mint engine.
///
/// # Examples
/// ```rust,ignore
/// let mut ledger = TokenMintLedger::new(
///     &ctx.accounts.token_program,
///     &ctx.accounts.mint,
///     &ctx.accounts.recipient_account,
///     ctx.accounts.controller.to_account_info(),
///     ctx.accounts.controller.bump,
/// );
/// engine::bridge_mint(&mut ctx.accounts.controller, &mut ledger, &caller, &recipient, amount)?;
/// ```
pub struct TokenMintLedger<'info> {
    token_program: AccountInfo<'info>,
    mint: AccountInfo<'info>,
    destination: AccountInfo<'info>,
    destination_owner: Pubkey,
    authority: AccountInfo<'info>,
    bump: u8,
}

impl<'info> TokenMintLedger<'info> {
    pub fn new(
        token_program: &Interface<'info, TokenInterface>,
        mint: &InterfaceAccount<'info, Mint>,
        destination: &InterfaceAccount<'info, TokenAccount>,
        authority: AccountInfo<'info>,
        bump: u8,
    ) -> Self {
        Self {
            token_program: token_program.to_account_info(),
            mint: mint.to_account_info(),
            destination: destination.to_account_info(),
            destination_owner: destination.owner,
            authority,
            bump,
        }
    }
}

impl MintLedger for TokenMintLedger<'_> {
    fn credit(&mut self, recipient: &Pubkey, amount: u64) -> Result<()> {
        require_keys_eq!(
            *recipient,
            self.destination_owner,
            MintControllerError::InvalidRecipient
        );

        let bump = [self.bump];
        let controller_seeds: &[&[u8]] = &[seeds::CONFIG, seeds::MINT_CONTROLLER, &bump];
        let signer_seeds = &[controller_seeds];

        token_interface::mint_to(
            CpiContext::new_with_signer(
                self.token_program.key(),
                MintTo {
                    mint: self.mint.clone(),
                    to: self.destination.clone(),
                    authority: self.authority.clone(),
                },
                signer_seeds,
            ),
            amount,
        )
    }
}
