use super::message::encode_mint_message;
use super::quorum::{verify_quorum, SignatureScheme, SignerSignature};
use crate::constants::MAX_REASON_LEN;
use crate::errors::MintControllerError;
use crate::events::{BridgeMinted, InitialSupplyMinted, MultisigMintEvent};
use crate::state::MintController;
use anchor_lang::prelude::*;

/// The asset ledger the engine credits newly minted units to.
///
/// Implementations sign as the controller authority; the engine is the only
/// caller, and it calls `credit` after every check has passed and before any
/// controller field is written.
pub trait MintLedger {
    fn credit(&mut self, recipient: &Pubkey, amount: u64) -> Result<()>;
}

/// A quorum-approved mint request, exactly as the oracle signers signed it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MintRequest {
    pub amount: u64,
    pub recipient: Pubkey,
    pub nonce: u64,
    pub reason: String,
}

impl MintRequest {
    /// Canonical message rebuilt from the request's own fields
    pub fn message(&self) -> Vec<u8> {
        encode_mint_message(self.amount, &self.recipient, self.nonce, &self.reason)
    }
}

/// Applies a quorum-approved mint.
///
/// # Process
/// 1. Rejects a zero amount, an oversized reason and a nonce that is not
///    strictly greater than the stored one
/// 2. Computes the new supply total with overflow and cap checks
/// 3. Rebuilds the canonical message and verifies the signature quorum against
///    the signer set currently stored in `controller`
/// 4. Credits the recipient, then records the nonce and the new total
///
/// # Errors
/// `InvalidAmount`, `ReasonTooLong`, `InvalidNonce`, `Overflow`,
/// `ExceedsMaxSupply`, `QuorumNotReached`, `InvalidSignature`, or any ledger
/// error. On error the controller is left untouched.
pub fn mint_with_multisig<S, L>(
    controller: &mut MintController,
    ledger: &mut L,
    scheme: &S,
    request: MintRequest,
    signatures: &[SignerSignature],
) -> Result<MultisigMintEvent>
where
    S: SignatureScheme + ?Sized,
    L: MintLedger + ?Sized,
{
    require!(request.amount > 0, MintControllerError::InvalidAmount);
    require!(
        request.reason.len() <= MAX_REASON_LEN,
        MintControllerError::ReasonTooLong
    );
    require!(
        request.nonce > controller.nonce,
        MintControllerError::InvalidNonce
    );
    let new_total = controller.supply_after(request.amount)?;

    let message = request.message();
    let signers = verify_quorum(
        scheme,
        &message,
        &controller.oracle_signers,
        controller.quorum,
        signatures,
    )?;

    ledger.credit(&request.recipient, request.amount)?;

    controller.nonce = request.nonce;
    controller.total_minted = new_total;

    Ok(MultisigMintEvent {
        recipient: request.recipient,
        amount: request.amount,
        reason: request.reason,
        nonce: request.nonce,
        signers,
    })
}

/// Mints the one-time founder supply to the treasury.
///
/// Only the admin may call it, and only once per controller; the flag is
/// checked before the caller so a repeat always reports
/// `InitialMintAlreadyDone`.
pub fn mint_initial_supply<L: MintLedger + ?Sized>(
    controller: &mut MintController,
    ledger: &mut L,
    caller: &Pubkey,
    amount: u64,
) -> Result<InitialSupplyMinted> {
    require!(
        !controller.initial_mint_done,
        MintControllerError::InitialMintAlreadyDone
    );
    controller.ensure_admin(caller)?;
    let new_total = controller.supply_after(amount)?;

    let treasury = controller.treasury;
    ledger.credit(&treasury, amount)?;

    controller.total_minted = new_total;
    controller.initial_mint_done = true;

    Ok(InitialSupplyMinted {
        treasury,
        amount,
        total_minted: new_total,
    })
}

/// Mints on behalf of the external bridge without a signature quorum.
///
/// Bounded by the same supply checks as every other path; never reads or
/// advances the multisig nonce.
pub fn bridge_mint<L: MintLedger + ?Sized>(
    controller: &mut MintController,
    ledger: &mut L,
    caller: &Pubkey,
    recipient: &Pubkey,
    amount: u64,
) -> Result<BridgeMinted> {
    controller.ensure_bridge_authority(caller)?;
    let new_total = controller.supply_after(amount)?;

    ledger.credit(recipient, amount)?;

    controller.total_minted = new_total;

    Ok(BridgeMinted {
        bridge_authority: *caller,
        recipient: *recipient,
        amount,
        total_minted: new_total,
    })
}
