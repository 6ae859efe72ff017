use crate::errors::MintControllerError;
use anchor_lang::prelude::*;

/// A signature primitive the quorum check can be run against.
///
/// Implementations decide whether `signature` is a valid signature by `signer`
/// over exactly `message`. The on-chain implementation is backed by the
/// Ed25519 precompile (see [`super::attestations::Ed25519Attestations`]).
pub trait SignatureScheme {
    fn verify(&self, message: &[u8], signature: &[u8; 64], signer: &Pubkey) -> bool;
}

/// A signature supplied with a mint request, paired with its claimed signer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignerSignature {
    pub signer: Pubkey,
    pub signature: [u8; 64],
}

/// Decides whether `signatures` authorize `message` under the current signer set.
///
/// Pairs that fail cryptographic verification or whose signer is not in
/// `oracle_signers` are discarded, and repeated signers count once. Returns the
/// distinct counted signers in first-seen order when at least `quorum` remain.
///
/// # Errors
/// * `InvalidSignature` - quorum missed and at least one pair failed verification
/// * `QuorumNotReached` - quorum missed with no invalid signature supplied
pub fn verify_quorum<S: SignatureScheme + ?Sized>(
    scheme: &S,
    message: &[u8],
    oracle_signers: &[Pubkey],
    quorum: u8,
    signatures: &[SignerSignature],
) -> Result<Vec<Pubkey>> {
    let mut counted: Vec<Pubkey> = Vec::with_capacity(oracle_signers.len());
    let mut rejected = 0usize;

    for entry in signatures {
        if !scheme.verify(message, &entry.signature, &entry.signer) {
            rejected += 1;
            continue;
        }
        // Rotated-out signers do not count even with a valid signature
        if !oracle_signers.contains(&entry.signer) || counted.contains(&entry.signer) {
            continue;
        }
        counted.push(entry.signer);
    }

    if counted.len() < usize::from(quorum) {
        msg!(
            "Quorum not reached: {} of {} required ({} invalid signatures)",
            counted.len(),
            quorum,
            rejected
        );
        if rejected > 0 {
            return err!(MintControllerError::InvalidSignature);
        }
        return err!(MintControllerError::QuorumNotReached);
    }

    Ok(counted)
}
