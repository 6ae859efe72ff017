use super::quorum::{SignatureScheme, SignerSignature};
use crate::errors::MintControllerError;
use crate::utils::ed25519_parser::{parse_ed25519_ix, ParsedEd25519};
use anchor_lang::prelude::*;
use solana_sdk_ids::ed25519_program;
use solana_instructions_sysvar::{load_current_index_checked, load_instruction_at_checked};

/// Signatures already checked by the Ed25519 precompile in the current transaction.
///
/// The runtime rejects the whole transaction if any Ed25519 instruction carries
/// an invalid signature, so every entry here is a genuine signature by `pubkey`
/// over `message`. As a [`SignatureScheme`] it accepts a signature only when the
/// precompile verified that exact signature, signer and message.
pub struct Ed25519Attestations {
    entries: Vec<ParsedEd25519>,
}

impl Ed25519Attestations {
    /// Collects every Ed25519 verification that precedes the current instruction.
    pub fn from_instructions_sysvar(instructions_sysvar: &AccountInfo) -> Result<Self> {
        let current_index = load_current_index_checked(instructions_sysvar)?;

        let mut instructions = Vec::with_capacity(usize::from(current_index));
        for i in 0..current_index {
            let ix = load_instruction_at_checked(usize::from(i), instructions_sysvar)?;
            instructions.push((ix.program_id, ix.data));
        }

        Self::from_instructions(instructions.iter().map(|(id, data)| (id, data.as_slice())))
    }

    /// Builds the attestation set from `(program_id, data)` instruction pairs,
    /// skipping instructions of other programs.
    pub fn from_instructions<'a>(
        instructions: impl IntoIterator<Item = (&'a Pubkey, &'a [u8])>,
    ) -> Result<Self> {
        let mut entries = Vec::new();
        for (program_id, data) in instructions {
            if *program_id != ed25519_program::ID {
                continue;
            }
            let parsed =
                parse_ed25519_ix(data).ok_or(MintControllerError::MalformedEd25519Instruction)?;
            entries.extend(parsed);
        }
        Ok(Self { entries })
    }

    /// Signatures to submit to the quorum check, in instruction order
    pub fn signatures(&self) -> Vec<SignerSignature> {
        self.entries
            .iter()
            .map(|entry| SignerSignature {
                signer: Pubkey::new_from_array(entry.pubkey),
                signature: entry.signature,
            })
            .collect()
    }

    /// Number of in-place signatures collected from the preceding instructions
    pub fn signature_count(&self) -> usize {
        self.entries.len()
    }
}

impl SignatureScheme for Ed25519Attestations {
    fn verify(&self, message: &[u8], signature: &[u8; 64], signer: &Pubkey) -> bool {
        self.entries.iter().any(|entry| {
            entry.pubkey == signer.to_bytes()
                && entry.signature == *signature
                && entry.message == message
        })
    }
}
