use anchor_lang::prelude::Pubkey;

/// Length of the fixed-width prefix: amount (8) + recipient (32) + nonce (8)
pub const MINT_MESSAGE_HEADER_LEN: usize = 8 + 32 + 8;

/// Builds the canonical message oracle signers sign to approve a mint.
///
/// Layout:
/// ```text
/// Bytes 0..8:    amount (u64 little-endian)
/// Bytes 8..40:   recipient public key
/// Bytes 40..48:  nonce (u64 little-endian)
/// Bytes 48..:    reason, raw UTF-8, no length prefix
/// ```
///
/// Every field before `reason` is fixed-width, so distinct
/// `(amount, recipient, nonce, reason)` tuples never share an encoding.
/// Off-chain signers must use this exact function.
pub fn encode_mint_message(amount: u64, recipient: &Pubkey, nonce: u64, reason: &str) -> Vec<u8> {
    let mut buf = Vec::with_capacity(MINT_MESSAGE_HEADER_LEN + reason.len());
    buf.extend_from_slice(&amount.to_le_bytes());
    buf.extend_from_slice(recipient.as_ref());
    buf.extend_from_slice(&nonce.to_le_bytes());
    buf.extend_from_slice(reason.as_bytes());
    buf
}
