use bytemuck::{Pod, Zeroable};

/// Offset of the first signature-offsets record in Ed25519 instruction data
const SIGNATURE_OFFSETS_START: usize = 2;

/// Serialized size of one [`Ed25519SignatureOffsets`] record
const SIGNATURE_OFFSETS_SERIALIZED_SIZE: usize = 14;

const PUBKEY_SERIALIZED_SIZE: usize = 32;
const SIGNATURE_SERIALIZED_SIZE: usize = 64;

/// Instruction index meaning "data lives in the Ed25519 instruction itself"
const CURRENT_INSTRUCTION: u16 = u16::MAX;

/// Per-signature header of a Solana Ed25519 verify instruction
#[derive(Clone, Copy, Debug, Default, Pod, Zeroable)]
#[repr(C)]
struct Ed25519SignatureOffsets {
    signature_offset: u16,
    signature_instruction_index: u16,
    public_key_offset: u16,
    public_key_instruction_index: u16,
    message_data_offset: u16,
    message_data_size: u16,
    message_instruction_index: u16,
}

/// One signature checked by the Ed25519 precompile
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParsedEd25519 {
    /// 32-byte Ed25519 public key used for signature verification
    pub pubkey: [u8; 32],
    /// 64-byte Ed25519 signature
    pub signature: [u8; 64],
    /// Message bytes that were signed
    pub message: Vec<u8>,
}

/// Parse Ed25519 verify instruction data into its signatures.
///
/// Expected data format (Solana Ed25519 instruction format):
/// ```text
/// Byte 0:      Number of signatures (u8)
/// Byte 1:      Padding (u8)
/// Then, per signature, a 14-byte offsets record:
///   Bytes 0-1:   Signature offset (u16 little-endian)
///   Bytes 2-3:   Signature instruction index (u16 little-endian)
///   Bytes 4-5:   Public key offset (u16 little-endian)
///   Bytes 6-7:   Public key instruction index (u16 little-endian)
///   Bytes 8-9:   Message data offset (u16 little-endian)
///   Bytes 10-11: Message data size (u16 little-endian)
///   Bytes 12-13: Message instruction index (u16 little-endian)
///
/// Variable data section:
/// - 64-byte Ed25519 signature at signature_offset
/// - 32-byte Ed25519 public key at pubkey_offset
/// - Message bytes (length = message_size) at message_offset
/// ```
///
/// Records whose data lives in another instruction are skipped: the bytes at
/// their offsets here are not the bytes the precompile verified, so they can
/// never attest to a message rebuilt by this program.
///
/// Returns None if the header or an in-place record does not fit in `data`.
pub fn parse_ed25519_ix(data: &[u8]) -> Option<Vec<ParsedEd25519>> {
    let sig_count = usize::from(*data.first()?);

    let mut parsed = Vec::with_capacity(sig_count);
    for i in 0..sig_count {
        let start = SIGNATURE_OFFSETS_START + i * SIGNATURE_OFFSETS_SERIALIZED_SIZE;
        let record = slice_at(data, start, SIGNATURE_OFFSETS_SERIALIZED_SIZE)?;
        let offsets: Ed25519SignatureOffsets = bytemuck::try_pod_read_unaligned(record).ok()?;
        if !offsets.is_in_place() {
            continue;
        }
        parsed.push(parse_signature(data, &offsets)?);
    }
    Some(parsed)
}

impl Ed25519SignatureOffsets {
    /// Whether signature, public key and message all live in the Ed25519 instruction itself
    fn is_in_place(&self) -> bool {
        self.signature_instruction_index == CURRENT_INSTRUCTION
            && self.public_key_instruction_index == CURRENT_INSTRUCTION
            && self.message_instruction_index == CURRENT_INSTRUCTION
    }
}

fn parse_signature(data: &[u8], offsets: &Ed25519SignatureOffsets) -> Option<ParsedEd25519> {
    let signature = slice_at(
        data,
        usize::from(offsets.signature_offset),
        SIGNATURE_SERIALIZED_SIZE,
    )?;
    let pubkey = slice_at(
        data,
        usize::from(offsets.public_key_offset),
        PUBKEY_SERIALIZED_SIZE,
    )?;
    let message = slice_at(
        data,
        usize::from(offsets.message_data_offset),
        usize::from(offsets.message_data_size),
    )?;

    Some(ParsedEd25519 {
        pubkey: pubkey.try_into().ok()?,
        signature: signature.try_into().ok()?,
        message: message.to_vec(),
    })
}

fn slice_at(data: &[u8], offset: usize, len: usize) -> Option<&[u8]> {
    data.get(offset..offset.checked_add(len)?)
}
