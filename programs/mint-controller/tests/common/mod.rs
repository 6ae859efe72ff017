//! Shared litesvm harness for the integration tests.
//!
//! Every test file is gated on the `litesvm-tests` feature because the harness
//! embeds the built program with `include_bytes!`. Run `anchor build` first,
//! then `cargo test --features litesvm-tests`.

#![allow(dead_code)]

use litesvm::LiteSVM;
use solana_sdk::{
    account::Account,
    instruction::{AccountMeta, Instruction},
    message::Message,
    pubkey::Pubkey,
    signature::Keypair,
    signer::Signer,
    transaction::Transaction,
};
use std::convert::TryInto;

// ---------------------------------------------------------------------------
// Program IDs
// ---------------------------------------------------------------------------
pub const PROGRAM_ID: Pubkey = solana_sdk::pubkey!("ETpgTx8nrLMVodYxb8PEmhLJskDr38qxcdPcrgfLs1V3");
pub const TOKEN_PROGRAM_ID: Pubkey =
    solana_sdk::pubkey!("TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA");
pub const ATA_PROGRAM_ID: Pubkey =
    solana_sdk::pubkey!("ATokenGPvbdGVxr1b2hvZbsiqW5xWH25efTNsLJA8knL");
pub const SYSTEM_PROGRAM_ID: Pubkey = solana_sdk::pubkey!("11111111111111111111111111111111");
pub const BPF_UPGRADEABLE_LOADER_ID: Pubkey =
    solana_sdk::pubkey!("BPFLoaderUpgradeab1e11111111111111111111111");
pub const ED25519_PROGRAM_ID: Pubkey =
    solana_sdk::pubkey!("Ed25519SigVerify111111111111111111111111111");
pub const SYSVAR_INSTRUCTIONS_ID: Pubkey =
    solana_sdk::pubkey!("Sysvar1nstructions1111111111111111111111111");

// ---------------------------------------------------------------------------
// Constants (must match constants.rs in the program)
// ---------------------------------------------------------------------------
pub const INITIAL_LAMPORTS: u64 = 1_000_000_000;
pub const TOKEN_DECIMALS: u8 = 6;
pub const MAX_SUPPLY: u64 = 5_000_000_000_000_000;
pub const INITIAL_MINT: u64 = 4_000_000_000_000_000;

pub const CONFIG_SEED: &[u8] = b"config";
pub const MINT_CONTROLLER_SEED: &[u8] = b"sdm_mint_ctrl";

// ---------------------------------------------------------------------------
// Derivation helpers
// ---------------------------------------------------------------------------
pub fn anchor_discriminator(namespace: &str, name: &str) -> [u8; 8] {
    let preimage = format!("{}:{}", namespace, name);
    let hash = solana_sdk::hash::hash(preimage.as_bytes());
    let mut disc = [0u8; 8];
    disc.copy_from_slice(&hash.to_bytes()[..8]);
    disc
}

pub fn ix_discriminator(name: &str) -> [u8; 8] {
    anchor_discriminator("global", name)
}

pub fn find_controller_pda() -> (Pubkey, u8) {
    Pubkey::find_program_address(&[CONFIG_SEED, MINT_CONTROLLER_SEED], &PROGRAM_ID)
}

pub fn derive_ata(owner: &Pubkey, mint: &Pubkey) -> Pubkey {
    Pubkey::find_program_address(
        &[owner.as_ref(), TOKEN_PROGRAM_ID.as_ref(), mint.as_ref()],
        &ATA_PROGRAM_ID,
    )
    .0
}

// ---------------------------------------------------------------------------
// Transaction helpers
// ---------------------------------------------------------------------------
pub type TxResult =
    Result<litesvm::types::TransactionMetadata, litesvm::types::FailedTransactionMetadata>;

pub fn send_tx(svm: &mut LiteSVM, ixs: &[Instruction], signers: &[&Keypair]) -> TxResult {
    let payer = signers[0].pubkey();
    let blockhash = svm.latest_blockhash();
    let msg = Message::new(ixs, Some(&payer));
    let tx = Transaction::new(signers, msg, blockhash);
    svm.send_transaction(tx)
}

/// Asserts the transaction failed with the given program error name
pub fn assert_program_error(result: TxResult, error_name: &str) {
    let failed = match result {
        Ok(_) => panic!("expected {} but transaction succeeded", error_name),
        Err(failed) => failed,
    };
    let needle = format!("Error Code: {}.", error_name);
    assert!(
        failed.meta.logs.iter().any(|log| log.contains(&needle)),
        "expected {}, got {:?}\nlogs: {:#?}",
        error_name,
        failed.err,
        failed.meta.logs
    );
}

/// Moves to a fresh blockhash so an identical instruction set forms a new transaction
pub fn advance_slot(svm: &mut LiteSVM) {
    let clock: solana_sdk::clock::Clock = svm.get_sysvar();
    svm.warp_to_slot(clock.slot + 1);
    svm.expire_blockhash();
}

pub fn get_token_balance(svm: &LiteSVM, token_account: &Pubkey) -> u64 {
    let account = svm.get_account(token_account).expect("account not found");
    u64::from_le_bytes(account.data[64..72].try_into().unwrap())
}

pub fn get_mint_supply(svm: &LiteSVM, mint: &Pubkey) -> u64 {
    let account = svm.get_account(mint).expect("mint account not found");
    // SPL Token Mint layout: supply is at offset 36..44
    u64::from_le_bytes(account.data[36..44].try_into().unwrap())
}

pub fn funded_keypair(svm: &mut LiteSVM) -> Keypair {
    let keypair = Keypair::new();
    svm.airdrop(&keypair.pubkey(), 10 * INITIAL_LAMPORTS)
        .unwrap();
    keypair
}

pub fn find_program_data_pda() -> Pubkey {
    Pubkey::find_program_address(&[PROGRAM_ID.as_ref()], &BPF_UPGRADEABLE_LOADER_ID).0
}

// ---------------------------------------------------------------------------
// Setup
// ---------------------------------------------------------------------------
pub fn setup() -> (LiteSVM, Keypair) {
    let mut svm = LiteSVM::new();

    let payer = Keypair::new();
    svm.airdrop(&payer.pubkey(), 100 * INITIAL_LAMPORTS)
        .unwrap();

    let program_bytes = include_bytes!("../../../../target/deploy/mint_controller.so");
    let program_data_pda = find_program_data_pda();

    // UpgradeableLoaderState::ProgramData (bincode serialization):
    //   [0..4]:   variant discriminator = 3
    //   [4..12]:  slot: u64
    //   [12]:     Option tag: 1 = Some
    //   [13..45]: upgrade_authority_address: Pubkey
    //   [45..]:   ELF bytes
    let mut program_data_account_data = vec![0u8; 45 + program_bytes.len()];
    program_data_account_data[0..4].copy_from_slice(&3u32.to_le_bytes());
    program_data_account_data[12] = 1;
    program_data_account_data[13..45].copy_from_slice(payer.pubkey().as_ref());
    program_data_account_data[45..].copy_from_slice(program_bytes);

    svm.set_account(
        program_data_pda,
        Account {
            executable: false,
            data: program_data_account_data,
            lamports: 100 * INITIAL_LAMPORTS,
            owner: BPF_UPGRADEABLE_LOADER_ID,
            rent_epoch: 0,
        },
    )
    .unwrap();

    // UpgradeableLoaderState::Program: variant 2 followed by the programdata address
    let mut program_account_data = vec![0u8; 36];
    program_account_data[0..4].copy_from_slice(&2u32.to_le_bytes());
    program_account_data[4..36].copy_from_slice(program_data_pda.as_ref());

    svm.set_account(
        PROGRAM_ID,
        Account {
            executable: true,
            data: program_account_data,
            lamports: INITIAL_LAMPORTS,
            owner: BPF_UPGRADEABLE_LOADER_ID,
            rent_epoch: 0,
        },
    )
    .unwrap();

    (svm, payer)
}

/// Roles and keys of an initialized controller
pub struct Fixture {
    pub svm: LiteSVM,
    pub payer: Keypair,
    pub admin: Keypair,
    pub bridge: Keypair,
    pub treasury: Pubkey,
    pub oracles: Vec<Keypair>,
    pub mint: Pubkey,
}

/// Initializes a controller with `signer_count` oracle signers and the given
/// quorum over a mint whose authority is already the controller PDA.
pub fn setup_initialized(signer_count: usize, quorum: u8) -> Fixture {
    let (mut svm, payer) = setup();
    let admin = funded_keypair(&mut svm);
    let bridge = funded_keypair(&mut svm);
    let treasury = Keypair::new().pubkey();
    let oracles: Vec<Keypair> = (0..signer_count).map(|_| Keypair::new()).collect();
    let signer_keys: Vec<Pubkey> = oracles.iter().map(|k| k.pubkey()).collect();

    let (controller, _) = find_controller_pda();
    let mint = create_mint(&mut svm, TOKEN_DECIMALS, &controller);

    let ix = build_initialize_ix(
        &payer.pubkey(),
        &mint,
        &admin.pubkey(),
        quorum,
        &signer_keys,
        &bridge.pubkey(),
        &treasury,
    );
    send_tx(&mut svm, &[ix], &[&payer]).expect("initialize failed");

    Fixture {
        svm,
        payer,
        admin,
        bridge,
        treasury,
        oracles,
        mint,
    }
}

// ---------------------------------------------------------------------------
// Account creation helpers
// ---------------------------------------------------------------------------
pub fn create_mint(svm: &mut LiteSVM, decimals: u8, mint_authority: &Pubkey) -> Pubkey {
    let mint = Keypair::new();

    // SPL Token Mint layout (82 bytes)
    let mut mint_data = vec![0u8; 82];
    // [0..4]:   mint_authority COption tag (Some)
    mint_data[0..4].copy_from_slice(&1u32.to_le_bytes());
    // [4..36]:  mint_authority Pubkey
    mint_data[4..36].copy_from_slice(mint_authority.as_ref());
    // [44]:     decimals
    mint_data[44] = decimals;
    // [45]:     is_initialized
    mint_data[45] = 1;

    svm.set_account(
        mint.pubkey(),
        Account {
            executable: false,
            data: mint_data,
            lamports: INITIAL_LAMPORTS,
            owner: TOKEN_PROGRAM_ID,
            rent_epoch: 0,
        },
    )
    .unwrap();

    mint.pubkey()
}

pub fn get_mint_authority_pubkey(svm: &LiteSVM, mint: &Pubkey) -> Option<Pubkey> {
    let account = svm.get_account(mint)?;
    // COption<Pubkey>: [0..4] tag, [4..36] pubkey
    let tag = u32::from_le_bytes(account.data[0..4].try_into().unwrap());
    if tag == 1 {
        Some(Pubkey::try_from(&account.data[4..36]).unwrap())
    } else {
        None
    }
}

pub fn set_mint_authority(svm: &mut LiteSVM, mint: &Pubkey, new_authority: &Pubkey) {
    let mut account = svm.get_account(mint).expect("mint not found");
    account.data[0..4].copy_from_slice(&1u32.to_le_bytes());
    account.data[4..36].copy_from_slice(new_authority.as_ref());
    svm.set_account(*mint, account).unwrap();
}

pub fn create_token_account(svm: &mut LiteSVM, mint: &Pubkey, owner: &Pubkey) -> Pubkey {
    let ata = derive_ata(owner, mint);

    // SPL Token Account layout (165 bytes)
    let mut token_data = vec![0u8; 165];
    token_data[0..32].copy_from_slice(mint.as_ref()); // mint
    token_data[32..64].copy_from_slice(owner.as_ref()); // owner
    token_data[108] = 1; // state = Initialized

    svm.set_account(
        ata,
        Account {
            executable: false,
            data: token_data,
            lamports: INITIAL_LAMPORTS,
            owner: TOKEN_PROGRAM_ID,
            rent_epoch: 0,
        },
    )
    .unwrap();

    ata
}

// ---------------------------------------------------------------------------
// Instruction builders
// ---------------------------------------------------------------------------
fn push_pubkey_vec(data: &mut Vec<u8>, keys: &[Pubkey]) {
    data.extend_from_slice(&(keys.len() as u32).to_le_bytes());
    for key in keys {
        data.extend_from_slice(key.as_ref());
    }
}

pub fn build_initialize_ix(
    payer: &Pubkey,
    mint: &Pubkey,
    admin: &Pubkey,
    quorum: u8,
    oracle_signers: &[Pubkey],
    bridge_authority: &Pubkey,
    treasury: &Pubkey,
) -> Instruction {
    let (controller, _) = find_controller_pda();

    let mut data = ix_discriminator("initialize").to_vec();
    data.extend_from_slice(admin.as_ref());
    data.push(quorum);
    push_pubkey_vec(&mut data, oracle_signers);
    data.extend_from_slice(bridge_authority.as_ref());
    data.extend_from_slice(treasury.as_ref());

    Instruction {
        program_id: PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(controller, false),
            AccountMeta::new_readonly(*mint, false),
            AccountMeta::new(*payer, true),
            AccountMeta::new_readonly(PROGRAM_ID, false),
            AccountMeta::new_readonly(find_program_data_pda(), false),
            AccountMeta::new_readonly(SYSTEM_PROGRAM_ID, false),
        ],
        data,
    }
}

pub fn build_mint_initial_supply_ix(admin: &Pubkey, mint: &Pubkey, treasury: &Pubkey) -> Instruction {
    let (controller, _) = find_controller_pda();

    Instruction {
        program_id: PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(controller, false),
            AccountMeta::new(*admin, true),
            AccountMeta::new(*mint, false),
            AccountMeta::new_readonly(*treasury, false),
            AccountMeta::new(derive_ata(treasury, mint), false),
            AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),
            AccountMeta::new_readonly(ATA_PROGRAM_ID, false),
            AccountMeta::new_readonly(SYSTEM_PROGRAM_ID, false),
        ],
        data: ix_discriminator("mint_initial_supply").to_vec(),
    }
}

pub fn build_mint_with_multisig_ix(
    mint: &Pubkey,
    recipient_token_account: &Pubkey,
    amount: u64,
    recipient: &Pubkey,
    nonce: u64,
    reason: &str,
) -> Instruction {
    let (controller, _) = find_controller_pda();

    let mut data = ix_discriminator("mint_with_multisig").to_vec();
    data.extend_from_slice(&amount.to_le_bytes());
    data.extend_from_slice(recipient.as_ref());
    data.extend_from_slice(&nonce.to_le_bytes());
    data.extend_from_slice(&(reason.len() as u32).to_le_bytes());
    data.extend_from_slice(reason.as_bytes());

    Instruction {
        program_id: PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(controller, false),
            AccountMeta::new(*mint, false),
            AccountMeta::new(*recipient_token_account, false),
            AccountMeta::new_readonly(SYSVAR_INSTRUCTIONS_ID, false),
            AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),
        ],
        data,
    }
}

pub fn build_update_oracle_signers_ix(
    admin: &Pubkey,
    new_signers: &[Pubkey],
    new_quorum: u8,
) -> Instruction {
    let (controller, _) = find_controller_pda();

    let mut data = ix_discriminator("update_oracle_signers").to_vec();
    push_pubkey_vec(&mut data, new_signers);
    data.push(new_quorum);

    Instruction {
        program_id: PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(controller, false),
            AccountMeta::new_readonly(*admin, true),
        ],
        data,
    }
}

pub fn build_update_admin_ix(admin: &Pubkey, new_admin: &Pubkey) -> Instruction {
    let (controller, _) = find_controller_pda();

    let mut data = ix_discriminator("update_admin").to_vec();
    data.extend_from_slice(new_admin.as_ref());

    Instruction {
        program_id: PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(controller, false),
            AccountMeta::new_readonly(*admin, true),
        ],
        data,
    }
}

pub fn build_bridge_mint_ix(
    bridge_authority: &Pubkey,
    mint: &Pubkey,
    recipient_token_account: &Pubkey,
    amount: u64,
    recipient: &Pubkey,
) -> Instruction {
    let (controller, _) = find_controller_pda();

    let mut data = ix_discriminator("bridge_mint").to_vec();
    data.extend_from_slice(&amount.to_le_bytes());
    data.extend_from_slice(recipient.as_ref());

    Instruction {
        program_id: PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(controller, false),
            AccountMeta::new_readonly(*bridge_authority, true),
            AccountMeta::new(*mint, false),
            AccountMeta::new(*recipient_token_account, false),
            AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),
        ],
        data,
    }
}

// ---------------------------------------------------------------------------
// Ed25519 helpers
// ---------------------------------------------------------------------------

/// Canonical oracle message: amount (u64 LE) || recipient || nonce (u64 LE) || reason
pub fn serialize_mint_message(amount: u64, recipient: &Pubkey, nonce: u64, reason: &str) -> Vec<u8> {
    let mut buf = Vec::with_capacity(48 + reason.len());
    buf.extend_from_slice(&amount.to_le_bytes());
    buf.extend_from_slice(recipient.as_ref());
    buf.extend_from_slice(&nonce.to_le_bytes());
    buf.extend_from_slice(reason.as_bytes());
    buf
}

/// Build an Ed25519 verify instruction for a single signer.
pub fn build_ed25519_verify_ix(signer: &Keypair, message: &[u8]) -> Instruction {
    build_ed25519_batch_ix(&[signer], message)
}

/// Build one Ed25519 verify instruction carrying a signature from every signer
/// over the same message.
///
/// Layout: count (u8), padding (u8), one 14-byte offsets record per signature,
/// then per signature: pubkey (32), signature (64), message.
pub fn build_ed25519_batch_ix(signers: &[&Keypair], message: &[u8]) -> Instruction {
    let header_len = 2 + 14 * signers.len();
    let entry_len = 32 + 64 + message.len();

    let mut header = Vec::with_capacity(header_len);
    header.push(signers.len() as u8);
    header.push(0u8);

    let mut body = Vec::with_capacity(entry_len * signers.len());
    for (i, signer) in signers.iter().enumerate() {
        let base = (header_len + i * entry_len) as u16;
        let public_key_offset = base;
        let signature_offset = base + 32;
        let message_data_offset = base + 96;

        header.extend_from_slice(&signature_offset.to_le_bytes());
        header.extend_from_slice(&u16::MAX.to_le_bytes());
        header.extend_from_slice(&public_key_offset.to_le_bytes());
        header.extend_from_slice(&u16::MAX.to_le_bytes());
        header.extend_from_slice(&message_data_offset.to_le_bytes());
        header.extend_from_slice(&(message.len() as u16).to_le_bytes());
        header.extend_from_slice(&u16::MAX.to_le_bytes());

        let signature = signer.sign_message(message);
        body.extend_from_slice(&signer.pubkey().to_bytes());
        body.extend_from_slice(&<[u8; 64]>::from(signature));
        body.extend_from_slice(message);
    }

    header.extend_from_slice(&body);

    Instruction {
        program_id: ED25519_PROGRAM_ID,
        accounts: vec![],
        data: header,
    }
}

/// One verify instruction per signer followed by the mint instruction.
pub fn build_signed_mint_ixs(
    signers: &[&Keypair],
    mint: &Pubkey,
    recipient_token_account: &Pubkey,
    amount: u64,
    recipient: &Pubkey,
    nonce: u64,
    reason: &str,
) -> Vec<Instruction> {
    let message = serialize_mint_message(amount, recipient, nonce, reason);
    let mut ixs: Vec<Instruction> = signers
        .iter()
        .map(|signer| build_ed25519_verify_ix(signer, &message))
        .collect();
    ixs.push(build_mint_with_multisig_ix(
        mint,
        recipient_token_account,
        amount,
        recipient,
        nonce,
        reason,
    ));
    ixs
}

// ---------------------------------------------------------------------------
// Controller deserialization
// ---------------------------------------------------------------------------
pub struct ControllerData {
    pub admin: Pubkey,
    pub mint: Pubkey,
    pub bridge_authority: Pubkey,
    pub treasury: Pubkey,
    pub quorum: u8,
    pub oracle_signers: Vec<Pubkey>,
    pub nonce: u64,
    pub total_minted: u64,
    pub max_supply: u64,
    pub initial_mint_done: bool,
    pub bump: u8,
}

pub fn read_controller(svm: &LiteSVM) -> ControllerData {
    let (controller, _) = find_controller_pda();
    let account = svm
        .get_account(&controller)
        .expect("controller account not found");
    let data = &account.data;

    let mut offset = 8; // skip Anchor discriminator

    let read_pubkey = |offset: &mut usize| {
        let key = Pubkey::try_from(&data[*offset..*offset + 32]).unwrap();
        *offset += 32;
        key
    };

    let admin = read_pubkey(&mut offset);
    let mint = read_pubkey(&mut offset);
    let bridge_authority = read_pubkey(&mut offset);
    let treasury = read_pubkey(&mut offset);

    let quorum = data[offset];
    offset += 1;

    let signer_count = u32::from_le_bytes(data[offset..offset + 4].try_into().unwrap()) as usize;
    offset += 4;
    let oracle_signers = (0..signer_count)
        .map(|_| read_pubkey(&mut offset))
        .collect();

    let nonce = u64::from_le_bytes(data[offset..offset + 8].try_into().unwrap());
    offset += 8;
    let total_minted = u64::from_le_bytes(data[offset..offset + 8].try_into().unwrap());
    offset += 8;
    let max_supply = u64::from_le_bytes(data[offset..offset + 8].try_into().unwrap());
    offset += 8;
    let initial_mint_done = data[offset] != 0;
    offset += 1;
    let bump = data[offset];

    ControllerData {
        admin,
        mint,
        bridge_authority,
        treasury,
        quorum,
        oracle_signers,
        nonce,
        total_minted,
        max_supply,
        initial_mint_done,
        bump,
    }
}
