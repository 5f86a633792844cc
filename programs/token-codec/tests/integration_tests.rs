//! Integration Tests for SPL Token Codec
//!
//! End-to-end scenarios across the public API: building create
//! instructions, handing them to the message compiler, and round-tripping
//! raw account data.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p spl_token_codec
//! ```

use solana_program::{instruction::AccountMeta, pubkey::Pubkey};
use solana_sdk::message::Message;
use spl_token_codec::{
    address::{associated_token_seeds, AddressDeriver},
    create_idempotent_instruction, create_instruction,
    ids::{ASSOCIATED_TOKEN_PROGRAM_ID, RENT_SYSVAR_ID, SYSTEM_PROGRAM_ID, TOKEN_PROGRAM_ID},
    Account, AccountState, AssociatedTokenInstruction, CodecError, CreateBuilder, Mint,
    Multisig, OptionalField, Pack, ProgramAddressDeriver, MAX_SIGNERS,
};

// =============================================================================
// TEST SETUP HELPERS
// =============================================================================

struct Parties {
    payer: Pubkey,
    wallet: Pubkey,
    mint: Pubkey,
    token_program: Pubkey,
}

fn parties() -> Parties {
    Parties {
        payer: Pubkey::new_unique(),
        wallet: Pubkey::new_unique(),
        mint: Pubkey::new_unique(),
        token_program: Pubkey::new_unique(),
    }
}

fn expected_address(wallet: &Pubkey, mint: &Pubkey, token_program: &Pubkey) -> Pubkey {
    let seeds = associated_token_seeds(wallet, mint, token_program);
    ProgramAddressDeriver.derive(&seeds, &ASSOCIATED_TOKEN_PROGRAM_ID).0
}

// =============================================================================
// INSTRUCTION BUILDERS
// =============================================================================

#[test]
fn test_create_end_to_end() {
    let p = parties();

    let built = create_instruction(&p.payer, &p.wallet, &p.mint, &p.token_program)
        .validate_and_build()
        .unwrap();

    assert_eq!(built.kind(), AssociatedTokenInstruction::Create);
    assert_eq!(built.discriminant(), 0);
    assert!(built.params().is_empty());
    assert!(built.accounts().is_complete());

    let ix = built.into_instruction().unwrap();
    assert_eq!(ix.program_id, ASSOCIATED_TOKEN_PROGRAM_ID);
    assert_eq!(ix.data, vec![0]);
    assert_eq!(
        ix.accounts,
        vec![
            AccountMeta::new(p.payer, true),
            AccountMeta::new(expected_address(&p.wallet, &p.mint, &p.token_program), false),
            AccountMeta::new_readonly(p.wallet, false),
            AccountMeta::new_readonly(p.mint, false),
            AccountMeta::new_readonly(SYSTEM_PROGRAM_ID, false),
            AccountMeta::new_readonly(p.token_program, false),
            AccountMeta::new_readonly(RENT_SYSVAR_ID, false),
        ]
    );
}

#[test]
fn test_idempotent_matches_create_except_discriminant() {
    let p = parties();

    let strict = create_instruction(&p.payer, &p.wallet, &p.mint, &TOKEN_PROGRAM_ID)
        .validate_and_build()
        .unwrap()
        .into_instruction()
        .unwrap();
    let idempotent = create_idempotent_instruction(&p.payer, &p.wallet, &p.mint, &TOKEN_PROGRAM_ID)
        .validate_and_build()
        .unwrap()
        .into_instruction()
        .unwrap();

    assert_eq!(strict.accounts, idempotent.accounts);
    assert_eq!(strict.program_id, idempotent.program_id);
    assert_eq!(strict.data, vec![0]);
    assert_eq!(idempotent.data, vec![1]);
    assert_eq!(
        AssociatedTokenInstruction::unpack(&idempotent.data).unwrap(),
        AssociatedTokenInstruction::CreateIdempotent
    );
}

#[test]
fn test_instruction_compiles_into_message() {
    let p = parties();
    let ix = create_idempotent_instruction(&p.payer, &p.wallet, &p.mint, &TOKEN_PROGRAM_ID)
        .validate_and_build()
        .unwrap()
        .into_instruction()
        .unwrap();

    let message = Message::new(&[ix], Some(&p.payer));

    // 7 accounts + the program id
    assert_eq!(message.account_keys.len(), 8);
    assert_eq!(message.account_keys[0], p.payer);
    assert_eq!(message.header.num_required_signatures, 1);
    assert_eq!(message.header.num_readonly_signed_accounts, 0);
    // wallet, mint, system, token, rent, associated token program
    assert_eq!(message.header.num_readonly_unsigned_accounts, 6);
}

#[test]
fn test_missing_roles_are_reported_in_index_order() {
    let p = parties();

    let missing_payer = CreateBuilder::create()
        .wallet(p.wallet)
        .mint(p.mint)
        .validate_and_build();
    assert_eq!(missing_payer, Err(CodecError::MissingAccountRole { index: 0 }));

    let mut missing_program = create_instruction(&p.payer, &p.wallet, &p.mint, &p.token_program);
    missing_program.accounts_mut().token_program = None;
    assert_eq!(
        missing_program.validate_and_build(),
        Err(CodecError::MissingAccountRole { index: 5 })
    );
}

#[test]
fn test_lenient_build_then_conversion_fails() {
    let p = parties();
    let built = CreateBuilder::create_idempotent()
        .wallet(p.wallet)
        .mint(p.mint)
        .build();

    assert_eq!(built.discriminant(), 1);
    assert_eq!(
        built.accounts().associated_token_account.as_ref().unwrap().pubkey,
        expected_address(&p.wallet, &p.mint, &TOKEN_PROGRAM_ID)
    );
    assert_eq!(
        built.into_instruction(),
        Err(CodecError::MissingAccountRole { index: 0 })
    );
}

// =============================================================================
// STATE RECORDS
// =============================================================================

#[test]
fn test_token_account_for_derived_address() {
    let p = parties();
    let built = create_instruction(&p.payer, &p.wallet, &p.mint, &TOKEN_PROGRAM_ID)
        .validate_and_build()
        .unwrap();
    let ata = built.accounts().associated_token_account.as_ref().unwrap().pubkey;
    assert_eq!(ata, spl_token_codec::get_associated_token_address(&p.wallet, &p.mint));

    // what the token program would store at that address
    let account = Account {
        mint: p.mint,
        owner: p.wallet,
        amount: 42,
        delegate: OptionalField::none(),
        state: AccountState::Initialized,
        is_native: OptionalField::none(),
        delegated_amount: 0,
        close_authority: OptionalField::none(),
    };
    let data = account.to_vec().unwrap();
    assert_eq!(data.len(), Account::LEN);

    let decoded = Account::unpack_from_slice(&data).unwrap();
    assert_eq!(decoded.owner, p.wallet);
    assert_eq!(decoded.mint, p.mint);
    assert_eq!(decoded, account);
}

#[test]
fn test_raw_records_reencode_exactly() {
    let mut mint_bytes = [0u8; Mint::LEN];
    mint_bytes[0] = 1;
    mint_bytes[4..36].copy_from_slice(Pubkey::new_unique().as_ref());
    mint_bytes[36..44].copy_from_slice(&7_000u64.to_le_bytes());
    mint_bytes[44] = 6;
    mint_bytes[45] = 1;
    let mint = Mint::unpack_from_slice(&mint_bytes).unwrap();
    assert_eq!(mint.to_vec().unwrap(), mint_bytes.to_vec());

    let mut account_bytes = [0u8; Account::LEN];
    account_bytes[0..32].copy_from_slice(Pubkey::new_unique().as_ref());
    account_bytes[108] = 2;
    account_bytes[109] = 1;
    account_bytes[113..121].copy_from_slice(&2_039_280u64.to_le_bytes());
    let account = Account::unpack_from_slice(&account_bytes).unwrap();
    assert!(account.is_frozen());
    assert_eq!(account.is_native.as_ref(), Some(&2_039_280));
    assert_eq!(account.to_vec().unwrap(), account_bytes.to_vec());

    let mut multisig_bytes = [0u8; Multisig::LEN];
    multisig_bytes[0] = 1;
    multisig_bytes[1] = 2;
    multisig_bytes[2] = 1;
    multisig_bytes[3..35].copy_from_slice(Pubkey::new_unique().as_ref());
    multisig_bytes[35..67].copy_from_slice(Pubkey::new_unique().as_ref());
    let multisig = Multisig::unpack_from_slice(&multisig_bytes).unwrap();
    assert_eq!(multisig.signers().len(), 2);
    assert!(multisig.check_config().is_ok());
    assert_eq!(multisig.to_vec().unwrap(), multisig_bytes.to_vec());
    assert_eq!(Multisig::LEN, 3 + 32 * MAX_SIGNERS);
}

#[test]
fn test_truncated_records_fail_with_eof() {
    let mint_bytes = Mint::default().to_vec().unwrap();
    let account_bytes = Account::default().to_vec().unwrap();
    let multisig_bytes = Multisig::default().to_vec().unwrap();

    assert!(matches!(
        Mint::unpack(&mint_bytes[..Mint::LEN - 1]),
        Err(CodecError::UnexpectedEof { .. })
    ));
    assert!(matches!(
        Account::unpack(&account_bytes[..Account::LEN - 1]),
        Err(CodecError::UnexpectedEof { .. })
    ));
    assert!(matches!(
        Multisig::unpack(&multisig_bytes[..Multisig::LEN - 1]),
        Err(CodecError::UnexpectedEof { .. })
    ));
}

#[test]
fn test_presence_flag_two_is_absent() {
    let mut mint_bytes = Mint {
        mint_authority: OptionalField::some(Pubkey::new_unique()),
        supply: 1,
        decimals: 0,
        is_initialized: true,
        freeze_authority: OptionalField::some(Pubkey::new_unique()),
    }
    .to_vec()
    .unwrap();
    mint_bytes[46] = 2;

    let mint = Mint::unpack(&mint_bytes).unwrap();
    assert!(mint.mint_authority.is_some());
    assert!(mint.freeze_authority.is_none());
}
