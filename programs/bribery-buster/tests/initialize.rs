use anchor_lang::prelude::ProgramError;
use anchor_lang::{system_program, AccountDeserialize};
use bribery_buster::{instruction_builder, ErrorCode, Treasury};
use mollusk_svm::{program::keyed_account_for_system_program, result::Check, Mollusk};
use solana_sdk::{account::Account, pubkey::Pubkey};

pub fn setup_mollusk() -> Mollusk {
    std::env::set_var("SBF_OUT_DIR", "../../target/deploy");
    Mollusk::new(&bribery_buster::id(), "bribery_buster")
}

pub fn custom_error(code: ErrorCode) -> ProgramError {
    ProgramError::Custom(code.into())
}

pub fn init_treasury(
    mollusk: &Mollusk,
    authority: Pubkey,
    authority_account: &Account,
) -> (Pubkey, Account) {
    let (treasury, _bump) = bribery_buster::get_treasury_pda(&authority);

    let ix = instruction_builder::initialize(authority);

    let accounts = vec![
        (treasury, Account::new(0, 0, &system_program::ID)),
        (authority, authority_account.clone()),
        keyed_account_for_system_program(),
    ];

    let program_id = bribery_buster::id();
    let checks = vec![
        Check::success(),
        Check::account(&treasury)
            .space(Treasury::SPACE)
            .owner(&program_id)
            .build(),
        Check::all_rent_exempt(),
    ];

    let result = mollusk.process_and_validate_instruction(&ix, &accounts, &checks);

    let treasury_account = result
        .get_account(&treasury)
        .expect("Treasury account should exist");

    (treasury, treasury_account.clone())
}

pub fn read_treasury(account: &Account) -> Treasury {
    Treasury::try_deserialize(&mut account.data.as_slice())
        .expect("Failed to deserialize treasury account")
}

#[test]
fn test_initialize_success() {
    let mollusk = setup_mollusk();

    let authority = Pubkey::new_unique();
    let authority_account = Account::new(1_000_000_000, 0, &system_program::ID);

    let (treasury, treasury_account) = init_treasury(&mollusk, authority, &authority_account);

    let (expected_treasury, bump) = bribery_buster::get_treasury_pda(&authority);
    assert_eq!(treasury, expected_treasury);

    let state = read_treasury(&treasury_account);
    assert_eq!(state, Treasury::new(authority, bump));
    assert_eq!(state.total_reports, 0);
    assert_eq!(state.total_rewards_distributed, 0);
}

#[test]
fn test_initialize_twice_fails() {
    let mollusk = setup_mollusk();

    let authority = Pubkey::new_unique();
    let authority_account = Account::new(1_000_000_000, 0, &system_program::ID);

    let (treasury, treasury_account) = init_treasury(&mollusk, authority, &authority_account);

    let ix = instruction_builder::initialize(authority);

    let accounts = vec![
        (treasury, treasury_account.clone()),
        (authority, authority_account.clone()),
        keyed_account_for_system_program(),
    ];

    let checks = vec![
        Check::err(custom_error(ErrorCode::AlreadyInitialized)),
        // First initialization is untouched
        Check::account(&treasury)
            .data(&treasury_account.data)
            .lamports(treasury_account.lamports)
            .build(),
    ];

    mollusk.process_and_validate_instruction(&ix, &accounts, &checks);
}

#[test]
fn test_initialize_rejects_underived_address() {
    let mollusk = setup_mollusk();

    let authority = Pubkey::new_unique();
    let authority_account = Account::new(1_000_000_000, 0, &system_program::ID);

    // Treasury of another authority
    let (foreign_treasury, _bump) = bribery_buster::get_treasury_pda(&Pubkey::new_unique());

    let mut ix = instruction_builder::initialize(authority);
    ix.accounts[0].pubkey = foreign_treasury;

    let accounts = vec![
        (foreign_treasury, Account::new(0, 0, &system_program::ID)),
        (authority, authority_account),
        keyed_account_for_system_program(),
    ];

    let checks = vec![
        Check::err(custom_error(ErrorCode::AddressDerivationMismatch)),
        Check::account(&foreign_treasury).space(0).build(),
    ];

    mollusk.process_and_validate_instruction(&ix, &accounts, &checks);
}

#[test]
fn test_initialize_prefunded_treasury() {
    let mollusk = setup_mollusk();

    let authority = Pubkey::new_unique();
    let authority_account = Account::new(1_000_000_000, 0, &system_program::ID);

    let (treasury, bump) = bribery_buster::get_treasury_pda(&authority);

    let ix = instruction_builder::initialize(authority);

    // Someone sent lamports to the treasury address before initialization
    let accounts = vec![
        (treasury, Account::new(1_000, 0, &system_program::ID)),
        (authority, authority_account),
        keyed_account_for_system_program(),
    ];

    let program_id = bribery_buster::id();
    let checks = vec![
        Check::success(),
        Check::account(&treasury)
            .space(Treasury::SPACE)
            .owner(&program_id)
            .build(),
        Check::all_rent_exempt(),
    ];

    let result = mollusk.process_and_validate_instruction(&ix, &accounts, &checks);

    let state = read_treasury(
        result
            .get_account(&treasury)
            .expect("Treasury account should exist"),
    );
    assert_eq!(state, Treasury::new(authority, bump));
}

#[test]
fn test_initialize_requires_authority_signature() {
    let mollusk = setup_mollusk();

    let authority = Pubkey::new_unique();
    let authority_account = Account::new(1_000_000_000, 0, &system_program::ID);
    let (treasury, _bump) = bribery_buster::get_treasury_pda(&authority);

    let mut ix = instruction_builder::initialize(authority);
    ix.accounts[1].is_signer = false;

    let accounts = vec![
        (treasury, Account::new(0, 0, &system_program::ID)),
        (authority, authority_account),
        keyed_account_for_system_program(),
    ];

    let not_signer: anchor_lang::error::Error =
        anchor_lang::error::ErrorCode::AccountNotSigner.into();

    let checks = vec![
        Check::err(not_signer.into()),
        Check::account(&treasury).space(0).build(),
    ];

    mollusk.process_and_validate_instruction(&ix, &accounts, &checks);
}
