//! Instruction builders for off-chain callers.
use anchor_lang::prelude::*;
use anchor_lang::solana_program::hash::hash;
use anchor_lang::solana_program::instruction::Instruction;
use anchor_lang::{system_program, InstructionData, ToAccountMetas};

/// Fingerprint submitted on chain for an off-chain report payload.
pub fn report_fingerprint(content: &[u8]) -> [u8; 32] {
    hash(content).to_bytes()
}

pub fn initialize(authority: Pubkey) -> Instruction {
    let (treasury, _) = crate::get_treasury_pda(&authority);

    Instruction {
        program_id: crate::ID,
        accounts: crate::accounts::Initialize {
            treasury,
            authority,
            system_program: system_program::ID,
        }
        .to_account_metas(None),
        data: crate::instruction::Initialize {}.data(),
    }
}

/// `report` must be a fresh keypair that co-signs the transaction.
pub fn submit_report(
    report: Pubkey,
    treasury_authority: Pubkey,
    reporter: Pubkey,
    hash: [u8; 32],
) -> Instruction {
    let (treasury, _) = crate::get_treasury_pda(&treasury_authority);

    Instruction {
        program_id: crate::ID,
        accounts: crate::accounts::SubmitReport {
            report,
            treasury,
            reporter,
            system_program: system_program::ID,
        }
        .to_account_metas(None),
        data: crate::instruction::SubmitReport { hash }.data(),
    }
}

pub fn reward_user(
    treasury_authority: Pubkey,
    treasury_token_account: Pubkey,
    user_token_account: Pubkey,
    user: Pubkey,
    amount: u64,
) -> Instruction {
    let (treasury, _) = crate::get_treasury_pda(&treasury_authority);

    Instruction {
        program_id: crate::ID,
        accounts: crate::accounts::RewardUser {
            treasury,
            treasury_token_account,
            user_token_account,
            user,
            token_program: anchor_spl::token::ID,
        }
        .to_account_metas(None),
        data: crate::instruction::RewardUser { amount }.data(),
    }
}
