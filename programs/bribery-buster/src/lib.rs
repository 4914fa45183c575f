//! Bribery Buster program: an append-only ledger of corruption report
//! fingerprints with a per-authority treasury that pays token rewards.
use anchor_lang::prelude::*;

pub mod allocate;
pub mod amount;
pub mod instructions;
pub mod pda;
pub mod state;
pub mod transfer;

#[cfg(not(target_os = "solana"))]
pub mod instruction_builder;

use instructions::*;
pub use state::*;

#[cfg(not(any(feature = "devnet", feature = "testnet", feature = "mainnet")))]
compile_error!("one of the `devnet`, `testnet` or `mainnet` features must be enabled");

#[cfg(any(
    all(feature = "devnet", feature = "testnet"),
    all(feature = "devnet", feature = "mainnet"),
    all(feature = "testnet", feature = "mainnet"),
))]
compile_error!("only one network feature can be enabled at a time");

#[cfg(feature = "devnet")]
declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

#[cfg(feature = "testnet")]
declare_id!("bstt111111111111111111111111111111111111111");

#[cfg(feature = "mainnet")]
declare_id!("bust111111111111111111111111111111111111111");

/// Derives the treasury PDA owned by `authority`.
pub fn get_treasury_pda(authority: &Pubkey) -> (Pubkey, u8) {
    pda::find_treasury_address(authority)
}

#[program]
pub mod bribery_buster {
    use super::*;

    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        instructions::initialize(ctx)
    }

    pub fn submit_report(ctx: Context<SubmitReport>, hash: [u8; 32]) -> Result<()> {
        instructions::submit_report(ctx, hash)
    }

    pub fn reward_user(ctx: Context<RewardUser>, amount: u64) -> Result<()> {
        instructions::reward_user(ctx, amount)
    }
}

#[event]
pub struct TreasuryInitialized {
    pub treasury: Pubkey,
    pub authority: Pubkey,
    pub bump: u8,
}

#[event]
pub struct ReportSubmitted {
    pub report: Pubkey,
    pub reporter: Pubkey,
    pub treasury: Pubkey,
    pub hash: [u8; 32],
    pub total_reports: u64,
    pub timestamp: i64,
}

#[event]
pub struct UserRewarded {
    pub treasury: Pubkey,
    pub user: Pubkey,
    pub amount: u64,
    pub total_rewards_distributed: u64,
}

#[error_code]
pub enum ErrorCode {
    #[msg("Reward amount must be greater than zero")]
    InvalidAmount,
    #[msg("Treasury is already initialized for this authority")]
    AlreadyInitialized,
    #[msg("Treasury address does not match its derivation")]
    AddressDerivationMismatch,
    #[msg("Treasury account is not initialized")]
    TreasuryNotInitialized,
    #[msg("Report address is already in use")]
    ReportAddressCollision,
    #[msg("Counter overflow")]
    CounterOverflow,
    #[msg("Insufficient treasury token balance")]
    InsufficientTreasuryBalance,
    #[msg("Token transfer failed")]
    AdapterTransferFailed,
    #[msg("Treasury token account is not owned by the treasury")]
    InvalidTreasuryTokenAccount,
    #[msg("User token account is not owned by the user")]
    InvalidUserTokenAccount,
    #[msg("Token accounts do not share a mint")]
    MintMismatch,
}
