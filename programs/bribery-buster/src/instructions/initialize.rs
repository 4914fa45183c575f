use crate::allocate::{init_account, is_unallocated};
use crate::pda::find_treasury_address;
use crate::state::Treasury;
use crate::{ErrorCode, TreasuryInitialized};
use anchor_lang::prelude::*;

/// Create the treasury PDA of the signing authority.
///
/// Accounts expected:
/// 1. `[writable]` The `treasury` PDA, derived from `["treasury", authority]`.
/// 2. `[signer, writable]` The `authority` that administers the treasury and pays for it.
/// 3. `[]` The system program.
#[derive(Accounts)]
pub struct Initialize<'info> {
    /// CHECK: Derivation and emptiness are checked in the handler so both
    /// failures report their own error code
    #[account(mut)]
    pub treasury: UncheckedAccount<'info>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
    let authority = ctx.accounts.authority.key();
    let treasury_info = ctx.accounts.treasury.to_account_info();

    let (expected, bump) = find_treasury_address(&authority);
    require_keys_eq!(
        treasury_info.key(),
        expected,
        ErrorCode::AddressDerivationMismatch
    );
    require!(
        is_unallocated(&treasury_info),
        ErrorCode::AlreadyInitialized
    );

    let treasury = Treasury::new(authority, bump);
    let seeds = treasury.signer_seeds();
    let signer_seeds: &[&[&[u8]]] = &[&seeds[..]];

    init_account(
        &ctx.accounts.authority.to_account_info(),
        &treasury_info,
        &ctx.accounts.system_program.to_account_info(),
        Treasury::SPACE,
        signer_seeds,
    )?;
    treasury.store(&treasury_info)?;

    msg!("Treasury initialized with authority: {}", authority);

    emit!(TreasuryInitialized {
        treasury: treasury_info.key(),
        authority,
        bump,
    });

    Ok(())
}
