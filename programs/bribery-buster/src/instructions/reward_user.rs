use crate::amount::split_base_units;
use crate::pda::load_verified_treasury;
use crate::state::Treasury;
use crate::transfer::{SplTokenTransfer, TokenTransferAdapter};
use crate::{ErrorCode, UserRewarded};
use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

/// Pay a reward out of the treasury's token balance.
///
/// Accounts expected:
/// 1. `[writable]` The `treasury`, which signs the transfer as a PDA.
/// 2. `[writable]` The `treasury_token_account` owned by the treasury.
/// 3. `[writable]` The `user_token_account` owned by `user`.
/// 4. `[signer]` The `user` receiving the reward.
/// 5. `[]` The SPL Token program.
#[derive(Accounts)]
pub struct RewardUser<'info> {
    /// CHECK: Loaded and re-derived from its stored authority and bump in the
    /// handler
    #[account(mut)]
    pub treasury: UncheckedAccount<'info>,

    #[account(
        mut,
        constraint = treasury_token_account.owner == treasury.key() @ ErrorCode::InvalidTreasuryTokenAccount,
    )]
    pub treasury_token_account: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = user_token_account.owner == user.key() @ ErrorCode::InvalidUserTokenAccount,
        constraint = user_token_account.mint == treasury_token_account.mint @ ErrorCode::MintMismatch,
    )]
    pub user_token_account: Account<'info, TokenAccount>,

    pub user: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

pub fn reward_user(ctx: Context<RewardUser>, amount: u64) -> Result<()> {
    let treasury_info = ctx.accounts.treasury.to_account_info();
    let token_program = ctx.accounts.token_program.to_account_info();
    let user = ctx.accounts.user.key();

    let mut treasury = load_verified_treasury(&treasury_info)?;

    let adapter = SplTokenTransfer {
        token_program: &token_program,
        from: &ctx.accounts.treasury_token_account,
        to: &ctx.accounts.user_token_account,
        authority: &treasury_info,
    };
    let total_rewards_distributed = pay_reward(&mut treasury, &adapter, amount)?;
    treasury.store(&treasury_info)?;

    let (whole, fraction) = split_base_units(amount);
    msg!("Rewarded {}.{:09} tokens to user: {}", whole, fraction, user);

    emit!(UserRewarded {
        treasury: treasury_info.key(),
        user,
        amount,
        total_rewards_distributed,
    });

    Ok(())
}

/// Moves `amount` through `adapter` and books it on the treasury. The
/// accumulator is checked before the transfer and written only after it
/// succeeds.
pub(crate) fn pay_reward(
    treasury: &mut Treasury,
    adapter: &impl TokenTransferAdapter,
    amount: u64,
) -> Result<u64> {
    require!(amount > 0, ErrorCode::InvalidAmount);

    let total = treasury.checked_reward_total(amount)?;
    let seeds = treasury.signer_seeds();
    adapter.transfer(amount, &seeds)?;

    treasury.total_rewards_distributed = total;
    Ok(total)
}
