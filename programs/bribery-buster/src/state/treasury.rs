use crate::ErrorCode;
use anchor_lang::prelude::*;

/// Per-authority treasury. Holds the aggregate counters and signs token
/// transfers out of the balances it owns.
#[account]
#[derive(InitSpace, PartialEq, Eq, Debug)]
pub struct Treasury {
    /// Administrator of the treasury, fixed at creation.
    pub authority: Pubkey,
    /// The bump seed used to derive the PDA, ensuring the address is valid.
    pub bump: u8,
    /// Number of reports submitted against this treasury.
    pub total_reports: u64,
    /// Sum of all rewards paid out, in base units.
    pub total_rewards_distributed: u64,
}

impl Treasury {
    pub const SEED_PREFIX: &'static [u8] = b"treasury";
    pub const SPACE: usize = Self::DISCRIMINATOR.len() + Self::INIT_SPACE;

    pub fn new(authority: Pubkey, bump: u8) -> Self {
        Self {
            authority,
            bump,
            total_reports: 0,
            total_rewards_distributed: 0,
        }
    }

    /// Seeds the program signs with when acting as the treasury PDA.
    pub fn signer_seeds(&self) -> [&[u8]; 3] {
        [
            Self::SEED_PREFIX,
            self.authority.as_ref(),
            core::slice::from_ref(&self.bump),
        ]
    }

    /// Counts one more report and returns the new total.
    pub fn record_report(&mut self) -> Result<u64> {
        self.total_reports = self
            .total_reports
            .checked_add(1)
            .ok_or_else(|| error!(ErrorCode::CounterOverflow))?;
        Ok(self.total_reports)
    }

    /// Rewards total after paying out `amount`. Does not mutate, so callers
    /// can reject an overflowing payout before moving any tokens.
    pub fn checked_reward_total(&self, amount: u64) -> Result<u64> {
        self.total_rewards_distributed
            .checked_add(amount)
            .ok_or_else(|| error!(ErrorCode::CounterOverflow))
    }

    /// Reads a treasury from an account owned by this program.
    pub fn load(info: &AccountInfo<'_>) -> Result<Self> {
        if info.owner != &crate::ID {
            msg!("Treasury {} is not owned by the program", info.key);
            return err!(ErrorCode::TreasuryNotInitialized);
        }

        let data = info.try_borrow_data()?;
        if !data.starts_with(Self::DISCRIMINATOR) {
            return err!(ErrorCode::TreasuryNotInitialized);
        }

        Self::try_deserialize(&mut &data[..]).map_err(|_| error!(ErrorCode::TreasuryNotInitialized))
    }

    pub fn store(&self, info: &AccountInfo<'_>) -> Result<()> {
        let mut data = info.try_borrow_mut_data()?;
        let mut writer: &mut [u8] = &mut data[..];
        self.try_serialize(&mut writer)
    }
}
