use anchor_lang::prelude::*;

/// A submitted corruption report. Only the fingerprint of the off-chain
/// payload is kept on chain.
#[account]
#[derive(InitSpace, PartialEq, Eq, Debug)]
pub struct Report {
    /// Signer who submitted and paid for the report.
    pub reporter: Pubkey,
    /// Treasury whose `total_reports` counted this report.
    pub treasury: Pubkey,
    /// SHA-256 fingerprint of the report payload.
    pub hash: [u8; 32],
    /// Unix timestamp at submission.
    pub timestamp: i64,
    /// Set by the off-chain moderation flow, never by this program.
    pub verified: bool,
}

impl Report {
    pub const SPACE: usize = Self::DISCRIMINATOR.len() + Self::INIT_SPACE;

    pub fn new(reporter: Pubkey, treasury: Pubkey, hash: [u8; 32], timestamp: i64) -> Self {
        Self {
            reporter,
            treasury,
            hash,
            timestamp,
            verified: false,
        }
    }

    pub fn store(&self, info: &AccountInfo<'_>) -> Result<()> {
        let mut data = info.try_borrow_mut_data()?;
        let mut writer: &mut [u8] = &mut data[..];
        self.try_serialize(&mut writer)
    }
}
