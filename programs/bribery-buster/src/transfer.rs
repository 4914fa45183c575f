//! Token movement out of treasury-owned balances.
//!
//! The program never does balance accounting itself. It hands the movement to
//! a [`TokenTransferAdapter`] and only decides how a failed movement is
//! reported.
use crate::ErrorCode;
use anchor_lang::prelude::*;
use anchor_spl::token::{self, spl_token::error::TokenError, TokenAccount};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransferError {
    InsufficientFunds { available: u64, requested: u64 },
    Other(ProgramError),
}

impl From<TransferError> for Error {
    fn from(err: TransferError) -> Self {
        match err {
            TransferError::InsufficientFunds {
                available,
                requested,
            } => {
                msg!(
                    "Treasury balance {} is below requested amount {}",
                    available,
                    requested
                );
                error!(ErrorCode::InsufficientTreasuryBalance)
            }
            TransferError::Other(err) => {
                msg!("Token transfer failed: {}", err);
                error!(ErrorCode::AdapterTransferFailed)
            }
        }
    }
}

pub trait TokenTransferAdapter {
    /// Moves `amount` base units, signing as the PDA described by
    /// `authority_seeds`.
    fn transfer(
        &self,
        amount: u64,
        authority_seeds: &[&[u8]],
    ) -> core::result::Result<(), TransferError>;
}

/// SPL Token `transfer` CPI from a PDA-owned token account.
pub struct SplTokenTransfer<'a, 'info> {
    pub token_program: &'a AccountInfo<'info>,
    pub from: &'a Account<'info, TokenAccount>,
    pub to: &'a Account<'info, TokenAccount>,
    pub authority: &'a AccountInfo<'info>,
}

impl TokenTransferAdapter for SplTokenTransfer<'_, '_> {
    fn transfer(
        &self,
        amount: u64,
        authority_seeds: &[&[u8]],
    ) -> core::result::Result<(), TransferError> {
        // A failing CPI aborts the transaction, so the outcomes the caller
        // must tell apart are detected before invoking the token program.
        if self.from.amount < amount {
            return Err(TransferError::InsufficientFunds {
                available: self.from.amount,
                requested: amount,
            });
        }
        if self.from.is_frozen() || self.to.is_frozen() {
            return Err(TransferError::Other(TokenError::AccountFrozen.into()));
        }

        let signer_seeds: &[&[&[u8]]] = &[authority_seeds];
        let cpi_accounts = token::Transfer {
            from: self.from.to_account_info(),
            to: self.to.to_account_info(),
            authority: self.authority.clone(),
        };
        let cpi_context =
            CpiContext::new_with_signer(self.token_program.clone(), cpi_accounts, signer_seeds);

        token::transfer(cpi_context, amount).map_err(|err| TransferError::Other(err.into()))
    }
}
