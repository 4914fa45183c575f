//! Treasury address derivation and re-verification.
use crate::state::Treasury;
use crate::ErrorCode;
use anchor_lang::prelude::*;

/// Derives the treasury address for `authority` together with its canonical
/// bump.
pub fn find_treasury_address(authority: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[Treasury::SEED_PREFIX, authority.as_ref()], &crate::ID)
}

/// Checks that `address` is the treasury PDA of `authority` under `bump`.
pub fn verify_treasury_address(address: &Pubkey, authority: &Pubkey, bump: u8) -> Result<()> {
    let derived = Pubkey::create_program_address(
        &[Treasury::SEED_PREFIX, authority.as_ref(), &[bump]],
        &crate::ID,
    )
    .map_err(|_| error!(ErrorCode::AddressDerivationMismatch))?;

    if derived != *address {
        msg!(
            "Treasury address mismatch. Expected: {}, Got: {}",
            derived,
            address
        );
        return err!(ErrorCode::AddressDerivationMismatch);
    }

    Ok(())
}

/// Loads the treasury stored at `info` and re-verifies that the account is
/// the one derived from the stored authority and bump.
pub fn load_verified_treasury(info: &AccountInfo<'_>) -> Result<Treasury> {
    let treasury = Treasury::load(info)?;
    verify_treasury_address(info.key, &treasury.authority, treasury.bump)?;
    Ok(treasury)
}
