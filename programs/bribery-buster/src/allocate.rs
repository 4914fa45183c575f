//! System-program helpers for creating the accounts this program owns.
use anchor_lang::prelude::*;
use anchor_lang::system_program::{self, Allocate, Assign, CreateAccount, Transfer};

/// An address is free when the system program still owns it and it carries no
/// data. It may hold lamports.
pub fn is_unallocated(info: &AccountInfo<'_>) -> bool {
    info.owner == &system_program::ID && info.data_is_empty()
}

/// Creates a rent-exempt account of `space` bytes at `target`, owned by this
/// program and paid for by `payer`.
///
/// `signer_seeds` must be the PDA seeds when `target` is a program address;
/// keypair accounts sign the transaction themselves and pass no seeds.
///
/// An address that already holds lamports cannot go through
/// `create_account`, so it is topped up, allocated and assigned instead.
pub fn init_account<'info>(
    payer: &AccountInfo<'info>,
    target: &AccountInfo<'info>,
    system_program_info: &AccountInfo<'info>,
    space: usize,
    signer_seeds: &[&[&[u8]]],
) -> Result<()> {
    let required = Rent::get()?.minimum_balance(space);
    let current = target.lamports();

    if current == 0 {
        return system_program::create_account(
            CpiContext::new_with_signer(
                system_program_info.clone(),
                CreateAccount {
                    from: payer.clone(),
                    to: target.clone(),
                },
                signer_seeds,
            ),
            required,
            space as u64,
            &crate::ID,
        );
    }

    let top_up = required.saturating_sub(current);
    if top_up > 0 {
        system_program::transfer(
            CpiContext::new(
                system_program_info.clone(),
                Transfer {
                    from: payer.clone(),
                    to: target.clone(),
                },
            ),
            top_up,
        )?;
    }

    system_program::allocate(
        CpiContext::new_with_signer(
            system_program_info.clone(),
            Allocate {
                account_to_allocate: target.clone(),
            },
            signer_seeds,
        ),
        space as u64,
    )?;

    system_program::assign(
        CpiContext::new_with_signer(
            system_program_info.clone(),
            Assign {
                account_to_assign: target.clone(),
            },
            signer_seeds,
        ),
        &crate::ID,
    )
}
