use crate::allocate::{init_account, is_unallocated};
use crate::pda::load_verified_treasury;
use crate::state::Report;
use crate::{ErrorCode, ReportSubmitted};
use anchor_lang::prelude::*;

/// Record the fingerprint of an off-chain report and count it on the treasury.
///
/// Accounts expected:
/// 1. `[signer, writable]` The fresh `report` keypair account to create.
/// 2. `[writable]` The `treasury` the report is counted against.
/// 3. `[signer, writable]` The `reporter`, who pays for the report account.
/// 4. `[]` The system program.
#[derive(Accounts)]
pub struct SubmitReport<'info> {
    #[account(
        mut,
        constraint = report.key() != reporter.key() @ ErrorCode::ReportAddressCollision
    )]
    pub report: Signer<'info>,

    /// CHECK: Loaded and re-derived from its stored authority and bump in the
    /// handler
    #[account(mut)]
    pub treasury: UncheckedAccount<'info>,

    #[account(mut)]
    pub reporter: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn submit_report(ctx: Context<SubmitReport>, hash: [u8; 32]) -> Result<()> {
    let treasury_info = ctx.accounts.treasury.to_account_info();
    let report_info = ctx.accounts.report.to_account_info();
    let reporter = ctx.accounts.reporter.key();

    let mut treasury = load_verified_treasury(&treasury_info)?;
    let total_reports = treasury.record_report()?;

    require!(
        is_unallocated(&report_info),
        ErrorCode::ReportAddressCollision
    );

    let timestamp = Clock::get()?.unix_timestamp;
    let report = Report::new(reporter, treasury_info.key(), hash, timestamp);

    init_account(
        &ctx.accounts.reporter.to_account_info(),
        &report_info,
        &ctx.accounts.system_program.to_account_info(),
        Report::SPACE,
        &[],
    )?;
    report.store(&report_info)?;
    treasury.store(&treasury_info)?;

    msg!("Report submitted by: {}", reporter);

    emit!(ReportSubmitted {
        report: report_info.key(),
        reporter,
        treasury: treasury_info.key(),
        hash,
        total_reports,
        timestamp,
    });

    Ok(())
}
