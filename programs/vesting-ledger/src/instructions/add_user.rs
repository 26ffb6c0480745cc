use anchor_lang::prelude::*;

use crate::constants::{LEDGER_STATE_SEED, ROSTER_SEED};
use crate::distribution;
use crate::state::{LedgerState, Roster};

pub fn add_user(
    ctx: Context<AddUser>,
    unlock_percent: u8,
    beneficiary: Pubkey,
    period_months: u16,
    planned_total: u64,
) -> Result<()> {
    let st = &ctx.accounts.ledger_state;
    let mut roster = ctx.accounts.roster.load_mut()?;

    let index = distribution::add_user(
        st,
        &mut roster,
        &ctx.accounts.admin.key(),
        unlock_percent,
        beneficiary,
        period_months,
        planned_total,
    )?;

    emit!(UserAdded {
        index: index as u32,
        beneficiary,
        unlock_percent,
        period_months,
        planned_total,
        active_count: roster.active_count(),
    });

    Ok(())
}

#[derive(Accounts)]
pub struct AddUser<'info> {
    #[account(seeds = [LEDGER_STATE_SEED], bump)]
    pub ledger_state: Account<'info, LedgerState>,

    #[account(
        mut,
        seeds = [ROSTER_SEED, ledger_state.key().as_ref()],
        bump
    )]
    pub roster: AccountLoader<'info, Roster>,

    pub admin: Signer<'info>,
}

#[event]
pub struct UserAdded {
    pub index: u32,
    pub beneficiary: Pubkey,
    pub unlock_percent: u8,
    pub period_months: u16,
    pub planned_total: u64,
    pub active_count: u32,
}
