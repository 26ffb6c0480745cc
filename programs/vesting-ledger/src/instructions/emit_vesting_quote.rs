use anchor_lang::prelude::*;

use crate::constants::{LEDGER_STATE_SEED, ROSTER_SEED};
use crate::distribution;
use crate::state::{LedgerState, Roster};

pub fn emit_vesting_quote(ctx: Context<EmitVestingQuote>, index: u32) -> Result<()> {
    let st = &ctx.accounts.ledger_state;
    let now = Clock::get()?.unix_timestamp;
    let roster = ctx.accounts.roster.load()?;

    let entry = distribution::get_entry(&roster, index as usize)?;
    let quote = distribution::quote_entry(st, &roster, index as usize, now)?;
    let snapshot = distribution::ledger_snapshot(st, &roster);

    emit!(VestingQuote {
        index,
        beneficiary: entry.beneficiary,
        active: quote.active,
        vested_amount: quote.vested,
        claimed_amount: quote.claimed,
        pending_amount: quote.pending,
        total_issued: snapshot.total_issued,
        active_count: snapshot.active_count,
        timestamp: now,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct EmitVestingQuote<'info> {
    #[account(seeds = [LEDGER_STATE_SEED], bump)]
    pub ledger_state: Account<'info, LedgerState>,

    #[account(seeds = [ROSTER_SEED, ledger_state.key().as_ref()], bump)]
    pub roster: AccountLoader<'info, Roster>,
}

#[event]
pub struct VestingQuote {
    pub index: u32,
    pub beneficiary: Pubkey,
    pub active: bool,
    pub vested_amount: u64,
    pub claimed_amount: u64,
    pub pending_amount: u64,
    pub total_issued: u64,
    pub active_count: u32,
    pub timestamp: i64,
}
