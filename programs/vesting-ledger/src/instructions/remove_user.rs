use anchor_lang::prelude::*;

use crate::constants::{LEDGER_STATE_SEED, ROSTER_SEED};
use crate::distribution;
use crate::state::{LedgerState, Roster};

pub fn remove_user(ctx: Context<RemoveUser>, index: u32) -> Result<()> {
    let st = &ctx.accounts.ledger_state;
    let mut roster = ctx.accounts.roster.load_mut()?;

    let removed = distribution::remove_user(
        st,
        &mut roster,
        &ctx.accounts.admin.key(),
        index as usize,
    )?;

    emit!(UserRemoved {
        admin: st.admin,
        index,
        beneficiary: removed.beneficiary,
        claimed_total: removed.claimed_total,
        active_count: roster.active_count(),
    });
    Ok(())
}

#[derive(Accounts)]
pub struct RemoveUser<'info> {
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
pub struct UserRemoved {
    pub admin: Pubkey,
    pub index: u32,
    pub beneficiary: Pubkey,
    pub claimed_total: u64,
    pub active_count: u32,
}
