//! Ledger operations. Every mutating operation is admin-gated and either
//! commits completely or leaves ledger and roster untouched.

use anchor_lang::prelude::*;

use crate::custody::CustodyBackend;
use crate::error::VestingError;
use crate::state::{BeneficiaryEntry, LedgerState, Roster};
use crate::vesting::{self, EntryQuote};

/// Result of a claim. `amount == 0` means nothing was due and nothing moved.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClaimReceipt {
    pub index: usize,
    pub beneficiary: Pubkey,
    pub amount: u64,
    pub claimed_total: u64,
    pub total_issued: u64,
}

/// Read-only view of the ledger singleton plus roster occupancy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LedgerSnapshot {
    pub admin: Pubkey,
    pub mint: Pubkey,
    pub genesis_time: i64,
    pub custody_pool: Pubkey,
    pub custody_authority: Pubkey,
    pub total_issued: u64,
    pub active_count: u32,
    pub roster_len: u32,
}

#[allow(clippy::too_many_arguments)]
pub fn initialize(
    ledger: &mut LedgerState,
    roster: &mut Roster,
    admin: Pubkey,
    mint: Pubkey,
    genesis_time: i64,
    custody_pool: Pubkey,
    custody_authority: Pubkey,
    custody_authority_bump: u8,
) -> Result<()> {
    ledger.initialize(
        admin,
        mint,
        genesis_time,
        custody_pool,
        custody_authority,
        custody_authority_bump,
    )?;
    roster.len = 0;
    roster.active_count = 0;
    roster.retired_claimed = 0;
    Ok(())
}

pub fn add_user(
    ledger: &LedgerState,
    roster: &mut Roster,
    caller: &Pubkey,
    unlock_percent: u8,
    beneficiary: Pubkey,
    period_months: u16,
    planned_total: u64,
) -> Result<usize> {
    ledger.authorize(caller)?;
    let index = roster.add(unlock_percent, beneficiary, period_months, planned_total)?;
    Ok(index)
}

/// Returns the removed entry as it stood after deactivation.
pub fn remove_user(
    ledger: &LedgerState,
    roster: &mut Roster,
    caller: &Pubkey,
    index: usize,
) -> Result<BeneficiaryEntry> {
    ledger.authorize(caller)?;
    roster.remove(index)?;
    Ok(*roster.get(index)?)
}

#[allow(clippy::too_many_arguments)]
pub fn claim<C: CustodyBackend>(
    ledger: &mut LedgerState,
    roster: &mut Roster,
    caller: &Pubkey,
    index: usize,
    beneficiary: &Pubkey,
    payout_account: &Pubkey,
    now_ts: i64,
    custody: &mut C,
) -> Result<ClaimReceipt> {
    ledger.authorize(caller)?;

    let entry = *roster.get(index)?;
    require_keys_eq!(entry.beneficiary, *beneficiary, VestingError::IdentityMismatch);
    require_keys_eq!(
        custody.canonical_account_for(beneficiary),
        *payout_account,
        VestingError::InvalidDestination
    );

    let delta = vesting::pending(&entry, ledger.genesis_time, now_ts)?;
    if delta == 0 {
        msg!("Nothing claimable for index {}", index);
        return Ok(ClaimReceipt {
            index,
            beneficiary: entry.beneficiary,
            amount: 0,
            claimed_total: entry.claimed_total,
            total_issued: ledger.total_issued,
        });
    }
    msg!("Can claim now {}", delta);

    // Both totals are settled before any value moves.
    let claimed_total = entry
        .claimed_total
        .checked_add(delta)
        .ok_or(VestingError::ArithmeticOverflow)?;
    require!(claimed_total <= entry.planned_total, VestingError::ArithmeticOverflow);
    let total_issued = ledger.issued_after(delta)?;

    require!(custody.pool_balance() >= delta, VestingError::InsufficientCustody);
    custody.transfer(payout_account, delta)?;

    roster.get_mut(index)?.claimed_total = claimed_total;
    ledger.total_issued = total_issued;

    Ok(ClaimReceipt {
        index,
        beneficiary: entry.beneficiary,
        amount: delta,
        claimed_total,
        total_issued,
    })
}

pub fn get_entry(roster: &Roster, index: usize) -> Result<BeneficiaryEntry> {
    Ok(*roster.get(index)?)
}

pub fn quote_entry(
    ledger: &LedgerState,
    roster: &Roster,
    index: usize,
    now_ts: i64,
) -> Result<EntryQuote> {
    let entry = roster.get(index)?;
    Ok(vesting::quote(entry, ledger.genesis_time, now_ts)?)
}

pub fn ledger_snapshot(ledger: &LedgerState, roster: &Roster) -> LedgerSnapshot {
    LedgerSnapshot {
        admin: ledger.admin,
        mint: ledger.mint,
        genesis_time: ledger.genesis_time,
        custody_pool: ledger.custody_pool,
        custody_authority: ledger.custody_authority,
        total_issued: ledger.total_issued,
        active_count: roster.active_count(),
        roster_len: roster.len() as u32,
    }
}
