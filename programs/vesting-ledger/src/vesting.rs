//! Claim accounting on top of the unlock math.

use crate::error::VestingError;
use crate::state::BeneficiaryEntry;

/// Vesting figures for one roster entry at one instant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EntryQuote {
    pub vested: u64,
    pub claimed: u64,
    pub pending: u64,
    pub active: bool,
}

/// Amount payable on the next claim. Inactive entries yield nothing.
pub fn pending(
    entry: &BeneficiaryEntry,
    genesis_ts: i64,
    now_ts: i64,
) -> Result<u64, VestingError> {
    if !entry.is_active() {
        return Ok(0);
    }
    let vested = entry.vested_amount(genesis_ts, now_ts)?;
    Ok(vested.saturating_sub(entry.claimed_total))
}

/// For an inactive entry the entitlement is frozen at what was already paid.
pub fn quote(
    entry: &BeneficiaryEntry,
    genesis_ts: i64,
    now_ts: i64,
) -> Result<EntryQuote, VestingError> {
    let active = entry.is_active();
    let vested = if active {
        entry.vested_amount(genesis_ts, now_ts)?
    } else {
        entry.claimed_total
    };
    Ok(EntryQuote {
        vested,
        claimed: entry.claimed_total,
        pending: vested.saturating_sub(entry.claimed_total),
        active,
    })
}
