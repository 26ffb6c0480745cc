//! Program-wide constants.

/// Number of beneficiary slots in the roster account.
pub const ROSTER_CAPACITY: usize = 128;

/// Seconds per day (UTC).
pub const SECONDS_PER_DAY: i64 = 86_400;

/// Fixed month length used by the linear schedule: 30.5 days.
pub const SECONDS_PER_MONTH: i64 = SECONDS_PER_DAY * 61 / 2;

/// Upper bound for the immediate-unlock percentage.
pub const MAX_UNLOCK_PERCENT: u8 = 100;

pub const LEDGER_STATE_SEED: &[u8] = b"ledger_state";
pub const ROSTER_SEED: &[u8] = b"roster";
pub const CUSTODY_AUTHORITY_SEED: &[u8] = b"custody_authority";
pub const CUSTODY_POOL_SEED: &[u8] = b"custody_pool";
