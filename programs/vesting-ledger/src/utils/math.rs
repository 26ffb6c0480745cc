//! Linear unlock math.
//! - nothing unlocks before genesis, not even the immediate portion
//! - from genesis on: immediate share + remaining share pro rata over the period
//! - a single truncating division at the end, intermediates in u128

use crate::constants::{MAX_UNLOCK_PERCENT, SECONDS_PER_MONTH};
use crate::error::VestingError;

const PERCENT_SCALE: u128 = 100;

/// Vesting period in seconds for a number of fixed-length months.
pub fn period_seconds(period_months: u16) -> Result<u128, VestingError> {
    (period_months as u128)
        .checked_mul(SECONDS_PER_MONTH as u128)
        .ok_or(VestingError::ArithmeticOverflow)
}

/// Seconds elapsed since genesis, or `None` before genesis.
pub fn elapsed_since(genesis_ts: i64, now_ts: i64) -> Option<u128> {
    let elapsed = (now_ts as i128) - (genesis_ts as i128);
    if elapsed < 0 {
        None
    } else {
        Some(elapsed as u128)
    }
}

/// Total amount unlocked at `now_ts` for an allocation of `planned_total`.
pub fn vested_amount(
    planned_total: u64,
    unlock_percent: u8,
    period_months: u16,
    genesis_ts: i64,
    now_ts: i64,
) -> Result<u64, VestingError> {
    if unlock_percent > MAX_UNLOCK_PERCENT {
        return Err(VestingError::InvalidParameter);
    }
    let Some(elapsed) = elapsed_since(genesis_ts, now_ts) else {
        return Ok(0);
    };

    let total = planned_total as u128;
    let pct = unlock_percent as u128;
    let period = period_seconds(period_months)?;

    let v = if period == 0 {
        pct.checked_mul(total)
            .ok_or(VestingError::ArithmeticOverflow)?
            / PERCENT_SCALE
    } else {
        let capped = elapsed.min(period);
        let immediate = pct
            .checked_mul(total)
            .and_then(|x| x.checked_mul(period))
            .ok_or(VestingError::ArithmeticOverflow)?;
        let linear = (PERCENT_SCALE - pct)
            .checked_mul(total)
            .and_then(|x| x.checked_mul(capped))
            .ok_or(VestingError::ArithmeticOverflow)?;
        let denom = PERCENT_SCALE
            .checked_mul(period)
            .ok_or(VestingError::ArithmeticOverflow)?;
        immediate
            .checked_add(linear)
            .ok_or(VestingError::ArithmeticOverflow)?
            / denom
    };

    u64::try_from(v).map_err(|_| VestingError::ArithmeticOverflow)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::SECONDS_PER_DAY;
    use quickcheck_macros::quickcheck;

    const T0: i64 = 1_637_107_200; // 2021-11-17 00:00:00 UTC
    const MONTH: i64 = SECONDS_PER_MONTH;

    #[test]
    fn month_is_thirty_and_a_half_days() {
        assert_eq!(SECONDS_PER_MONTH, 2_635_200);
        assert_eq!(period_seconds(12).unwrap(), 31_622_400);
    }

    #[test]
    fn zero_before_genesis() {
        assert_eq!(vested_amount(1_000_000, 20, 12, T0, T0 - 1).unwrap(), 0);
        assert_eq!(vested_amount(1_000_000, 100, 0, T0, T0 - 1).unwrap(), 0);
    }

    #[test]
    fn immediate_share_at_genesis() {
        assert_eq!(vested_amount(1_000_000, 20, 12, T0, T0).unwrap(), 200_000);
        assert_eq!(vested_amount(1_000_000_000, 20, 12, T0, T0 + 1).unwrap(), 200_000_025);
    }

    #[test]
    fn linear_share_after_whole_months() {
        // 20% + 80% * 4/12
        assert_eq!(vested_amount(1_000_000, 20, 12, T0, T0 + 4 * MONTH).unwrap(), 466_666);
        // 20% + 80% * 6/12
        assert_eq!(vested_amount(1_000_000, 20, 12, T0, T0 + 6 * MONTH).unwrap(), 600_000);
    }

    #[test]
    fn thirty_days_into_a_year() {
        let now = T0 + 30 * SECONDS_PER_DAY;
        assert_eq!(
            vested_amount(1_000_000_000, 15, 12, T0, now).unwrap(),
            219_672_131
        );
    }

    #[test]
    fn full_allocation_at_period_end() {
        assert_eq!(vested_amount(1_000_000, 20, 12, T0, T0 + 12 * MONTH).unwrap(), 1_000_000);
        assert_eq!(vested_amount(1_000_000, 20, 12, T0, T0 + 12 * MONTH - 1).unwrap(), 999_999);
        assert_eq!(vested_amount(1_000_000, 0, 1, T0, i64::MAX).unwrap(), 1_000_000);
    }

    #[test]
    fn zero_period_only_releases_immediate_share() {
        assert_eq!(vested_amount(1_000_000, 100, 0, T0, T0).unwrap(), 1_000_000);
        assert_eq!(vested_amount(1_000_000, 40, 0, T0, T0 + 100 * MONTH).unwrap(), 400_000);
        assert_eq!(vested_amount(1_000_000, 0, 0, T0, T0 + 100 * MONTH).unwrap(), 0);
    }

    #[test]
    fn wide_intermediates_do_not_overflow() {
        let v = vested_amount(u64::MAX, 99, u16::MAX, i64::MIN, i64::MAX).unwrap();
        assert_eq!(v, u64::MAX);
        let half = vested_amount(u64::MAX, 0, 2, 0, MONTH).unwrap();
        assert_eq!(half, u64::MAX / 2);
    }

    #[test]
    fn rejects_percent_above_hundred() {
        assert_eq!(
            vested_amount(1_000_000, 101, 12, T0, T0).unwrap_err(),
            VestingError::InvalidParameter
        );
    }

    #[quickcheck]
    fn never_more_than_planned(total: u64, pct: u8, months: u16, genesis: i64, now: i64) -> bool {
        let pct = pct % (MAX_UNLOCK_PERCENT + 1);
        vested_amount(total, pct, months, genesis, now).unwrap() <= total
    }

    #[quickcheck]
    fn monotone_in_time(total: u64, pct: u8, months: u8, a: u32, b: u32) -> bool {
        let pct = pct % (MAX_UNLOCK_PERCENT + 1);
        let (early, late) = if a <= b { (a, b) } else { (b, a) };
        let genesis = T0;
        let v1 = vested_amount(total, pct, months as u16, genesis, T0 - 1_000 + early as i64).unwrap();
        let v2 = vested_amount(total, pct, months as u16, genesis, T0 - 1_000 + late as i64).unwrap();
        v1 <= v2
    }

    #[quickcheck]
    fn nothing_before_genesis(total: u64, pct: u8, months: u16, before: u32) -> bool {
        let pct = pct % (MAX_UNLOCK_PERCENT + 1);
        vested_amount(total, pct, months, T0, T0 - 1 - before as i64).unwrap() == 0
    }
}
