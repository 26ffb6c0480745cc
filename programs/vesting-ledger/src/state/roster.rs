use anchor_lang::prelude::*;

use crate::constants::{MAX_UNLOCK_PERCENT, ROSTER_CAPACITY};
use crate::error::VestingError;
use crate::utils::math;

/// A single beneficiary slot stored in the roster account.
#[zero_copy]
#[derive(Debug, PartialEq, Eq)]
pub struct BeneficiaryEntry {
    pub beneficiary: Pubkey,
    pub planned_total: u64,
    pub claimed_total: u64,
    pub period_months: u16,
    pub unlock_percent: u8,
    pub active: u8,
    pub _padding: [u8; 4],
}

impl BeneficiaryEntry {
    pub const SIZE: usize = core::mem::size_of::<BeneficiaryEntry>();

    pub fn new(
        unlock_percent: u8,
        beneficiary: Pubkey,
        period_months: u16,
        planned_total: u64,
    ) -> Self {
        Self {
            beneficiary,
            planned_total,
            claimed_total: 0,
            period_months,
            unlock_percent,
            active: 1,
            _padding: [0u8; 4],
        }
    }

    pub fn is_active(&self) -> bool {
        self.active != 0
    }

    /// Total unlocked for this allocation at `now_ts`, ignoring claims and the active flag.
    pub fn vested_amount(
        &self,
        genesis_ts: i64,
        now_ts: i64,
    ) -> std::result::Result<u64, VestingError> {
        math::vested_amount(
            self.planned_total,
            self.unlock_percent,
            self.period_months,
            genesis_ts,
            now_ts,
        )
    }
}

/// Fixed-capacity beneficiary table. Indices are stable handles; removed
/// slots are reused first-fit by later additions.
#[account(zero_copy)]
pub struct Roster {
    /// Slots `[0, len)` have been populated at least once.
    pub len: u32,
    pub active_count: u32,
    /// `claimed_total` carried by entries whose slot was later reused.
    pub retired_claimed: u64,
    pub entries: [BeneficiaryEntry; ROSTER_CAPACITY],
}

impl Default for Roster {
    fn default() -> Self {
        bytemuck::Zeroable::zeroed()
    }
}

impl Roster {
    /// Space for discriminator + fixed entries array.
    pub const SPACE: usize = 8 + core::mem::size_of::<Roster>();

    pub fn len(&self) -> usize {
        (self.len as usize).min(ROSTER_CAPACITY)
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn active_count(&self) -> u32 {
        self.active_count
    }

    /// Populate the lowest-indexed inactive slot, or append. Returns the slot index.
    pub fn add(
        &mut self,
        unlock_percent: u8,
        beneficiary: Pubkey,
        period_months: u16,
        planned_total: u64,
    ) -> std::result::Result<usize, VestingError> {
        if unlock_percent > MAX_UNLOCK_PERCENT {
            return Err(VestingError::InvalidParameter);
        }

        let idx = match self.first_free_slot() {
            Some(i) => i,
            None if self.len() < ROSTER_CAPACITY => self.len(),
            None => return Err(VestingError::RosterFull),
        };
        let active_count = self
            .active_count
            .checked_add(1)
            .ok_or(VestingError::ArithmeticOverflow)?;
        let retired_claimed = if idx < self.len() {
            self.retired_claimed
                .checked_add(self.entries[idx].claimed_total)
                .ok_or(VestingError::ArithmeticOverflow)?
        } else {
            self.retired_claimed
        };

        self.entries[idx] =
            BeneficiaryEntry::new(unlock_percent, beneficiary, period_months, planned_total);
        if idx == self.len() {
            self.len += 1;
        }
        self.active_count = active_count;
        self.retired_claimed = retired_claimed;
        Ok(idx)
    }

    /// Deactivate a slot. `claimed_total` is kept for audit.
    pub fn remove(&mut self, index: usize) -> std::result::Result<(), VestingError> {
        let entry = self.get(index)?;
        if !entry.is_active() {
            return Err(VestingError::AlreadyInactive);
        }
        let active_count = self
            .active_count
            .checked_sub(1)
            .ok_or(VestingError::ArithmeticOverflow)?;

        self.entries[index].active = 0;
        self.active_count = active_count;
        Ok(())
    }

    pub fn get(&self, index: usize) -> std::result::Result<&BeneficiaryEntry, VestingError> {
        self.entries[..self.len()]
            .get(index)
            .ok_or(VestingError::IndexOutOfRange)
    }

    pub fn get_mut(
        &mut self,
        index: usize,
    ) -> std::result::Result<&mut BeneficiaryEntry, VestingError> {
        let len = self.len();
        self.entries[..len]
            .get_mut(index)
            .ok_or(VestingError::IndexOutOfRange)
    }

    /// Every slot that has ever been populated, active or not.
    pub fn iter_populated(&self) -> impl Iterator<Item = (usize, &BeneficiaryEntry)> {
        self.entries[..self.len()].iter().enumerate()
    }

    /// Everything ever paid through this roster: live `claimed_total` of all
    /// populated slots plus the history of reused slots.
    pub fn claimed_sum(&self) -> std::result::Result<u128, VestingError> {
        let mut sum: u128 = self.retired_claimed as u128;
        for (_, e) in self.iter_populated() {
            sum = sum
                .checked_add(e.claimed_total as u128)
                .ok_or(VestingError::ArithmeticOverflow)?;
        }
        Ok(sum)
    }

    fn first_free_slot(&self) -> Option<usize> {
        self.iter_populated()
            .find(|(_, e)| !e.is_active())
            .map(|(i, _)| i)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(n: u8) -> Pubkey {
        Pubkey::new_from_array([n; 32])
    }

    #[test]
    fn entry_layout_has_no_implicit_padding() {
        assert_eq!(BeneficiaryEntry::SIZE, 56);
        assert_eq!(Roster::SPACE, 8 + 16 + 56 * ROSTER_CAPACITY);
        assert!(Roster::SPACE <= 10_240);
    }

    #[test]
    fn add_appends_in_order() {
        let mut roster = Roster::default();
        assert!(roster.is_empty());
        assert_eq!(roster.add(15, key(1), 12, 1_000_000_000).unwrap(), 0);
        assert_eq!(roster.add(20, key(2), 8, 1_000_000_000).unwrap(), 1);

        let e0 = roster.get(0).unwrap();
        assert_eq!(e0.unlock_percent, 15);
        assert_eq!(e0.beneficiary, key(1));
        assert!(e0.is_active());
        assert_eq!(roster.get(1).unwrap().period_months, 8);
        assert_eq!(roster.len(), 2);
        assert_eq!(roster.active_count(), 2);
    }

    #[test]
    fn remove_keeps_history() {
        let mut roster = Roster::default();
        roster.add(15, key(1), 12, 100).unwrap();
        roster.add(20, key(2), 8, 100).unwrap();
        roster.get_mut(1).unwrap().claimed_total = 40;

        roster.remove(1).unwrap();
        assert_eq!(roster.active_count(), 1);
        let e1 = roster.get(1).unwrap();
        assert!(!e1.is_active());
        assert_eq!(e1.claimed_total, 40);
        assert!(roster.get(0).unwrap().is_active());
    }

    #[test]
    fn removed_slot_is_reused_first_fit() {
        let mut roster = Roster::default();
        roster.add(15, key(1), 12, 100).unwrap();
        roster.add(20, key(2), 12, 100).unwrap();
        roster.add(25, key(3), 12, 100).unwrap();
        roster.get_mut(0).unwrap().claimed_total = 70;
        roster.remove(2).unwrap();
        roster.remove(0).unwrap();
        assert_eq!(roster.active_count(), 1);

        assert_eq!(roster.add(50, key(9), 3, 500).unwrap(), 0);
        let e0 = roster.get(0).unwrap();
        assert_eq!(e0.beneficiary, key(9));
        assert_eq!(e0.claimed_total, 0);
        assert_eq!(e0.planned_total, 500);
        assert!(e0.is_active());
        assert_eq!(roster.add(50, key(10), 3, 500).unwrap(), 2);
        assert_eq!(roster.add(50, key(11), 3, 500).unwrap(), 3);
        assert_eq!(roster.len(), 4);
        assert_eq!(roster.active_count(), 4);
    }

    #[test]
    fn full_roster_rejects_until_a_slot_frees() {
        let mut roster = Roster::default();
        for i in 0..ROSTER_CAPACITY {
            assert_eq!(roster.add(10, key(i as u8), 1, 1).unwrap(), i);
        }
        assert_eq!(roster.add(10, key(0), 1, 1).unwrap_err(), VestingError::RosterFull);
        assert_eq!(roster.active_count() as usize, ROSTER_CAPACITY);

        roster.remove(77).unwrap();
        assert_eq!(roster.add(10, key(200), 1, 1).unwrap(), 77);
    }

    #[test]
    fn index_and_state_errors() {
        let mut roster = Roster::default();
        assert_eq!(roster.remove(0).unwrap_err(), VestingError::IndexOutOfRange);
        assert_eq!(roster.get(0).unwrap_err(), VestingError::IndexOutOfRange);
        roster.add(10, key(1), 1, 1).unwrap();
        assert_eq!(roster.get(1).unwrap_err(), VestingError::IndexOutOfRange);
        assert_eq!(roster.get(ROSTER_CAPACITY + 5).unwrap_err(), VestingError::IndexOutOfRange);

        roster.remove(0).unwrap();
        assert_eq!(roster.remove(0).unwrap_err(), VestingError::AlreadyInactive);
        assert_eq!(roster.active_count(), 0);
    }

    #[test]
    fn rejects_bad_percent_without_mutation() {
        let mut roster = Roster::default();
        assert_eq!(roster.add(101, key(1), 12, 1).unwrap_err(), VestingError::InvalidParameter);
        assert_eq!(roster.len(), 0);
        assert_eq!(roster.active_count(), 0);
    }

    #[test]
    fn claimed_sum_covers_inactive_slots() {
        let mut roster = Roster::default();
        roster.add(10, key(1), 1, 100).unwrap();
        roster.add(10, key(2), 1, 100).unwrap();
        roster.get_mut(0).unwrap().claimed_total = 30;
        roster.get_mut(1).unwrap().claimed_total = 12;
        roster.remove(0).unwrap();
        assert_eq!(roster.claimed_sum().unwrap(), 42);

        // Reusing slot 0 resets its entry but keeps what it paid out.
        assert_eq!(roster.add(10, key(3), 1, 100).unwrap(), 0);
        assert_eq!(roster.get(0).unwrap().claimed_total, 0);
        assert_eq!(roster.retired_claimed, 30);
        assert_eq!(roster.claimed_sum().unwrap(), 42);
    }
}
