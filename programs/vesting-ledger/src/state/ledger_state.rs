use anchor_lang::prelude::*;

use crate::error::VestingError;

/// Singleton ledger PDA for one vesting instance.
#[account]
#[derive(Default, Debug)]
pub struct LedgerState {
    /// Authority for roster changes, claims and funding.
    pub admin: Pubkey,
    /// Vested token mint.
    pub mint: Pubkey,
    /// Vesting genesis timestamp (Unix seconds, UTC). May lie in the past or future.
    pub genesis_time: i64,
    /// Token account holding the custodied supply.
    pub custody_pool: Pubkey,
    /// PDA allowed to move tokens out of the pool.
    pub custody_authority: Pubkey,
    pub custody_authority_bump: u8,
    /// Total distributed so far (`Roster::claimed_sum`).
    pub total_issued: u64,
    pub initialized: bool,
}

impl LedgerState {
    pub const SIZE: usize =
        32 + // admin
        32 + // mint
        8 +  // genesis_time
        32 + // custody_pool
        32 + // custody_authority
        1 +  // custody_authority_bump
        8 +  // total_issued
        1;   // initialized

    pub fn initialize(
        &mut self,
        admin: Pubkey,
        mint: Pubkey,
        genesis_time: i64,
        custody_pool: Pubkey,
        custody_authority: Pubkey,
        custody_authority_bump: u8,
    ) -> std::result::Result<(), VestingError> {
        if self.initialized {
            return Err(VestingError::AlreadyInitialized);
        }
        self.admin = admin;
        self.mint = mint;
        self.genesis_time = genesis_time;
        self.custody_pool = custody_pool;
        self.custody_authority = custody_authority;
        self.custody_authority_bump = custody_authority_bump;
        self.total_issued = 0;
        self.initialized = true;
        Ok(())
    }

    pub fn authorize(&self, caller: &Pubkey) -> std::result::Result<(), VestingError> {
        if !self.initialized || *caller != self.admin {
            return Err(VestingError::Unauthorized);
        }
        Ok(())
    }

    /// Admin check first, then the token account must hold the vested mint.
    pub fn authorize_with_mint(
        &self,
        caller: &Pubkey,
        token_mint: &Pubkey,
    ) -> std::result::Result<(), VestingError> {
        self.authorize(caller)?;
        if *token_mint != self.mint {
            return Err(VestingError::InvalidTokenMint);
        }
        Ok(())
    }

    /// `total_issued + delta`, checked.
    pub fn issued_after(&self, delta: u64) -> std::result::Result<u64, VestingError> {
        self.total_issued
            .checked_add(delta)
            .ok_or(VestingError::ArithmeticOverflow)
    }
}
