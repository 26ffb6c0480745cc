use anchor_lang::prelude::*;

pub mod constants;
pub mod custody;
pub mod distribution;
pub mod error;
pub mod instructions;
pub mod state;
pub mod utils;
pub mod vesting;

use instructions::*;

declare_id!("Tnk7nDvuHx2gVgW9jSVGnpKgxUQk9GMBqFiA7AXF6vs");

#[program]
pub mod vesting_ledger {
    use super::*;

    /// Create the ledger, roster and custody pool and fix the genesis time.
    pub fn initialize(ctx: Context<Initialize>, genesis_time: i64) -> Result<()> {
        instructions::initialize(ctx, genesis_time)
    }

    /// Add a beneficiary to the first free roster slot.
    pub fn add_user(
        ctx: Context<AddUser>,
        unlock_percent: u8,
        beneficiary: Pubkey,
        period_months: u16,
        planned_total: u64,
    ) -> Result<()> {
        instructions::add_user(ctx, unlock_percent, beneficiary, period_months, planned_total)
    }

    /// Deactivate a roster slot; its claim history is kept.
    pub fn remove_user(ctx: Context<RemoveUser>, index: u32) -> Result<()> {
        instructions::remove_user(ctx, index)
    }

    /// Pay the vested-but-unclaimed amount of a roster entry to the beneficiary's ATA.
    pub fn claim(ctx: Context<Claim>, index: u32) -> Result<()> {
        instructions::claim(ctx, index)
    }

    pub fn fund_pool(ctx: Context<FundPool>, amount: u64) -> Result<()> {
        instructions::fund_pool(ctx, amount)
    }

    pub fn emit_vesting_quote(ctx: Context<EmitVestingQuote>, index: u32) -> Result<()> {
        instructions::emit_vesting_quote(ctx, index)
    }
}
