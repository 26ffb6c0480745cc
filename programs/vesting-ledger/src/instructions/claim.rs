use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::constants::{LEDGER_STATE_SEED, ROSTER_SEED};
use crate::custody::TokenCustody;
use crate::distribution;
use crate::error::VestingError;
use crate::state::{LedgerState, Roster};

pub fn claim(ctx: Context<Claim>, index: u32) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;

    let ledger_key = ctx.accounts.ledger_state.key();
    let mint = ctx.accounts.ledger_state.mint;
    let bump = ctx.accounts.ledger_state.custody_authority_bump;
    let admin = ctx.accounts.admin.key();
    let beneficiary = ctx.accounts.beneficiary.key();
    let payout = ctx.accounts.beneficiary_payout.key();

    ctx.accounts
        .ledger_state
        .authorize_with_mint(&admin, &ctx.accounts.beneficiary_payout.mint)?;

    let mut custody = TokenCustody {
        mint,
        ledger_state: ledger_key,
        custody_authority_bump: bump,
        pool: &ctx.accounts.custody_pool,
        custody_authority: ctx.accounts.custody_authority.to_account_info(),
        destination: ctx.accounts.beneficiary_payout.to_account_info(),
        token_program: ctx.accounts.token_program.to_account_info(),
    };

    let mut roster = ctx.accounts.roster.load_mut()?;
    let receipt = distribution::claim(
        &mut ctx.accounts.ledger_state,
        &mut roster,
        &admin,
        index as usize,
        &beneficiary,
        &payout,
        now,
        &mut custody,
    )?;

    if receipt.amount > 0 {
        emit!(TokensClaimed {
            index,
            beneficiary,
            amount: receipt.amount,
            claimed_total: receipt.claimed_total,
            total_issued: receipt.total_issued,
            timestamp: now,
        });
    }

    Ok(())
}

#[derive(Accounts)]
pub struct Claim<'info> {
    #[account(mut, seeds = [LEDGER_STATE_SEED], bump)]
    pub ledger_state: Account<'info, LedgerState>,

    #[account(
        mut,
        seeds = [ROSTER_SEED, ledger_state.key().as_ref()],
        bump
    )]
    pub roster: AccountLoader<'info, Roster>,

    #[account(
        mut,
        address = ledger_state.custody_pool @ VestingError::InvalidTokenAccount,
        constraint = custody_pool.mint == ledger_state.mint @ VestingError::InvalidTokenMint,
    )]
    pub custody_pool: Account<'info, TokenAccount>,

    /// CHECK: PDA that signs pool transfers; pinned to the address recorded at initialization.
    #[account(address = ledger_state.custody_authority @ VestingError::InvalidTokenAccount)]
    pub custody_authority: UncheckedAccount<'info>,

    /// CHECK: identity only; compared against the roster entry in-handler.
    pub beneficiary: UncheckedAccount<'info>,

    #[account(mut)]
    pub beneficiary_payout: Account<'info, TokenAccount>,

    pub admin: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct TokensClaimed {
    pub index: u32,
    pub beneficiary: Pubkey,
    pub amount: u64,
    pub claimed_total: u64,
    pub total_issued: u64,
    pub timestamp: i64,
}
