use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::{CUSTODY_AUTHORITY_SEED, CUSTODY_POOL_SEED, LEDGER_STATE_SEED, ROSTER_SEED};
use crate::distribution;
use crate::error::VestingError;
use crate::state::{LedgerState, Roster};

pub fn initialize(ctx: Context<Initialize>, genesis_time: i64) -> Result<()> {
    // Accounts are opened with init_if_needed so a second call lands here.
    require!(
        !ctx.accounts.ledger_state.initialized,
        VestingError::AlreadyInitialized
    );

    let admin = ctx.accounts.admin.key();
    let mint = ctx.accounts.mint.key();
    let custody_pool = ctx.accounts.custody_pool.key();
    let custody_authority = ctx.accounts.custody_authority.key();

    let mut roster = ctx.accounts.roster.load_init()?;
    let st = &mut ctx.accounts.ledger_state;
    distribution::initialize(
        st,
        &mut roster,
        admin,
        mint,
        genesis_time,
        custody_pool,
        custody_authority,
        ctx.bumps.custody_authority,
    )?;

    emit!(LedgerInitialized {
        admin,
        mint,
        genesis_time,
        custody_pool,
        custody_authority,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(
        init_if_needed,
        payer = admin,
        space = 8 + LedgerState::SIZE,
        seeds = [LEDGER_STATE_SEED],
        bump
    )]
    pub ledger_state: Account<'info, LedgerState>,

    #[account(
        init_if_needed,
        payer = admin,
        space = Roster::SPACE,
        seeds = [ROSTER_SEED, ledger_state.key().as_ref()],
        bump
    )]
    pub roster: AccountLoader<'info, Roster>,

    /// CHECK: PDA that signs pool transfers; never holds data.
    #[account(
        seeds = [CUSTODY_AUTHORITY_SEED, ledger_state.key().as_ref()],
        bump
    )]
    pub custody_authority: UncheckedAccount<'info>,

    #[account(
        init_if_needed,
        payer = admin,
        token::mint = mint,
        token::authority = custody_authority,
        seeds = [CUSTODY_POOL_SEED, ledger_state.key().as_ref()],
        bump
    )]
    pub custody_pool: Account<'info, TokenAccount>,

    pub mint: Account<'info, Mint>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

#[event]
pub struct LedgerInitialized {
    pub admin: Pubkey,
    pub mint: Pubkey,
    pub genesis_time: i64,
    pub custody_pool: Pubkey,
    pub custody_authority: Pubkey,
}
