use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::LEDGER_STATE_SEED;
use crate::error::VestingError;
use crate::state::LedgerState;

pub fn fund_pool(ctx: Context<FundPool>, amount: u64) -> Result<()> {
    require!(amount > 0, VestingError::InvalidParameter);

    let st = &ctx.accounts.ledger_state;
    st.authorize_with_mint(&ctx.accounts.admin.key(), &ctx.accounts.admin_token_account.mint)?;

    require_keys_eq!(
        ctx.accounts.admin_token_account.owner,
        ctx.accounts.admin.key(),
        VestingError::InvalidTokenAccount
    );

    token::transfer(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.admin_token_account.to_account_info(),
                to: ctx.accounts.custody_pool.to_account_info(),
                authority: ctx.accounts.admin.to_account_info(),
            },
        ),
        amount,
    )?;

    ctx.accounts.custody_pool.reload()?;

    emit!(PoolFunded {
        admin: ctx.accounts.ledger_state.admin,
        amount,
        pool_balance: ctx.accounts.custody_pool.amount,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct FundPool<'info> {
    #[account(seeds = [LEDGER_STATE_SEED], bump)]
    pub ledger_state: Account<'info, LedgerState>,

    #[account(
        mut,
        address = ledger_state.custody_pool @ VestingError::InvalidTokenAccount,
        constraint = custody_pool.mint == ledger_state.mint @ VestingError::InvalidTokenMint,
    )]
    pub custody_pool: Account<'info, TokenAccount>,

    #[account(mut)]
    pub admin_token_account: Account<'info, TokenAccount>,

    pub admin: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct PoolFunded {
    pub admin: Pubkey,
    pub amount: u64,
    pub pool_balance: u64,
}
