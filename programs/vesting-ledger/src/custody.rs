//! Custody backend consumed by the claim path.

use anchor_lang::prelude::*;
use anchor_spl::token::{self, TokenAccount, Transfer};

use crate::constants::CUSTODY_AUTHORITY_SEED;
use crate::error::VestingError;

/// Value-moving side of the ledger. Implementations must either move the
/// whole amount or fail without moving anything.
pub trait CustodyBackend {
    /// Canonical payout account of `owner` for the vested asset.
    fn canonical_account_for(&self, owner: &Pubkey) -> Pubkey;

    /// Units currently held by the custody pool.
    fn pool_balance(&self) -> u64;

    /// Move `amount` from the custody pool to `destination`.
    fn transfer(&mut self, destination: &Pubkey, amount: u64) -> Result<()>;
}

/// ATA derivation: PDA(owner, token_program_id, mint) under the associated token program.
pub fn expected_ata_address(owner: &Pubkey, mint: &Pubkey) -> Pubkey {
    let seeds: &[&[u8]] = &[
        owner.as_ref(),
        anchor_spl::token::ID.as_ref(),
        mint.as_ref(),
    ];
    let (ata, _) = Pubkey::find_program_address(seeds, &anchor_spl::associated_token::ID);
    ata
}

/// SPL Token custody: the pool is a token account owned by the
/// `custody_authority` PDA, which signs every outgoing transfer.
pub struct TokenCustody<'a, 'info> {
    pub mint: Pubkey,
    pub ledger_state: Pubkey,
    pub custody_authority_bump: u8,
    pub pool: &'a Account<'info, TokenAccount>,
    pub custody_authority: AccountInfo<'info>,
    pub destination: AccountInfo<'info>,
    pub token_program: AccountInfo<'info>,
}

impl<'a, 'info> CustodyBackend for TokenCustody<'a, 'info> {
    fn canonical_account_for(&self, owner: &Pubkey) -> Pubkey {
        expected_ata_address(owner, &self.mint)
    }

    fn pool_balance(&self) -> u64 {
        self.pool.amount
    }

    fn transfer(&mut self, destination: &Pubkey, amount: u64) -> Result<()> {
        require_keys_eq!(*destination, self.destination.key(), VestingError::InvalidDestination);

        let bump = [self.custody_authority_bump];
        let seeds: &[&[u8]] = &[CUSTODY_AUTHORITY_SEED, self.ledger_state.as_ref(), &bump];
        let signer_seeds: &[&[&[u8]]] = &[seeds];
        token::transfer(
            CpiContext::new_with_signer(
                self.token_program.clone(),
                Transfer {
                    from: self.pool.to_account_info(),
                    to: self.destination.clone(),
                    authority: self.custody_authority.clone(),
                },
                signer_seeds,
            ),
            amount,
        )
    }
}
