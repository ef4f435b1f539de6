use anchor_lang::prelude::*;

use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;

/**
 * Account context for reserving a batch of token ids
 *
 * Appends one entry to the lazy-mint ledger. The new batch starts exactly
 * where the previous one ended, so reserved ranges never overlap and their
 * start ids strictly increase.
 *
 * Access Control: Only the drop admin can lazy mint
 */
#[event_cpi]
#[derive(Accounts)]
pub struct LazyMint<'info> {
    /// The drop state account holding the ledger head
    #[account(mut, constraint = admin.key() == drop.admin @ DropError::Unauthorized)]
    pub drop: Account<'info, DropState>,

    /// The new ledger entry (PDA)
    /// - Derived from: ["batch", drop_key, batch_count]
    #[account(
        init,
        payer = admin,
        space = LazyMintBatch::LEN,
        seeds = [
            BATCH_SEED.as_bytes(),
            drop.key().as_ref(),
            drop.batch_count.to_le_bytes().as_ref()
        ],
        bump
    )]
    pub batch: Account<'info, LazyMintBatch>,

    /// The drop admin, pays rent for the batch account
    #[account(mut)]
    pub admin: Signer<'info>,

    /// System program for account creation
    pub system_program: Program<'info, System>,
}

/**
 * Reserves `amount` consecutive token ids under a base URI
 *
 * @param ctx - The account context containing drop, batch, and admin accounts
 * @param amount - Number of ids to reserve, must be non-zero
 * @param base_uri - Base URI the reserved ids resolve under
 * @param extra_data - Opaque payload stored with the batch, uninterpreted
 */
pub fn handle_lazy_mint(
    ctx: Context<LazyMint>,
    amount: u64,
    base_uri: String,
    extra_data: Vec<u8>,
) -> Result<()> {
    require!(amount > 0, DropError::InvalidAmount);
    require!(base_uri.len() <= MAX_BASE_URI_LEN, DropError::UriTooLong);
    require!(
        extra_data.len() <= MAX_BATCH_EXTRA_DATA_LEN,
        DropError::MetadataTooLong
    );

    let drop = &mut ctx.accounts.drop;
    let batch = &mut ctx.accounts.batch;

    let start_id = drop.total_reserved;
    let end_id = start_id
        .checked_add(amount)
        .ok_or(DropError::ArithmeticOverflow)?;

    batch.bump = ctx.bumps.batch;
    batch.batch_index = drop.batch_count;
    batch.start_id = start_id;
    batch.end_id = end_id;
    batch.base_uri = base_uri.clone();
    batch.extra_data = extra_data;

    drop.total_reserved = end_id;
    drop.batch_count = drop
        .batch_count
        .checked_add(1)
        .ok_or(DropError::ArithmeticOverflow)?;

    emit_cpi!(LazyMinted {
        drop: drop.key(),
        batch_index: batch.batch_index,
        start_id,
        end_id,
        base_uri,
    });

    Ok(())
}
