use anchor_lang::prelude::*;

use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;

/**
 * Account context for creating a new drop
 *
 * This instruction initializes a new drop campaign with automatic nonce
 * management:
 * - Creates or updates the admin's nonce PDA
 * - Creates the drop state PDA with the auto-incremented nonce
 * - Records the treasury that will receive claim payments
 *
 * Access Control: The admin signs and pays for the accounts
 */
#[event_cpi]
#[derive(Accounts)]
pub struct CreateDrop<'info> {
    /// Nonce account (PDA) tracking drop numbers for this admin
    /// - Derived from: ["admin_nonce", admin]
    #[account(
        init_if_needed,
        payer = admin,
        space = AdminNonce::LEN,
        seeds = [ADMIN_NONCE_SEED.as_bytes(), admin.key().as_ref()],
        bump
    )]
    pub admin_nonce: Account<'info, AdminNonce>,

    /// The drop state account (PDA)
    /// - Derived from: ["drop", admin, current_nonce]
    /// - Nonce is automatically determined from admin_nonce.nonce + 1
    #[account(
        init,
        payer = admin,
        space = DropState::LEN,
        seeds = [
            DROP_SEED.as_bytes(),
            admin.key().as_ref(),
            (admin_nonce.nonce + 1).to_le_bytes().as_ref()
        ],
        bump
    )]
    pub drop: Account<'info, DropState>,

    /// The admin of the new drop
    /// - Gates every configuration instruction afterwards
    #[account(mut)]
    pub admin: Signer<'info>,

    /// Destination of claim payments
    /// CHECK: stored in the drop state and validated at claim time
    pub treasury: AccountInfo<'info>,

    /// System program for account creation
    pub system_program: Program<'info, System>,
}

/**
 * Creates a new drop with automatic nonce management
 *
 * @param ctx - The account context containing nonce, drop, and admin accounts
 */
pub fn handle_create_drop(ctx: Context<CreateDrop>) -> Result<()> {
    // Treasury must be a real key
    require!(
        ctx.accounts.treasury.key() != Pubkey::default(),
        DropError::TreasuryMismatch
    );

    let admin_nonce = &mut ctx.accounts.admin_nonce;
    let drop = &mut ctx.accounts.drop;

    let current_nonce = admin_nonce
        .nonce
        .checked_add(1)
        .ok_or(DropError::ArithmeticOverflow)?;
    admin_nonce.nonce = current_nonce;

    drop.bump = ctx.bumps.drop;
    drop.nonce = current_nonce;
    drop.admin = ctx.accounts.admin.key();
    drop.treasury = ctx.accounts.treasury.key();
    drop.quantity_per_claim = DEFAULT_QUANTITY_PER_CLAIM;
    // next_token_id, total_reserved, batch_count, condition_epoch,
    // global_base_uri and the condition stay at their zero defaults until
    // the admin configures them

    emit_cpi!(DropCreated {
        drop: drop.key(),
        nonce: current_nonce,
        admin: ctx.accounts.admin.key(),
        treasury: ctx.accounts.treasury.key(),
    });

    Ok(())
}
