use anchor_lang::prelude::*;

use crate::error::*;
use crate::event::*;
use crate::state::*;

/**
 * Account context for setting the per-claim quantity cap
 *
 * Access Control: Only the drop admin can change the cap
 */
#[event_cpi]
#[derive(Accounts)]
pub struct SetQuantityPerClaim<'info> {
    /// The drop state account to update
    #[account(mut)]
    pub drop: Account<'info, DropState>,

    /// The drop admin
    #[account(constraint = admin.key() == drop.admin @ DropError::Unauthorized)]
    pub admin: Signer<'info>,
}

/// Sets the cap on tokens claimable in a single call; must be at least 1
pub fn handle_set_quantity_per_claim(
    ctx: Context<SetQuantityPerClaim>,
    quantity: u64,
) -> Result<()> {
    require!(quantity >= 1, DropError::InvalidAmount);

    let drop = &mut ctx.accounts.drop;
    drop.quantity_per_claim = quantity;

    emit_cpi!(QuantityPerClaimSet {
        drop: drop.key(),
        quantity,
    });

    Ok(())
}
