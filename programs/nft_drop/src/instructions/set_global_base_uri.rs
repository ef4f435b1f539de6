use anchor_lang::prelude::*;

use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;

/**
 * Account context for setting the global base URI
 *
 * Access Control: Only the drop admin can change the override
 *
 * Business Logic:
 * - A non-empty global base URI takes effect immediately for all tokens,
 *   past and future
 * - Setting it back to empty restores per-batch resolution
 */
#[event_cpi]
#[derive(Accounts)]
pub struct SetGlobalBaseUri<'info> {
    /// The drop state account to update
    #[account(mut)]
    pub drop: Account<'info, DropState>,

    /// The drop admin
    #[account(constraint = admin.key() == drop.admin @ DropError::Unauthorized)]
    pub admin: Signer<'info>,
}

/// Sets or clears the drop-wide base URI override
pub fn handle_set_global_base_uri(ctx: Context<SetGlobalBaseUri>, uri: String) -> Result<()> {
    require!(uri.len() <= MAX_BASE_URI_LEN, DropError::UriTooLong);

    let drop = &mut ctx.accounts.drop;
    drop.global_base_uri = uri.clone();

    emit_cpi!(GlobalBaseUriSet {
        drop: drop.key(),
        uri,
    });

    Ok(())
}
