use anchor_lang::prelude::*;

use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;

/// Caller-facing shape of a claim condition
///
/// supply_claimed is not settable: it carries over from the previous
/// condition unless eligibility is reset.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug)]
pub struct ClaimConditionArgs {
    pub start_timestamp: i64,
    pub max_claimable_supply: u64,
    pub quantity_limit_per_wallet: u64,
    pub merkle_root: [u8; 32],
    pub price_per_token: u64,
    pub currency: Pubkey,
    pub metadata: String,
}

/**
 * Account context for installing a claim condition
 *
 * Access Control: Only the drop admin can set conditions
 *
 * Business Logic:
 * - reset_eligibility = true mints a new condition epoch: per-wallet
 *   counters for the new epoch start at zero and supply_claimed resets
 * - reset_eligibility = false carries both forward, so a condition can be
 *   tuned without losing supply or wallet accounting
 * - The first condition of a drop always opens epoch 1
 */
#[event_cpi]
#[derive(Accounts)]
pub struct SetClaimConditions<'info> {
    /// The drop state account to update
    #[account(mut)]
    pub drop: Account<'info, DropState>,

    /// The drop admin
    /// - Must match the admin stored in the drop state
    #[account(constraint = admin.key() == drop.admin @ DropError::Unauthorized)]
    pub admin: Signer<'info>,
}

/**
 * Installs a new active claim condition
 *
 * @param ctx - The account context containing drop and admin accounts
 * @param args - The condition to install
 * @param reset_eligibility - Whether per-wallet counters start fresh
 */
pub fn handle_set_claim_conditions(
    ctx: Context<SetClaimConditions>,
    args: ClaimConditionArgs,
    reset_eligibility: bool,
) -> Result<()> {
    let drop = &mut ctx.accounts.drop;

    require!(
        args.metadata.len() <= MAX_CONDITION_METADATA_LEN,
        DropError::MetadataTooLong
    );

    let carried_supply = if reset_eligibility {
        0
    } else {
        drop.condition.supply_claimed
    };
    // The installed condition must still admit the supply it inherits
    require!(
        carried_supply <= args.max_claimable_supply,
        DropError::InvalidAmount
    );

    if reset_eligibility || drop.condition_epoch == 0 {
        drop.condition_epoch = drop
            .condition_epoch
            .checked_add(1)
            .ok_or(DropError::ArithmeticOverflow)?;
    }

    drop.condition = ClaimCondition {
        start_timestamp: args.start_timestamp,
        max_claimable_supply: args.max_claimable_supply,
        supply_claimed: carried_supply,
        quantity_limit_per_wallet: args.quantity_limit_per_wallet,
        merkle_root: args.merkle_root,
        price_per_token: args.price_per_token,
        currency: args.currency,
        metadata: args.metadata,
    };

    emit_cpi!(ClaimConditionSet {
        drop: drop.key(),
        epoch: drop.condition_epoch,
        start_timestamp: drop.condition.start_timestamp,
        max_claimable_supply: drop.condition.max_claimable_supply,
        quantity_limit_per_wallet: drop.condition.quantity_limit_per_wallet,
        merkle_root: drop.condition.merkle_root,
        price_per_token: drop.condition.price_per_token,
        currency: drop.condition.currency,
        reset_eligibility,
    });

    Ok(())
}
