use anchor_lang::prelude::*;

use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;

/**
 * Account context for closing a superseded wallet claim counter
 *
 * Counters from past condition epochs no longer gate anything; the wallet
 * can close them to reclaim the rent paid on first claim. Counters of the
 * active epoch stay: closing one would reset the wallet's allowance.
 *
 * Access Control: Only the wallet the counter tracks (enforced by PDA seeds)
 */
#[event_cpi]
#[derive(Accounts)]
#[instruction(epoch: u64)]
pub struct CloseWalletClaimStatus<'info> {
    /// Counter to be closed, rent returned to the wallet
    /// - Derived from: ["wallet_claim", drop_key, epoch, wallet]
    #[account(
        mut,
        close = wallet,
        seeds = [
            WALLET_CLAIM_SEED.as_bytes(),
            drop.key().as_ref(),
            epoch.to_le_bytes().as_ref(),
            wallet.key().as_ref()
        ],
        bump
    )]
    pub wallet_claim: Account<'info, WalletClaimStatus>,

    /// The drop the counter belongs to, read for the active epoch
    pub drop: Account<'info, DropState>,

    /// The wallet that accrued the counter, receives the reclaimed rent
    #[account(mut)]
    pub wallet: Signer<'info>,
}

/// Closes a wallet claim counter from a past epoch
pub fn handle_close_wallet_claim_status(
    ctx: Context<CloseWalletClaimStatus>,
    epoch: u64,
) -> Result<()> {
    require!(
        epoch < ctx.accounts.drop.condition_epoch,
        DropError::EpochStillActive
    );

    emit_cpi!(WalletClaimStatusClosed {
        drop: ctx.accounts.drop.key(),
        epoch,
        wallet: ctx.accounts.wallet.key(),
        claimed: ctx.accounts.wallet_claim.claimed,
    });

    Ok(())
}
