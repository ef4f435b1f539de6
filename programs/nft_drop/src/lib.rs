use anchor_lang::prelude::*;

declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

pub mod constants;
pub mod error;
pub mod event;
pub mod instructions;
pub mod state;
pub mod utils;

#[cfg(test)]
pub mod test;

use instructions::*;
use state::{AllowlistProof, TokenBoundAccountRecord};

/**
 * NFT Drop Program
 *
 * A Solana program issuing a capped-supply collectible under configurable
 * claim conditions, where every claim can atomically deploy and seed a
 * dedicated account per minted token.
 *
 * Key Features:
 * - Time-scoped claim conditions with merkle allowlists and per-wallet limits
 * - Epoch-keyed wallet counters (condition tuning without losing accounting)
 * - Admin-settable per-call quantity cap
 * - Lazy-mint ledger reserving id ranges under batch base URIs, with a
 *   drop-wide URI override
 * - Deterministic token-bound account deployment and optional seed deposits,
 *   all-or-nothing with the mint itself
 * - Cross-program call event emission for composability
 * - Support for both SPL Token and Token 2022 payments and deposits
 *
 * Architecture:
 * - Admin Nonce PDA: drop counter per admin (automatic nonce management)
 * - Drop PDA: condition, caps, ledger head, URI override
 * - Batch PDAs: the lazy-mint reservation ledger, in insertion order
 * - Wallet Claim PDAs: per (epoch, wallet) claim counters
 * - Token PDAs: one per minted token
 * - Token-Bound PDAs: the per-token accounts, derived from
 *   (implementation, chain id, drop, token id, salt)
 *
 * Workflow:
 * 1. Admin creates a drop and lazy mints id batches
 * 2. Admin installs a claim condition (and optionally tunes it later)
 * 3. Users claim, or claim-and-create to also deploy and fund the
 *    per-token accounts
 * 4. Users may close wallet counters of superseded epochs to reclaim rent
 */
#[program]
pub mod nft_drop {
    use super::*;

    /**
     * Creates a new drop
     *
     * Initializes a drop campaign with automatic nonce management and
     * default settings (quantity cap 1, no condition, empty ledger).
     *
     * @param ctx - Account context containing nonce, drop, admin, and
     *              treasury accounts
     *
     * Access Control: The signing admin becomes the drop admin
     */
    pub fn create_drop(ctx: Context<CreateDrop>) -> Result<()> {
        handle_create_drop(ctx)
    }

    /**
     * Installs a new active claim condition
     *
     * When reset_eligibility is true a new epoch starts: per-wallet counters
     * and the claimed-supply counter reset. When false both carry forward,
     * so a condition can be tuned in place.
     *
     * @param ctx - Account context containing drop and admin accounts
     * @param args - The condition to install
     * @param reset_eligibility - Whether per-wallet eligibility resets
     *
     * Access Control: Admin only
     */
    pub fn set_claim_conditions(
        ctx: Context<SetClaimConditions>,
        args: ClaimConditionArgs,
        reset_eligibility: bool,
    ) -> Result<()> {
        handle_set_claim_conditions(ctx, args, reset_eligibility)
    }

    /**
     * Sets the cap on tokens claimable in a single call
     *
     * @param ctx - Account context containing drop and admin accounts
     * @param quantity - New cap, must be at least 1
     *
     * Access Control: Admin only
     */
    pub fn set_quantity_per_claim(
        ctx: Context<SetQuantityPerClaim>,
        quantity: u64,
    ) -> Result<()> {
        handle_set_quantity_per_claim(ctx, quantity)
    }

    /**
     * Sets or clears the drop-wide base URI override
     *
     * A non-empty override takes effect immediately for all tokens, past
     * and future.
     *
     * @param ctx - Account context containing drop and admin accounts
     * @param uri - New global base URI, empty to fall back to batch URIs
     *
     * Access Control: Admin only
     */
    pub fn set_global_base_uri(ctx: Context<SetGlobalBaseUri>, uri: String) -> Result<()> {
        handle_set_global_base_uri(ctx, uri)
    }

    /**
     * Reserves a batch of consecutive token ids under a base URI
     *
     * @param ctx - Account context containing drop, batch, and admin accounts
     * @param amount - Number of ids to reserve, must be non-zero
     * @param base_uri - Base URI the reserved ids resolve under
     * @param extra_data - Opaque payload stored with the batch
     *
     * Access Control: Admin only
     */
    pub fn lazy_mint(
        ctx: Context<LazyMint>,
        amount: u64,
        base_uri: String,
        extra_data: Vec<u8>,
    ) -> Result<()> {
        handle_lazy_mint(ctx, amount, base_uri, extra_data)
    }

    /**
     * Claims tokens under the active condition
     *
     * Validates the per-call cap and the condition, collects payment, and
     * mints consecutive ids to the receiver. Fully atomic: any failing step
     * unwinds the whole call.
     *
     * @param ctx - Account context plus one token state PDA per id in
     *              remaining accounts
     * @param quantity - Number of tokens to mint
     * @param currency - Currency the claimant expects to pay in
     * @param price_per_token - Price the claimant expects to pay
     * @param allowlist_proof - Membership evidence for allowlisted phases
     * @param data - Opaque payload, uninterpreted
     *
     * Access Control: Any claimant satisfying the active condition
     */
    pub fn claim<'info>(
        ctx: Context<'_, '_, '_, 'info, Claim<'info>>,
        quantity: u64,
        currency: Pubkey,
        price_per_token: u64,
        allowlist_proof: AllowlistProof,
        data: Vec<u8>,
    ) -> Result<Vec<u64>> {
        handle_claim(ctx, quantity, currency, price_per_token, allowlist_proof, data)
    }

    /**
     * Claims tokens and binds a deterministic account to each
     *
     * Runs the claim path, then deploys the per-token accounts and, for a
     * non-zero amount_to_transfer, seeds each with a deposit pulled from
     * the claimant. Never mints without attempting the binding; a failure
     * on any token unwinds the mint as well.
     *
     * @param ctx - Account context plus the remaining-accounts layout
     *              described on the context struct
     * @param args - The combined entry-point payload
     *
     * Access Control: Any claimant satisfying the active condition
     */
    pub fn claim_and_create_tba<'info>(
        ctx: Context<'_, '_, '_, 'info, ClaimAndCreateTba<'info>>,
        args: ClaimAndCreateTbaArgs,
    ) -> Result<Vec<TokenBoundAccountRecord>> {
        handle_claim_and_create_tba(ctx, args)
    }

    /**
     * Closes a wallet claim counter from a past epoch and reclaims rent
     *
     * @param ctx - Account context containing the counter, drop, and wallet
     * @param epoch - Epoch the counter was created under
     *
     * Access Control: Wallet only (enforced by PDA seeds)
     */
    pub fn close_wallet_claim_status(
        ctx: Context<CloseWalletClaimStatus>,
        epoch: u64,
    ) -> Result<()> {
        handle_close_wallet_claim_status(ctx, epoch)
    }
}
