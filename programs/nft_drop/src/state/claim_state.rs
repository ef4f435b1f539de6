use anchor_lang::prelude::*;

/**
 * Per-wallet claim counter
 *
 * Tracks how many tokens a wallet has claimed under one condition epoch.
 * The epoch is part of the PDA seeds, so resetting eligibility simply mints
 * a new epoch id and fresh counters start at zero while superseded epochs
 * keep their history.
 *
 * Derivation: ["wallet_claim", drop_key, condition_epoch, wallet]
 *
 * Lifecycle:
 * 1. Created on the wallet's first claim of an epoch (init_if_needed)
 * 2. Incremented by every successful claim
 * 3. Closable for rent reclamation once the epoch is superseded
 */
#[account]
#[derive(Default, Debug)]
pub struct WalletClaimStatus {
    /// Tokens claimed by this wallet in this epoch (cumulative)
    pub claimed: u64,
}

impl WalletClaimStatus {
    /// Space required for this account
    pub const LEN: usize = 8 + std::mem::size_of::<WalletClaimStatus>();
}
