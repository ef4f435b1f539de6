use anchor_lang::prelude::*;

/**
 * Admin nonce account
 *
 * Tracks the drop counter for each admin so drop PDAs get unique,
 * automatically assigned nonces.
 *
 * Derivation: ["admin_nonce", admin]
 *
 * Lifecycle:
 * 1. Created on the admin's first create_drop (init_if_needed)
 * 2. Incremented with each further drop
 */
#[account]
#[derive(Default, Debug)]
pub struct AdminNonce {
    /// Increments with each drop creation
    pub nonce: u32,
}

impl AdminNonce {
    /// Space required for this account
    pub const LEN: usize = 8 + std::mem::size_of::<AdminNonce>();
}
