use anchor_lang::prelude::*;
use anchor_lang::solana_program::pubkey;

/**
 * Program Constants
 *
 * This module defines all the constant values used throughout the nft_drop program.
 * These constants control PDA derivation, defaults, and data size limits.
 */

#[constant]
/// ===== CLAIM DEFAULTS =====

/// Default number of tokens claimable in a single call
/// - Applied when a drop is created
/// - Admin can raise it later with set_quantity_per_claim
pub const DEFAULT_QUANTITY_PER_CLAIM: u64 = 1;

/// Sentinel currency key for the native asset (lamports)
/// - The wrapped-SOL mint address, reused as the native marker
/// - A claim condition whose currency equals this key is paid with a
///   system transfer instead of an SPL token transfer
pub const NATIVE_CURRENCY: Pubkey = pubkey!("So11111111111111111111111111111111111111112");

/// Sentinel for "no price override" inside an allowlist proof
/// - A proof carrying this value inherits the condition's price_per_token
pub const PROOF_PRICE_UNSET: u64 = u64::MAX;

/// ===== DATA SIZE LIMITS =====

/// Maximum byte length of a batch base URI or the global base URI
pub const MAX_BASE_URI_LEN: usize = 128;

/// Maximum byte length of the opaque claim condition metadata string
pub const MAX_CONDITION_METADATA_LEN: usize = 128;

/// Maximum byte length of the opaque per-batch extra data blob
pub const MAX_BATCH_EXTRA_DATA_LEN: usize = 128;

/// ===== PDA SEED CONSTANTS =====

/// Seed for admin nonce PDA derivation
/// - Used in: ["admin_nonce", admin]
/// - Tracks how many drops each admin has created
pub const ADMIN_NONCE_SEED: &str = "admin_nonce";

/// Seed for drop state PDA derivation
/// - Used in: ["drop", admin, nonce]
/// - One account per drop campaign
pub const DROP_SEED: &str = "drop";

/// Seed for lazy-mint batch PDA derivation
/// - Used in: ["batch", drop_key, batch_index]
/// - Batches form the reserved-id ledger in insertion order
pub const BATCH_SEED: &str = "batch";

/// Seed for per-wallet claim counter PDA derivation
/// - Used in: ["wallet_claim", drop_key, condition_epoch, wallet]
/// - The epoch component keeps superseded counters addressable after
///   a condition reset
pub const WALLET_CLAIM_SEED: &str = "wallet_claim";

/// Seed for minted token state PDA derivation
/// - Used in: ["token", drop_key, token_id]
pub const TOKEN_SEED: &str = "token";

/// Seed for token-bound account PDA derivation
/// - Used in: ["token_bound", implementation, chain_id, drop_key, token_id, salt]
/// - The same six seeds always derive the same address
pub const TOKEN_BOUND_SEED: &str = "token_bound";
