use anchor_lang::prelude::*;

use crate::constants::*;

/**
 * One entry of the lazy-mint ledger
 *
 * Each batch reserves a consecutive range of token ids under a shared base
 * URI. Batches are appended in insertion order: batch N starts where batch
 * N-1 ended, so ranges never overlap and start ids are strictly increasing.
 *
 * Derivation: ["batch", drop_key, batch_index]
 *
 * Lifecycle:
 * 1. Created during lazy_mint
 * 2. Immutable afterwards; URI resolution reads it for the life of the drop
 */
#[account]
#[derive(Default, Debug)]
pub struct LazyMintBatch {
    /// Bump seed for PDA derivation
    pub bump: u8,
    /// Position of this batch in the ledger
    pub batch_index: u32,
    /// First reserved id (inclusive)
    pub start_id: u64,
    /// One past the last reserved id (exclusive)
    pub end_id: u64,
    /// Base URI the batch's tokens resolve under
    pub base_uri: String,
    /// Opaque payload supplied at lazy-mint time, uninterpreted
    pub extra_data: Vec<u8>,
}

impl LazyMintBatch {
    /// Space required for this account, variable fields at their caps
    pub const LEN: usize = 8 + // discriminator
        1 +  // bump
        4 +  // batch_index
        8 +  // start_id
        8 +  // end_id
        4 + MAX_BASE_URI_LEN + // base_uri
        4 + MAX_BATCH_EXTRA_DATA_LEN; // extra_data

    /// Whether this batch reserved the given id
    pub fn contains(&self, token_id: u64) -> bool {
        token_id >= self.start_id && token_id < self.end_id
    }

    /// Resolves the displayable URI of an id inside this batch.
    ///
    /// A non-empty global base URI overrides the batch URI for all tokens,
    /// past and future; ids outside the batch resolve to None.
    pub fn uri_for(&self, global_base_uri: &str, token_id: u64) -> Option<String> {
        if !self.contains(token_id) {
            return None;
        }
        let base = if global_base_uri.is_empty() {
            &self.base_uri
        } else {
            global_base_uri
        };
        Some(format!("{}{}", base, token_id))
    }
}

/// Resolves a token URI against the ledger, batch containing the id wins
pub fn resolve_token_uri(
    global_base_uri: &str,
    batches: &[LazyMintBatch],
    token_id: u64,
) -> Option<String> {
    batches
        .iter()
        .find(|batch| batch.contains(token_id))
        .and_then(|batch| batch.uri_for(global_base_uri, token_id))
}
