use anchor_lang::prelude::*;

use crate::constants::*;

/**
 * One minted token
 *
 * Created at claim time with a monotonically assigned id. Id and owner are
 * fixed at mint; transfers are out of scope for this program.
 *
 * Derivation: ["token", drop_key, token_id]
 */
#[account]
#[derive(Default, Debug)]
pub struct TokenState {
    /// Bump seed for PDA derivation
    pub bump: u8,
    /// Unique id, assigned consecutively starting at 0
    pub token_id: u64,
    /// Wallet the token was minted to
    pub owner: Pubkey,
    /// Drop the token belongs to
    pub drop: Pubkey,
}

impl TokenState {
    /// Space required for this account
    pub const LEN: usize = 8 + std::mem::size_of::<TokenState>();

    /// Deterministic address of a token's state record
    pub fn derive(program_id: &Pubkey, drop: &Pubkey, token_id: u64) -> (Pubkey, u8) {
        Pubkey::find_program_address(
            &[TOKEN_SEED.as_bytes(), drop.as_ref(), &token_id.to_le_bytes()],
            program_id,
        )
    }
}

/**
 * Smart account bound to one token
 *
 * The address is derived from (implementation, chain_id, drop, token_id,
 * salt): the same five inputs always yield the same address, independent of
 * call order or prior deployments. Deploying to an already-deployed address
 * is a no-op success. The binding never changes once created.
 *
 * Derivation: ["token_bound", implementation, chain_id, drop_key, token_id, salt]
 */
#[account]
#[derive(Default, Debug)]
pub struct TokenBoundAccount {
    /// Bump seed for PDA derivation
    pub bump: u8,
    /// Token the account is bound to
    pub token_id: u64,
    /// Drop the bound token belongs to
    pub token_contract: Pubkey,
    /// Account implementation identifier used in the derivation
    pub implementation: Pubkey,
    /// Chain identifier used in the derivation
    pub chain_id: u64,
    /// Caller-chosen salt used in the derivation
    pub salt: [u8; 32],
    /// Unix timestamp of deployment
    pub created_at: i64,
}

impl TokenBoundAccount {
    /// Space required for this account
    pub const LEN: usize = 8 + std::mem::size_of::<TokenBoundAccount>();

    /// Deterministic address of the account bound to a token
    pub fn derive(
        program_id: &Pubkey,
        implementation: &Pubkey,
        chain_id: u64,
        drop: &Pubkey,
        token_id: u64,
        salt: &[u8; 32],
    ) -> (Pubkey, u8) {
        Pubkey::find_program_address(
            &[
                TOKEN_BOUND_SEED.as_bytes(),
                implementation.as_ref(),
                &chain_id.to_le_bytes(),
                drop.as_ref(),
                &token_id.to_le_bytes(),
                salt.as_ref(),
            ],
            program_id,
        )
    }
}

/// Minted token id paired with its bound account address
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct TokenBoundAccountRecord {
    pub token_id: u64,
    pub account: Pubkey,
}
