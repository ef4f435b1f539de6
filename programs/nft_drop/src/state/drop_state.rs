use anchor_lang::prelude::*;

use crate::constants::*;
use crate::error::DropError;
use crate::utils::merkle;

/**
 * Main drop state account
 *
 * This struct represents the core state of one collectible drop campaign:
 * the active claim condition, the per-call quantity cap, the lazy-mint
 * reservation ledger head, and the metadata URI override.
 *
 * Derivation: ["drop", admin, nonce]
 *
 * Lifecycle:
 * 1. Created during create_drop
 * 2. Tuned through the admin setters (condition, cap, global URI)
 * 3. Extended by lazy_mint (reserved ids grow)
 * 4. Updated during claims (supply counters and next_token_id advance)
 */
#[account]
#[derive(Default, Debug)]
pub struct DropState {
    /// Bump seed for PDA derivation
    pub bump: u8,

    /// Nonce number for this drop
    /// - Allows multiple drop campaigns for the same admin
    pub nonce: u32,

    /// Admin of the drop
    /// - Gates every configuration instruction
    pub admin: Pubkey,

    /// Destination of claim payments
    pub treasury: Pubkey,

    /// Cap on tokens claimable in a single call
    /// - Defaults to DEFAULT_QUANTITY_PER_CLAIM
    pub quantity_per_claim: u64,

    /// First token id that has not been claimed yet
    /// - Ids are assigned consecutively starting at 0
    pub next_token_id: u64,

    /// Total ids reserved by lazy-mint batches
    /// - Always >= next_token_id; claims never cross this ceiling
    pub total_reserved: u64,

    /// Number of batches appended to the lazy-mint ledger
    pub batch_count: u32,

    /// Epoch of the active claim condition
    /// - 0 until the first condition is installed
    /// - Incremented whenever eligibility is reset, which re-keys the
    ///   per-wallet claim counters
    pub condition_epoch: u64,

    /// Global base URI override
    /// - Empty string falls back to the per-batch base URI
    pub global_base_uri: String,

    /// The active claim condition
    pub condition: ClaimCondition,
}

impl DropState {
    /// Space required for this account, string fields at their caps
    pub const LEN: usize = 8 + // discriminator
        1 +  // bump
        4 +  // nonce
        32 + // admin
        32 + // treasury
        8 +  // quantity_per_claim
        8 +  // next_token_id
        8 +  // total_reserved
        4 +  // batch_count
        8 +  // condition_epoch
        4 + MAX_BASE_URI_LEN + // global_base_uri
        ClaimCondition::LEN +
        64; // padding for future expansion

    /// Rejects quantities outside the per-call window.
    ///
    /// Runs before any condition state is consulted so the error kind is
    /// stable regardless of supply or wallet accounting.
    pub fn ensure_claimable_quantity(&self, quantity: u64) -> Result<()> {
        require!(quantity >= 1, DropError::InvalidAmount);
        require!(
            quantity <= self.quantity_per_claim,
            DropError::TooManyTokensClaimed
        );
        Ok(())
    }

    /// Read-side claim validation.
    ///
    /// Evaluation order: time window, remaining supply (condition ceiling and
    /// reservation ceiling), per-wallet allowance, allowlist proof, then the
    /// caller-supplied currency and price against the effective terms.
    ///
    /// Returns the effective terms so the caller charges exactly what was
    /// validated.
    pub fn validate_claim(
        &self,
        now: i64,
        wallet: &Pubkey,
        wallet_claimed: u64,
        quantity: u64,
        proof: &AllowlistProof,
        expected_currency: &Pubkey,
        expected_price: u64,
    ) -> Result<EffectiveClaimTerms> {
        let condition = &self.condition;

        // No condition installed yet counts as not started
        require!(self.condition_epoch > 0, DropError::ClaimNotStarted);
        require!(now >= condition.start_timestamp, DropError::ClaimNotStarted);

        let claimed_after = condition
            .supply_claimed
            .checked_add(quantity)
            .ok_or(DropError::ArithmeticOverflow)?;
        require!(
            claimed_after <= condition.max_claimable_supply,
            DropError::SupplyExceeded
        );

        // Reservation is an independent ceiling: ids that were never lazy
        // minted cannot be claimed even under a permissive condition
        let minted_after = self
            .next_token_id
            .checked_add(quantity)
            .ok_or(DropError::ArithmeticOverflow)?;
        require!(minted_after <= self.total_reserved, DropError::SupplyExceeded);

        let terms = condition.effective_terms(proof);

        let wallet_after = wallet_claimed
            .checked_add(quantity)
            .ok_or(DropError::ArithmeticOverflow)?;
        require!(
            wallet_after <= terms.quantity_limit_per_wallet,
            DropError::WalletLimitExceeded
        );

        if condition.allowlist_active() {
            let leaf = merkle::allowlist_leaf(
                wallet,
                proof.quantity_limit_per_wallet,
                proof.price_per_token,
                &proof.currency,
            );
            require!(
                merkle::verify(&proof.proof, condition.merkle_root, leaf),
                DropError::AllowlistProofInvalid
            );
        }

        require!(
            *expected_currency == terms.currency,
            DropError::CurrencyMismatch
        );
        require!(expected_price == terms.price_per_token, DropError::PriceMismatch);

        Ok(terms)
    }
}

/**
 * Immutable snapshot of one eligibility epoch
 *
 * Installed by set_claim_conditions; only supply_claimed mutates afterwards,
 * and it never exceeds max_claimable_supply. Violating claims are rejected,
 * not clamped.
 */
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Default, Debug, PartialEq)]
pub struct ClaimCondition {
    /// Unix timestamp the condition opens at
    pub start_timestamp: i64,
    /// Ceiling on tokens claimable under this condition
    pub max_claimable_supply: u64,
    /// Tokens claimed under this condition so far
    pub supply_claimed: u64,
    /// Per-wallet claim allowance for the condition's epoch
    pub quantity_limit_per_wallet: u64,
    /// Allowlist commitment root
    /// - All-zero means the allowlist is open
    pub merkle_root: [u8; 32],
    /// Price per token
    pub price_per_token: u64,
    /// Currency the price is denominated in
    /// - NATIVE_CURRENCY selects lamports
    pub currency: Pubkey,
    /// Opaque condition metadata, uninterpreted by the program
    pub metadata: String,
}

impl ClaimCondition {
    pub const LEN: usize = 8 + // start_timestamp
        8 +  // max_claimable_supply
        8 +  // supply_claimed
        8 +  // quantity_limit_per_wallet
        32 + // merkle_root
        8 +  // price_per_token
        32 + // currency
        4 + MAX_CONDITION_METADATA_LEN; // metadata

    /// Whether claims must carry a membership proof
    pub fn allowlist_active(&self) -> bool {
        self.merkle_root != [0u8; 32]
    }

    /// Resolves the terms a claim is actually charged and limited by.
    ///
    /// Proof overrides only apply while the allowlist is active; sentinel
    /// fields (0 limit, PROOF_PRICE_UNSET price, default currency) fall back
    /// to the condition values.
    pub fn effective_terms(&self, proof: &AllowlistProof) -> EffectiveClaimTerms {
        if !self.allowlist_active() {
            return EffectiveClaimTerms {
                quantity_limit_per_wallet: self.quantity_limit_per_wallet,
                price_per_token: self.price_per_token,
                currency: self.currency,
            };
        }
        EffectiveClaimTerms {
            quantity_limit_per_wallet: if proof.quantity_limit_per_wallet > 0 {
                proof.quantity_limit_per_wallet
            } else {
                self.quantity_limit_per_wallet
            },
            price_per_token: if proof.price_per_token != PROOF_PRICE_UNSET {
                proof.price_per_token
            } else {
                self.price_per_token
            },
            currency: if proof.currency != Pubkey::default() {
                proof.currency
            } else {
                self.currency
            },
        }
    }
}

/// Caller-supplied allowlist membership evidence
///
/// The leaf hash commits to the wallet together with the override fields, so
/// forged overrides fail proof verification.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Default, Debug)]
pub struct AllowlistProof {
    /// Sibling hashes from the leaf up to the root
    pub proof: Vec<[u8; 32]>,
    /// Wallet limit override, 0 to inherit the condition's
    pub quantity_limit_per_wallet: u64,
    /// Price override, PROOF_PRICE_UNSET to inherit the condition's
    pub price_per_token: u64,
    /// Currency override, default pubkey to inherit the condition's
    pub currency: Pubkey,
}

/// Terms a claim is validated and charged under after proof overrides
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EffectiveClaimTerms {
    pub quantity_limit_per_wallet: u64,
    pub price_per_token: u64,
    pub currency: Pubkey,
}
