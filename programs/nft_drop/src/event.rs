use anchor_lang::prelude::*;

/// Event emitted when a new drop is created
#[event]
pub struct DropCreated {
    /// The drop state account public key
    pub drop: Pubkey,
    /// Nonce of the drop
    pub nonce: u32,
    /// Admin of the drop
    pub admin: Pubkey,
    /// Treasury that receives claim payments
    pub treasury: Pubkey,
}

/// Event emitted when a claim condition is installed or tuned
#[event]
pub struct ClaimConditionSet {
    /// The drop state account public key
    pub drop: Pubkey,
    /// Epoch the condition belongs to
    pub epoch: u64,
    /// Unix timestamp the condition opens at
    pub start_timestamp: i64,
    /// Ceiling on tokens claimable under this condition
    pub max_claimable_supply: u64,
    /// Per-wallet claim allowance
    pub quantity_limit_per_wallet: u64,
    /// Allowlist commitment root, all-zero when open
    pub merkle_root: [u8; 32],
    /// Price per token in the condition currency
    pub price_per_token: u64,
    /// Currency the price is denominated in
    pub currency: Pubkey,
    /// Whether per-wallet eligibility was reset
    pub reset_eligibility: bool,
}

/// Event emitted when the per-claim quantity cap changes
#[event]
pub struct QuantityPerClaimSet {
    /// The drop state account public key
    pub drop: Pubkey,
    /// New per-claim cap
    pub quantity: u64,
}

/// Event emitted when the global base URI override changes
#[event]
pub struct GlobalBaseUriSet {
    /// The drop state account public key
    pub drop: Pubkey,
    /// New global base URI, empty to fall back to batch URIs
    pub uri: String,
}

/// Event emitted when a batch of token ids is reserved
#[event]
pub struct LazyMinted {
    /// The drop state account public key
    pub drop: Pubkey,
    /// Index of the batch in the ledger
    pub batch_index: u32,
    /// First reserved id (inclusive)
    pub start_id: u64,
    /// Last reserved id (exclusive)
    pub end_id: u64,
    /// Base URI the batch resolves under
    pub base_uri: String,
}

/// Event emitted when tokens are claimed
#[event]
pub struct TokensClaimed {
    /// The drop state account public key
    pub drop: Pubkey,
    /// Signer that paid for the claim
    pub claimant: Pubkey,
    /// Wallet the tokens were minted to
    pub receiver: Pubkey,
    /// First minted id of this claim
    pub start_id: u64,
    /// Number of tokens minted
    pub quantity: u64,
    /// Condition epoch the claim was counted against
    pub epoch: u64,
    /// Supply claimed under the active condition after this claim
    pub supply_claimed: u64,
}

/// Event emitted once per account freshly deployed in a claim-and-create call
#[event]
pub struct TokenBoundAccountCreated {
    /// Token the account is bound to
    pub token_id: u64,
    /// Deterministically derived account address
    pub account_address: Pubkey,
}

/// Event emitted once per token when a non-zero seed deposit is made
#[event]
pub struct InitialTokenTransferred {
    /// The funded token-bound account address
    pub account_address: Pubkey,
    /// Amount deposited
    pub amount: u64,
    /// Mint of the deposited asset
    pub asset: Pubkey,
}

/// Event emitted when a stale wallet claim counter is closed
#[event]
pub struct WalletClaimStatusClosed {
    /// The drop state account public key
    pub drop: Pubkey,
    /// Epoch the counter belonged to
    pub epoch: u64,
    /// Wallet the counter tracked
    pub wallet: Pubkey,
    /// Amount the wallet had claimed in that epoch
    pub claimed: u64,
}
