use anchor_lang::prelude::*;

#[error_code]
pub enum DropError {
    // Access control errors
    #[msg("Only the drop admin can perform this action")]
    Unauthorized,

    // Quantity validation errors
    #[msg("Invalid amount")]
    InvalidAmount,
    #[msg("Requested quantity exceeds the per-claim cap")]
    TooManyTokensClaimed,

    // Claim condition errors
    #[msg("Claim condition is not active yet")]
    ClaimNotStarted,
    #[msg("Claim exceeds the remaining supply")]
    SupplyExceeded,
    #[msg("Claim exceeds the wallet's remaining allowance")]
    WalletLimitExceeded,
    #[msg("Allowlist proof is invalid for this wallet")]
    AllowlistProofInvalid,
    #[msg("Price does not match the active claim condition")]
    PriceMismatch,
    #[msg("Currency does not match the active claim condition")]
    CurrencyMismatch,

    // Transfer errors
    #[msg("Balance is short of the required transfer amount")]
    InsufficientAllowance,
    #[msg("Currency token accounts are required for a non-native price")]
    CurrencyAccountMissing,
    #[msg("Treasury account does not match the drop treasury")]
    TreasuryMismatch,

    // Account derivation errors
    #[msg("Account does not match its derived address")]
    AccountDerivationFailed,

    // Data size errors
    #[msg("URI exceeds the maximum length")]
    UriTooLong,
    #[msg("Metadata exceeds the maximum length")]
    MetadataTooLong,

    // Lifecycle errors
    #[msg("Claim counters for the active epoch cannot be closed")]
    EpochStillActive,

    // System level errors
    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,
}
