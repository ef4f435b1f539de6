use anchor_lang::solana_program::pubkey::Pubkey;

use crate::constants::*;
use crate::error::DropError;
use crate::state::*;
use crate::test::allowlist::{AllowlistEntry, AllowlistTree};

fn open_condition() -> ClaimCondition {
    ClaimCondition {
        start_timestamp: 0,
        max_claimable_supply: 100,
        supply_claimed: 0,
        quantity_limit_per_wallet: 20,
        merkle_root: [0u8; 32],
        price_per_token: 0,
        currency: NATIVE_CURRENCY,
        metadata: String::new(),
    }
}

fn active_drop(condition: ClaimCondition) -> DropState {
    DropState {
        quantity_per_claim: DEFAULT_QUANTITY_PER_CLAIM,
        total_reserved: 1_000,
        condition_epoch: 1,
        condition,
        ..Default::default()
    }
}

fn wallet() -> Pubkey {
    Pubkey::new_unique()
}

#[test]
fn quantity_cap_defaults_to_one() {
    let drop = active_drop(open_condition());

    assert!(drop.ensure_claimable_quantity(1).is_ok());
    assert_eq!(
        drop.ensure_claimable_quantity(2).unwrap_err(),
        DropError::TooManyTokensClaimed.into()
    );
    assert_eq!(
        drop.ensure_claimable_quantity(0).unwrap_err(),
        DropError::InvalidAmount.into()
    );
}

#[test]
fn quantity_cap_follows_the_setting() {
    let mut drop = active_drop(open_condition());
    drop.quantity_per_claim = 3;

    assert!(drop.ensure_claimable_quantity(3).is_ok());
    assert_eq!(
        drop.ensure_claimable_quantity(4).unwrap_err(),
        DropError::TooManyTokensClaimed.into()
    );
}

#[test]
fn no_condition_counts_as_not_started() {
    let mut drop = active_drop(open_condition());
    drop.condition_epoch = 0;

    let err = drop
        .validate_claim(0, &wallet(), 0, 1, &AllowlistProof::default(), &NATIVE_CURRENCY, 0)
        .unwrap_err();
    assert_eq!(err, DropError::ClaimNotStarted.into());
}

#[test]
fn time_window_precedes_every_other_check() {
    // Supply and wallet limits are also violated here; the time error
    // must still win
    let mut condition = open_condition();
    condition.start_timestamp = 1_000;
    condition.max_claimable_supply = 0;
    condition.quantity_limit_per_wallet = 0;
    let drop = active_drop(condition);

    let err = drop
        .validate_claim(999, &wallet(), 50, 1, &AllowlistProof::default(), &NATIVE_CURRENCY, 0)
        .unwrap_err();
    assert_eq!(err, DropError::ClaimNotStarted.into());
}

#[test]
fn condition_supply_is_enforced() {
    let mut condition = open_condition();
    condition.supply_claimed = 99;
    // The wallet limit would also trip; supply is checked first
    condition.quantity_limit_per_wallet = 0;
    let drop = active_drop(condition);

    let err = drop
        .validate_claim(0, &wallet(), 0, 2, &AllowlistProof::default(), &NATIVE_CURRENCY, 0)
        .unwrap_err();
    assert_eq!(err, DropError::SupplyExceeded.into());
}

#[test]
fn reservation_is_an_independent_ceiling() {
    // The condition still admits 100 tokens, but only 5 ids were ever
    // lazy minted
    let mut drop = active_drop(open_condition());
    drop.total_reserved = 5;
    drop.next_token_id = 4;

    let err = drop
        .validate_claim(0, &wallet(), 0, 2, &AllowlistProof::default(), &NATIVE_CURRENCY, 0)
        .unwrap_err();
    assert_eq!(err, DropError::SupplyExceeded.into());

    assert!(drop
        .validate_claim(0, &wallet(), 0, 1, &AllowlistProof::default(), &NATIVE_CURRENCY, 0)
        .is_ok());
}

#[test]
fn wallet_limit_precedes_proof_verification() {
    let claimer = wallet();
    let entry = AllowlistEntry {
        wallet: claimer,
        quantity_limit_per_wallet: 5,
        price_per_token: PROOF_PRICE_UNSET,
        currency: Pubkey::default(),
    };
    let tree = AllowlistTree::new(&[entry]);

    let mut condition = open_condition();
    condition.merkle_root = tree.root();
    let drop = active_drop(condition);

    // The proof is garbage, but the wallet allowance is exhausted first
    let proof = AllowlistProof {
        proof: vec![[0xAB; 32]],
        quantity_limit_per_wallet: 5,
        price_per_token: PROOF_PRICE_UNSET,
        currency: Pubkey::default(),
    };
    let err = drop
        .validate_claim(0, &claimer, 5, 1, &proof, &NATIVE_CURRENCY, 0)
        .unwrap_err();
    assert_eq!(err, DropError::WalletLimitExceeded.into());
}

#[test]
fn invalid_proof_is_rejected_when_allowlist_is_active() {
    let claimer = wallet();
    let listed = AllowlistEntry {
        wallet: Pubkey::new_unique(),
        quantity_limit_per_wallet: 5,
        price_per_token: PROOF_PRICE_UNSET,
        currency: Pubkey::default(),
    };
    let tree = AllowlistTree::new(&[listed]);

    let mut condition = open_condition();
    condition.merkle_root = tree.root();
    let drop = active_drop(condition);

    let proof = AllowlistProof {
        proof: tree.proof(0),
        quantity_limit_per_wallet: 5,
        price_per_token: PROOF_PRICE_UNSET,
        currency: Pubkey::default(),
    };
    let err = drop
        .validate_claim(0, &claimer, 0, 1, &proof, &NATIVE_CURRENCY, 0)
        .unwrap_err();
    assert_eq!(err, DropError::AllowlistProofInvalid.into());
}

#[test]
fn valid_proof_overrides_the_condition_terms() {
    let claimer = wallet();
    let special_currency = Pubkey::new_unique();
    let entry = AllowlistEntry {
        wallet: claimer,
        quantity_limit_per_wallet: 3,
        price_per_token: 7,
        currency: special_currency,
    };
    let tree = AllowlistTree::new(&[entry]);

    let mut condition = open_condition();
    condition.merkle_root = tree.root();
    condition.quantity_limit_per_wallet = 1;
    condition.price_per_token = 1_000;
    let drop = active_drop(condition);

    let proof = AllowlistProof {
        proof: tree.proof(0),
        quantity_limit_per_wallet: 3,
        price_per_token: 7,
        currency: special_currency,
    };

    // Quantity 3 exceeds the condition limit but not the proof's
    let terms = drop
        .validate_claim(0, &claimer, 0, 3, &proof, &special_currency, 7)
        .unwrap();
    assert_eq!(
        terms,
        EffectiveClaimTerms {
            quantity_limit_per_wallet: 3,
            price_per_token: 7,
            currency: special_currency,
        }
    );
}

#[test]
fn proof_sentinels_fall_back_to_the_condition() {
    let claimer = wallet();
    let entry = AllowlistEntry {
        wallet: claimer,
        quantity_limit_per_wallet: 0,
        price_per_token: PROOF_PRICE_UNSET,
        currency: Pubkey::default(),
    };
    let tree = AllowlistTree::new(&[entry]);

    let mut condition = open_condition();
    condition.merkle_root = tree.root();
    condition.price_per_token = 42;
    let drop = active_drop(condition);

    let proof = AllowlistProof {
        proof: tree.proof(0),
        quantity_limit_per_wallet: 0,
        price_per_token: PROOF_PRICE_UNSET,
        currency: Pubkey::default(),
    };
    let terms = drop
        .validate_claim(0, &claimer, 0, 1, &proof, &NATIVE_CURRENCY, 42)
        .unwrap();
    assert_eq!(terms.quantity_limit_per_wallet, 20);
    assert_eq!(terms.price_per_token, 42);
    assert_eq!(terms.currency, NATIVE_CURRENCY);
}

#[test]
fn currency_is_checked_before_price() {
    let mut condition = open_condition();
    condition.price_per_token = 10;
    condition.currency = Pubkey::new_unique();
    let drop = active_drop(condition);

    // Both expectations are wrong; currency wins
    let err = drop
        .validate_claim(0, &wallet(), 0, 1, &AllowlistProof::default(), &NATIVE_CURRENCY, 99)
        .unwrap_err();
    assert_eq!(err, DropError::CurrencyMismatch.into());

    let err = drop
        .validate_claim(
            0,
            &wallet(),
            0,
            1,
            &AllowlistProof::default(),
            &drop.condition.currency,
            99,
        )
        .unwrap_err();
    assert_eq!(err, DropError::PriceMismatch.into());
}

#[test]
fn supply_never_exceeds_the_ceiling_across_claims() {
    let mut drop = active_drop(open_condition());
    drop.quantity_per_claim = 20;
    let claimer = wallet();

    let mut wallet_claimed = 0u64;
    for _ in 0..5 {
        drop.ensure_claimable_quantity(4).unwrap();
        drop.validate_claim(
            0,
            &claimer,
            wallet_claimed,
            4,
            &AllowlistProof::default(),
            &NATIVE_CURRENCY,
            0,
        )
        .unwrap();
        drop.condition.supply_claimed += 4;
        drop.next_token_id += 4;
        wallet_claimed += 4;
        assert!(drop.condition.supply_claimed <= drop.condition.max_claimable_supply);
    }

    // The wallet's 20-token allowance is now exhausted
    let err = drop
        .validate_claim(
            0,
            &claimer,
            wallet_claimed,
            1,
            &AllowlistProof::default(),
            &NATIVE_CURRENCY,
            0,
        )
        .unwrap_err();
    assert_eq!(err, DropError::WalletLimitExceeded.into());
}

#[test]
fn example_scenario_from_the_drop_settings() {
    // Condition: max supply 100, wallet limit 20, free mint
    let mut drop = active_drop(open_condition());
    let claimer = wallet();

    // Default cap of 1: a single-token claim passes
    drop.ensure_claimable_quantity(1).unwrap();
    drop.validate_claim(0, &claimer, 0, 1, &AllowlistProof::default(), &NATIVE_CURRENCY, 0)
        .unwrap();
    drop.condition.supply_claimed += 1;
    drop.next_token_id += 1;
    assert_eq!(drop.condition.supply_claimed, 1);

    // Raising the cap to 3 still rejects a 4-token claim
    drop.quantity_per_claim = 3;
    assert_eq!(
        drop.ensure_claimable_quantity(4).unwrap_err(),
        DropError::TooManyTokensClaimed.into()
    );

    // A 3-token claim passes both the cap and the condition
    drop.ensure_claimable_quantity(3).unwrap();
    drop.validate_claim(0, &claimer, 1, 3, &AllowlistProof::default(), &NATIVE_CURRENCY, 0)
        .unwrap();
}
