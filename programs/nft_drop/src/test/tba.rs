use anchor_lang::solana_program::pubkey::Pubkey;

use crate::state::{TokenBoundAccount, TokenState};

struct Derivation {
    implementation: Pubkey,
    chain_id: u64,
    drop: Pubkey,
    salt: [u8; 32],
}

fn fixed_inputs() -> Derivation {
    Derivation {
        implementation: Pubkey::new_unique(),
        chain_id: 101,
        drop: Pubkey::new_unique(),
        salt: [7u8; 32],
    }
}

#[test]
fn derivation_is_deterministic_across_calls() {
    let inputs = fixed_inputs();

    for token_id in [0u64, 1, 42, u64::MAX] {
        let (first, first_bump) = TokenBoundAccount::derive(
            &crate::ID,
            &inputs.implementation,
            inputs.chain_id,
            &inputs.drop,
            token_id,
            &inputs.salt,
        );
        let (second, second_bump) = TokenBoundAccount::derive(
            &crate::ID,
            &inputs.implementation,
            inputs.chain_id,
            &inputs.drop,
            token_id,
            &inputs.salt,
        );
        assert_eq!(first, second);
        assert_eq!(first_bump, second_bump);
    }
}

#[test]
fn distinct_token_ids_derive_distinct_accounts() {
    let inputs = fixed_inputs();

    let addresses: Vec<Pubkey> = (0..3)
        .map(|token_id| {
            TokenBoundAccount::derive(
                &crate::ID,
                &inputs.implementation,
                inputs.chain_id,
                &inputs.drop,
                token_id,
                &inputs.salt,
            )
            .0
        })
        .collect();

    assert_ne!(addresses[0], addresses[1]);
    assert_ne!(addresses[1], addresses[2]);
    assert_ne!(addresses[0], addresses[2]);
}

#[test]
fn every_derivation_input_contributes() {
    let inputs = fixed_inputs();
    let base = TokenBoundAccount::derive(
        &crate::ID,
        &inputs.implementation,
        inputs.chain_id,
        &inputs.drop,
        0,
        &inputs.salt,
    )
    .0;

    let other_salt = TokenBoundAccount::derive(
        &crate::ID,
        &inputs.implementation,
        inputs.chain_id,
        &inputs.drop,
        0,
        &[8u8; 32],
    )
    .0;
    assert_ne!(base, other_salt);

    let other_chain = TokenBoundAccount::derive(
        &crate::ID,
        &inputs.implementation,
        999,
        &inputs.drop,
        0,
        &inputs.salt,
    )
    .0;
    assert_ne!(base, other_chain);

    let other_implementation = TokenBoundAccount::derive(
        &crate::ID,
        &Pubkey::new_unique(),
        inputs.chain_id,
        &inputs.drop,
        0,
        &inputs.salt,
    )
    .0;
    assert_ne!(base, other_implementation);
}

#[test]
fn token_state_addresses_do_not_collide_with_bound_accounts() {
    let inputs = fixed_inputs();

    let (token_state, _) = TokenState::derive(&crate::ID, &inputs.drop, 0);
    let (bound, _) = TokenBoundAccount::derive(
        &crate::ID,
        &inputs.implementation,
        inputs.chain_id,
        &inputs.drop,
        0,
        &inputs.salt,
    );
    assert_ne!(token_state, bound);
}
