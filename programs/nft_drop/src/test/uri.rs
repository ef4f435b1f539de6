use crate::state::{resolve_token_uri, LazyMintBatch};

fn ledger() -> Vec<LazyMintBatch> {
    vec![
        LazyMintBatch {
            bump: 0,
            batch_index: 0,
            start_id: 0,
            end_id: 3,
            base_uri: "ipfs://first/".to_string(),
            extra_data: vec![],
        },
        LazyMintBatch {
            bump: 0,
            batch_index: 1,
            start_id: 3,
            end_id: 10,
            base_uri: "ipfs://second/".to_string(),
            extra_data: vec![],
        },
    ]
}

#[test]
fn batch_uri_applies_right_after_lazy_mint() {
    let batches = ledger();

    assert_eq!(
        resolve_token_uri("", &batches, 0).as_deref(),
        Some("ipfs://first/0")
    );
    assert_eq!(
        resolve_token_uri("", &batches, 2).as_deref(),
        Some("ipfs://first/2")
    );
    // Batch boundaries: id 3 belongs to the second batch
    assert_eq!(
        resolve_token_uri("", &batches, 3).as_deref(),
        Some("ipfs://second/3")
    );
    assert_eq!(
        resolve_token_uri("", &batches, 9).as_deref(),
        Some("ipfs://second/9")
    );
}

#[test]
fn global_override_wins_for_all_batches() {
    let batches = ledger();

    // Past and future ids alike resolve under the override
    assert_eq!(
        resolve_token_uri("https://cdn.example/t/", &batches, 1).as_deref(),
        Some("https://cdn.example/t/1")
    );
    assert_eq!(
        resolve_token_uri("https://cdn.example/t/", &batches, 9).as_deref(),
        Some("https://cdn.example/t/9")
    );
}

#[test]
fn unreserved_ids_do_not_resolve() {
    let batches = ledger();

    assert_eq!(resolve_token_uri("", &batches, 10), None);
    assert_eq!(resolve_token_uri("https://cdn.example/t/", &batches, 10), None);
    assert_eq!(resolve_token_uri("", &[], 0), None);
}

#[test]
fn batch_membership_matches_the_reserved_range() {
    let batches = ledger();

    assert!(batches[0].contains(0));
    assert!(batches[0].contains(2));
    assert!(!batches[0].contains(3));
    assert!(batches[1].contains(3));
    assert!(!batches[1].contains(10));
}
