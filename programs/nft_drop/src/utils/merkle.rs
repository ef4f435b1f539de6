use anchor_lang::solana_program::hash::hashv;
use anchor_lang::solana_program::pubkey::Pubkey;

/// Leaf hash of one allowlist entry.
///
/// Commits to the wallet and the override fields, so a proof only
/// authorizes the exact terms it was issued for.
pub fn allowlist_leaf(
    wallet: &Pubkey,
    quantity_limit_per_wallet: u64,
    price_per_token: u64,
    currency: &Pubkey,
) -> [u8; 32] {
    hashv(&[
        &wallet.to_bytes(),
        &quantity_limit_per_wallet.to_le_bytes(),
        &price_per_token.to_le_bytes(),
        &currency.to_bytes(),
    ])
    .to_bytes()
}

/// Verifies a merkle proof against a commitment root.
///
/// Sibling pairs are hashed in lexicographic order, so proofs carry no
/// left/right flags. An empty proof verifies only the single-leaf tree
/// whose root is the leaf itself.
pub fn verify(proof: &[[u8; 32]], root: [u8; 32], leaf: [u8; 32]) -> bool {
    let mut computed_hash = leaf;
    for proof_element in proof.iter() {
        if computed_hash <= *proof_element {
            computed_hash = hashv(&[&computed_hash, proof_element]).to_bytes();
        } else {
            computed_hash = hashv(&[proof_element, &computed_hash]).to_bytes();
        }
    }
    computed_hash == root
}
