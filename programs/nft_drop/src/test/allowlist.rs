use anchor_lang::solana_program::pubkey::Pubkey;

use crate::utils::merkle::{allowlist_leaf, verify};

/// One allowlist entry: the wallet plus the terms its proof authorizes
#[derive(Debug, Clone)]
pub struct AllowlistEntry {
    pub wallet: Pubkey,
    pub quantity_limit_per_wallet: u64,
    pub price_per_token: u64,
    pub currency: Pubkey,
}

impl AllowlistEntry {
    fn leaf(&self) -> [u8; 32] {
        allowlist_leaf(
            &self.wallet,
            self.quantity_limit_per_wallet,
            self.price_per_token,
            &self.currency,
        )
    }
}

/// Flat-array merkle tree over allowlist entries, mirroring the on-chain
/// verification scheme (lexicographic pair ordering, odd node duplicated)
pub struct AllowlistTree {
    nodes: Vec<[u8; 32]>,
    leaf_count: usize,
}

impl AllowlistTree {
    pub fn new(entries: &[AllowlistEntry]) -> Self {
        let leaf_count = entries.len();
        let nodes = entries.iter().map(|entry| entry.leaf()).collect();

        let mut tree = AllowlistTree { nodes, leaf_count };
        tree.build();
        tree
    }

    fn hash_pair(left: &[u8; 32], right: &[u8; 32]) -> [u8; 32] {
        use anchor_lang::solana_program::hash::hashv;
        if left <= right {
            hashv(&[left, right]).to_bytes()
        } else {
            hashv(&[right, left]).to_bytes()
        }
    }

    fn build(&mut self) {
        let mut level_len = Self::next_level_len(self.leaf_count);
        let mut level_start = self.leaf_count;
        let mut prev_level_len = self.leaf_count;
        let mut prev_level_start = 0;

        while level_len > 0 {
            for i in 0..level_len {
                let prev_level_idx = 2 * i;
                let left = &self.nodes[prev_level_start + prev_level_idx];
                let right = if prev_level_idx + 1 < prev_level_len {
                    &self.nodes[prev_level_start + prev_level_idx + 1]
                } else {
                    // Duplicate last entry if odd
                    &self.nodes[prev_level_start + prev_level_idx]
                };

                let hash = Self::hash_pair(left, right);
                self.nodes.push(hash);
            }

            prev_level_start = level_start;
            prev_level_len = level_len;
            level_start += level_len;
            level_len = Self::next_level_len(level_len);
        }
    }

    fn next_level_len(level_len: usize) -> usize {
        if level_len == 1 {
            0
        } else {
            level_len.div_ceil(2)
        }
    }

    pub fn root(&self) -> [u8; 32] {
        *self.nodes.last().expect("tree is never empty")
    }

    /// Generate the merkle proof for the leaf at the given index
    pub fn proof(&self, index: usize) -> Vec<[u8; 32]> {
        assert!(index < self.leaf_count, "index out of bounds");

        let mut proof = Vec::new();
        let mut current_index = index;
        let mut level_start = 0;
        let mut level_len = self.leaf_count;

        while level_len > 1 {
            let sibling_index = if current_index % 2 == 0 {
                if current_index + 1 < level_len {
                    current_index + 1
                } else {
                    current_index
                }
            } else {
                current_index - 1
            };

            proof.push(self.nodes[level_start + sibling_index]);

            current_index /= 2;
            level_start += level_len;
            level_len = Self::next_level_len(level_len);
        }

        proof
    }
}

pub fn sample_entries() -> Vec<AllowlistEntry> {
    (0..5)
        .map(|i| AllowlistEntry {
            wallet: Pubkey::new_unique(),
            quantity_limit_per_wallet: 10 + i,
            price_per_token: 100 * (i + 1),
            currency: Pubkey::new_unique(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn proofs_verify_for_every_entry() {
        let entries = sample_entries();
        let tree = AllowlistTree::new(&entries);
        let root = tree.root();

        for (index, entry) in entries.iter().enumerate() {
            let proof = tree.proof(index);
            assert!(
                verify(&proof, root, entry.leaf()),
                "proof failed for index {}",
                index
            );
        }
    }

    #[test]
    fn wrong_wallet_does_not_verify() {
        let entries = sample_entries();
        let tree = AllowlistTree::new(&entries);

        let outsider = AllowlistEntry {
            wallet: Pubkey::new_unique(),
            ..entries[0].clone()
        };
        let proof = tree.proof(0);
        assert!(!verify(&proof, tree.root(), outsider.leaf()));
    }

    #[test]
    fn altered_terms_do_not_verify() {
        // The leaf commits to the override terms, so a claimant cannot
        // reuse a proof with a better price or limit
        let entries = sample_entries();
        let tree = AllowlistTree::new(&entries);
        let proof = tree.proof(1);

        let mut discounted = entries[1].clone();
        discounted.price_per_token = 0;
        assert!(!verify(&proof, tree.root(), discounted.leaf()));

        let mut raised = entries[1].clone();
        raised.quantity_limit_per_wallet = u64::MAX;
        assert!(!verify(&proof, tree.root(), raised.leaf()));
    }

    #[test]
    fn tampered_proof_does_not_verify() {
        let entries = sample_entries();
        let tree = AllowlistTree::new(&entries);

        let mut proof = tree.proof(0);
        proof[0][0] = proof[0][0].wrapping_add(1);
        assert!(!verify(&proof, tree.root(), entries[0].leaf()));
    }

    #[test]
    fn single_entry_tree_has_empty_proof() {
        let entries = vec![AllowlistEntry {
            wallet: Pubkey::new_unique(),
            quantity_limit_per_wallet: 1,
            price_per_token: 0,
            currency: Pubkey::new_unique(),
        }];
        let tree = AllowlistTree::new(&entries);

        let proof = tree.proof(0);
        assert!(proof.is_empty());
        assert_eq!(tree.root(), entries[0].leaf());
        assert!(verify(&proof, tree.root(), entries[0].leaf()));
    }

    #[test]
    fn empty_proof_fails_against_larger_tree() {
        let entries = sample_entries();
        let tree = AllowlistTree::new(&entries);
        assert!(!verify(&[], tree.root(), entries[0].leaf()));
    }
}
