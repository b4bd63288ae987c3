use anchor_lang::solana_program::hash::hashv;
use anchor_lang::solana_program::pubkey::Pubkey;
use std::str::FromStr;

use crate::utils::{hash_leaf, verify, ProofNode};

#[derive(Debug, Clone)]
pub struct TreeLeaf {
    pub claimant: Pubkey,
    pub allotment: u64,
}

/**
 * In-test merkle tree over (claimant, allotment) leaves
 *
 * Mirrors what the off-chain commitment publisher produces: leaves hashed as
 * sha256(claimant || allotment_le), intermediate nodes hashed in fixed
 * left-right order (never sorted), odd nodes duplicated upward. Proofs carry
 * the orientation of each sibling, which is exactly what the on-chain
 * verifier folds over.
 */
pub struct OrientedMerkleTree {
    nodes: Vec<[u8; 32]>,
    leaf_count: usize,
}

impl OrientedMerkleTree {
    pub fn new(leaves: &[TreeLeaf]) -> Self {
        let leaf_count = leaves.len();
        let mut nodes: Vec<[u8; 32]> = leaves
            .iter()
            .map(|leaf| hash_leaf(&leaf.claimant, leaf.allotment))
            .collect();

        let mut level_start = 0;
        let mut level_len = leaf_count;
        while level_len > 1 {
            let next_len = (level_len + 1) / 2;
            for i in 0..next_len {
                let left = nodes[level_start + 2 * i];
                let right = if 2 * i + 1 < level_len {
                    nodes[level_start + 2 * i + 1]
                } else {
                    // Duplicate the last node of an odd level
                    left
                };
                nodes.push(hashv(&[&left, &right]).to_bytes());
            }
            level_start += level_len;
            level_len = next_len;
        }

        OrientedMerkleTree { nodes, leaf_count }
    }

    pub fn root(&self) -> [u8; 32] {
        *self.nodes.last().expect("tree is never empty")
    }

    /// Proof for the leaf at `index`, ordered leaf to root.
    pub fn proof(&self, index: usize) -> Vec<ProofNode> {
        assert!(index < self.leaf_count, "leaf index out of bounds");

        let mut proof = Vec::new();
        let mut current = index;
        let mut level_start = 0;
        let mut level_len = self.leaf_count;

        while level_len > 1 {
            // A left child at the end of an odd level pairs with its own
            // duplicate, matching the builder.
            let (sibling_index, is_left) = if current % 2 == 0 {
                ((current + 1).min(level_len - 1), false)
            } else {
                (current - 1, true)
            };
            proof.push(ProofNode {
                sibling: self.nodes[level_start + sibling_index],
                is_left,
            });

            current /= 2;
            level_start += level_len;
            level_len = (level_len + 1) / 2;
        }

        proof
    }
}

pub fn sample_leaves() -> Vec<TreeLeaf> {
    vec![
        TreeLeaf {
            claimant: Pubkey::from_str("3gmBN8LBomg3sZEjTgp2YsECMYgJpjcT7xUfpnDB4gSs").unwrap(),
            allotment: 1000,
        },
        TreeLeaf {
            claimant: Pubkey::from_str("8G9xE8awr9vA2PZWFTJSHNhS16KLnXYdV6XEaJP1a2Yx").unwrap(),
            allotment: 2000,
        },
        TreeLeaf {
            claimant: Pubkey::from_str("A4mDtfFCkdt9CqGzEkfiSHhJD8d3bUMasVzwajudGtb2").unwrap(),
            allotment: 3000,
        },
        TreeLeaf {
            claimant: Pubkey::from_str("4SX6nqv5VRLMoNfYM5phvHgcBNcBEwUEES4qPPjf1EqS").unwrap(),
            allotment: 4000,
        },
    ]
}

#[test]
fn every_leaf_proof_verifies() {
    let leaves = sample_leaves();
    let tree = OrientedMerkleTree::new(&leaves);
    let root = tree.root();

    for (index, leaf) in leaves.iter().enumerate() {
        let proof = tree.proof(index);
        let leaf_hash = hash_leaf(&leaf.claimant, leaf.allotment);
        assert!(
            verify(&proof, root, leaf_hash),
            "proof for leaf {index} did not verify"
        );
    }
}

#[test]
fn odd_leaf_count_still_verifies() {
    let mut leaves = sample_leaves();
    leaves.push(TreeLeaf {
        claimant: Pubkey::new_unique(),
        allotment: 5000,
    });
    let tree = OrientedMerkleTree::new(&leaves);

    for (index, leaf) in leaves.iter().enumerate() {
        let proof = tree.proof(index);
        assert!(verify(&proof, tree.root(), hash_leaf(&leaf.claimant, leaf.allotment)));
    }
}

#[test]
fn wrong_claimant_fails() {
    let leaves = sample_leaves();
    let tree = OrientedMerkleTree::new(&leaves);

    let impostor = hash_leaf(&Pubkey::new_unique(), leaves[0].allotment);
    assert!(!verify(&tree.proof(0), tree.root(), impostor));
}

#[test]
fn tampered_allotment_fails() {
    let leaves = sample_leaves();
    let tree = OrientedMerkleTree::new(&leaves);

    // Genuine member, inflated amount
    let inflated = hash_leaf(&leaves[0].claimant, leaves[0].allotment * 10);
    assert!(!verify(&tree.proof(0), tree.root(), inflated));
}

#[test]
fn flipped_orientation_bit_fails() {
    let leaves = sample_leaves();
    let tree = OrientedMerkleTree::new(&leaves);
    let leaf_hash = hash_leaf(&leaves[1].claimant, leaves[1].allotment);

    for step in 0..tree.proof(1).len() {
        let mut proof = tree.proof(1);
        proof[step].is_left = !proof[step].is_left;
        assert!(
            !verify(&proof, tree.root(), leaf_hash),
            "flipping orientation at step {step} still verified"
        );
    }
}

#[test]
fn tampered_sibling_fails() {
    let leaves = sample_leaves();
    let tree = OrientedMerkleTree::new(&leaves);
    let leaf_hash = hash_leaf(&leaves[2].claimant, leaves[2].allotment);

    let mut proof = tree.proof(2);
    proof[0].sibling[0] = proof[0].sibling[0].wrapping_add(1);
    assert!(!verify(&proof, tree.root(), leaf_hash));
}

#[test]
fn truncated_proof_fails() {
    let leaves = sample_leaves();
    let tree = OrientedMerkleTree::new(&leaves);
    let leaf_hash = hash_leaf(&leaves[0].claimant, leaves[0].allotment);

    let mut proof = tree.proof(0);
    proof.pop();
    assert!(!verify(&proof, tree.root(), leaf_hash));
    assert!(!verify(&[], tree.root(), leaf_hash));
}

#[test]
fn single_leaf_has_empty_proof() {
    let leaves = vec![TreeLeaf {
        claimant: Pubkey::new_unique(),
        allotment: 1000,
    }];
    let tree = OrientedMerkleTree::new(&leaves);

    let proof = tree.proof(0);
    assert!(proof.is_empty());
    assert!(verify(&proof, tree.root(), hash_leaf(&leaves[0].claimant, leaves[0].allotment)));
}
