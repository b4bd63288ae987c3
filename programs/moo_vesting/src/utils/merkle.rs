use anchor_lang::prelude::*;
use anchor_lang::solana_program::hash::hashv;

/**
 * One step of a merkle proof: a sibling hash and its orientation
 *
 * `is_left` records whether the sibling sits to the left of the running
 * hash at this level. Keeping the orientation explicit (instead of sorting
 * the pair before hashing) makes every step order-sensitive: flipping a
 * single bit or swapping two siblings produces a different root, so a proof
 * only verifies in exactly the shape the tree builder emitted it.
 */
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProofNode {
    /// Sibling hash at this level of the tree
    pub sibling: [u8; 32],
    /// True if the sibling is the left child at this level
    pub is_left: bool,
}

/// Hash of one (claimant, allotment) leaf, as committed by the off-chain
/// tree builder: sha256(claimant_pubkey || allotment_le).
pub fn hash_leaf(claimant: &Pubkey, allotment: u64) -> [u8; 32] {
    hashv(&[&claimant.to_bytes(), &allotment.to_le_bytes()]).to_bytes()
}

/// Recomputes the root from `leaf` by folding the proof, and compares it to
/// `root`. Pure and stateless; returns false on any mismatch, including a
/// truncated or over-long proof, and never errors.
pub fn verify(proof: &[ProofNode], root: [u8; 32], leaf: [u8; 32]) -> bool {
    let mut computed = leaf;
    for node in proof {
        computed = if node.is_left {
            hashv(&[&node.sibling, &computed]).to_bytes()
        } else {
            hashv(&[&computed, &node.sibling]).to_bytes()
        };
    }
    computed == root
}
