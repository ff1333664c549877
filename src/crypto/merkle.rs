//! Merkle root computation
//!
//! Used for the transaction merkle root committed to by a block header.

use super::{hash_pair, Hash};

/// Compute the merkle root of a list of hashes
///
/// If the list is empty, returns zero hash.
/// If odd number of elements, duplicates the last element.
pub fn compute_merkle_root(hashes: &[Hash]) -> Hash {
    if hashes.is_empty() {
        return Hash::zero();
    }

    if hashes.len() == 1 {
        return hashes[0];
    }

    let mut current_level: Vec<Hash> = hashes.to_vec();

    while current_level.len() > 1 {
        // If odd number, duplicate last
        if current_level.len() % 2 == 1 {
            current_level.push(*current_level.last().unwrap());
        }

        let mut next_level = Vec::with_capacity(current_level.len() / 2);

        for chunk in current_level.chunks(2) {
            let combined = hash_pair(&chunk[0], &chunk[1]);
            next_level.push(combined);
        }

        current_level = next_level;
    }

    current_level[0]
}
