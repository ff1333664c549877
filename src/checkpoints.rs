//! Checkpoint-based chain-history validation
//!
//! A checkpoint pins a (height, hash) pair the canonical chain must pass
//! through. Candidate chains contradicting a checkpoint are rejected
//! outright; checkpoints filter chains before any work-based comparison and
//! never rank them.

use crate::crypto::Hash;
use serde::Serialize;
use std::collections::BTreeMap;
use thiserror::Error;

/// Rejection of a candidate block that contradicts a checkpoint
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CheckpointError {
    #[error("block at height {height} does not match checkpoint (expected {expected}, got {got})")]
    Mismatch {
        height: u64,
        expected: Hash,
        got: Hash,
    },
}

/// Per-network checkpoint table plus sync-progress hints
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckpointData {
    checkpoints: BTreeMap<u64, Hash>,
    /// Unix timestamp of the last checkpointed block
    pub last_checkpoint_time: u64,
    /// Total transactions between genesis and the last checkpoint
    pub total_transactions: u64,
    /// Estimated transactions per day after the last checkpoint
    pub transactions_per_day: u64,
}

impl CheckpointData {
    /// Build a table from (height, hash-hex) literals.
    ///
    /// Panics on a malformed hash literal or a duplicate height; both are
    /// build-constant corruption, not runtime conditions.
    pub fn new(
        entries: &[(u64, &str)],
        last_checkpoint_time: u64,
        total_transactions: u64,
        transactions_per_day: u64,
    ) -> Self {
        let mut checkpoints = BTreeMap::new();
        for (height, hash_hex) in entries {
            let hash = Hash::from_hex(hash_hex).expect("bad checkpoint hash literal");
            let previous = checkpoints.insert(*height, hash);
            assert!(
                previous.is_none(),
                "duplicate checkpoint at height {height}"
            );
        }
        Self {
            checkpoints,
            last_checkpoint_time,
            total_transactions,
            transactions_per_day,
        }
    }

    /// The checkpointed hash at `height`, if one exists
    pub fn expected_hash_at(&self, height: u64) -> Option<Hash> {
        self.checkpoints.get(&height).copied()
    }

    /// Whether a block is consistent with the checkpoint table.
    ///
    /// Heights without a checkpoint carry no opinion and pass.
    pub fn is_valid_block(&self, height: u64, hash: &Hash) -> bool {
        match self.checkpoints.get(&height) {
            Some(expected) => expected == hash,
            None => true,
        }
    }

    /// Like [`is_valid_block`](Self::is_valid_block) but reporting the
    /// expected hash on rejection
    pub fn check_block(&self, height: u64, hash: &Hash) -> Result<(), CheckpointError> {
        match self.checkpoints.get(&height) {
            Some(expected) if expected != hash => Err(CheckpointError::Mismatch {
                height,
                expected: *expected,
                got: *hash,
            }),
            _ => Ok(()),
        }
    }

    /// Height of the highest checkpoint, if any
    pub fn highest_checkpoint_height(&self) -> Option<u64> {
        self.checkpoints.keys().next_back().copied()
    }

    /// Checkpointed heights in ascending order
    pub fn heights(&self) -> impl Iterator<Item = u64> + '_ {
        self.checkpoints.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.checkpoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checkpoints.is_empty()
    }
}
