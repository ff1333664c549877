//! Property-based and end-to-end tests for the XSR parameter registry
//!
//! Selector tests share process-wide state, so all selector behavior lives
//! in a single test function; everything else constructs parameters
//! directly and runs in parallel safely.

use proptest::prelude::*;
use std::panic::{catch_unwind, AssertUnwindSafe};
use xsr_core::checkpoints::CheckpointData;
use xsr_core::constants::ONE_WEEK;
use xsr_core::crypto::{hash_bytes, Hash};
use xsr_core::params::{
    active_params, modifiable_params, select_network, ChainParams, Network, GENESIS_MERKLE_ROOT,
    MAIN_GENESIS_HASH, REGTEST_GENESIS_HASH, TESTNET_GENESIS_HASH,
};
use xsr_core::seeds::{bootstrap_peers, convert_fixed_seeds, seed_v4};

// ============================================================================
// GENESIS
// ============================================================================

#[test]
fn test_genesis_matches_hardcoded_expectations() {
    let cases = [
        (Network::Main, MAIN_GENESIS_HASH),
        (Network::Testnet, TESTNET_GENESIS_HASH),
        (Network::Regtest, REGTEST_GENESIS_HASH),
        (Network::UnitTest, MAIN_GENESIS_HASH),
    ];
    for (network, expected) in cases {
        let params = ChainParams::for_network(network);
        assert_eq!(params.genesis.hash, Hash::from_hex(expected).unwrap());
        assert_eq!(
            params.genesis.merkle_root,
            Hash::from_hex(GENESIS_MERKLE_ROOT).unwrap()
        );
    }
}

#[test]
fn test_genesis_determinism_across_builds() {
    let first = ChainParams::main().genesis;
    let second = ChainParams::main().genesis;
    assert_eq!(first, second);
}

// ============================================================================
// CHECKPOINTS
// ============================================================================

#[test]
fn test_checkpoint_zero_is_genesis_on_every_network() {
    for network in Network::ALL {
        let params = ChainParams::for_network(network);
        assert_eq!(
            params.checkpoints.expected_hash_at(0),
            Some(params.genesis.hash),
            "network {network}"
        );
    }
}

#[test]
fn test_checkpoint_heights_strictly_increasing() {
    for network in Network::ALL {
        let params = ChainParams::for_network(network);
        let heights: Vec<u64> = params.checkpoints.heights().collect();
        for pair in heights.windows(2) {
            assert!(pair[0] < pair[1], "network {network}");
        }
    }
}

#[test]
fn test_main_checkpoint_exact_lookup() {
    let pinned =
        Hash::from_hex("44283fa440ac261bff2857e6ed34cd74d787f383fdc8cb05d664ecdc133c1f1b").unwrap();
    let checkpoints = ChainParams::main().checkpoints;

    assert_eq!(checkpoints.expected_hash_at(165108), Some(pinned));
    assert!(checkpoints.is_valid_block(165108, &pinned));
    assert!(!checkpoints.is_valid_block(165108, &hash_bytes(b"attacker block")));
    assert_eq!(checkpoints.highest_checkpoint_height(), Some(482906));
    assert_eq!(checkpoints.len(), 23);
}

proptest! {
    /// Heights without a checkpoint carry no opinion, whatever the hash
    #[test]
    fn prop_uncheckpointed_heights_pass(height in 0u64..1_000_000, seed in any::<[u8; 32]>()) {
        let checkpoints = ChainParams::main().checkpoints;
        let candidate = Hash::from_bytes(seed);
        if checkpoints.expected_hash_at(height).is_none() {
            prop_assert!(checkpoints.is_valid_block(height, &candidate));
        } else {
            // Keyed heights accept exactly the pinned hash
            let expected = checkpoints.expected_hash_at(height).unwrap();
            prop_assert_eq!(
                checkpoints.is_valid_block(height, &candidate),
                candidate == expected
            );
        }
    }

    /// The anti-reorg rule is a pure depth comparison
    #[test]
    fn prop_reorg_limit(tip in 0u64..10_000_000, depth in 0u64..10_000) {
        let main = ChainParams::main();
        let fork_base = tip.saturating_sub(depth);
        prop_assert_eq!(
            main.reorg_within_limit(tip, fork_base),
            tip - fork_base <= main.max_reorganization_depth
        );
    }
}

#[test]
fn test_checkpoint_rejection_is_reported() {
    let checkpoints = ChainParams::main().checkpoints;
    let wrong = hash_bytes(b"deep reorg");
    let err = checkpoints.check_block(165108, &wrong).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("165108"));
    assert!(message.contains("44283fa440ac261b"));
}

// ============================================================================
// NETWORK IDENTITY
// ============================================================================

#[test]
fn test_magic_bytes_pairwise_distinct() {
    let all: Vec<(Network, [u8; 4])> = Network::ALL
        .iter()
        .map(|n| (*n, ChainParams::for_network(*n).message_start))
        .collect();
    for (i, (na, a)) in all.iter().enumerate() {
        for (nb, b) in &all[i + 1..] {
            assert_ne!(a, b, "{na} and {nb} share magic bytes");
        }
    }
}

#[test]
fn test_default_ports_distinct() {
    let all: Vec<u16> = Network::ALL
        .iter()
        .map(|n| ChainParams::for_network(*n).default_port)
        .collect();
    for (i, a) in all.iter().enumerate() {
        for b in &all[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

// ============================================================================
// SEEDS
// ============================================================================

#[test]
fn test_bootstrap_peers_main() {
    let params = ChainParams::main();
    let before = xsr_core::seeds::unix_time();
    let (dns, fixed) = bootstrap_peers(&params);
    let after = xsr_core::seeds::unix_time();

    assert_eq!(dns.len(), 10);
    assert_eq!(dns[0], "ecuador.sucrecoin.org");
    assert_eq!(fixed.len(), 6);

    for seed in &fixed {
        assert_eq!(seed.socket.port(), 2108);
        assert!(seed.last_seen >= before - 2 * ONE_WEEK);
        assert!(seed.last_seen < after - ONE_WEEK);
    }
}

#[test]
fn test_bootstrap_peers_empty_network() {
    let params = ChainParams::regtest();
    let (dns, fixed) = bootstrap_peers(&params);
    assert!(dns.is_empty());
    assert!(fixed.is_empty());
}

proptest! {
    /// Synthetic last-seen timestamps always land in [now - 2w, now - 1w)
    #[test]
    fn prop_seed_staleness_window(now in (2 * ONE_WEEK)..u32::MAX as u64, rng_seed in any::<u64>()) {
        use rand::{rngs::StdRng, SeedableRng};
        let mut rng = StdRng::seed_from_u64(rng_seed);
        let seeds = convert_fixed_seeds(&[seed_v4(1, 2, 3, 4, 2108)], now, &mut rng);
        prop_assert!(seeds[0].last_seen >= now - 2 * ONE_WEEK);
        prop_assert!(seeds[0].last_seen < now - ONE_WEEK);
    }
}

// ============================================================================
// SELECTOR LIFECYCLE (single test: shares process-wide state)
// ============================================================================

#[test]
fn test_selector_lifecycle() {
    // Queries before selection are programming errors
    assert!(catch_unwind(active_params).is_err());
    assert!(catch_unwind(modifiable_params).is_err());

    // Selection installs the profile
    let selected = select_network(Network::Testnet);
    assert_eq!(selected.network, Network::Testnet);
    assert_eq!(active_params().network, Network::Testnet);

    // Mutation is rejected outside the unittest network
    assert!(catch_unwind(AssertUnwindSafe(modifiable_params)).is_err());

    // Unittest permits mutation, visible on the next read
    select_network(Network::UnitTest);
    assert!(!active_params().allow_min_difficulty_blocks);
    {
        let mut handle = modifiable_params();
        handle.set_allow_min_difficulty_blocks(true);
        handle.set_subsidy_halving_interval(1000);
        handle.set_skip_proof_of_work_check(true);
        handle.set_default_consistency_checks(false);
    }
    let mutated = active_params();
    assert!(mutated.allow_min_difficulty_blocks);
    assert_eq!(mutated.subsidy_halving_interval, 1000);
    assert!(mutated.skip_proof_of_work_check);
    assert!(!mutated.default_consistency_checks);

    // Re-selection replaces the profile in full: no mutated field leaks
    let replaced = select_network(Network::Main);
    assert_eq!(replaced.network, Network::Main);
    let active = active_params();
    assert!(!active.allow_min_difficulty_blocks);
    assert_eq!(active.subsidy_halving_interval, 210_000);
    assert!(!active.skip_proof_of_work_check);
}

// ============================================================================
// TABLE CONSTRUCTION
// ============================================================================

#[test]
fn test_checkpoint_table_from_unordered_literals() {
    // Insertion order is irrelevant: every query is by exact height key
    let hash_a = hash_bytes(b"a").to_hex();
    let hash_b = hash_bytes(b"b").to_hex();
    let descending = CheckpointData::new(&[(20, hash_b.as_str()), (10, hash_a.as_str())], 0, 0, 0);
    let ascending = CheckpointData::new(&[(10, hash_a.as_str()), (20, hash_b.as_str())], 0, 0, 0);
    assert_eq!(descending, ascending);
    assert_eq!(descending.heights().collect::<Vec<_>>(), vec![10, 20]);
}
