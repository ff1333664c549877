//! Bootstrap seed directory
//!
//! Hardcoded DNS seed names and fixed binary seeds used for initial peer
//! discovery. A node only needs one or two of these: once connected it
//! receives a pile of fresher addresses over gossip, so each fixed seed is
//! stamped with a deliberately stale last-seen time.

use crate::constants::ONE_WEEK;
use crate::params::ChainParams;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv6Addr, SocketAddr};
use std::time::{SystemTime, UNIX_EPOCH};

/// Raw compiled-in seed entry: 16-byte IPv6-mappable address plus port
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedSpec {
    pub addr: [u8; 16],
    pub port: u16,
}

/// Build a `SeedSpec` from an IPv4 address (stored IPv4-mapped)
pub const fn seed_v4(a: u8, b: u8, c: u8, d: u8, port: u16) -> SeedSpec {
    SeedSpec {
        addr: [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0xff, 0xff, a, b, c, d],
        port,
    }
}

/// A bootstrap peer address with a synthetic last-seen timestamp
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeedAddress {
    pub socket: SocketAddr,
    /// Unix time this address was supposedly last seen
    pub last_seen: u64,
}

/// Decode fixed seeds, stamping each with a last-seen time drawn uniformly
/// from [now - 2 weeks, now - 1 week).
pub fn convert_fixed_seeds<R: Rng>(seeds: &[SeedSpec], now: u64, rng: &mut R) -> Vec<SeedAddress> {
    seeds
        .iter()
        .map(|seed| {
            let ip = Ipv6Addr::from(seed.addr);
            let ip = match ip.to_ipv4_mapped() {
                Some(v4) => IpAddr::V4(v4),
                None => IpAddr::V6(ip),
            };
            let last_seen = now.saturating_sub(2 * ONE_WEEK) + rng.gen_range(0..ONE_WEEK);
            SeedAddress {
                socket: SocketAddr::new(ip, seed.port),
                last_seen,
            }
        })
        .collect()
}

/// DNS seed hostnames and decoded fixed seeds for a network.
///
/// Hostnames are returned symbolically; resolution is the networking
/// layer's job.
pub fn bootstrap_peers(params: &ChainParams) -> (Vec<String>, Vec<SeedAddress>) {
    let dns = params
        .dns_seeds
        .iter()
        .map(|(_, host)| host.to_string())
        .collect();
    let fixed = convert_fixed_seeds(&params.fixed_seeds, unix_time(), &mut rand::thread_rng());
    (dns, fixed)
}

/// Current wall-clock time in seconds since the Unix epoch
pub fn unix_time() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const NOW: u64 = 1_600_000_000;

    #[test]
    fn test_ipv4_mapped_seed_decodes_to_v4() {
        let spec = seed_v4(217, 61, 122, 125, 2108);
        let mut rng = StdRng::seed_from_u64(1);
        let seeds = convert_fixed_seeds(&[spec], NOW, &mut rng);
        assert_eq!(seeds.len(), 1);
        assert_eq!(seeds[0].socket.to_string(), "217.61.122.125:2108");
    }

    #[test]
    fn test_plain_ipv6_seed_stays_v6() {
        let mut addr = [0u8; 16];
        addr[0] = 0x20;
        addr[1] = 0x01;
        addr[15] = 0x01;
        let spec = SeedSpec { addr, port: 2108 };
        let mut rng = StdRng::seed_from_u64(1);
        let seeds = convert_fixed_seeds(&[spec], NOW, &mut rng);
        assert!(seeds[0].socket.is_ipv6());
        assert_eq!(seeds[0].socket.port(), 2108);
    }

    #[test]
    fn test_last_seen_within_jitter_window() {
        let specs: Vec<SeedSpec> = (0..64).map(|i| seed_v4(10, 0, 0, i, 2108)).collect();
        let mut rng = StdRng::seed_from_u64(42);
        for seed in convert_fixed_seeds(&specs, NOW, &mut rng) {
            assert!(seed.last_seen >= NOW - 2 * ONE_WEEK);
            assert!(seed.last_seen < NOW - ONE_WEEK);
        }
    }

    #[test]
    fn test_empty_seed_list() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(convert_fixed_seeds(&[], NOW, &mut rng).is_empty());
    }
}
