//! XSR Network Parameter Registry
//!
//! Per-network consensus constants, deterministic genesis construction,
//! checkpoint-based chain-history validation, and bootstrap seed data.
//!
//! Call [`params::select_network`] once during startup; every other
//! component reads the active parameters through [`params::active_params`].

pub mod checkpoints;
pub mod crypto;
pub mod genesis;
pub mod params;
pub mod seeds;

/// Protocol constants - HARD-CODED, NEVER CONFIGURABLE
pub mod constants {
    /// Base unit denomination (8 decimal places per coin)
    pub const COIN: u64 = 100_000_000;

    /// Number of decimal places
    pub const DECIMAL_PLACES: u8 = 8;

    /// Chain name (short form used in protocol identifiers)
    pub const CHAIN_NAME: &str = "XSR";

    /// Genesis coinbase reward (250 XSR)
    pub const GENESIS_REWARD: u64 = 250 * COIN;

    /// One week in seconds, used for the seed last-seen jitter window
    pub const ONE_WEEK: u64 = 7 * 24 * 60 * 60;
}
