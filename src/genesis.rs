//! Genesis block construction
//!
//! Builds a network's genesis block from its hard-coded literals and checks
//! the result against the expected hash and merkle root. A mismatch means
//! the build is corrupted and the node would silently diverge onto an
//! incompatible chain, so verification failure aborts startup.

use crate::constants::GENESIS_REWARD;
use crate::crypto::{compute_merkle_root, hash_bytes, Hash};
use serde::Serialize;

/// Text embedded in the genesis coinbase input, pinning the launch date to
/// a contemporary Bitcoin block hash.
pub const GENESIS_COINBASE_TEXT: &str =
    "Bitcoin_627544_000000000000000000045a465b959072a715f47047141108ef14db64e2ee9049";

/// Uncompressed public key paid by the genesis coinbase output
const GENESIS_PUBKEY_HEX: &str = "0466f8e042492f7e1be50f8fa84bc2d39d0cea242704d219bc6d9cd7d1e20c4abc105e45b0510396978c22a7e9f35d21d6fb10005fc27febc2851ba4f051411865";

const OP_CHECKSIG: u8 = 0xac;

/// Genesis block version
const GENESIS_VERSION: u32 = 1;

/// Network-specific genesis literals
///
/// `expected_hash` is `None` only while a network's genesis parameters are
/// still in flux; Main always carries an expectation.
#[derive(Debug, Clone, Copy)]
pub struct GenesisParams {
    pub time: u32,
    pub bits: u32,
    pub nonce: u32,
    pub expected_hash: Option<&'static str>,
    pub expected_merkle_root: Option<&'static str>,
}

/// The single coinbase transaction of a genesis block
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenesisCoinbase {
    pub version: u32,
    /// Input script: the genesis timestamp text
    pub script_sig: Vec<u8>,
    /// Output value in base units
    pub value: u64,
    /// Output script: push(pubkey) OP_CHECKSIG
    pub script_pubkey: Vec<u8>,
}

impl GenesisCoinbase {
    fn new() -> Self {
        let pubkey = hex::decode(GENESIS_PUBKEY_HEX).expect("bad genesis pubkey literal");
        let mut script_pubkey = Vec::with_capacity(pubkey.len() + 2);
        script_pubkey.push(pubkey.len() as u8);
        script_pubkey.extend_from_slice(&pubkey);
        script_pubkey.push(OP_CHECKSIG);

        Self {
            version: 1,
            script_sig: GENESIS_COINBASE_TEXT.as_bytes().to_vec(),
            value: GENESIS_REWARD,
            script_pubkey,
        }
    }

    /// Serialize for hashing (all integers little-endian, scripts
    /// length-prefixed with a u32)
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&self.version.to_le_bytes());
        bytes.extend_from_slice(&(self.script_sig.len() as u32).to_le_bytes());
        bytes.extend_from_slice(&self.script_sig);
        bytes.extend_from_slice(&self.value.to_le_bytes());
        bytes.extend_from_slice(&(self.script_pubkey.len() as u32).to_le_bytes());
        bytes.extend_from_slice(&self.script_pubkey);
        bytes
    }

    /// Transaction id
    pub fn txid(&self) -> Hash {
        hash_bytes(&self.to_bytes())
    }
}

/// Fully derived genesis block descriptor
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenesisBlock {
    pub version: u32,
    pub time: u32,
    pub bits: u32,
    pub nonce: u32,
    pub coinbase: GenesisCoinbase,
    /// Computed merkle root over the one-element transaction set
    pub merkle_root: Hash,
    /// Computed block hash
    pub hash: Hash,
}

impl GenesisBlock {
    /// Serialize the 80-byte block header for hashing
    pub fn header_bytes(version: u32, merkle_root: &Hash, time: u32, bits: u32, nonce: u32) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(80);
        bytes.extend_from_slice(&version.to_le_bytes());
        bytes.extend_from_slice(&Hash::zero().0); // no previous block
        bytes.extend_from_slice(&merkle_root.0);
        bytes.extend_from_slice(&time.to_le_bytes());
        bytes.extend_from_slice(&bits.to_le_bytes());
        bytes.extend_from_slice(&nonce.to_le_bytes());
        bytes
    }
}

/// Build the genesis block for one network and verify it against the
/// network's expected constants.
///
/// Panics on a hash or merkle-root mismatch; this is a fatal startup
/// condition, not a recoverable error.
pub fn build_genesis(params: &GenesisParams) -> GenesisBlock {
    let coinbase = GenesisCoinbase::new();
    let merkle_root = compute_merkle_root(&[coinbase.txid()]);

    let header = GenesisBlock::header_bytes(
        GENESIS_VERSION,
        &merkle_root,
        params.time,
        params.bits,
        params.nonce,
    );
    let hash = hash_bytes(&header);

    if let Some(expected) = params.expected_hash {
        let expected = Hash::from_hex(expected).expect("bad expected genesis hash literal");
        assert_eq!(
            hash, expected,
            "genesis block hash mismatch: computed {hash}, expected {expected}"
        );
    }
    if let Some(expected) = params.expected_merkle_root {
        let expected = Hash::from_hex(expected).expect("bad expected merkle root literal");
        assert_eq!(
            merkle_root, expected,
            "genesis merkle root mismatch: computed {merkle_root}, expected {expected}"
        );
    }

    GenesisBlock {
        version: GENESIS_VERSION,
        time: params.time,
        bits: params.bits,
        nonce: params.nonce,
        coinbase,
        merkle_root,
        hash,
    }
}
