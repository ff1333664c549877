//! Per-network chain parameters
//!
//! Each network is built as one fully-resolved immutable structure. Derived
//! networks start from another network's values and apply explicit
//! overrides; there is no inheritance and no consumer treats one network's
//! parameters as another's.

use crate::checkpoints::CheckpointData;
use crate::constants::COIN;
use crate::genesis::{build_genesis, GenesisBlock, GenesisParams};
use crate::params::Network;
use crate::seeds::{seed_v4, SeedSpec};
use serde::Serialize;

/// Expected merkle root of the genesis coinbase set (same for every
/// network; only the header literals differ)
pub const GENESIS_MERKLE_ROOT: &str =
    "e32086d427f2386e2e7aca7170d7abcd8a6977bce4804701b6caf4be3171c7f1";

/// Expected main-network genesis block hash
pub const MAIN_GENESIS_HASH: &str =
    "b663ac7ad81de63d8b95e199dce0f581853f426f98cd7200620d808bfe1b776a";

/// Expected testnet genesis block hash
pub const TESTNET_GENESIS_HASH: &str =
    "577d8ecedcbed1276dc1f08418c6fc0e3b261a4ae7e6118233cdaf4a2306e559";

/// Expected regtest genesis block hash
pub const REGTEST_GENESIS_HASH: &str =
    "d816bb5edbd6768002430813a12e25583921d60a3f70baff2023c9aaa3a7bdee";

//   What makes a good checkpoint block?
// + Is surrounded by blocks with reasonable timestamps
// + Contains no strange transactions
const MAIN_CHECKPOINTS: &[(u64, &str)] = &[
    (0, MAIN_GENESIS_HASH),
    (165108, "44283fa440ac261bff2857e6ed34cd74d787f383fdc8cb05d664ecdc133c1f1b"),
    (286501, "6f432853b9627af8a8740b5b132c7dc79e4afce6041edeaedce9c5ea4ab3b0ba"),
    (361526, "4af62690ef0e90ebc545dfe6cbe2ec258bdd75eec304c461b7772d05c505a276"),
    (407894, "f2a4a70f7601c65fb1616547829e52a4692efcfc1f9651fc0332cce736adc185"),
    (436551, "bf07c2ca9d88e3d03786a3f9131b20a8308020c14c44ec3bf2f1d3240c5853f8"),
    (454262, "6c3e814ec13261bd6f5bbf862dfb2e2a0d95093c9fb7860fda091ff0a6761988"),
    (465208, "3199e35ced51acd5d0815644c255dadccecb990b9e8d59ad3d50acf6d47d648b"),
    (471973, "da900f8db93e90410f87af6e5cba6660936a047009e5c9ed1770a931fd9cc280"),
    (476154, "f14daf18f07f43c17cd07e4c8e18341831e1b96a702aacfb357d004304697d17"),
    (478738, "ca5c25040b38b735c1f3e5ee2a65f85324e6ada089b1306f8f7ef6241321a995"),
    (480335, "7ad9e1be5d2e1c508e528b7c768d2c4d2fe8f03f8fc25a037155ea5d43e502e2"),
    (481322, "2ac9ad1d79b305b1c84e3df1cf72849b40934ea163592cd120460a9d2bcfbde3"),
    (481932, "3d1cea47c9b129612e26f2c7483542834774fd1ea0add60be2f9fd51dd49492a"),
    (482309, "dd10d7a1b81c25931a22eda9d4501630e3e9501f226075d03ffde3280f38294e"),
    (482542, "10665a3950e536b7aa3cbbc23fd97fe4bf1c14646aaa9c29770fbcdea466945a"),
    (482686, "c197f9257cba2a15af05f0afd620e3f295cd8384d5708e994567c85adf64cf79"),
    (482775, "87dbc2dee7cd83d8da8a2404d326c8271832dcba52e7e482782a0e0871f4fe50"),
    (482830, "9c4ef64b9e81e607202fa5a9c404a0189c8736a70b0253f1bad108b2f4887c63"),
    (482864, "aeb7df994d1182d9ed53b43ba1dbf879281aaee0acde781b89f79d2fe32b69db"),
    (482885, "2fe8009ec6012788cc2a3cb12a7674f4c375d8cc68ffac37edebba54e8ef2fe3"),
    (482898, "59f7e8b5f59554d8ff8cf68e65e012366286449e0dbb98e341ad6b1ce4db1158"),
    (482906, "3b04e322705806a846d42c234fb6d700a3e2e291dcc373286176d82ec2d5f919"),
];

/// Bootstrap node addresses compiled into the main network, port 2108
const MAIN_FIXED_SEEDS: &[SeedSpec] = &[
    seed_v4(217, 61, 122, 125, 2108),
    seed_v4(217, 61, 124, 183, 2108),
    seed_v4(217, 61, 121, 60, 2108),
    seed_v4(77, 81, 234, 124, 2108),
    seed_v4(80, 211, 57, 114, 2108),
    seed_v4(80, 211, 168, 220, 2108),
];

/// One network's consensus and protocol constants.
///
/// Every field is set exactly once at construction. The only mutation path
/// is the unit-test handle in [`crate::params::modifiable_params`].
#[derive(Debug, Clone, Serialize)]
pub struct ChainParams {
    pub network: Network,
    pub network_name: &'static str,

    /// Message-start marker; rarely used upper-ASCII bytes, not valid
    /// UTF-8, distinct per network so nodes drop cross-network messages
    pub message_start: [u8; 4],
    pub default_port: u16,
    pub alert_pubkey: Vec<u8>,

    /// Proof-of-work difficulty ceiling as a 256-bit big-endian target
    pub pow_limit: [u8; 32],
    pub max_reorganization_depth: u64,
    pub target_timespan: u64,
    pub target_spacing: u64,
    pub subsidy_halving_interval: u64,
    pub maturity: u64,
    pub masternode_count_drift: u64,
    pub max_money_out: u64,

    // Height or time based activations
    pub last_pow_block: u64,
    pub modifier_update_block: u64,
    pub block_enforce_serial_range: u64,
    pub block_recalculate_accumulators: u64,
    pub enforce_new_spork_key: u64,
    pub reject_old_spork_key: u64,
    pub start_masternode_payments: u64,

    pub spork_key: &'static str,
    pub spork_key_old: &'static str,
    pub obfuscation_pool_dummy_address: &'static str,
    pub pool_max_transactions: u64,
    pub budget_fee_confirmations: u64,

    pub mining_requires_peers: bool,
    pub require_standard: bool,
    pub allow_min_difficulty_blocks: bool,
    pub default_consistency_checks: bool,
    pub mine_blocks_on_demand: bool,
    pub skip_proof_of_work_check: bool,
    pub headers_first_syncing_active: bool,

    // Address-format version bytes
    pub pubkey_address_version: u8,
    pub script_address_version: u8,
    pub secret_key_version: u8,
    pub ext_public_key_version: [u8; 4],
    pub ext_secret_key_version: [u8; 4],
    pub ext_coin_type: [u8; 4],

    pub dns_seeds: Vec<(&'static str, &'static str)>,
    pub fixed_seeds: Vec<SeedSpec>,

    pub genesis: GenesisBlock,
    pub checkpoints: CheckpointData,
}

impl ChainParams {
    /// Resolve a network identifier to its parameters
    pub fn for_network(network: Network) -> ChainParams {
        match network {
            Network::Main => Self::main(),
            Network::Testnet => Self::testnet(),
            Network::Regtest => Self::regtest(),
            Network::UnitTest => Self::unittest(),
        }
    }

    /// Main network
    pub fn main() -> ChainParams {
        ChainParams {
            network: Network::Main,
            network_name: "main",
            message_start: [0x01, 0xc4, 0xfd, 0x1a],
            default_port: 2108,
            alert_pubkey: decode_pubkey("04931651bdaf8a51875470d48429af836dca915fc4d002698120c8d365f26cef2111405c702ec887a12915f3bad08c2eb2260c280664a743446d36bf3ee523f86e"),
            pow_limit: pow_limit_from_shift(20),
            max_reorganization_depth: 100,
            target_timespan: 60,
            target_spacing: 60, // one minute blocks
            subsidy_halving_interval: 210_000,
            maturity: 80,
            masternode_count_drift: 20,
            max_money_out: 21_000_000 * COIN,
            last_pow_block: 1000,
            modifier_update_block: 100,
            block_enforce_serial_range: 1,
            block_recalculate_accumulators: 0,
            enforce_new_spork_key: 1587807440,
            reject_old_spork_key: 1587807440,
            start_masternode_payments: 1587807440,
            spork_key: "04e613f9bcba88c7eb2be545da7b861930486522bbe2f4a73e553df93ebe29d4639069c577967f4400ca75585b60e6d06c88bda6bbf712af8c4e792c050fa176a3",
            spork_key_old: "0418ce69724beb3bf3532a063d8424aacdddf84f286eacdd52893cfa5d31c90a3ac5f9c43f64b9aa602a0929d640df38bb6e55c0d1d4f7ec3050b78af3ac27d2e9",
            obfuscation_pool_dummy_address: "XQf9JD2j2QwfuHiTGFauXf84Xjj3Jbky1f",
            pool_max_transactions: 3,
            budget_fee_confirmations: 6,
            mining_requires_peers: true,
            require_standard: true,
            allow_min_difficulty_blocks: false,
            default_consistency_checks: false,
            mine_blocks_on_demand: false,
            skip_proof_of_work_check: false,
            headers_first_syncing_active: false,
            pubkey_address_version: 75,
            script_address_version: 122,
            secret_key_version: 128,
            ext_public_key_version: [0x02, 0x2d, 0x25, 0x33],
            ext_secret_key_version: [0x02, 0x21, 0x31, 0x2b],
            ext_coin_type: [0x80, 0x00, 0x00, 0x77],
            dns_seeds: vec![
                ("ecuador", "ecuador.sucrecoin.org"),
                ("colombia", "colombia.sucrecoin.org"),
                ("costarica", "costarica.sucrecoin.org"),
                ("dev", "dev.sucrecoin.org"),
                ("node1", "node1.sucrecoin.org"),
                ("node", "node.sucrecoin.org"),
                ("pos", "pos.sucrecoin.org"),
                ("lik", "lik.sucrecoin.org"),
                ("explorer", "explorer.sucrecoin.org"),
                ("master", "master.sucrecoin.org"),
            ],
            fixed_seeds: MAIN_FIXED_SEEDS.to_vec(),
            genesis: build_genesis(&GenesisParams {
                time: 1587807440,
                bits: 0x1e0ffff0,
                nonce: 1_167_247,
                expected_hash: Some(MAIN_GENESIS_HASH),
                expected_merkle_root: Some(GENESIS_MERKLE_ROOT),
            }),
            checkpoints: CheckpointData::new(MAIN_CHECKPOINTS, 1587807440, 0, 2000),
        }
    }

    /// Testnet: main with explicit overrides
    pub fn testnet() -> ChainParams {
        let mut params = Self::main();
        params.network = Network::Testnet;
        params.network_name = "test";
        params.message_start = [0xd0, 0xcd, 0xa9, 0x96];
        params.default_port = 31244;
        params.alert_pubkey = decode_pubkey("047702b6eb08ee32cfbd0cec8197e7287bc46aa3b9b855f268378a8e217eb1f7232dbca8f4e3459758ac2fd476a41266d8ce4ee19e3cacd5169802a9715bf572d1");
        params.last_pow_block = 100;
        params.maturity = 15;
        params.masternode_count_drift = 4;
        params.modifier_update_block = 101;
        params.max_money_out = 43_199_500 * COIN;
        params.block_enforce_serial_range = 1;
        params.block_recalculate_accumulators = 9_908_000;
        params.enforce_new_spork_key = 1521604800; // Wed, 21 Mar 2018 04:00:00 GMT
        params.reject_old_spork_key = 1522454400; // Sat, 31 Mar 2018 00:00:00 GMT
        params.start_masternode_payments = 1420837558;
        params.spork_key = "04A8B319388C0F8588D238B9941DC26B26D3F9465266B368A051C5C100F79306A557780101FE2192FE170D7E6DEFDCBEE4C8D533396389C0DAFFDBC842B002243C";
        params.spork_key_old = "04348C2F50F90267E64FACC65BFDC9D0EB147D090872FB97ABAE92E9A36E6CA60983E28E741F8E7277B11A7479B626AC115BA31463AC48178A5075C5A9319D4A38";
        params.obfuscation_pool_dummy_address = "y57cqfGRkekRyDRNeJiLtYVEbvhXrNbmox";
        params.pool_max_transactions = 2;
        // Only an 8 block finalization window on testnet, so the
        // finalization fee confirms quickly
        params.budget_fee_confirmations = 3;
        params.allow_min_difficulty_blocks = true;
        params.pubkey_address_version = 139; // addresses start with 'x' or 'y'
        params.script_address_version = 19; // script addresses start with '8' or '9'
        params.secret_key_version = 239; // private keys start with '9' or 'c'
        params.ext_public_key_version = [0x3a, 0x80, 0x61, 0xa0];
        params.ext_secret_key_version = [0x3a, 0x80, 0x58, 0x37];
        params.ext_coin_type = [0x80, 0x00, 0x00, 0x01];
        params.dns_seeds.clear();
        params.fixed_seeds.clear();
        params.genesis = build_genesis(&GenesisParams {
            time: 1570470324,
            bits: 0x1e0ffff0,
            nonce: 1_248_594,
            expected_hash: Some(TESTNET_GENESIS_HASH),
            expected_merkle_root: Some(GENESIS_MERKLE_ROOT),
        });
        params.checkpoints =
            CheckpointData::new(&[(0, TESTNET_GENESIS_HASH)], 1570470324, 0, 250);
        params
    }

    /// Regression test: testnet with explicit overrides
    pub fn regtest() -> ChainParams {
        let mut params = Self::testnet();
        params.network = Network::Regtest;
        params.network_name = "regtest";
        params.message_start = [0x93, 0x9f, 0xb6, 0xd8];
        params.default_port = 31246;
        params.subsidy_halving_interval = 150;
        params.target_timespan = 24 * 60 * 60;
        params.target_spacing = 60;
        params.pow_limit = pow_limit_from_shift(1);
        params.mining_requires_peers = false;
        params.allow_min_difficulty_blocks = true;
        params.default_consistency_checks = true;
        params.require_standard = false;
        params.mine_blocks_on_demand = true;
        params.genesis = build_genesis(&GenesisParams {
            time: 1570470444,
            bits: 0x207fffff,
            nonce: 1,
            expected_hash: Some(REGTEST_GENESIS_HASH),
            expected_merkle_root: Some(GENESIS_MERKLE_ROOT),
        });
        params.checkpoints =
            CheckpointData::new(&[(0, REGTEST_GENESIS_HASH)], 1570470444, 0, 100);
        params
    }

    /// Unit test: main with explicit overrides; the only network whose
    /// parameters may be mutated after selection
    pub fn unittest() -> ChainParams {
        let mut params = Self::main();
        params.network = Network::UnitTest;
        params.network_name = "unittest";
        params.message_start = [0x8e, 0x5a, 0xc2, 0x74];
        params.default_port = 31248;
        params.dns_seeds.clear();
        params.fixed_seeds.clear();
        params.mining_requires_peers = false;
        params.default_consistency_checks = true;
        params.allow_min_difficulty_blocks = false;
        params.mine_blocks_on_demand = true;
        // Genesis and checkpoints are shared with main
        params
    }

    /// Whether rolling the chain back from `tip_height` to
    /// `fork_base_height` stays within the anti-reorganization limit.
    ///
    /// Deeper rollbacks are refused regardless of the competing chain's
    /// accumulated work.
    pub fn reorg_within_limit(&self, tip_height: u64, fork_base_height: u64) -> bool {
        tip_height.saturating_sub(fork_base_height) <= self.max_reorganization_depth
    }
}

/// 256-bit proof-of-work ceiling: all-ones shifted right by `shift` bits
fn pow_limit_from_shift(shift: u32) -> [u8; 32] {
    let mut limit = [0xffu8; 32];
    let full_bytes = (shift / 8) as usize;
    for byte in limit.iter_mut().take(full_bytes) {
        *byte = 0;
    }
    if full_bytes < 32 {
        limit[full_bytes] >>= shift % 8;
    }
    limit
}

fn decode_pubkey(hex_key: &str) -> Vec<u8> {
    hex::decode(hex_key).expect("bad public key literal")
}
