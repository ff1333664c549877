//! XSR parameter inspector
//!
//! Selects a network and prints its resolved parameters. Pass the network
//! name (main, test, regtest, unittest) and optionally `--json` for the
//! full parameter dump.

use std::process::ExitCode;
use xsr_core::params::{select_network, Network};
use xsr_core::seeds::bootstrap_peers;

fn main() -> ExitCode {
    let mut args = std::env::args().skip(1);
    let name = args.next().unwrap_or_else(|| "main".to_string());
    let as_json = args.next().as_deref() == Some("--json");

    let network: Network = match name.parse() {
        Ok(network) => network,
        Err(err) => {
            eprintln!("{err} (expected main, test, regtest or unittest)");
            return ExitCode::FAILURE;
        }
    };

    let params = select_network(network);

    if as_json {
        match serde_json::to_string_pretty(&*params) {
            Ok(json) => println!("{json}"),
            Err(err) => {
                eprintln!("failed to serialize parameters: {err}");
                return ExitCode::FAILURE;
            }
        }
        return ExitCode::SUCCESS;
    }

    let (dns, fixed) = bootstrap_peers(&params);

    println!("Network:       {}", params.network_name);
    println!("Magic:         {}", hex::encode(params.message_start));
    println!("Port:          {}", params.default_port);
    println!("Genesis:       {}", params.genesis.hash);
    println!("Merkle root:   {}", params.genesis.merkle_root);
    println!("Max money:     {} XSR", params.max_money_out / xsr_core::constants::COIN);
    println!("Block spacing: {}s", params.target_spacing);
    println!("Maturity:      {} blocks", params.maturity);
    println!("Checkpoints:   {}", params.checkpoints.len());
    println!("DNS seeds:     {}", dns.len());
    println!("Fixed seeds:   {}", fixed.len());

    ExitCode::SUCCESS
}
