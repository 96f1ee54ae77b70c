//! Bitcoin Key Pair Generator CLI
//!
//! Usage:
//!   btc_keygen              # Generate one key pair
//!   btc_keygen -n 5         # Generate five key pairs
//!   btc_keygen -n 5 --short # Addresses and WIF private keys only

use std::process;

use clap::Parser;

use btc_keygen::{generate_address_components, Config, KeyPairBundle};

fn main() {
    let config = Config::parse();

    // Validate configuration
    if let Err(e) = config.validate() {
        eprintln!("Configuration error: {}", e);
        process::exit(1);
    }

    for index in 1..=config.count {
        let bundle = match generate_address_components() {
            Ok(bundle) => bundle,
            Err(e) => {
                eprintln!("Key generation failed: {}", e);
                process::exit(1);
            }
        };

        print_bundle(&bundle, index, config.short);
    }
}

fn print_bundle(bundle: &KeyPairBundle, index: usize, short: bool) {
    println!("=== Key Pair #{} ===", index);
    println!("Address:         {}", bundle.address);
    println!("Private Key WIF: {}", bundle.wifs.private_key);
    if !short {
        println!("Public Key:      {}", bundle.public_key);
        println!("Private Key:     {}", bundle.private_key);
        println!("Public Key WIF:  {}", bundle.wifs.public_key);
    }
    println!();
}
