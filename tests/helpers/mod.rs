// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Test helpers for dexcore integration tests
//!
//! Provides proptest strategies for addresses and chains, plus a tracing
//! subscriber so `RUST_LOG=dexcore=trace cargo test` shows span output.

use alloy_primitives::Address;
use dexcore::ChainId;
use proptest::prelude::*;

/// How an address string is cased before being handed to the validator
#[allow(dead_code)]
#[derive(Debug, Clone, Copy)]
pub enum Casing {
    Lower,
    Upper,
    Checksummed,
}

/// Render an address with the requested casing and a `0x` prefix
#[allow(dead_code)]
pub fn render(address: Address, casing: Casing) -> String {
    let checksummed = address.to_checksum(None);
    match casing {
        Casing::Lower => checksummed.to_lowercase(),
        Casing::Upper => format!("0x{}", checksummed[2..].to_uppercase()),
        Casing::Checksummed => checksummed,
    }
}

/// Any 20-byte address
#[allow(dead_code)]
pub fn arb_address() -> impl Strategy<Value = Address> {
    any::<[u8; 20]>().prop_map(Address::from)
}

/// Any of the three accepted casings
#[allow(dead_code)]
pub fn arb_casing() -> impl Strategy<Value = Casing> {
    prop_oneof![
        Just(Casing::Lower),
        Just(Casing::Upper),
        Just(Casing::Checksummed),
    ]
}

/// Any enumerated chain
#[allow(dead_code)]
pub fn arb_chain() -> impl Strategy<Value = ChainId> {
    prop::sample::select(ChainId::ALL.to_vec())
}

/// An address drawn from a small pool, so collisions are common
#[allow(dead_code)]
pub fn arb_pooled_address() -> impl Strategy<Value = Address> {
    prop::sample::select(vec![
        Address::ZERO,
        Address::from([0x11; 20]),
        Address::from([0xab; 20]),
    ])
}

/// Install a test-writer tracing subscriber once per test binary
#[allow(dead_code)]
pub fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("dexcore=debug"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}
