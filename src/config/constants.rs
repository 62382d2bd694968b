// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Well-known addresses and constants
//!
//! Wrapped-native contract addresses backing the WETH9 registry.

use alloy_primitives::{address, Address};

/// Decimals of every wrapped-native token in the registry.
pub const WRAPPED_NATIVE_DECIMALS: u8 = 18;

/// Symbol shared by every wrapped-native token in the registry.
pub const WRAPPED_NATIVE_SYMBOL: &str = "WETH9";

/// Well-known wrapped-native token addresses
pub mod wrapped_native {
    use super::*;

    /// WETH9 on Ethereum mainnet
    ///
    /// Contract: 0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2
    pub const MAINNET_WETH9: Address = address!("c02aaa39b223fe8d0a0e5c4f27ead9083c756cc2");

    /// WETH9 on Ropsten and Rinkeby (same deployment address on both)
    ///
    /// Contract: 0xc778417E063141139Fce010982780140Aa0cD5Ab
    pub const ROPSTEN_RINKEBY_WETH9: Address = address!("c778417e063141139fce010982780140aa0cd5ab");

    /// WETH9 on Görli
    ///
    /// Contract: 0xB4FBF271143F4FBf7B91A5ded31805e42b2208d6
    pub const GOERLI_WETH9: Address = address!("b4fbf271143f4fbf7b91a5ded31805e42b2208d6");

    /// WETH9 on Kovan
    ///
    /// Contract: 0xd0A1E359811322d97991E03f863a0C30C2cF029C
    pub const KOVAN_WETH9: Address = address!("d0a1e359811322d97991e03f863a0c30c2cf029c");

    /// WMATIC on Polygon PoS
    ///
    /// Contract: 0x0d500B1d8E8eF31E21C99d1Db9A6444d3ADf1270
    pub const MATIC_WMATIC: Address = address!("0d500b1d8e8ef31e21c99d1db9a6444d3adf1270");

    /// WMATIC on Mumbai.
    ///
    /// Note: the registry also uses this address for Harmony, Harmony testnet,
    /// Optimism, BSC, Chapel and xDai.
    ///
    /// Contract: 0x9c3C9283D3e44854697Cd22D3Faa240Cfb032889
    pub const MUMBAI_WMATIC: Address = address!("9c3c9283d3e44854697cd22d3faa240cfb032889");
}
