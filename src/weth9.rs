// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Canonical wrapped-native token per enumerated network.
//!
//! The table is built at compile time and is read-only. [`weth9`] matches
//! exhaustively on [`ChainId`], so a new network cannot be added without an
//! entry.

use crate::{
    config::constants::{
        wrapped_native::{
            GOERLI_WETH9, KOVAN_WETH9, MAINNET_WETH9, MATIC_WMATIC, MUMBAI_WMATIC,
            ROPSTEN_RINKEBY_WETH9,
        },
        WRAPPED_NATIVE_DECIMALS, WRAPPED_NATIVE_SYMBOL,
    },
    constants::ChainId,
    token::Token,
};

const fn wrapped(chain: ChainId, address: alloy_primitives::Address, name: &'static str) -> Token {
    Token::from_static(
        chain,
        address,
        WRAPPED_NATIVE_DECIMALS,
        WRAPPED_NATIVE_SYMBOL,
        name,
    )
}

static MAINNET: Token = wrapped(ChainId::Mainnet, MAINNET_WETH9, "Wrapped Ether");
static ROPSTEN: Token = wrapped(ChainId::Ropsten, ROPSTEN_RINKEBY_WETH9, "Wrapped Ether");
static RINKEBY: Token = wrapped(ChainId::Rinkeby, ROPSTEN_RINKEBY_WETH9, "Wrapped Ether");
static GOERLI: Token = wrapped(ChainId::Goerli, GOERLI_WETH9, "Wrapped Ether");
static KOVAN: Token = wrapped(ChainId::Kovan, KOVAN_WETH9, "Wrapped Ether");
static MATIC: Token = wrapped(ChainId::Matic, MATIC_WMATIC, "Wrapped Matic");
static MUMBAI: Token = wrapped(ChainId::Mumbai, MUMBAI_WMATIC, "Wrapped Matic");
static HARMONY: Token = wrapped(ChainId::Harmony, MUMBAI_WMATIC, "Wrapped ONE");
static HARMONY_B: Token = wrapped(ChainId::HarmonyB, MUMBAI_WMATIC, "Wrapped ONE");
static OETH: Token = wrapped(ChainId::Oeth, MUMBAI_WMATIC, "Wrapped OETH");
static BSC: Token = wrapped(ChainId::Bsc, MUMBAI_WMATIC, "Wrapped BNB");
static CHAPEL: Token = wrapped(ChainId::Chapel, MUMBAI_WMATIC, "Wrapped BNB");
static XDAI: Token = wrapped(ChainId::Xdai, MUMBAI_WMATIC, "Wrapped XDAI");

/// The canonical wrapped-native token of `chain`.
///
/// # Examples
///
/// ```
/// use dexcore::{weth9, ChainId, Currency};
///
/// let weth = weth9(ChainId::Mainnet);
/// assert_eq!(weth.checksum(), "0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2");
/// assert_eq!(weth.decimals(), 18);
/// ```
pub fn weth9(chain: ChainId) -> &'static Token {
    match chain {
        ChainId::Mainnet => &MAINNET,
        ChainId::Ropsten => &ROPSTEN,
        ChainId::Rinkeby => &RINKEBY,
        ChainId::Goerli => &GOERLI,
        ChainId::Kovan => &KOVAN,
        ChainId::Matic => &MATIC,
        ChainId::Mumbai => &MUMBAI,
        ChainId::Harmony => &HARMONY,
        ChainId::HarmonyB => &HARMONY_B,
        ChainId::Oeth => &OETH,
        ChainId::Bsc => &BSC,
        ChainId::Chapel => &CHAPEL,
        ChainId::Xdai => &XDAI,
    }
}

/// Look up the wrapped-native token by raw chain id.
///
/// Returns `None` for chain ids outside [`ChainId`].
pub fn weth9_on_chain(chain_id: u64) -> Option<&'static Token> {
    ChainId::try_from(chain_id).ok().map(weth9)
}

/// Every registry entry, in [`ChainId::ALL`] order.
pub fn weth9_entries() -> impl Iterator<Item = (ChainId, &'static Token)> {
    ChainId::ALL.into_iter().map(|chain| (chain, weth9(chain)))
}
