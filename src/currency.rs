// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! The currency abstraction and its two variants.
//!
//! ```text
//! Currency (decimals, symbol, name)
//!     |
//!     +-- NativeCurrency   one per network, no contract address
//!     |
//!     +-- Token            chain id + checksummed ERC-20 address
//! ```
//!
//! [`CurrencyKind`] holds either variant and is what [`currency_equals`]
//! dispatches on.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::{constants::ChainId, token::Token, weth9::weth9_on_chain};

/// Read-only metadata shared by every currency.
pub trait Currency {
    /// Decimal places of the smallest unit.
    fn decimals(&self) -> u8;

    /// Ticker symbol, if known.
    fn symbol(&self) -> Option<&str>;

    /// Human-readable name, if known.
    fn name(&self) -> Option<&str>;

    /// True for a network's native coin.
    fn is_native(&self) -> bool;

    /// True for an ERC-20 token.
    fn is_token(&self) -> bool {
        !self.is_native()
    }
}

/// A network's native coin (ETH on mainnet, BNB on BSC, ...).
///
/// Two native currencies are equal iff chain id, decimals, symbol and name
/// all match.
///
/// # Examples
///
/// ```
/// use dexcore::{ChainId, Currency, NativeCurrency, ETHER};
///
/// let bnb = NativeCurrency::on_chain(ChainId::Bsc);
/// assert_eq!(bnb.symbol(), Some("BNB"));
/// assert_eq!(bnb.decimals(), 18);
/// assert_ne!(bnb, ETHER);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NativeCurrency {
    chain_id: u64,
    decimals: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    symbol: Option<Cow<'static, str>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<Cow<'static, str>>,
}

/// Ether on Ethereum mainnet.
pub const ETHER: NativeCurrency = NativeCurrency::from_static(ChainId::Mainnet, "ETH", "Ether");

impl NativeCurrency {
    /// Create the native currency of an arbitrary chain.
    pub fn new(
        chain_id: impl Into<u64>,
        decimals: u8,
        symbol: Option<&str>,
        name: Option<&str>,
    ) -> Self {
        Self {
            chain_id: chain_id.into(),
            decimals,
            symbol: symbol.map(|s| Cow::Owned(s.to_owned())),
            name: name.map(|s| Cow::Owned(s.to_owned())),
        }
    }

    const fn from_static(chain: ChainId, symbol: &'static str, name: &'static str) -> Self {
        Self {
            chain_id: chain.id(),
            decimals: 18,
            symbol: Some(Cow::Borrowed(symbol)),
            name: Some(Cow::Borrowed(name)),
        }
    }

    /// The native currency of an enumerated network.
    pub const fn on_chain(chain: ChainId) -> Self {
        let (symbol, name) = match chain {
            ChainId::Mainnet
            | ChainId::Ropsten
            | ChainId::Rinkeby
            | ChainId::Goerli
            | ChainId::Kovan
            | ChainId::Oeth => ("ETH", "Ether"),
            ChainId::Matic | ChainId::Mumbai => ("MATIC", "Matic"),
            ChainId::Xdai => ("XDAI", "xDai"),
            ChainId::Harmony | ChainId::HarmonyB => ("ONE", "Harmony"),
            ChainId::Bsc | ChainId::Chapel => ("BNB", "BNB"),
        };
        Self::from_static(chain, symbol, name)
    }

    /// The chain this coin is native to.
    pub const fn chain_id(&self) -> u64 {
        self.chain_id
    }

    /// The canonical wrapped form of this coin, if the chain has a WETH9 entry.
    pub fn wrapped(&self) -> Option<&'static Token> {
        weth9_on_chain(self.chain_id)
    }
}

impl Currency for NativeCurrency {
    fn decimals(&self) -> u8 {
        self.decimals
    }

    fn symbol(&self) -> Option<&str> {
        self.symbol.as_deref()
    }

    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn is_native(&self) -> bool {
        true
    }
}

/// Either variant of [`Currency`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CurrencyKind {
    /// A network's native coin
    Native(NativeCurrency),
    /// An ERC-20 token
    Token(Token),
}

impl CurrencyKind {
    /// The token form of this currency: a token is its own wrapped form, a
    /// native coin maps to its chain's WETH9 entry.
    pub fn wrapped(&self) -> Option<&Token> {
        match self {
            CurrencyKind::Native(native) => native.wrapped(),
            CurrencyKind::Token(token) => Some(token),
        }
    }

    /// The chain this currency lives on.
    pub fn chain_id(&self) -> u64 {
        match self {
            CurrencyKind::Native(native) => native.chain_id(),
            CurrencyKind::Token(token) => token.chain_id(),
        }
    }

    /// The inner token, if this is one.
    pub fn as_token(&self) -> Option<&Token> {
        match self {
            CurrencyKind::Token(token) => Some(token),
            CurrencyKind::Native(_) => None,
        }
    }
}

impl Currency for CurrencyKind {
    fn decimals(&self) -> u8 {
        match self {
            CurrencyKind::Native(native) => native.decimals(),
            CurrencyKind::Token(token) => token.decimals(),
        }
    }

    fn symbol(&self) -> Option<&str> {
        match self {
            CurrencyKind::Native(native) => native.symbol(),
            CurrencyKind::Token(token) => token.symbol(),
        }
    }

    fn name(&self) -> Option<&str> {
        match self {
            CurrencyKind::Native(native) => native.name(),
            CurrencyKind::Token(token) => token.name(),
        }
    }

    fn is_native(&self) -> bool {
        matches!(self, CurrencyKind::Native(_))
    }
}

impl From<Token> for CurrencyKind {
    fn from(token: Token) -> Self {
        CurrencyKind::Token(token)
    }
}

impl From<NativeCurrency> for CurrencyKind {
    fn from(native: NativeCurrency) -> Self {
        CurrencyKind::Native(native)
    }
}

/// Compare two currencies for equality.
///
/// - two tokens: [`Token::equals`]
/// - a token and a native coin: never equal
/// - two native coins: equal iff chain id, decimals, symbol and name all match
///
/// # Examples
///
/// ```
/// use dexcore::{currency_equals, weth9, ChainId, CurrencyKind, ETHER};
///
/// let eth = CurrencyKind::from(ETHER);
/// let weth = CurrencyKind::from(weth9(ChainId::Mainnet).clone());
///
/// assert!(currency_equals(&weth, &weth));
/// assert!(currency_equals(&eth, &eth));
/// assert!(!currency_equals(&eth, &weth));
/// ```
pub fn currency_equals(a: &CurrencyKind, b: &CurrencyKind) -> bool {
    match (a, b) {
        (CurrencyKind::Token(a), CurrencyKind::Token(b)) => a.equals(b),
        (CurrencyKind::Token(_), CurrencyKind::Native(_))
        | (CurrencyKind::Native(_), CurrencyKind::Token(_)) => false,
        (CurrencyKind::Native(a), CurrencyKind::Native(b)) => std::ptr::eq(a, b) || a == b,
    }
}
