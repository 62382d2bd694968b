// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Chain-scoped ERC-20 token identity.

use std::{
    borrow::Cow,
    cmp::Ordering,
    hash::{Hash, Hasher},
};

use alloy_chains::Chain;
use alloy_primitives::Address;
use serde::{Deserialize, Serialize};

use crate::{
    address::parse_address, constants::ChainId, currency::Currency, errors::TokenError, spans,
};

/// An ERC-20 token: a currency with a chain id and a checksummed address.
///
/// Two tokens are the same asset iff their chain ids and addresses match.
/// Decimals, symbol and name are metadata and do not take part in equality,
/// hashing or ordering.
///
/// The chain id is stored raw, so tokens on networks outside [`ChainId`] can
/// still be represented.
///
/// # Examples
///
/// ```
/// use dexcore::{weth9, ChainId, Token};
///
/// let weth = Token::new(
///     ChainId::Mainnet,
///     "0xc02aaa39b223fe8d0a0e5c4f27ead9083c756cc2",
///     18,
///     Some("WETH9"),
///     Some("Wrapped Ether"),
/// )
/// .unwrap();
///
/// assert_eq!(weth.checksum(), "0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2");
/// assert!(weth.equals(weth9(ChainId::Mainnet)));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(into = "TokenRecord", try_from = "TokenRecord")]
pub struct Token {
    chain_id: u64,
    address: Address,
    decimals: u8,
    symbol: Option<Cow<'static, str>>,
    name: Option<Cow<'static, str>>,
}

impl Token {
    /// Create a token from a raw address string.
    ///
    /// The address is validated and stored in checksummed form; the raw
    /// input is never kept.
    ///
    /// # Errors
    ///
    /// Returns [`TokenError::InvalidAddress`] if `address` is not a
    /// well-formed EVM address.
    pub fn new(
        chain_id: impl Into<u64>,
        address: &str,
        decimals: u8,
        symbol: Option<&str>,
        name: Option<&str>,
    ) -> Result<Self, TokenError> {
        let chain_id = chain_id.into();
        let span = spans::token_new(chain_id, decimals);
        let _guard = span.enter();

        let address = parse_address(address)?;
        let token = Self::from_address(chain_id, address, decimals, symbol, name);
        Ok(token)
    }

    /// Create a token from an already-parsed [`Address`].
    ///
    /// Infallible: an `Address` is 20 bytes and always has a checksummed form.
    pub fn from_address(
        chain_id: impl Into<u64>,
        address: Address,
        decimals: u8,
        symbol: Option<&str>,
        name: Option<&str>,
    ) -> Self {
        Self {
            chain_id: chain_id.into(),
            address,
            decimals,
            symbol: symbol.map(|s| Cow::Owned(s.to_owned())),
            name: name.map(|s| Cow::Owned(s.to_owned())),
        }
    }

    /// Compile-time constructor for static tables.
    pub(crate) const fn from_static(
        chain: ChainId,
        address: Address,
        decimals: u8,
        symbol: &'static str,
        name: &'static str,
    ) -> Self {
        Self {
            chain_id: chain.id(),
            address,
            decimals,
            symbol: Some(Cow::Borrowed(symbol)),
            name: Some(Cow::Borrowed(name)),
        }
    }

    /// The raw chain id.
    pub const fn chain_id(&self) -> u64 {
        self.chain_id
    }

    /// The chain as an [`alloy_chains::Chain`].
    pub fn chain(&self) -> Chain {
        Chain::from_id(self.chain_id)
    }

    /// The chain as a [`ChainId`], if it is one of the enumerated networks.
    pub fn known_chain(&self) -> Option<ChainId> {
        ChainId::try_from(self.chain_id).ok()
    }

    /// The token contract address.
    pub const fn address(&self) -> Address {
        self.address
    }

    /// The EIP-55 checksummed address string.
    pub fn checksum(&self) -> String {
        self.address.to_checksum(None)
    }

    /// Returns true if both tokens are the same asset.
    ///
    /// Short-circuits when `other` is the same instance.
    pub fn equals(&self, other: &Token) -> bool {
        std::ptr::eq(self, other)
            || (self.chain_id == other.chain_id && self.address == other.address)
    }

    /// Returns true if this token's address sorts before `other`'s.
    ///
    /// Comparison is case-insensitive over the hex address, which is the
    /// same as comparing the raw address bytes.
    ///
    /// # Errors
    ///
    /// - [`TokenError::ChainMismatch`] if the tokens are on different chains
    /// - [`TokenError::DuplicateAddress`] if the tokens share an address
    pub fn sorts_before(&self, other: &Token) -> Result<bool, TokenError> {
        let span = spans::sorts_before(self.chain_id, self.address, other.chain_id, other.address);
        let _guard = span.enter();

        if self.chain_id != other.chain_id {
            tracing::debug!(
                left = self.chain_id,
                right = other.chain_id,
                "Refusing to order tokens across chains"
            );
            return Err(TokenError::ChainMismatch {
                left: self.chain_id,
                right: other.chain_id,
            });
        }

        if self.address == other.address {
            tracing::debug!(
                chain_id = self.chain_id,
                address = %self.address,
                "Refusing to order a token against itself"
            );
            return Err(TokenError::DuplicateAddress {
                chain_id: self.chain_id,
                address: self.address,
            });
        }

        Ok(self.address < other.address)
    }

    /// Order two tokens so the first one sorts before the second.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Token::sorts_before`].
    ///
    /// # Examples
    ///
    /// ```
    /// use dexcore::{weth9, ChainId, Token};
    ///
    /// let weth = weth9(ChainId::Mainnet);
    /// let usdc = Token::new(
    ///     ChainId::Mainnet,
    ///     "0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48",
    ///     6,
    ///     Some("USDC"),
    ///     None,
    /// )
    /// .unwrap();
    ///
    /// let (token0, token1) = Token::sorted_pair(weth, &usdc).unwrap();
    /// assert!(token0.equals(&usdc));
    /// assert!(token1.equals(weth));
    /// ```
    pub fn sorted_pair<'a>(
        a: &'a Token,
        b: &'a Token,
    ) -> Result<(&'a Token, &'a Token), TokenError> {
        if a.sorts_before(b)? {
            Ok((a, b))
        } else {
            Ok((b, a))
        }
    }
}

impl Currency for Token {
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
        false
    }
}

impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl Eq for Token {}

impl Hash for Token {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.chain_id.hash(state);
        self.address.hash(state);
    }
}

/// Tokens on different chains are incomparable.
impl PartialOrd for Token {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        (self.chain_id == other.chain_id).then(|| self.address.cmp(&other.address))
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.symbol() {
            Some(symbol) => write!(
                f,
                "{symbol} ({}) on chain {}",
                self.checksum(),
                self.chain_id
            ),
            None => write!(f, "{} on chain {}", self.checksum(), self.chain_id),
        }
    }
}

/// Wire form of a [`Token`]; deserialization re-runs address validation.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TokenRecord {
    chain_id: u64,
    address: String,
    decimals: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    symbol: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
}

impl From<Token> for TokenRecord {
    fn from(token: Token) -> Self {
        Self {
            chain_id: token.chain_id,
            address: token.checksum(),
            decimals: token.decimals,
            symbol: token.symbol.map(Cow::into_owned),
            name: token.name.map(Cow::into_owned),
        }
    }
}

impl TryFrom<TokenRecord> for Token {
    type Error = TokenError;

    fn try_from(record: TokenRecord) -> Result<Self, Self::Error> {
        Token::new(
            record.chain_id,
            &record.address,
            record.decimals,
            record.symbol.as_deref(),
            record.name.as_deref(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    const WETH_LOWER: &str = "0xc02aaa39b223fe8d0a0e5c4f27ead9083c756cc2";
    const WETH_CHECKSUMMED: &str = "0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2";
    const USDC_LOWER: &str = "0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48";
    const DAI_LOWER: &str = "0x6b175474e89094c44da98b954eedeac495271d0f";

    fn token(chain_id: u64, address: &str) -> Token {
        Token::new(chain_id, address, 18, None, None).unwrap()
    }

    #[test]
    fn test_new_normalizes_address() {
        let weth = token(1, WETH_LOWER);
        assert_eq!(weth.checksum(), WETH_CHECKSUMMED);
        assert_eq!(weth.chain_id(), 1);
        assert_eq!(weth.decimals(), 18);
        assert_eq!(weth.symbol(), None);
        assert_eq!(weth.name(), None);
    }

    #[test]
    fn test_new_keeps_metadata() {
        let (symbol, name) = (Some("USDC"), Some("USD Coin"));
        let usdc = Token::new(ChainId::Mainnet, USDC_LOWER, 6, symbol, name).unwrap();
        assert_eq!(usdc.decimals(), 6);
        assert_eq!(usdc.symbol(), Some("USDC"));
        assert_eq!(usdc.name(), Some("USD Coin"));
        assert!(usdc.is_token());
        assert!(!usdc.is_native());
    }

    #[test]
    fn test_new_rejects_invalid_address() {
        let err = Token::new(1u64, "0xnot-an-address", 18, None, None).unwrap_err();
        assert!(matches!(err, TokenError::InvalidAddress { .. }));
    }

    #[test]
    fn test_equals_is_reflexive() {
        let weth = token(1, WETH_LOWER);
        assert!(weth.equals(&weth));
    }

    #[test]
    fn test_equals_ignores_metadata_and_input_casing() {
        let a = Token::new(1u64, WETH_LOWER, 18, Some("WETH"), None).unwrap();
        let b = Token::new(1u64, WETH_CHECKSUMMED, 9, None, Some("Other")).unwrap();
        assert!(a.equals(&b));
        assert!(b.equals(&a));
        assert_eq!(a, b);
    }

    #[test]
    fn test_equals_requires_same_chain() {
        let mainnet = token(1, WETH_LOWER);
        let bsc = token(56, WETH_LOWER);
        assert!(!mainnet.equals(&bsc));
        assert_ne!(mainnet, bsc);
    }

    #[test]
    fn test_hash_matches_equality() {
        let mut set = HashSet::new();
        set.insert(Token::new(1u64, WETH_LOWER, 18, Some("WETH"), None).unwrap());
        set.insert(Token::new(1u64, WETH_CHECKSUMMED, 18, None, None).unwrap());
        set.insert(token(56, WETH_LOWER));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_sorts_before() {
        let usdc = token(1, USDC_LOWER);
        let weth = token(1, WETH_LOWER);
        assert_eq!(usdc.sorts_before(&weth), Ok(true));
        assert_eq!(weth.sorts_before(&usdc), Ok(false));
    }

    #[test]
    fn test_sorts_before_ignores_input_casing() {
        // 0x6b17... < 0xa0b8... even though 'B' < 'a' in ASCII
        let dai_checksummed = "0x6B175474E89094C44Da98b954EedeAC495271d0F";
        let dai = Token::new(1u64, dai_checksummed, 18, None, None).unwrap();
        let usdc = token(1, USDC_LOWER);
        assert_eq!(dai.sorts_before(&usdc), Ok(true));
        assert!(DAI_LOWER < USDC_LOWER);
    }

    #[test]
    fn test_sorts_before_chain_mismatch() {
        let a = token(1, USDC_LOWER);
        let b = token(56, WETH_LOWER);
        assert_eq!(
            a.sorts_before(&b),
            Err(TokenError::ChainMismatch { left: 1, right: 56 })
        );
    }

    #[test]
    fn test_sorts_before_duplicate_address() {
        let a = token(1, WETH_LOWER);
        let b = Token::new(1u64, WETH_CHECKSUMMED, 6, Some("X"), None).unwrap();
        assert_eq!(
            a.sorts_before(&b),
            Err(TokenError::DuplicateAddress {
                chain_id: 1,
                address: a.address()
            })
        );
        assert!(a.sorts_before(&a).is_err());
    }

    #[test]
    fn test_sorted_pair() {
        let usdc = token(1, USDC_LOWER);
        let weth = token(1, WETH_LOWER);
        let (t0, t1) = Token::sorted_pair(&weth, &usdc).unwrap();
        assert_eq!(t0, &usdc);
        assert_eq!(t1, &weth);
        let (t0, t1) = Token::sorted_pair(&usdc, &weth).unwrap();
        assert_eq!(t0, &usdc);
        assert_eq!(t1, &weth);
    }

    #[test]
    fn test_partial_ord() {
        let usdc = token(1, USDC_LOWER);
        let weth = token(1, WETH_LOWER);
        assert_eq!(usdc.partial_cmp(&weth), Some(Ordering::Less));
        assert_eq!(weth.partial_cmp(&weth.clone()), Some(Ordering::Equal));
        assert_eq!(usdc.partial_cmp(&token(56, WETH_LOWER)), None);
    }

    #[test]
    fn test_known_chain() {
        assert_eq!(token(1, WETH_LOWER).known_chain(), Some(ChainId::Mainnet));
        assert_eq!(token(8453, WETH_LOWER).known_chain(), None);
        assert_eq!(token(8453, WETH_LOWER).chain().id(), 8453);
    }

    #[test]
    fn test_display() {
        let weth = Token::new(1u64, WETH_LOWER, 18, Some("WETH9"), None).unwrap();
        let expected = format!("WETH9 ({WETH_CHECKSUMMED}) on chain 1");
        assert_eq!(weth.to_string(), expected);

        let expected = format!("{WETH_CHECKSUMMED} on chain 1");
        assert_eq!(token(1, WETH_LOWER).to_string(), expected);
    }

    #[test]
    fn test_serialization() {
        let usdc = Token::new(1u64, USDC_LOWER, 6, Some("USDC"), None).unwrap();
        let json = serde_json::to_value(&usdc).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "chainId": 1,
                "address": "0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48",
                "decimals": 6,
                "symbol": "USDC",
            })
        );

        let back: Token = serde_json::from_value(json).unwrap();
        assert_eq!(back, usdc);
        assert_eq!(back.symbol(), Some("USDC"));
    }

    #[test]
    fn test_deserialization_validates_address() {
        let json = r#"{"chainId":1,"address":"0x1234","decimals":18}"#;
        assert!(serde_json::from_str::<Token>(json).is_err());
    }
}
