// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Canonical value objects for EVM DEX SDKs.
//!
//! - [`ChainId`], [`TradeType`], [`Rounding`] and [`MAX_UINT256`]
//! - [`Currency`] with its two variants, [`NativeCurrency`] and [`Token`]
//! - [`currency_equals`] over [`CurrencyKind`]
//! - the WETH9 registry: [`weth9`], [`weth9_on_chain`], [`weth9_entries`]
//! - [`WrappedNativeRegistry`] for chains outside the enumerated set
//!
//! Everything here is immutable after construction and safe to share across
//! threads. Nothing performs I/O.
//!
//! # Example
//!
//! ```rust
//! use dexcore::{weth9, ChainId, Token, TokenError};
//!
//! let usdc = Token::new(
//!     ChainId::Mainnet,
//!     "0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48",
//!     6,
//!     Some("USDC"),
//!     Some("USD Coin"),
//! )?;
//! let weth = weth9(ChainId::Mainnet);
//!
//! assert!(usdc.sorts_before(weth)?);
//! assert!(matches!(
//!     usdc.sorts_before(weth9(ChainId::Bsc)),
//!     Err(TokenError::ChainMismatch { .. })
//! ));
//! # Ok::<(), TokenError>(())
//! ```

mod address;
pub mod config;
mod constants;
mod currency;
pub mod errors;
mod spans;
mod token;
mod weth9;

pub use address::{parse_address, validate_and_parse_address};
pub use config::{WrappedNativeRegistry, WrappedNativeRegistryBuilder};
pub use constants::{ChainId, Rounding, TradeType, MAX_UINT256};
pub use currency::{currency_equals, Currency, CurrencyKind, NativeCurrency, ETHER};
pub use errors::{ChainIdError, DexCoreError, TokenError};
pub use token::Token;
pub use weth9::{weth9, weth9_entries, weth9_on_chain};
