// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for the dexcore library.
//!
//! Each module that can fail has its own error type:
//! - [`TokenError`] - address validation and token ordering preconditions
//! - [`ChainIdError`] - conversion of raw integers into [`crate::ChainId`]
//!
//! [`DexCoreError`] wraps both for callers that don't need to tell them apart.
//!
//! # Examples
//!
//! ```rust
//! use dexcore::{ChainId, DexCoreError, Token};
//!
//! fn parse(chain: u64, address: &str) -> Result<Token, DexCoreError> {
//!     let chain = ChainId::try_from(chain)?;
//!     Ok(Token::new(chain, address, 18, None, None)?)
//! }
//!
//! assert!(parse(1, "0xc02aaa39b223fe8d0a0e5c4f27ead9083c756cc2").is_ok());
//! assert!(matches!(
//!     parse(999_999, "0xc02aaa39b223fe8d0a0e5c4f27ead9083c756cc2"),
//!     Err(DexCoreError::ChainId(_))
//! ));
//! ```

mod chain;
mod token;

pub use chain::ChainIdError;
pub use token::TokenError;

/// Unified error type for all dexcore operations.
///
/// Module-specific errors convert via `From`, so `?` works across them.
#[derive(Debug, thiserror::Error)]
pub enum DexCoreError {
    /// Error from token construction or ordering.
    #[error("Token error: {0}")]
    Token(#[from] TokenError),

    /// Error from chain id conversion.
    #[error("Chain id error: {0}")]
    ChainId(#[from] ChainIdError),
}
