// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for token construction and ordering.

use alloy_primitives::Address;

/// Errors raised by [`crate::Token`] construction and comparison.
///
/// Every variant is a precondition violation on a pure value object. None of
/// them are transient, so retrying the same call always fails the same way.
///
/// # Examples
///
/// ```rust
/// use dexcore::{ChainId, Token, TokenError};
///
/// let err = Token::new(ChainId::Mainnet, "0x1234", 18, None, None).unwrap_err();
/// assert!(matches!(err, TokenError::InvalidAddress { .. }));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    /// The supplied string is not a well-formed EVM address.
    ///
    /// Raised when the input has the wrong length, contains non-hex
    /// characters, or is mixed-case without a valid EIP-55 checksum.
    #[error("Invalid address {address:?}: {reason}")]
    InvalidAddress {
        /// The raw input as supplied by the caller
        address: String,
        /// Why the input was rejected
        reason: String,
    },

    /// The two tokens live on different chains and cannot be ordered.
    #[error("Cannot order tokens across chains: {left} != {right}")]
    ChainMismatch {
        /// Chain id of the receiver
        left: u64,
        /// Chain id of the argument
        right: u64,
    },

    /// The two tokens share chain and address, so they are the same asset.
    #[error("Tokens share address {address} on chain {chain_id}")]
    DuplicateAddress {
        /// The shared chain id
        chain_id: u64,
        /// The shared address
        address: Address,
    },
}

impl TokenError {
    /// Create an `InvalidAddress` error for a raw input string.
    pub fn invalid_address(address: impl Into<String>, reason: impl Into<String>) -> Self {
        TokenError::InvalidAddress {
            address: address.into(),
            reason: reason.into(),
        }
    }
}
