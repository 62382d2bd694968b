// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for chain identifier conversion.

/// Errors that can occur when converting a raw integer into a [`crate::ChainId`].
///
/// # Examples
///
/// ```rust
/// use dexcore::{ChainId, ChainIdError};
///
/// assert_eq!(ChainId::try_from(1u64), Ok(ChainId::Mainnet));
/// assert_eq!(ChainId::try_from(8453u64), Err(ChainIdError::Unknown(8453)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ChainIdError {
    /// The integer does not name any of the enumerated networks.
    ///
    /// Tokens on such chains can still be built from the raw id; only the
    /// enumerated set has WETH9 entries.
    #[error("Unknown chain id: {0}")]
    Unknown(u64),
}
