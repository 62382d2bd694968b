// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Address validation and EIP-55 normalization.
//!
//! Accepted input is 40 hex digits with an optional `0x` prefix. Single-case
//! input (all lowercase or all uppercase) carries no checksum and is accepted
//! as-is; mixed-case input must match its EIP-55 checksum exactly. The output
//! is always the checksummed form, so validation is idempotent.

use alloy_primitives::Address;

use crate::{errors::TokenError, spans};

const ADDRESS_HEX_LEN: usize = 40;

/// Parse a raw address string into an [`Address`], rejecting malformed input.
///
/// # Errors
///
/// Returns [`TokenError::InvalidAddress`] if the input has the wrong length,
/// contains non-hex characters, or is mixed-case with a bad checksum.
///
/// # Examples
///
/// ```
/// use dexcore::parse_address;
///
/// let addr = parse_address("0xc02aaa39b223fe8d0a0e5c4f27ead9083c756cc2").unwrap();
/// assert_eq!(
///     addr.to_checksum(None),
///     "0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2"
/// );
///
/// // Mixed case with a wrong checksum is rejected
/// assert!(parse_address("0xc02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2").is_err());
/// ```
pub fn parse_address(raw: &str) -> Result<Address, TokenError> {
    let span = spans::validate_address(raw);
    let _guard = span.enter();

    let hex = raw.strip_prefix("0x").unwrap_or(raw);

    if hex.len() != ADDRESS_HEX_LEN {
        return Err(reject(
            raw,
            format!("expected {ADDRESS_HEX_LEN} hex digits, got {}", hex.len()),
        ));
    }

    if let Some(bad) = hex.chars().find(|c| !c.is_ascii_hexdigit()) {
        return Err(reject(raw, format!("non-hex character {bad:?}")));
    }

    let address: Address = hex
        .parse()
        .map_err(|e| reject(raw, format!("hex decode failed: {e}")))?;

    let has_upper = hex.bytes().any(|b| b.is_ascii_uppercase());
    let has_lower = hex.bytes().any(|b| b.is_ascii_lowercase());
    if has_upper && has_lower {
        let checksummed = address.to_checksum(None);
        if &checksummed[2..] != hex {
            return Err(reject(raw, "bad EIP-55 checksum"));
        }
    }

    Ok(address)
}

/// Validate a raw address string and return its EIP-55 checksummed form.
///
/// Deterministic and idempotent: feeding the output back in returns it
/// unchanged.
///
/// # Errors
///
/// Same conditions as [`parse_address`].
pub fn validate_and_parse_address(raw: &str) -> Result<String, TokenError> {
    parse_address(raw).map(|address| address.to_checksum(None))
}

fn reject(raw: &str, reason: impl Into<String>) -> TokenError {
    let reason = reason.into();
    tracing::debug!(address = raw, reason = %reason, "Rejected malformed address");
    TokenError::invalid_address(raw, reason)
}
