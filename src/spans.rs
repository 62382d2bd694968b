// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Span creation helpers for dexcore operations.
//!
//! Telemetry is kept out of the business logic: instead of `#[instrument]`
//! attributes, each instrumented operation has a helper here that it enters
//! at the top of its body.
//!
//! ```rust,ignore
//! pub fn my_operation(&self, param: Type) -> Result<T> {
//!     let span = spans::my_operation(param_value);
//!     let _guard = span.enter();
//!     // Business logic here
//! }
//! ```

use alloy_primitives::Address;
use tracing::Span;

/// Create span for validating and checksumming a raw address string.
///
/// Parent: token_new span, or None when called directly
#[inline]
pub(crate) fn validate_address(raw: &str) -> Span {
    tracing::trace_span!("dexcore.validate_address", raw = raw)
}

/// Create span for constructing a token from caller-supplied input.
///
/// Children: validate_address span
#[inline]
pub(crate) fn token_new(chain_id: u64, decimals: u8) -> Span {
    tracing::trace_span!(
        "dexcore.token_new",
        chain_id = chain_id,
        decimals = decimals
    )
}

/// Create span for ordering two tokens.
#[inline]
pub(crate) fn sorts_before(
    left_chain: u64,
    left: Address,
    right_chain: u64,
    right: Address,
) -> Span {
    tracing::trace_span!(
        "dexcore.sorts_before",
        left_chain = left_chain,
        left = %left,
        right_chain = right_chain,
        right = %right,
    )
}

/// Create span for building a wrapped-native registry.
///
/// Parent: None (root span for this operation)
#[inline]
pub(crate) fn build_wrapped_native_registry(defaults: bool, overrides: usize) -> Span {
    tracing::debug_span!(
        "dexcore.build_wrapped_native_registry",
        defaults = defaults,
        overrides = overrides,
    )
}
