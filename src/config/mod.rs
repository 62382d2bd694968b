// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Configurable wrapped-native token lookup
//!
//! The static WETH9 table only covers the enumerated [`ChainId`] networks.
//! [`WrappedNativeRegistry`] layers per-chain overrides on top of it, so
//! callers can register wrapped-native tokens for other chains or replace a
//! default entry. A registry is built once and then only read.
//!
//! # Example: Using defaults
//!
//! ```rust
//! use dexcore::{weth9, ChainId, WrappedNativeRegistry};
//!
//! let registry = WrappedNativeRegistry::default();
//! assert_eq!(registry.get(1), Some(weth9(ChainId::Mainnet)));
//! ```
//!
//! # Example: Adding a chain
//!
//! ```rust
//! use dexcore::{Token, WrappedNativeRegistryBuilder};
//!
//! let base_weth = Token::new(
//!     8453u64,
//!     "0x4200000000000000000000000000000000000006",
//!     18,
//!     Some("WETH"),
//!     Some("Wrapped Ether"),
//! )
//! .unwrap();
//!
//! let registry = WrappedNativeRegistryBuilder::with_defaults()
//!     .wrapped_native(base_weth.clone())
//!     .build();
//!
//! assert_eq!(registry.get(8453), Some(&base_weth));
//! assert!(registry.contains(1));
//! ```
//!
//! [`ChainId`]: crate::ChainId

use std::collections::{BTreeSet, HashMap};

use crate::{spans, token::Token, weth9::weth9_entries, weth9::weth9_on_chain};

pub mod constants;

/// Wrapped-native token lookup: WETH9 defaults plus per-chain overrides
///
/// Use [`WrappedNativeRegistryBuilder`] for a fluent API to construct instances.
#[derive(Debug, Clone)]
pub struct WrappedNativeRegistry {
    /// Whether chains without an override fall back to the WETH9 table
    /// Default: true
    use_defaults: bool,

    /// Chain-specific overrides, keyed by each token's own chain id
    overrides: HashMap<u64, Token>,
}

impl Default for WrappedNativeRegistry {
    fn default() -> Self {
        Self::with_weth9_defaults()
    }
}

impl WrappedNativeRegistry {
    /// Create a registry backed by every WETH9 entry, with no overrides
    pub fn with_weth9_defaults() -> Self {
        Self {
            use_defaults: true,
            overrides: HashMap::new(),
        }
    }

    /// Create a registry with no entries at all
    ///
    /// Suitable for chains where none of the WETH9 defaults apply.
    pub fn empty() -> Self {
        Self {
            use_defaults: false,
            overrides: HashMap::new(),
        }
    }

    /// Get the wrapped-native token for a chain
    ///
    /// Returns the chain-specific override if set, otherwise the WETH9 entry
    /// (when defaults are enabled).
    pub fn get(&self, chain_id: u64) -> Option<&Token> {
        self.overrides.get(&chain_id).or_else(|| {
            if self.use_defaults {
                weth9_on_chain(chain_id)
            } else {
                None
            }
        })
    }

    /// Whether the registry has an entry for this chain
    pub fn contains(&self, chain_id: u64) -> bool {
        self.get(chain_id).is_some()
    }

    /// Every chain id with an entry, ascending
    pub fn chain_ids(&self) -> BTreeSet<u64> {
        let defaults = self
            .use_defaults
            .then(|| weth9_entries().map(|(chain, _)| chain.id()))
            .into_iter()
            .flatten();
        self.overrides.keys().copied().chain(defaults).collect()
    }

    /// Number of chains with an entry
    pub fn len(&self) -> usize {
        let defaults = if self.use_defaults {
            weth9_entries()
                .filter(|(chain, _)| !self.overrides.contains_key(&chain.id()))
                .count()
        } else {
            0
        };
        self.overrides.len() + defaults
    }

    /// Whether the registry has no entries
    pub fn is_empty(&self) -> bool {
        !self.use_defaults && self.overrides.is_empty()
    }

    /// Iterate over `(chain_id, token)` pairs, ascending by chain id
    pub fn iter(&self) -> impl Iterator<Item = (u64, &Token)> + '_ {
        self.chain_ids()
            .into_iter()
            .filter_map(move |chain_id| self.get(chain_id).map(|token| (chain_id, token)))
    }
}

/// Builder for [`WrappedNativeRegistry`]
///
/// # Example
///
/// ```rust
/// use dexcore::{weth9, ChainId, WrappedNativeRegistryBuilder};
///
/// // Only mainnet, using the default entry
/// let registry = WrappedNativeRegistryBuilder::new()
///     .wrapped_native(weth9(ChainId::Mainnet).clone())
///     .build();
///
/// assert_eq!(registry.len(), 1);
/// assert!(!registry.contains(56));
/// ```
#[derive(Debug)]
pub struct WrappedNativeRegistryBuilder {
    registry: WrappedNativeRegistry,
}

impl Default for WrappedNativeRegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl WrappedNativeRegistryBuilder {
    /// Create a new builder with no entries
    pub fn new() -> Self {
        Self {
            registry: WrappedNativeRegistry::empty(),
        }
    }

    /// Create a new builder seeded with every WETH9 entry
    pub fn with_defaults() -> Self {
        Self {
            registry: WrappedNativeRegistry::with_weth9_defaults(),
        }
    }

    /// Register the wrapped-native token for the token's own chain
    ///
    /// Replaces any default or earlier override for that chain.
    pub fn wrapped_native(mut self, token: Token) -> Self {
        let chain_id = token.chain_id();
        if let Some(previous) = self.registry.get(chain_id) {
            if previous != &token {
                tracing::debug!(
                    chain_id,
                    previous = %previous.address(),
                    replacement = %token.address(),
                    "Overriding wrapped-native token"
                );
            }
        }
        self.registry.overrides.insert(chain_id, token);
        self
    }

    /// Build the registry
    pub fn build(self) -> WrappedNativeRegistry {
        let span = spans::build_wrapped_native_registry(
            self.registry.use_defaults,
            self.registry.overrides.len(),
        );
        let _guard = span.enter();

        tracing::debug!(
            chains = self.registry.len(),
            "Built wrapped-native registry"
        );
        self.registry
    }
}
