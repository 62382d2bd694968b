// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Protocol-wide constants: network identifiers, trade and rounding modes,
//! and the maximum 256-bit unsigned value.

use alloy_chains::Chain;
use alloy_primitives::{uint, U256};
use serde::{Deserialize, Serialize};

use crate::errors::ChainIdError;

/// Networks with a canonical WETH9 deployment.
///
/// The integer values are the networks' EIP-155 chain ids and are part of the
/// public contract: downstream consumers encode them in configuration and wire
/// data. Serializes as the bare integer.
///
/// # Examples
///
/// ```
/// use dexcore::ChainId;
///
/// assert_eq!(u64::from(ChainId::Mainnet), 1);
/// assert_eq!(ChainId::try_from(56u64).unwrap(), ChainId::Bsc);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u64", try_from = "u64")]
#[repr(u64)]
pub enum ChainId {
    /// Ethereum mainnet
    Mainnet = 1,
    /// Ropsten testnet
    Ropsten = 3,
    /// Rinkeby testnet
    Rinkeby = 4,
    /// Görli testnet
    Goerli = 5,
    /// Kovan testnet
    Kovan = 42,
    /// Polygon Mumbai testnet
    Mumbai = 80001,
    /// Polygon PoS
    Matic = 137,
    /// Gnosis chain (formerly xDai)
    Xdai = 100,
    /// Harmony shard 0
    Harmony = 1666600000,
    /// Harmony testnet shard 0
    HarmonyB = 1666700000,
    /// Optimism
    Oeth = 10,
    /// BNB Smart Chain
    Bsc = 56,
    /// BNB Smart Chain testnet
    Chapel = 97,
}

impl ChainId {
    /// Every enumerated network, in declaration order.
    pub const ALL: [ChainId; 13] = [
        ChainId::Mainnet,
        ChainId::Ropsten,
        ChainId::Rinkeby,
        ChainId::Goerli,
        ChainId::Kovan,
        ChainId::Mumbai,
        ChainId::Matic,
        ChainId::Xdai,
        ChainId::Harmony,
        ChainId::HarmonyB,
        ChainId::Oeth,
        ChainId::Bsc,
        ChainId::Chapel,
    ];

    /// The raw EIP-155 chain id.
    pub const fn id(self) -> u64 {
        self as u64
    }

    /// Short lowercase network name.
    pub const fn name(self) -> &'static str {
        match self {
            ChainId::Mainnet => "mainnet",
            ChainId::Ropsten => "ropsten",
            ChainId::Rinkeby => "rinkeby",
            ChainId::Goerli => "goerli",
            ChainId::Kovan => "kovan",
            ChainId::Mumbai => "mumbai",
            ChainId::Matic => "matic",
            ChainId::Xdai => "xdai",
            ChainId::Harmony => "harmony",
            ChainId::HarmonyB => "harmony-testnet",
            ChainId::Oeth => "optimism",
            ChainId::Bsc => "bsc",
            ChainId::Chapel => "chapel",
        }
    }

    /// The same network as an [`alloy_chains::Chain`].
    pub fn chain(self) -> Chain {
        Chain::from_id(self.id())
    }
}

impl From<ChainId> for u64 {
    fn from(value: ChainId) -> Self {
        value.id()
    }
}

impl From<ChainId> for Chain {
    fn from(value: ChainId) -> Self {
        value.chain()
    }
}

impl TryFrom<u64> for ChainId {
    type Error = ChainIdError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        ChainId::ALL
            .into_iter()
            .find(|chain| chain.id() == value)
            .ok_or(ChainIdError::Unknown(value))
    }
}

impl std::fmt::Display for ChainId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name(), self.id())
    }
}

/// Which side of a trade is fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TradeType {
    /// The input amount is fixed; the output is computed.
    ExactInput,
    /// The output amount is fixed; the input is computed.
    ExactOutput,
}

/// Rounding mode for fixed-point arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rounding {
    /// Toward zero
    RoundDown,
    /// To nearest, ties away from zero
    RoundHalfUp,
    /// Away from zero
    RoundUp,
}

/// 2^256 - 1, the "unbounded allowance" sentinel.
pub const MAX_UINT256: U256 =
    uint!(0xffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff_U256);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chain_id_values() {
        assert_eq!(ChainId::Mainnet.id(), 1);
        assert_eq!(ChainId::Ropsten.id(), 3);
        assert_eq!(ChainId::Rinkeby.id(), 4);
        assert_eq!(ChainId::Goerli.id(), 5);
        assert_eq!(ChainId::Kovan.id(), 42);
        assert_eq!(ChainId::Mumbai.id(), 80001);
        assert_eq!(ChainId::Matic.id(), 137);
        assert_eq!(ChainId::Xdai.id(), 100);
        assert_eq!(ChainId::Harmony.id(), 1666600000);
        assert_eq!(ChainId::HarmonyB.id(), 1666700000);
        assert_eq!(ChainId::Oeth.id(), 10);
        assert_eq!(ChainId::Bsc.id(), 56);
        assert_eq!(ChainId::Chapel.id(), 97);
    }

    #[test]
    fn test_try_from_round_trips_every_variant() {
        for chain in ChainId::ALL {
            assert_eq!(ChainId::try_from(chain.id()), Ok(chain));
        }
    }

    #[test]
    fn test_try_from_unknown() {
        assert_eq!(ChainId::try_from(0u64), Err(ChainIdError::Unknown(0)));
        assert_eq!(ChainId::try_from(8453u64), Err(ChainIdError::Unknown(8453)));
    }

    #[test]
    fn test_all_is_unique() {
        let mut ids: Vec<u64> = ChainId::ALL.iter().map(|c| c.id()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), ChainId::ALL.len());
    }

    #[test]
    fn test_alloy_chain_mapping() {
        assert_eq!(ChainId::Mainnet.chain(), Chain::mainnet());
        assert_eq!(ChainId::Harmony.chain().id(), 1666600000);
    }

    #[test]
    fn test_display() {
        assert_eq!(ChainId::Mainnet.to_string(), "mainnet (1)");
        assert_eq!(ChainId::Oeth.to_string(), "optimism (10)");
    }

    #[test]
    fn test_chain_id_serializes_as_integer() {
        let json = serde_json::to_string(&ChainId::Matic).unwrap();
        assert_eq!(json, "137");
        let back: ChainId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ChainId::Matic);
        assert!(serde_json::from_str::<ChainId>("12345").is_err());
    }

    #[test]
    fn test_enum_serialization() {
        assert_eq!(
            serde_json::to_string(&TradeType::ExactInput).unwrap(),
            "\"exact_input\""
        );
        assert_eq!(
            serde_json::to_string(&Rounding::RoundHalfUp).unwrap(),
            "\"round_half_up\""
        );
    }

    #[test]
    fn test_max_uint256() {
        assert_eq!(MAX_UINT256, U256::MAX);
        assert_eq!(MAX_UINT256.wrapping_add(U256::from(1u8)), U256::ZERO);
    }
}
