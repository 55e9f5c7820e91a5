#![cfg_attr(not(feature = "std"), no_std)]
extern crate alloc;

pub mod chain_info;
pub mod chain_registry;
pub mod common;
pub mod common_bases;
pub mod currency;
pub mod filter;
pub mod registry;
pub mod rpc;
pub mod utils;

use ink_prelude::{
    string::{String, ToString},
    vec::Vec,
};

use chain_info::{ChainInfo, TokenSpec};
use common::{BackendChain, ChainId, ChainKey, GqlChain, NetworkLayer, Platform, PollingInterval};
use registry::chain::{chain_info, ORDERED_CHAINS};
use utils::general_utils::{addresses_equal, slice_to_hex_string};

pub use chain_registry::ChainRegistry;
pub use common::PublicError;
pub use filter::{ChainFlags, EnabledChainsInfo};

pub fn get_chain_info(chain: ChainKey) -> &'static ChainInfo {
    chain_info(chain)
}

/// Every supported chain in priority order.
pub fn all_chain_keys() -> &'static [ChainKey] {
    &ORDERED_CHAINS
}

pub fn get_chain_label(chain: ChainKey) -> &'static str {
    chain_info(chain).label
}

pub fn get_chain_explorer_name(chain: ChainKey) -> &'static str {
    chain_info(chain).explorer.name
}

pub fn is_testnet_chain(chain: ChainKey) -> bool {
    chain_info(chain).testnet
}

pub fn is_mainnet_chain(chain: ChainKey) -> bool {
    !is_testnet_chain(chain)
}

pub fn is_backend_supported_chain_id(chain: ChainKey) -> bool {
    chain_info(chain).is_backend_supported()
}

pub fn get_network_layer(chain: ChainKey) -> NetworkLayer {
    chain_info(chain).network_layer
}

pub fn is_l2_chain(chain: ChainKey) -> bool {
    get_network_layer(chain) == NetworkLayer::L2
}

pub fn to_graphql_chain(chain: ChainKey) -> BackendChain {
    chain_info(chain).backend_chain.chain
}

/// Inverse of `to_graphql_chain` over supported links only. A tag no chain
/// owns resolves to None.
pub fn from_graphql_chain(tag: GqlChain) -> Option<ChainKey> {
    ORDERED_CHAINS
        .iter()
        .copied()
        .find(|chain| to_graphql_chain(*chain) == BackendChain::Supported(tag))
}

pub fn from_graphql_chain_name(name: &str) -> Option<ChainKey> {
    from_graphql_chain(GqlChain::from_graphql_name(name)?)
}

pub fn is_backend_supported_chain(tag: GqlChain) -> bool {
    from_graphql_chain(tag).map_or(false, is_backend_supported_chain_id)
}

fn gql_chains_by_testnet(testnet: bool) -> Vec<GqlChain> {
    ORDERED_CHAINS
        .iter()
        .map(|chain| chain_info(*chain))
        .filter(|info| info.platform == Platform::Evm && info.testnet == testnet)
        .filter_map(|info| info.backend_chain.chain.gql_chain())
        .collect()
}

/// Backend tags of the EVM mainnets the data service knows about.
pub fn gql_mainnet_chains() -> Vec<GqlChain> {
    gql_chains_by_testnet(false)
}

pub fn gql_testnet_chains() -> Vec<GqlChain> {
    gql_chains_by_testnet(true)
}

/// A chain id as received from wallets, URLs or untyped payloads.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum RawChainId<'a> {
    Number(ChainId),
    Text(&'a str),
}

impl From<ChainId> for RawChainId<'_> {
    fn from(id: ChainId) -> Self {
        Self::Number(id)
    }
}

impl<'a> From<&'a str> for RawChainId<'a> {
    fn from(text: &'a str) -> Self {
        Self::Text(text)
    }
}

/// Validates a raw chain id. Text must be the exact decimal form of a
/// supported id, so "01" or " 1" are rejected.
pub fn coerce_chain_id<'a>(raw: impl Into<RawChainId<'a>>) -> Option<ChainKey> {
    match raw.into() {
        RawChainId::Number(id) => ChainKey::from_id(id),
        RawChainId::Text(text) => ORDERED_CHAINS
            .iter()
            .copied()
            .find(|chain| chain.to_string() == text),
    }
}

pub fn is_universe_chain_id(id: ChainId) -> bool {
    ChainKey::from_id(id).is_some()
}

/// Minimal even-length hex, e.g. 1 -> "0x01", 3945 -> "0x0f69".
pub fn chain_id_to_hex_string(chain: ChainKey) -> String {
    let bytes = chain.id().to_be_bytes();
    let first = bytes
        .iter()
        .position(|b| *b != 0)
        .unwrap_or(bytes.len() - 1);
    slice_to_hex_string(&bytes[first..])
}

/// Parses unsigned hex with an optional `0x` prefix.
pub fn hex_string_to_chain_id(hex: &str) -> Option<ChainId> {
    let digits = hex
        .strip_prefix("0x")
        .or_else(|| hex.strip_prefix("0X"))
        .unwrap_or(hex);
    // from_str_radix would also take a leading sign
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    ChainId::from_str_radix(digits, 16).ok()
}

pub fn get_chain_url_param(chain: ChainKey) -> &'static str {
    chain_info(chain).url_param
}

/// Chain selected by a `?chain=` URL parameter. Missing or unknown values
/// select the default chain.
pub fn get_chain_from_url_param(param: Option<&str>) -> ChainKey {
    param
        .and_then(|param| {
            ORDERED_CHAINS
                .iter()
                .copied()
                .find(|chain| get_chain_url_param(*chain) == param)
        })
        .unwrap_or(filter::DEFAULT_CHAIN)
}

pub fn get_polling_interval_by_chain(chain: ChainKey) -> PollingInterval {
    chain_info(chain).polling_interval()
}

pub fn get_stablecoins(chain: ChainKey) -> &'static [TokenSpec] {
    chain_info(chain).stablecoins
}

pub fn get_primary_stablecoin(chain: ChainKey) -> Option<&'static TokenSpec> {
    chain_info(chain).primary_stablecoin()
}

pub fn is_limit_supported_chain(chain: ChainKey) -> bool {
    chain_info(chain).supports_limits
}

/// Keeps the ids of supported chains on `platform`, preserving input order.
/// Unknown ids are dropped.
pub fn filter_chain_ids_by_platform(ids: &[ChainId], platform: Platform) -> Vec<ChainKey> {
    ids.iter()
        .filter_map(|id| ChainKey::from_id(*id))
        .filter(|chain| chain_info(*chain).platform == platform)
        .collect()
}

pub fn is_bridged_asset(chain: ChainKey, address: &str) -> bool {
    let info = chain_info(chain);
    info.bridged_assets
        .iter()
        .any(|asset| addresses_equal(info.platform, asset.address, address))
}
