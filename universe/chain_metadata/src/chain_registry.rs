use ink_prelude::{collections::BTreeSet, vec::Vec};

use crate::chain_info::ChainInfo;
use crate::common::{BackendChain, ChainId, ChainKey, GqlChain, Platform};
use crate::common_bases;
use crate::currency::{
    Classification, Currency, CurrencyInfo, CurrencyResolver, DefaultLogoProvider, LogoProvider,
    NativeCurrency,
};
use crate::filter::{self, ChainFlags, EnabledChainsInfo};
use crate::registry::chain::chain_info;
use crate::RawChainId;

/// Entry point for callers that resolve currencies. Owns the native currency
/// cache, so tests and tenants get independent instances.
///
/// Not `Sync`: the cache is a `RefCell`. Share one registry per thread.
pub struct ChainRegistry<L = DefaultLogoProvider> {
    resolver: CurrencyResolver<L>,
}

impl ChainRegistry {
    pub fn new() -> Self {
        Self::with_logo_provider(DefaultLogoProvider)
    }
}

impl Default for ChainRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: LogoProvider> ChainRegistry<L> {
    pub fn with_logo_provider(logo_provider: L) -> Self {
        Self {
            resolver: CurrencyResolver::new(logo_provider),
        }
    }

    pub fn descriptor_for(&self, chain: ChainKey) -> &'static ChainInfo {
        chain_info(chain)
    }

    pub fn all_keys(&self) -> &'static [ChainKey] {
        crate::all_chain_keys()
    }

    pub fn coerce_chain_id<'a>(&self, raw: impl Into<RawChainId<'a>>) -> Option<ChainKey> {
        crate::coerce_chain_id(raw)
    }

    pub fn to_backend_chain(&self, chain: ChainKey) -> BackendChain {
        crate::to_graphql_chain(chain)
    }

    pub fn from_backend_chain(&self, tag: GqlChain) -> Option<ChainKey> {
        crate::from_graphql_chain(tag)
    }

    pub fn compute_enabled(
        &self,
        platform: Option<Platform>,
        include_testnets: bool,
        testnet_mode_enabled: bool,
        allowed: &BTreeSet<ChainKey>,
    ) -> EnabledChainsInfo {
        filter::compute_enabled(platform, include_testnets, testnet_mode_enabled, allowed)
    }

    /// `compute_enabled` with the allow-list derived from raw flag verdicts.
    pub fn compute_enabled_with_flags(
        &self,
        platform: Option<Platform>,
        include_testnets: bool,
        testnet_mode_enabled: bool,
        flags: &ChainFlags,
    ) -> EnabledChainsInfo {
        let allowed = filter::filter_chain_ids_by_feature_flag(flags);
        self.compute_enabled(platform, include_testnets, testnet_mode_enabled, &allowed)
    }

    pub fn default_chain_for(&self, platform: Option<Platform>, testnet_mode_enabled: bool) -> ChainKey {
        filter::default_chain_for(platform, testnet_mode_enabled)
    }

    pub fn native_currency_for(&self, chain: ChainKey) -> NativeCurrency {
        self.resolver.native_currency_for(chain)
    }

    pub fn native_on_chain(&self, chain_id: ChainId) -> NativeCurrency {
        self.resolver.native_on_chain(chain_id)
    }

    pub fn build_currency_info(
        &self,
        currency: Currency,
        classification: Option<Classification>,
    ) -> CurrencyInfo {
        self.resolver.build_currency_info(currency, classification)
    }

    pub fn common_bases_for(&self, enabled: &EnabledChainsInfo) -> Vec<CurrencyInfo> {
        common_bases::common_bases_for(&self.resolver, enabled)
    }

    pub fn find_common_base(&self, chain: ChainKey, address: &str) -> Option<CurrencyInfo> {
        common_bases::find_common_base(&self.resolver, chain, address)
    }

    pub fn cached_native_currencies(&self) -> usize {
        self.resolver.native_cache().len()
    }
}
