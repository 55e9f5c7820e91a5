use ink_prelude::{
    collections::{BTreeMap, BTreeSet},
    vec::Vec,
};
use scale::{Decode, Encode};

use crate::common::{BackendChain, ChainKey, Platform};
use crate::registry::chain::{chain_info, ORDERED_CHAINS};

/// Feature-flag verdicts per chain, as reported by the flag service.
/// A chain with no entry is enabled.
pub type ChainFlags = BTreeMap<ChainKey, bool>;

pub const DEFAULT_CHAIN: ChainKey = ChainKey::Nexus;

/// Chains visible in one request context.
#[derive(Encode, Decode, Debug, PartialEq, Eq, Clone)]
#[cfg_attr(feature = "std", derive(scale_info::TypeInfo))]
pub struct EnabledChainsInfo {
    // Declaration order
    pub chains: Vec<ChainKey>,
    // backend_chains[i] is the backend link of chains[i]
    pub backend_chains: Vec<BackendChain>,
    /// Always a member of `chains` unless `chains` is empty
    pub default_chain: ChainKey,
    pub testnet_mode_enabled: bool,
}

impl EnabledChainsInfo {
    pub fn contains(&self, chain: ChainKey) -> bool {
        self.chains.contains(&chain)
    }

    pub fn is_empty(&self) -> bool {
        self.chains.is_empty()
    }
}

/// Converts flag verdicts to an allow-list over the supported chains.
pub fn filter_chain_ids_by_feature_flag(flags: &ChainFlags) -> BTreeSet<ChainKey> {
    ORDERED_CHAINS
        .iter()
        .copied()
        .filter(|chain| flags.get(chain).copied().unwrap_or(true))
        .collect()
}

/// The app-wide default chain. Does not depend on the enabled set, nor
/// currently on either argument.
pub fn default_chain_for(_platform: Option<Platform>, _testnet_mode_enabled: bool) -> ChainKey {
    DEFAULT_CHAIN
}

fn is_chain_enabled(
    chain: ChainKey,
    platform: Option<Platform>,
    include_testnets: bool,
    testnet_mode_enabled: bool,
    allowed: &BTreeSet<ChainKey>,
) -> bool {
    let info = chain_info(chain);
    // Testnet mode selects testnets exclusively; it is not additive
    let testnet_matches = include_testnets || info.testnet == testnet_mode_enabled;
    platform.map_or(true, |p| p == info.platform) && testnet_matches && allowed.contains(&chain)
}

pub fn compute_enabled(
    platform: Option<Platform>,
    include_testnets: bool,
    testnet_mode_enabled: bool,
    allowed: &BTreeSet<ChainKey>,
) -> EnabledChainsInfo {
    let chains: Vec<ChainKey> = ORDERED_CHAINS
        .iter()
        .copied()
        .filter(|chain| {
            is_chain_enabled(
                *chain,
                platform,
                include_testnets,
                testnet_mode_enabled,
                allowed,
            )
        })
        .collect();
    let backend_chains = chains
        .iter()
        .map(|chain| chain_info(*chain).backend_chain.chain)
        .collect();

    let policy_default = default_chain_for(platform, testnet_mode_enabled);
    let default_chain = if chains.contains(&policy_default) {
        policy_default
    } else {
        chains.first().copied().unwrap_or(policy_default)
    };

    EnabledChainsInfo {
        chains,
        backend_chains,
        default_chain,
        testnet_mode_enabled,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_allowed() -> BTreeSet<ChainKey> {
        ORDERED_CHAINS.iter().copied().collect()
    }

    #[test]
    fn test_mainnet_evm_chains() {
        let enabled = compute_enabled(Some(Platform::Evm), false, false, &all_allowed());
        assert_eq!(enabled.chains, [ChainKey::Mainnet, ChainKey::Unichain]);
        assert_eq!(
            enabled.backend_chains,
            [
                chain_info(ChainKey::Mainnet).backend_chain.chain,
                chain_info(ChainKey::Unichain).backend_chain.chain,
            ]
        );
        assert!(!enabled.testnet_mode_enabled);
    }

    #[test]
    fn test_testnet_mode_is_exclusive() {
        let enabled = compute_enabled(Some(Platform::Evm), false, true, &all_allowed());
        assert_eq!(enabled.chains, [ChainKey::Nexus, ChainKey::Sepolia]);
        assert_eq!(enabled.default_chain, ChainKey::Nexus);
    }

    #[test]
    fn test_include_testnets_overrides_mode() {
        let enabled = compute_enabled(None, true, false, &all_allowed());
        assert_eq!(enabled.chains, ORDERED_CHAINS);
    }

    #[test]
    fn test_platform_filter() {
        let enabled = compute_enabled(Some(Platform::Svm), true, false, &all_allowed());
        assert_eq!(enabled.chains, [ChainKey::Solana]);
        assert_eq!(enabled.default_chain, ChainKey::Solana);
    }

    #[test]
    fn test_allow_list_excludes_missing_chains() {
        let mut allowed = all_allowed();
        allowed.remove(&ChainKey::Unichain);
        let enabled = compute_enabled(None, false, false, &allowed);
        assert_eq!(enabled.chains, [ChainKey::Mainnet, ChainKey::Solana]);

        let enabled = compute_enabled(None, true, false, &BTreeSet::new());
        assert!(enabled.is_empty());
        assert!(enabled.backend_chains.is_empty());
        assert_eq!(enabled.default_chain, DEFAULT_CHAIN);
    }

    #[test]
    fn test_default_chain_falls_back_to_first_enabled() {
        let enabled = compute_enabled(None, false, false, &all_allowed());
        assert!(!enabled.contains(DEFAULT_CHAIN));
        assert_eq!(enabled.default_chain, ChainKey::Mainnet);
    }

    #[test]
    fn test_default_chain_policy_ignores_context() {
        for platform in [None, Some(Platform::Evm), Some(Platform::Svm)] {
            for testnet_mode in [false, true] {
                assert_eq!(default_chain_for(platform, testnet_mode), ChainKey::Nexus);
            }
        }
    }

    #[test]
    fn test_feature_flags_default_open() {
        let mut flags = ChainFlags::new();
        assert_eq!(filter_chain_ids_by_feature_flag(&flags), all_allowed());

        flags.insert(ChainKey::Solana, false);
        flags.insert(ChainKey::Mainnet, true);
        let allowed = filter_chain_ids_by_feature_flag(&flags);
        assert!(!allowed.contains(&ChainKey::Solana));
        assert!(allowed.contains(&ChainKey::Mainnet));
        assert!(allowed.contains(&ChainKey::Nexus));
    }
}
