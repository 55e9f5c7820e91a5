use std::collections::BTreeSet;

use ink_env::debug_println;
use proptest::prelude::*;
use universe_chain_metadata::{
    all_chain_keys, coerce_chain_id,
    common::{BackendChain, ChainKey, Platform},
    currency::{Currency, Token},
    filter::{compute_enabled, default_chain_for, DEFAULT_CHAIN},
    from_graphql_chain, get_chain_info, is_backend_supported_chain_id, is_testnet_chain,
    to_graphql_chain, ChainRegistry, PublicError,
};

fn chain_key() -> impl Strategy<Value = ChainKey> {
    prop::sample::select(ChainKey::ALL.to_vec())
}

fn allow_list() -> impl Strategy<Value = BTreeSet<ChainKey>> {
    prop::collection::btree_set(chain_key(), 0..=ChainKey::COUNT)
}

fn platform() -> impl Strategy<Value = Option<Platform>> {
    prop::option::of(prop_oneof![Just(Platform::Evm), Just(Platform::Svm)])
}

fn raw_chain_id() -> impl Strategy<Value = u64> {
    prop_oneof![
        any::<u64>(),
        prop::sample::select(ChainKey::ALL.iter().map(|chain| chain.id()).collect::<Vec<_>>()),
    ]
}

// 0xdead prefix keeps generated addresses clear of every shipped token and sentinel
fn unknown_evm_address() -> impl Strategy<Value = String> {
    prop::collection::vec(any::<u8>(), 18).prop_map(|bytes| format!("0xdead{}", hex::encode(bytes)))
}

fn all_allowed() -> BTreeSet<ChainKey> {
    all_chain_keys().iter().copied().collect()
}

#[test]
fn test_descriptor_for_every_key() {
    for chain in all_chain_keys() {
        let info = get_chain_info(*chain);
        debug_println!("{:?}: id = {}, label = {}", chain, info.id, info.label);
        assert_eq!(info.id, chain.id());
    }
}

#[test]
fn test_mainnet_and_testnet_evm_sets() {
    let allowed = all_allowed();
    let mainnets = compute_enabled(Some(Platform::Evm), false, false, &allowed);
    assert_eq!(mainnets.chains, [ChainKey::Mainnet, ChainKey::Unichain]);

    let testnets = compute_enabled(Some(Platform::Evm), false, true, &allowed);
    assert_eq!(testnets.chains, [ChainKey::Nexus, ChainKey::Sepolia]);
    assert!(testnets.chains.iter().all(|chain| is_testnet_chain(*chain)));
}

#[test]
fn test_empty_allow_list_yields_empty_set() {
    let enabled = compute_enabled(None, true, false, &BTreeSet::new());
    assert!(enabled.chains.is_empty());
}

#[test]
fn test_nexus_testnet_scenario() {
    let allowed: BTreeSet<ChainKey> = [ChainKey::Nexus].into_iter().collect();
    let enabled = compute_enabled(None, false, true, &allowed);
    assert_eq!(enabled.chains, [ChainKey::Nexus]);
    assert_eq!(enabled.default_chain, ChainKey::Nexus);
    assert!(enabled.testnet_mode_enabled);
}

#[test]
fn test_backend_round_trip() {
    for chain in all_chain_keys().iter().copied() {
        match to_graphql_chain(chain) {
            BackendChain::Supported(tag) => {
                assert!(is_backend_supported_chain_id(chain));
                assert_eq!(from_graphql_chain(tag), Some(chain));
            }
            // No tag to invert: unsupported chains are outside the round trip
            BackendChain::Unsupported => assert!(!is_backend_supported_chain_id(chain)),
        }
    }
}

#[test]
fn test_native_currency_cache() {
    let registry = ChainRegistry::new();
    for a in all_chain_keys().iter().copied() {
        assert_eq!(registry.native_currency_for(a), registry.native_currency_for(a));
        for b in all_chain_keys().iter().copied() {
            assert_eq!(
                registry.native_currency_for(a) == registry.native_currency_for(b),
                a == b
            );
        }
    }
    assert_eq!(registry.cached_native_currencies(), ChainKey::COUNT);

    let unknown = registry.native_on_chain(56);
    assert_eq!(unknown.symbol(), "native");
    assert_eq!(registry.cached_native_currencies(), ChainKey::COUNT);
    assert_eq!(
        unknown.wrapped(),
        Err(PublicError::UnsupportedWrappedCurrency(56))
    );
}

#[test]
fn test_find_common_base_wrapped_native() {
    let registry = ChainRegistry::new();
    for chain in all_chain_keys().iter().copied() {
        let wrapped = registry
            .native_currency_for(chain)
            .wrapped()
            .expect("Every shipped chain has a wrapped native currency");
        let base = registry
            .find_common_base(chain, wrapped.address())
            .expect("Wrapped native is a common base");
        assert_eq!(base.currency, Currency::Token(wrapped));
    }
}

#[test]
fn test_token_address_must_be_valid() {
    assert_eq!(
        Token::new(ChainKey::Nexus, "", 18, "NOPE", "Nope"),
        Err(PublicError::EmptyAddress)
    );
}

proptest! {
    #[test]
    fn test_coerce_chain_id_left_inverse(n in raw_chain_id()) {
        let text = n.to_string();
        prop_assert_eq!(coerce_chain_id(text.as_str()), coerce_chain_id(n));
        prop_assert_eq!(coerce_chain_id(n).is_some(), ChainKey::from_id(n).is_some());
    }

    #[test]
    fn test_coerce_chain_id_rejects_non_members(text in "\\PC*") {
        let is_member = all_chain_keys().iter().any(|chain| chain.id().to_string() == text);
        prop_assert_eq!(coerce_chain_id(text.as_str()).is_some(), is_member);
    }

    #[test]
    fn test_enabled_set_membership(
        platform in platform(),
        include_testnets in any::<bool>(),
        testnet_mode in any::<bool>(),
        allowed in allow_list(),
    ) {
        let enabled = compute_enabled(platform, include_testnets, testnet_mode, &allowed);

        let expected: Vec<ChainKey> = all_chain_keys()
            .iter()
            .copied()
            .filter(|chain| {
                let info = get_chain_info(*chain);
                platform.map_or(true, |p| p == info.platform)
                    && (include_testnets || info.testnet == testnet_mode)
                    && allowed.contains(chain)
            })
            .collect();
        prop_assert_eq!(&enabled.chains, &expected);

        // Declaration order
        prop_assert!(enabled.chains.windows(2).all(|pair| pair[0] < pair[1]));
        prop_assert_eq!(enabled.backend_chains.len(), enabled.chains.len());
        for (chain, backend) in enabled.chains.iter().zip(&enabled.backend_chains) {
            prop_assert_eq!(to_graphql_chain(*chain), *backend);
        }

        if enabled.chains.is_empty() {
            prop_assert_eq!(enabled.default_chain, DEFAULT_CHAIN);
        } else {
            prop_assert!(enabled.chains.contains(&enabled.default_chain));
        }
        prop_assert_eq!(default_chain_for(platform, testnet_mode), DEFAULT_CHAIN);
    }

    #[test]
    fn test_find_common_base_unknown_address(chain in chain_key(), address in unknown_evm_address()) {
        let registry = ChainRegistry::new();
        prop_assert!(registry.find_common_base(chain, &address).is_none());
    }
}
