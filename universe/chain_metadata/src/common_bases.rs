use ink_prelude::{string::String, vec::Vec};

use crate::common::ChainKey;
use crate::currency::{
    build_native_currency_id, build_wrapped_native_currency_id, currency_id,
    is_native_currency_address, Currency, CurrencyInfo, CurrencyResolver, LogoProvider,
    NativeCurrency, Token,
};
use crate::filter::EnabledChainsInfo;
use crate::registry::chain::chain_info;
use crate::utils::general_utils::addresses_equal;

fn base_currencies(chain: ChainKey, native: NativeCurrency) -> Vec<Currency> {
    let info = chain_info(chain);
    let mut bases: Vec<Currency> = Vec::with_capacity(2 + info.stablecoins.len());
    bases.push(native.into());
    if let Some(wrapped) = &info.wrapped_native_currency {
        bases.push(Token::from_wrapped(chain, wrapped).into());
    }
    bases.extend(
        info.stablecoins
            .iter()
            .map(|spec| Currency::Token(Token::from_spec(chain, spec))),
    );
    bases
}

/// Common bases of one chain: native, wrapped native, then its stablecoins in
/// table order.
pub fn common_base_currencies(chain: ChainKey) -> Vec<Currency> {
    base_currencies(chain, NativeCurrency::for_chain(chain))
}

pub fn common_bases_for_chain<L: LogoProvider>(
    resolver: &CurrencyResolver<L>,
    chain: ChainKey,
) -> Vec<CurrencyInfo> {
    base_currencies(chain, resolver.native_currency_for(chain))
        .into_iter()
        .map(|currency| resolver.build_partial_currency_info(currency))
        .collect()
}

/// Concatenated common bases of every enabled chain, in enabled-chain order.
pub fn common_bases_for<L: LogoProvider>(
    resolver: &CurrencyResolver<L>,
    enabled: &EnabledChainsInfo,
) -> Vec<CurrencyInfo> {
    enabled
        .chains
        .iter()
        .flat_map(|chain| common_bases_for_chain(resolver, *chain))
        .collect()
}

/// The common base of `chain` designated by `address`. The native base
/// matches any native sentinel of the chain; tokens match by address.
pub fn find_common_base<L: LogoProvider>(
    resolver: &CurrencyResolver<L>,
    chain: ChainKey,
    address: &str,
) -> Option<CurrencyInfo> {
    if address.is_empty() {
        return None;
    }
    let platform = chain_info(chain).platform;
    let is_native = is_native_currency_address(chain, address);
    common_bases_for_chain(resolver, chain)
        .into_iter()
        .find(|base| match &base.currency {
            Currency::Native(_) => is_native,
            Currency::Token(token) => addresses_equal(platform, token.address(), address),
        })
}

/// Currency ids seeding the quick-select row: native, wrapped native and the
/// primary stablecoin.
pub fn base_currency_ids(chain: ChainKey) -> Vec<String> {
    let info = chain_info(chain);
    let mut ids = Vec::with_capacity(3);
    ids.push(build_native_currency_id(chain));
    ids.extend(build_wrapped_native_currency_id(chain));
    if let Some(stablecoin) = info.primary_stablecoin() {
        ids.push(currency_id(&Token::from_spec(chain, stablecoin).into()));
    }
    ids
}

/// Tokens whose pools are watched for liquidity: wrapped native and stablecoins.
pub fn bases_to_track_liquidity_for(chain: ChainKey) -> Vec<Token> {
    let info = chain_info(chain);
    info.wrapped_native_currency
        .iter()
        .map(|wrapped| Token::from_wrapped(chain, wrapped))
        .chain(
            info.stablecoins
                .iter()
                .map(|spec| Token::from_spec(chain, spec)),
        )
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::compute_enabled;
    use crate::registry::chain::ORDERED_CHAINS;
    use crate::rpc::DEFAULT_NATIVE_ADDRESS;
    use ink_prelude::collections::BTreeSet;

    fn resolver() -> CurrencyResolver {
        CurrencyResolver::default()
    }

    #[test]
    fn test_nexus_common_bases_order() {
        let bases = common_bases_for_chain(&resolver(), ChainKey::Nexus);
        let symbols: Vec<&str> = bases.iter().map(|base| base.currency.symbol()).collect();
        assert_eq!(symbols, ["NEX", "WNEX", "USDC"]);
        assert!(bases[0].currency.is_native());
    }

    #[test]
    fn test_common_bases_follow_enabled_chain_order() {
        let allowed: BTreeSet<ChainKey> = ORDERED_CHAINS.iter().copied().collect();
        let enabled = compute_enabled(None, false, false, &allowed);
        let bases = common_bases_for(&resolver(), &enabled);
        let chain_ids: Vec<u64> = bases.iter().map(|base| base.currency.chain_id()).collect();
        let mut expected = Vec::new();
        for chain in &enabled.chains {
            for _ in common_base_currencies(*chain) {
                expected.push(chain.id());
            }
        }
        assert_eq!(chain_ids, expected);
    }

    #[test]
    fn test_find_common_base_wrapped_native() {
        let resolver = resolver();
        for chain in ORDERED_CHAINS {
            let wrapped = chain_info(chain)
                .wrapped_native_currency
                .as_ref()
                .expect("Every shipped chain has a wrapped native currency");
            let base = find_common_base(&resolver, chain, wrapped.address)
                .expect("Wrapped native is a common base");
            assert_eq!(base.currency.symbol(), wrapped.symbol);
            assert!(base.currency.is_token());
        }
    }

    #[test]
    fn test_find_common_base_native_sentinels() {
        let resolver = resolver();
        let base = find_common_base(&resolver, ChainKey::Mainnet, DEFAULT_NATIVE_ADDRESS)
            .expect("Zero address is a native sentinel on EVM chains");
        assert!(base.currency.is_native());
        assert_eq!(resolver.native_cache().len(), 1);
    }

    #[test]
    fn test_find_common_base_unknown_address() {
        let resolver = resolver();
        assert_eq!(
            find_common_base(
                &resolver,
                ChainKey::Mainnet,
                "0xdeaddeaddeaddeaddeaddeaddeaddeaddeaddead"
            ),
            None
        );
        assert_eq!(find_common_base(&resolver, ChainKey::Mainnet, ""), None);
    }

    #[test]
    fn test_base_currency_ids() {
        assert_eq!(
            base_currency_ids(ChainKey::Nexus),
            [
                "3945-0xeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeee",
                "3945-0x0000000000000000000000000000000000000001",
                "3945-0x0000000000000000000000000000000000000002",
            ]
        );
    }

    #[test]
    fn test_bases_to_track_liquidity_for() {
        let symbols: Vec<String> = bases_to_track_liquidity_for(ChainKey::Mainnet)
            .iter()
            .map(|token| String::from(token.symbol()))
            .collect();
        assert_eq!(symbols, ["WETH", "USDC", "USDT", "DAI"]);
    }
}
