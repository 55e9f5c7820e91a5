use crate::common::{
    BackendChain, ChainId, GasAmount, NetworkLayer, Platform, PollingInterval,
};
use crate::rpc::{RetryOptions, RpcUrls, DEFAULT_MS_BEFORE_WARNING};

// None of the records below derive Encode or Decode because
// "the trait `WrapperTypeDecode` is not implemented for `&'static str"

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct ExplorerInfo {
    pub name: &'static str,
    pub url: &'static str,
    pub api_url: Option<&'static str>,
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct NativeCurrencyInfo {
    pub name: &'static str,
    pub symbol: &'static str,
    pub decimals: u8,
    // Sentinel address that stands in for the native currency in token lists and quotes
    pub address: &'static str,
    // Key of a bundled image asset, resolved by the UI
    pub logo: &'static str,
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct WrappedCurrencyInfo {
    pub name: &'static str,
    pub symbol: &'static str,
    pub decimals: u8,
    pub address: &'static str,
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct BackendChainInfo {
    pub chain: BackendChain,
    pub native_token_backend_address: Option<&'static str>,
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct GasDefault {
    // Name of the remote swap config entry that can override `default`
    pub config_key: &'static str,
    pub default: GasAmount,
}

/// Minimum native balance kept aside for gas, per operation.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct GasConfig {
    pub send: GasDefault,
    pub swap: GasDefault,
}

/// A const-constructible token definition. See `currency::Token` for the owned form.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct TokenSpec {
    pub address: &'static str,
    pub decimals: u8,
    pub symbol: &'static str,
    pub name: &'static str,
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct BridgedAsset {
    pub address: &'static str,
    pub native_chain: &'static str,
    pub native_address: &'static str,
}

/// Immutable description of one supported network.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct ChainInfo {
    pub id: ChainId,
    pub label: &'static str,
    pub platform: Platform,
    pub testnet: bool,
    pub network_layer: NetworkLayer,

    pub rpc_urls: RpcUrls,
    pub explorer: ExplorerInfo,
    pub native_currency: NativeCurrencyInfo,
    pub wrapped_native_currency: Option<WrappedCurrencyInfo>,
    pub backend_chain: BackendChainInfo,
    pub gas_config: GasConfig,

    // Ordered by priority, the first entry is the chain's primary stablecoin
    pub stablecoins: &'static [TokenSpec],
    pub bridged_assets: &'static [BridgedAsset],

    // Folder name under blockchains/ in the Uniswap assets repo
    pub asset_repo_network_name: Option<&'static str>,
    pub url_param: &'static str,
    pub interface_name: &'static str,
    pub docs: &'static str,
    pub logo: &'static str,

    // Block polling cadence used by balance and transaction watchers
    pub block_polling_interval: PollingInterval,
    pub trading_api_polling_interval_ms: u64,
    pub pending_transactions_retry_options: RetryOptions,
    pub block_wait_ms_before_warning: Option<u64>,
    pub supports_limits: bool,
    pub supports_v4: bool,
    pub supports_nfts: bool,
}

impl ChainInfo {
    pub fn primary_stablecoin(&self) -> Option<&'static TokenSpec> {
        self.stablecoins.first()
    }

    pub fn is_backend_supported(&self) -> bool {
        matches!(self.backend_chain.chain, BackendChain::Supported(_))
    }

    pub fn block_wait_ms_before_warning(&self) -> u64 {
        self.block_wait_ms_before_warning
            .unwrap_or(DEFAULT_MS_BEFORE_WARNING)
    }

    pub fn polling_interval(&self) -> PollingInterval {
        self.block_polling_interval
    }
}
