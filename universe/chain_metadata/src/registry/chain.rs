use static_assertions::{const_assert, const_assert_eq};

use crate::chain_info::ChainInfo;
use crate::common::{BackendChain, ChainKey};

/// Declaration order of the supported chains. Every derived listing (enabled
/// chains, GraphQL chains, common bases) iterates in this order.
pub const ORDERED_CHAINS: [ChainKey; ChainKey::COUNT] = ChainKey::ALL;

pub mod chain_info_registry {
    use crate::chain_info::{
        BackendChainInfo, ChainInfo, ExplorerInfo, GasConfig, GasDefault, NativeCurrencyInfo,
    };
    use crate::common::{BackendChain, GqlChain, NetworkLayer, Platform, PollingInterval};
    use crate::registry::token::{stablecoin_registry, wrapped_currency_registry};
    use crate::rpc::{
        RpcUrls, DEFAULT_NATIVE_ADDRESS_LEGACY, DEFAULT_NATIVE_ADDRESS_SOLANA,
        DEFAULT_RETRY_OPTIONS,
    };

    const ETH_SEND_MIN_GAS: &str = "EthSendMinGasAmount";
    const ETH_SWAP_MIN_GAS: &str = "EthSwapMinGasAmount";

    const NEXUS_RPC: &[&str] = &["https://testnet.rpc.nexus.xyz"];

    pub const NEXUS_INFO: ChainInfo = ChainInfo {
        id: 3945,
        label: "Nexus Testnet3",
        platform: Platform::Evm,
        testnet: true,
        network_layer: NetworkLayer::L1,
        rpc_urls: RpcUrls {
            public: NEXUS_RPC,
            public_alt: &[],
            default: NEXUS_RPC,
            fallback: NEXUS_RPC,
            interface: NEXUS_RPC,
            private: &[],
        },
        explorer: ExplorerInfo {
            name: "Nexus Explorer",
            url: "https://nexus.testnet.blockscout.com/",
            api_url: None,
        },
        native_currency: NativeCurrencyInfo {
            name: "NEX",
            symbol: "NEX",
            decimals: 18,
            address: DEFAULT_NATIVE_ADDRESS_LEGACY,
            logo: "ETH_LOGO", // placeholder until Nexus ships brand assets
        },
        wrapped_native_currency: Some(wrapped_currency_registry::WNEX),
        // The GraphQL backend has no Nexus support
        backend_chain: BackendChainInfo {
            chain: BackendChain::Unsupported,
            native_token_backend_address: None,
        },
        gas_config: GasConfig {
            send: GasDefault {
                config_key: ETH_SEND_MIN_GAS,
                default: 20, // .002 NEX
            },
            swap: GasDefault {
                config_key: ETH_SWAP_MIN_GAS,
                default: 150, // .015 NEX
            },
        },
        stablecoins: stablecoin_registry::NEXUS_STABLECOINS,
        bridged_assets: &[],
        asset_repo_network_name: None,
        url_param: "nexus",
        interface_name: "nexus",
        docs: "https://docs.nexus.xyz/",
        logo: "ETHEREUM_LOGO",
        // The app's primary chain is polled at mainnet cadence
        block_polling_interval: PollingInterval::Fast,
        trading_api_polling_interval_ms: 500,
        pending_transactions_retry_options: DEFAULT_RETRY_OPTIONS,
        block_wait_ms_before_warning: None,
        supports_limits: true,
        supports_v4: false,
        supports_nfts: false,
    };

    pub const MAINNET_INFO: ChainInfo = ChainInfo {
        id: 1,
        label: "Ethereum",
        platform: Platform::Evm,
        testnet: false,
        network_layer: NetworkLayer::L1,
        rpc_urls: RpcUrls {
            public: &["https://ethereum-rpc.publicnode.com"],
            public_alt: &["https://cloudflare-eth.com"],
            default: &["https://ethereum-rpc.publicnode.com"],
            fallback: &["https://rpc.ankr.com/eth", "https://eth.llamarpc.com"],
            interface: &["https://mainnet.infura.io/v3/[INSERT API KEY HERE]"],
            private: &["https://rpc.mevblocker.io"],
        },
        explorer: ExplorerInfo {
            name: "Etherscan",
            url: "https://etherscan.io/",
            api_url: Some("https://api.etherscan.io/api"),
        },
        native_currency: NativeCurrencyInfo {
            name: "Ethereum",
            symbol: "ETH",
            decimals: 18,
            address: DEFAULT_NATIVE_ADDRESS_LEGACY,
            logo: "ETH_LOGO",
        },
        wrapped_native_currency: Some(wrapped_currency_registry::WETH_MAINNET),
        backend_chain: BackendChainInfo {
            chain: BackendChain::Supported(GqlChain::Ethereum),
            native_token_backend_address: None,
        },
        gas_config: GasConfig {
            send: GasDefault {
                config_key: ETH_SEND_MIN_GAS,
                default: 20, // .002 ETH
            },
            swap: GasDefault {
                config_key: ETH_SWAP_MIN_GAS,
                default: 150, // .015 ETH
            },
        },
        stablecoins: stablecoin_registry::MAINNET_STABLECOINS,
        bridged_assets: &[],
        asset_repo_network_name: Some("ethereum"),
        url_param: "ethereum",
        interface_name: "mainnet",
        docs: "https://ethereum.org/en/developers/docs/",
        logo: "ETHEREUM_LOGO",
        block_polling_interval: PollingInterval::Fast,
        trading_api_polling_interval_ms: 1000,
        pending_transactions_retry_options: DEFAULT_RETRY_OPTIONS,
        block_wait_ms_before_warning: None,
        supports_limits: false,
        supports_v4: true,
        supports_nfts: true,
    };

    pub const UNICHAIN_INFO: ChainInfo = ChainInfo {
        id: 130,
        label: "Unichain",
        platform: Platform::Evm,
        testnet: false,
        network_layer: NetworkLayer::L2,
        rpc_urls: RpcUrls {
            public: &["https://mainnet.unichain.org"],
            public_alt: &[],
            default: &["https://mainnet.unichain.org"],
            fallback: &["https://mainnet.unichain.org"],
            interface: &["https://unichain-mainnet.infura.io/v3/[INSERT API KEY HERE]"],
            private: &[],
        },
        explorer: ExplorerInfo {
            name: "Uniscan",
            url: "https://uniscan.xyz/",
            api_url: Some("https://api.uniscan.xyz/api"),
        },
        native_currency: NativeCurrencyInfo {
            name: "Unichain ETH",
            symbol: "ETH",
            decimals: 18,
            address: DEFAULT_NATIVE_ADDRESS_LEGACY,
            logo: "ETH_LOGO",
        },
        wrapped_native_currency: Some(wrapped_currency_registry::WETH_UNICHAIN),
        backend_chain: BackendChainInfo {
            chain: BackendChain::Supported(GqlChain::Unichain),
            native_token_backend_address: None,
        },
        gas_config: GasConfig {
            send: GasDefault {
                config_key: ETH_SEND_MIN_GAS,
                default: 1, // .0001 ETH
            },
            swap: GasDefault {
                config_key: ETH_SWAP_MIN_GAS,
                default: 8, // .0008 ETH
            },
        },
        stablecoins: stablecoin_registry::UNICHAIN_STABLECOINS,
        bridged_assets: &[],
        asset_repo_network_name: Some("unichain"),
        url_param: "unichain",
        interface_name: "unichain",
        docs: "https://docs.unichain.org/",
        logo: "UNICHAIN_LOGO",
        block_polling_interval: PollingInterval::Fast,
        trading_api_polling_interval_ms: 250,
        pending_transactions_retry_options: DEFAULT_RETRY_OPTIONS,
        block_wait_ms_before_warning: Some(10 * 60 * 1000),
        supports_limits: false,
        supports_v4: true,
        supports_nfts: false,
    };

    pub const SEPOLIA_INFO: ChainInfo = ChainInfo {
        id: 11_155_111,
        label: "Sepolia",
        platform: Platform::Evm,
        testnet: true,
        network_layer: NetworkLayer::L1,
        rpc_urls: RpcUrls {
            public: &["https://ethereum-sepolia-rpc.publicnode.com"],
            public_alt: &["https://rpc.sepolia.org"],
            default: &["https://ethereum-sepolia-rpc.publicnode.com"],
            fallback: &["https://rpc.sepolia.org"],
            interface: &["https://sepolia.infura.io/v3/[INSERT API KEY HERE]"],
            private: &[],
        },
        explorer: ExplorerInfo {
            name: "Etherscan",
            url: "https://sepolia.etherscan.io/",
            api_url: Some("https://api-sepolia.etherscan.io/api"),
        },
        native_currency: NativeCurrencyInfo {
            name: "Sepolia ETH",
            symbol: "ETH",
            decimals: 18,
            address: DEFAULT_NATIVE_ADDRESS_LEGACY,
            logo: "ETH_LOGO",
        },
        wrapped_native_currency: Some(wrapped_currency_registry::WETH_SEPOLIA),
        backend_chain: BackendChainInfo {
            chain: BackendChain::Supported(GqlChain::EthereumSepolia),
            native_token_backend_address: None,
        },
        gas_config: GasConfig {
            send: GasDefault {
                config_key: ETH_SEND_MIN_GAS,
                default: 20,
            },
            swap: GasDefault {
                config_key: ETH_SWAP_MIN_GAS,
                default: 150,
            },
        },
        stablecoins: stablecoin_registry::SEPOLIA_STABLECOINS,
        bridged_assets: &[],
        asset_repo_network_name: None,
        url_param: "ethereum_sepolia",
        interface_name: "sepolia",
        docs: "https://sepolia.dev/",
        logo: "ETHEREUM_LOGO",
        block_polling_interval: PollingInterval::LightningMcQueen,
        trading_api_polling_interval_ms: 1000,
        pending_transactions_retry_options: DEFAULT_RETRY_OPTIONS,
        block_wait_ms_before_warning: None,
        supports_limits: false,
        supports_v4: true,
        supports_nfts: false,
    };

    pub const SOLANA_INFO: ChainInfo = ChainInfo {
        id: 501_000_101,
        label: "Solana",
        platform: Platform::Svm,
        testnet: false,
        network_layer: NetworkLayer::L1,
        rpc_urls: RpcUrls {
            public: &["https://api.mainnet-beta.solana.com"],
            public_alt: &[],
            default: &["https://api.mainnet-beta.solana.com"],
            fallback: &["https://api.mainnet-beta.solana.com"],
            interface: &["https://api.mainnet-beta.solana.com"],
            private: &[],
        },
        explorer: ExplorerInfo {
            name: "Solscan",
            url: "https://solscan.io/",
            api_url: None,
        },
        native_currency: NativeCurrencyInfo {
            name: "Solana",
            symbol: "SOL",
            decimals: 9,
            address: DEFAULT_NATIVE_ADDRESS_SOLANA,
            logo: "SOLANA_LOGO",
        },
        wrapped_native_currency: Some(wrapped_currency_registry::WSOL),
        backend_chain: BackendChainInfo {
            chain: BackendChain::Supported(GqlChain::Solana),
            native_token_backend_address: None,
        },
        gas_config: GasConfig {
            send: GasDefault {
                config_key: "SolanaSendMinGasAmount",
                default: 50, // .005 SOL
            },
            swap: GasDefault {
                config_key: "SolanaSwapMinGasAmount",
                default: 200, // .02 SOL
            },
        },
        stablecoins: stablecoin_registry::SOLANA_STABLECOINS,
        bridged_assets: &[],
        asset_repo_network_name: Some("solana"),
        url_param: "solana",
        interface_name: "solana",
        docs: "https://solana.com/docs",
        logo: "SOLANA_LOGO",
        block_polling_interval: PollingInterval::Fast,
        trading_api_polling_interval_ms: 250,
        pending_transactions_retry_options: DEFAULT_RETRY_OPTIONS,
        block_wait_ms_before_warning: None,
        supports_limits: false,
        supports_v4: false,
        supports_nfts: false,
    };
}

/// Descriptor lookup. The match is exhaustive, so a ChainKey without a
/// descriptor does not compile.
pub const fn chain_info(chain: ChainKey) -> &'static ChainInfo {
    match chain {
        ChainKey::Nexus => &chain_info_registry::NEXUS_INFO,
        ChainKey::Mainnet => &chain_info_registry::MAINNET_INFO,
        ChainKey::Unichain => &chain_info_registry::UNICHAIN_INFO,
        ChainKey::Sepolia => &chain_info_registry::SEPOLIA_INFO,
        ChainKey::Solana => &chain_info_registry::SOLANA_INFO,
    }
}

const fn same_backend_tag(a: BackendChain, b: BackendChain) -> bool {
    match (a, b) {
        (BackendChain::Supported(x), BackendChain::Supported(y)) => x as u8 == y as u8,
        _ => false,
    }
}

/// Checks the table for defects that must never reach a caller:
/// - every ordered chain appears once and its descriptor id matches the key
/// - no two chains claim the same supported backend tag
/// - every native, wrapped and stablecoin address is non-empty
pub const fn chain_table_is_consistent() -> bool {
    let mut i = 0;
    while i < ORDERED_CHAINS.len() {
        let chain = ORDERED_CHAINS[i];
        let info = chain_info(chain);
        if info.id != chain.id() || info.native_currency.address.is_empty() {
            return false;
        }
        if let Some(wrapped) = &info.wrapped_native_currency {
            if wrapped.address.is_empty() {
                return false;
            }
        }
        let mut s = 0;
        while s < info.stablecoins.len() {
            if info.stablecoins[s].address.is_empty() {
                return false;
            }
            s += 1;
        }

        let mut j = i + 1;
        while j < ORDERED_CHAINS.len() {
            let other = ORDERED_CHAINS[j];
            if chain as u8 == other as u8 {
                return false;
            }
            if same_backend_tag(info.backend_chain.chain, chain_info(other).backend_chain.chain) {
                return false;
            }
            j += 1;
        }
        i += 1;
    }
    true
}

/// `ChainKey::ALL` holds every variant exactly once, in declaration order.
pub const fn chain_keys_are_listed_in_order() -> bool {
    let mut i = 0;
    while i < ChainKey::COUNT {
        if ChainKey::ALL[i] as usize != i {
            return false;
        }
        i += 1;
    }
    true
}

// Solana is the last declared variant
const_assert_eq!(ChainKey::COUNT, ChainKey::Solana as usize + 1);
const_assert!(chain_keys_are_listed_in_order());
const_assert!(chain_table_is_consistent());
