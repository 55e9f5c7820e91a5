use ink_prelude::{format, string::String};

use crate::common::{ChainKey, PublicError, Result};

/// Address that represents native currencies on ETH, Arbitrum, etc.
pub const DEFAULT_NATIVE_ADDRESS_LEGACY: &str = "0xeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeee";
pub const DEFAULT_NATIVE_ADDRESS: &str = "0x0000000000000000000000000000000000000000";
// System program id, used as the SOL sentinel
pub const DEFAULT_NATIVE_ADDRESS_SOLANA: &str = "11111111111111111111111111111111";

pub const DEFAULT_RETRY_OPTIONS: RetryOptions = RetryOptions {
    n: 10,
    min_wait_ms: 250,
    med_wait_ms: 500,
    max_wait_ms: 1000,
};

pub const DEFAULT_MS_BEFORE_WARNING: u64 = 10 * 60 * 1000;

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub struct RetryOptions {
    pub n: u32,
    pub min_wait_ms: u64,
    pub med_wait_ms: u64,
    pub max_wait_ms: u64,
}

#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash)]
pub enum RpcType {
    Public,
    PublicAlt,
    Default,
    Fallback,
    Interface,
    Private,
}

/// HTTP endpoints grouped by purpose. An empty slice means the chain has no
/// endpoint of that kind.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct RpcUrls {
    pub public: &'static [&'static str],
    pub public_alt: &'static [&'static str],
    pub default: &'static [&'static str],
    pub fallback: &'static [&'static str],
    pub interface: &'static [&'static str],
    pub private: &'static [&'static str],
}

impl RpcUrls {
    /// Points every purpose at the same endpoint, e.g. a local fork in e2e runs.
    pub const fn uniform(urls: &'static [&'static str]) -> Self {
        Self {
            public: urls,
            public_alt: urls,
            default: urls,
            fallback: urls,
            interface: urls,
            private: urls,
        }
    }

    pub fn get(&self, rpc_type: RpcType) -> &'static [&'static str] {
        match rpc_type {
            RpcType::Public => self.public,
            RpcType::PublicAlt => self.public_alt,
            RpcType::Default => self.default,
            RpcType::Fallback => self.fallback,
            RpcType::Interface => self.interface,
            RpcType::Private => self.private,
        }
    }

    /// First configured url for `rpc_type`, falling back to the default endpoint.
    pub fn primary(&self, rpc_type: RpcType) -> Option<&'static str> {
        self.get(rpc_type)
            .first()
            .or_else(|| self.default.first())
            .copied()
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub struct RpcConfig {
    pub quicknode_endpoint_name: String,
    pub quicknode_endpoint_token: String,
}

// Source: https://marketplace.quicknode.com/chains_and_networks
pub fn get_quicknode_chain_id(chain: ChainKey) -> Result<&'static str> {
    match chain {
        // Ethereum mainnet is QuickNode's default network and takes no subdomain
        ChainKey::Mainnet => Ok(""),
        ChainKey::Unichain => Ok("unichain-mainnet"),
        ChainKey::Sepolia => Ok("ethereum-sepolia"),
        ChainKey::Solana => Ok("solana-mainnet"),
        ChainKey::Nexus => Err(PublicError::NoQuicknodeEndpoint(chain)),
    }
}

// Some networks are served under a path rather than the bare token
pub fn get_quicknode_chain_id_path_suffix(chain: ChainKey) -> &'static str {
    match chain {
        ChainKey::Nexus
        | ChainKey::Mainnet
        | ChainKey::Unichain
        | ChainKey::Sepolia
        | ChainKey::Solana => "",
    }
}

pub fn get_quicknode_endpoint_url(config: &RpcConfig, chain: ChainKey) -> Result<String> {
    let quicknode_chain_id = get_quicknode_chain_id(chain)?;
    let subdomain = if quicknode_chain_id.is_empty() {
        String::new()
    } else {
        format!(".{}", quicknode_chain_id)
    };
    Ok(format!(
        "https://{}{}.quiknode.pro/{}{}",
        config.quicknode_endpoint_name,
        subdomain,
        config.quicknode_endpoint_token,
        get_quicknode_chain_id_path_suffix(chain)
    ))
}
