use core::fmt;
use scale::{Decode, Encode};

pub type ChainId = u64;
// Gas defaults are expressed in units of 0.0001 native token, e.g. 20 -> 0.002 ETH
pub type GasAmount = u32;

#[derive(Debug, Eq, PartialEq)]
pub enum PublicError {
    EmptyAddress,
    InvalidAddress,
    InvalidHex,
    NoQuicknodeEndpoint(ChainKey),
    UnsupportedWrappedCurrency(ChainId),
}

impl fmt::Display for PublicError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::EmptyAddress => write!(f, "Token address must not be empty"),
            Self::InvalidAddress => write!(f, "Address is not valid for the chain's platform"),
            Self::InvalidHex => write!(f, "Invalid hex string"),
            Self::NoQuicknodeEndpoint(chain) => {
                write!(f, "Chain {} does not have a corresponding QuickNode chain ID", chain)
            }
            Self::UnsupportedWrappedCurrency(chain_id) => {
                write!(f, "Unsupported chain ID: {}", chain_id)
            }
        }
    }
}

pub(crate) type Result<T> = core::result::Result<T, PublicError>;

/// Identifies a network supported by the app. Variant order is the display and
/// priority order used by every derived listing.
#[derive(Encode, Decode, Debug, PartialEq, Eq, Copy, Clone, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(scale_info::TypeInfo))]
pub enum ChainKey {
    Nexus,
    Mainnet,
    Unichain,
    Sepolia,
    Solana,
}

impl ChainKey {
    pub const COUNT: usize = 5;
    pub const ALL: [ChainKey; ChainKey::COUNT] = [
        ChainKey::Nexus,
        ChainKey::Mainnet,
        ChainKey::Unichain,
        ChainKey::Sepolia,
        ChainKey::Solana,
    ];

    pub const fn id(self) -> ChainId {
        match self {
            Self::Nexus => 3945,
            Self::Mainnet => 1,
            Self::Unichain => 130,
            Self::Sepolia => 11_155_111,
            // Solana has no EVM chain id; this is the app-assigned identifier
            Self::Solana => 501_000_101,
        }
    }

    pub const fn from_id(id: ChainId) -> Option<Self> {
        let mut i = 0;
        while i < Self::COUNT {
            if Self::ALL[i].id() == id {
                return Some(Self::ALL[i]);
            }
            i += 1;
        }
        None
    }
}

impl fmt::Display for ChainKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

impl TryFrom<ChainId> for ChainKey {
    type Error = ChainId;

    fn try_from(id: ChainId) -> core::result::Result<Self, Self::Error> {
        Self::from_id(id).ok_or(id)
    }
}

#[derive(Encode, Decode, Debug, PartialEq, Eq, Copy, Clone, Hash)]
#[cfg_attr(feature = "std", derive(scale_info::TypeInfo))]
pub enum Platform {
    Evm,
    Svm,
}

#[derive(Encode, Decode, Debug, PartialEq, Eq, Copy, Clone, Hash)]
#[cfg_attr(feature = "std", derive(scale_info::TypeInfo))]
pub enum NetworkLayer {
    L1,
    L2,
}

/// Chain tags of the GraphQL data service. Not every ChainKey owns one.
#[derive(Encode, Decode, Debug, PartialEq, Eq, Copy, Clone, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(scale_info::TypeInfo))]
pub enum GqlChain {
    Ethereum,
    EthereumSepolia,
    Unichain,
    Solana,
}

impl GqlChain {
    pub const fn graphql_name(self) -> &'static str {
        match self {
            Self::Ethereum => "ETHEREUM",
            Self::EthereumSepolia => "ETHEREUM_SEPOLIA",
            Self::Unichain => "UNICHAIN",
            Self::Solana => "SOLANA",
        }
    }

    pub fn from_graphql_name(name: &str) -> Option<Self> {
        match name {
            "ETHEREUM" => Some(Self::Ethereum),
            "ETHEREUM_SEPOLIA" => Some(Self::EthereumSepolia),
            "UNICHAIN" => Some(Self::Unichain),
            "SOLANA" => Some(Self::Solana),
            _ => None,
        }
    }
}

/// Link between a chain and the GraphQL data service. Chains the service does
/// not index are `Unsupported`; no two chains share a `Supported` tag.
#[derive(Encode, Decode, Debug, PartialEq, Eq, Copy, Clone, Hash)]
#[cfg_attr(feature = "std", derive(scale_info::TypeInfo))]
pub enum BackendChain {
    Supported(GqlChain),
    Unsupported,
}

impl BackendChain {
    pub const fn gql_chain(&self) -> Option<GqlChain> {
        match self {
            Self::Supported(chain) => Some(*chain),
            Self::Unsupported => None,
        }
    }
}

#[derive(Encode, Decode, Debug, PartialEq, Eq, Copy, Clone, Hash)]
#[cfg_attr(feature = "std", derive(scale_info::TypeInfo))]
pub enum PollingInterval {
    Slow,
    Normal,
    KindaFast,
    Fast,
    LightningMcQueen,
}

impl PollingInterval {
    pub const fn as_millis(self) -> u64 {
        match self {
            Self::Slow => 5 * 60 * 1000,
            Self::Normal => 60 * 1000,
            Self::KindaFast => 30 * 1000,
            Self::Fast => 15 * 1000,
            Self::LightningMcQueen => 6 * 1000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chain_key_id_round_trip() {
        for key in ChainKey::ALL {
            assert_eq!(ChainKey::from_id(key.id()), Some(key));
            assert_eq!(ChainKey::try_from(key.id()), Ok(key));
        }
        assert_eq!(ChainKey::from_id(0), None);
        assert_eq!(ChainKey::try_from(56), Err(56));
    }

    #[test]
    fn test_chain_key_order_is_declaration_order() {
        let mut sorted = ChainKey::ALL;
        sorted.sort();
        assert_eq!(sorted, ChainKey::ALL);
    }

    #[test]
    fn test_chain_key_scale_encoding() {
        let encoded = ChainKey::Sepolia.encode();
        assert_eq!(encoded, [3u8]);
        let decoded = ChainKey::decode(&mut &encoded[..]).expect("Should decode a ChainKey");
        assert_eq!(decoded, ChainKey::Sepolia);
    }

    #[test]
    fn test_gql_chain_names() {
        for chain in [
            GqlChain::Ethereum,
            GqlChain::EthereumSepolia,
            GqlChain::Unichain,
            GqlChain::Solana,
        ] {
            assert_eq!(GqlChain::from_graphql_name(chain.graphql_name()), Some(chain));
        }
        assert_eq!(GqlChain::from_graphql_name("BNB"), None);
    }
}
