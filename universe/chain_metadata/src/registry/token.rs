use crate::chain_info::{TokenSpec, WrappedCurrencyInfo};

const fn usdc(address: &'static str) -> TokenSpec {
    TokenSpec {
        address,
        decimals: 6,
        symbol: "USDC",
        name: "USD Coin",
    }
}

pub mod stablecoin_registry {
    use super::usdc;
    use crate::chain_info::TokenSpec;

    // TODO: Replace with the deployed USDC contract once it is live on Nexus Testnet3
    pub const USDC_NEXUS: TokenSpec = usdc("0x0000000000000000000000000000000000000002");

    pub const USDC_MAINNET: TokenSpec = usdc("0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48");
    pub const USDT_MAINNET: TokenSpec = TokenSpec {
        address: "0xdAC17F958D2ee523a2206206994597C13D831ec7",
        decimals: 6,
        symbol: "USDT",
        name: "Tether USD",
    };
    pub const DAI_MAINNET: TokenSpec = TokenSpec {
        address: "0x6B175474E89094C44Da98b954EedeAC495271d0F",
        decimals: 18,
        symbol: "DAI",
        name: "Dai Stablecoin",
    };

    pub const USDC_UNICHAIN: TokenSpec = usdc("0x078D782b760474a361dDA0AF3839290b0EF57AD6");
    pub const USDC_SEPOLIA: TokenSpec = usdc("0x1c7D4B196Cb0C7B01d743Fbc6116a902379C7238");
    pub const USDC_SOLANA: TokenSpec = usdc("EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v");

    pub const NEXUS_STABLECOINS: &[TokenSpec] = &[USDC_NEXUS];
    pub const MAINNET_STABLECOINS: &[TokenSpec] = &[USDC_MAINNET, USDT_MAINNET, DAI_MAINNET];
    pub const UNICHAIN_STABLECOINS: &[TokenSpec] = &[USDC_UNICHAIN];
    pub const SEPOLIA_STABLECOINS: &[TokenSpec] = &[USDC_SEPOLIA];
    pub const SOLANA_STABLECOINS: &[TokenSpec] = &[USDC_SOLANA];
}

pub mod wrapped_currency_registry {
    use crate::chain_info::WrappedCurrencyInfo;

    // TODO: Replace with the deployed WNEX contract once it is live on Nexus Testnet3
    pub const WNEX: WrappedCurrencyInfo = WrappedCurrencyInfo {
        name: "Wrapped NEX",
        symbol: "WNEX",
        decimals: 18,
        address: "0x0000000000000000000000000000000000000001",
    };
    pub const WETH_MAINNET: WrappedCurrencyInfo = super::weth("0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2");
    // OP stack predeploy
    pub const WETH_UNICHAIN: WrappedCurrencyInfo = super::weth("0x4200000000000000000000000000000000000006");
    pub const WETH_SEPOLIA: WrappedCurrencyInfo = super::weth("0xfFf9976782d46CC05630D1f6eBAb18b2324d6B14");
    pub const WSOL: WrappedCurrencyInfo = WrappedCurrencyInfo {
        name: "Wrapped SOL",
        symbol: "WSOL",
        decimals: 9,
        address: "So11111111111111111111111111111111111111112",
    };
}

const fn weth(address: &'static str) -> WrappedCurrencyInfo {
    WrappedCurrencyInfo {
        name: "Wrapped Ether",
        symbol: "WETH",
        decimals: 18,
        address,
    }
}

#[cfg(test)]
mod tests {
    use super::{stablecoin_registry::*, wrapped_currency_registry::*};

    #[test]
    fn test_usdc_has_six_decimals_everywhere() {
        for usdc in [
            USDC_NEXUS,
            USDC_MAINNET,
            USDC_UNICHAIN,
            USDC_SEPOLIA,
            USDC_SOLANA,
        ] {
            assert_eq!(usdc.symbol, "USDC");
            assert_eq!(usdc.decimals, 6);
        }
    }

    #[test]
    fn test_wrapped_natives_share_native_decimals() {
        assert_eq!(WNEX.decimals, 18);
        assert_eq!(WETH_MAINNET.decimals, 18);
        assert_eq!(WSOL.decimals, 9);
    }
}
