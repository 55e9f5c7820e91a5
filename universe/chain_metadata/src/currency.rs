use core::cell::RefCell;
use ink_env::debug_println;
use ink_prelude::{
    collections::BTreeMap,
    format,
    string::{String, ToString},
};
use scale::{Decode, Encode};

use crate::chain_info::{TokenSpec, WrappedCurrencyInfo};
use crate::common::{ChainId, ChainKey, Platform, PublicError, Result};
use crate::registry::chain::chain_info;
use crate::registry::token::wrapped_currency_registry;
use crate::rpc::DEFAULT_NATIVE_ADDRESS;
use crate::utils::general_utils::{addresses_equal, is_valid_address};

const FALLBACK_NATIVE_DECIMALS: u8 = 18;
const FALLBACK_NATIVE_SYMBOL: &str = "native";

const ASSET_REPO_BASE_URL: &str = "https://raw.githubusercontent.com/Uniswap/assets/master/blockchains";

/// Native currency of a chain. Two instances are equal iff they are on the same chain.
#[derive(Encode, Decode, Debug, Eq, Clone)]
#[cfg_attr(feature = "std", derive(scale_info::TypeInfo))]
pub struct NativeCurrency {
    chain_id: ChainId,
    decimals: u8,
    symbol: String,
    name: String,
}

impl PartialEq for NativeCurrency {
    fn eq(&self, other: &Self) -> bool {
        self.chain_id == other.chain_id
    }
}

impl NativeCurrency {
    pub fn for_chain(chain: ChainKey) -> Self {
        let native = &chain_info(chain).native_currency;
        Self {
            chain_id: chain.id(),
            decimals: native.decimals,
            symbol: native.symbol.to_string(),
            name: native.name.to_string(),
        }
    }

    /// Builds the native currency for a raw chain id. Ids outside the
    /// registry get generic defaults instead of failing.
    pub fn from_chain_id(chain_id: ChainId) -> Self {
        match ChainKey::from_id(chain_id) {
            Some(chain) => Self::for_chain(chain),
            None => {
                debug_println!(
                    "WARN: Initializing native currency for non-universe chain: {}",
                    chain_id
                );
                Self {
                    chain_id,
                    decimals: FALLBACK_NATIVE_DECIMALS,
                    symbol: FALLBACK_NATIVE_SYMBOL.to_string(),
                    name: FALLBACK_NATIVE_SYMBOL.to_string(),
                }
            }
        }
    }

    pub fn chain_id(&self) -> ChainId {
        self.chain_id
    }

    pub fn chain(&self) -> Option<ChainKey> {
        ChainKey::from_id(self.chain_id)
    }

    pub fn decimals(&self) -> u8 {
        self.decimals
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The sentinel address standing in for this currency, if the chain is known.
    pub fn address(&self) -> Option<&'static str> {
        Some(chain_info(self.chain()?).native_currency.address)
    }

    /// Fails for chains without a wrapped native currency.
    pub fn wrapped(&self) -> Result<Token> {
        let chain = self
            .chain()
            .ok_or(PublicError::UnsupportedWrappedCurrency(self.chain_id))?;
        let wrapped = chain_info(chain)
            .wrapped_native_currency
            .as_ref()
            .ok_or(PublicError::UnsupportedWrappedCurrency(self.chain_id))?;
        Ok(Token::from_wrapped(chain, wrapped))
    }
}

/// An ERC-20 / SPL token. The address is never empty and is valid for the
/// chain's platform.
#[derive(Encode, Debug, Eq, Clone)]
#[cfg_attr(feature = "std", derive(scale_info::TypeInfo))]
pub struct Token {
    chain: ChainKey,
    address: String,
    decimals: u8,
    symbol: String,
    name: String,
}

impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.chain == other.chain
            && addresses_equal(chain_info(self.chain).platform, &self.address, &other.address)
    }
}

// Decoded tokens go through the same address checks as `Token::new`
impl Decode for Token {
    fn decode<I: scale::Input>(input: &mut I) -> core::result::Result<Self, scale::Error> {
        let chain = ChainKey::decode(input)?;
        let address = String::decode(input)?;
        let decimals = u8::decode(input)?;
        let symbol = String::decode(input)?;
        let name = String::decode(input)?;
        Self::new(chain, &address, decimals, &symbol, &name).map_err(|e| match e {
            PublicError::EmptyAddress => "Token address must not be empty".into(),
            _ => "Token address is not valid for the chain's platform".into(),
        })
    }
}

impl Token {
    pub fn new(
        chain: ChainKey,
        address: &str,
        decimals: u8,
        symbol: &str,
        name: &str,
    ) -> Result<Self> {
        if address.is_empty() {
            return Err(PublicError::EmptyAddress);
        }
        if !is_valid_address(chain_info(chain).platform, address) {
            return Err(PublicError::InvalidAddress);
        }
        Ok(Self {
            chain,
            address: address.to_string(),
            decimals,
            symbol: symbol.to_string(),
            name: name.to_string(),
        })
    }

    // Registry specs are checked for non-empty addresses at compile time
    pub fn from_spec(chain: ChainKey, spec: &TokenSpec) -> Self {
        Self {
            chain,
            address: spec.address.to_string(),
            decimals: spec.decimals,
            symbol: spec.symbol.to_string(),
            name: spec.name.to_string(),
        }
    }

    pub fn from_wrapped(chain: ChainKey, wrapped: &WrappedCurrencyInfo) -> Self {
        Self {
            chain,
            address: wrapped.address.to_string(),
            decimals: wrapped.decimals,
            symbol: wrapped.symbol.to_string(),
            name: wrapped.name.to_string(),
        }
    }

    pub fn chain(&self) -> ChainKey {
        self.chain
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn decimals(&self) -> u8 {
        self.decimals
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

#[derive(Encode, Decode, Debug, PartialEq, Eq, Clone)]
#[cfg_attr(feature = "std", derive(scale_info::TypeInfo))]
pub enum Currency {
    Native(NativeCurrency),
    Token(Token),
}

impl Currency {
    pub fn chain_id(&self) -> ChainId {
        match self {
            Self::Native(native) => native.chain_id(),
            Self::Token(token) => token.chain().id(),
        }
    }

    pub fn is_native(&self) -> bool {
        matches!(self, Self::Native(_))
    }

    pub fn is_token(&self) -> bool {
        matches!(self, Self::Token(_))
    }

    pub fn decimals(&self) -> u8 {
        match self {
            Self::Native(native) => native.decimals(),
            Self::Token(token) => token.decimals(),
        }
    }

    pub fn symbol(&self) -> &str {
        match self {
            Self::Native(native) => native.symbol(),
            Self::Token(token) => token.symbol(),
        }
    }

    /// Token contract address, or the native sentinel. Natives on unknown
    /// chains use the EVM zero address.
    pub fn address(&self) -> &str {
        match self {
            Self::Native(native) => native.address().unwrap_or(DEFAULT_NATIVE_ADDRESS),
            Self::Token(token) => token.address(),
        }
    }
}

impl From<NativeCurrency> for Currency {
    fn from(native: NativeCurrency) -> Self {
        Self::Native(native)
    }
}

impl From<Token> for Currency {
    fn from(token: Token) -> Self {
        Self::Token(token)
    }
}

/// `<chainId>-<address>`, the key used by currency lookups and the token selector.
pub fn currency_id(currency: &Currency) -> String {
    format!("{}-{}", currency.chain_id(), currency.address())
}

pub fn build_native_currency_id(chain: ChainKey) -> String {
    format!("{}-{}", chain.id(), chain_info(chain).native_currency.address)
}

pub fn build_wrapped_native_currency_id(chain: ChainKey) -> Option<String> {
    let wrapped = chain_info(chain).wrapped_native_currency.as_ref()?;
    Some(format!("{}-{}", chain.id(), wrapped.address))
}

/// Whether `address` designates the chain's native currency. EVM chains also
/// accept the zero address.
pub fn is_native_currency_address(chain: ChainKey, address: &str) -> bool {
    let info = chain_info(chain);
    match info.platform {
        Platform::Evm => {
            addresses_equal(Platform::Evm, address, info.native_currency.address)
                || addresses_equal(Platform::Evm, address, DEFAULT_NATIVE_ADDRESS)
        }
        Platform::Svm => address == info.native_currency.address,
    }
}

pub fn is_wsol(currency: &Currency) -> bool {
    match currency {
        Currency::Token(token) => {
            token.chain() == ChainKey::Solana
                && token.address() == wrapped_currency_registry::WSOL.address
        }
        Currency::Native(_) => false,
    }
}

#[derive(Encode, Decode, Debug, PartialEq, Eq, Copy, Clone)]
#[cfg_attr(feature = "std", derive(scale_info::TypeInfo))]
pub enum TokenList {
    Default,
    NonDefault,
    Blocked,
}

#[derive(Encode, Decode, Debug, PartialEq, Eq, Copy, Clone)]
#[cfg_attr(feature = "std", derive(scale_info::TypeInfo))]
pub enum ProtectionResult {
    Benign,
    Spam,
    Malicious,
    Unknown,
}

#[derive(Encode, Decode, Debug, PartialEq, Eq, Copy, Clone)]
#[cfg_attr(feature = "std", derive(scale_info::TypeInfo))]
pub struct SafetyInfo {
    pub token_list: TokenList,
    pub protection_result: ProtectionResult,
}

impl Default for SafetyInfo {
    fn default() -> Self {
        Self {
            token_list: TokenList::Default,
            protection_result: ProtectionResult::Benign,
        }
    }
}

/// Caller-supplied safety verdict. `Default` is the benign, default-list,
/// not-spam bundle used when no safety check ran.
#[derive(Encode, Decode, Debug, PartialEq, Eq, Copy, Clone, Default)]
#[cfg_attr(feature = "std", derive(scale_info::TypeInfo))]
pub struct Classification {
    pub safety_info: SafetyInfo,
    pub is_spam: bool,
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Logo {
    // Key of an image bundled with the app
    Bundled(&'static str),
    Url(String),
}

pub trait LogoProvider {
    fn logo_for(&self, currency: &Currency) -> Option<Logo>;
}

/// Natives use the chain's bundled logo; tokens resolve to the Uniswap assets
/// repo when the chain has a folder there.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultLogoProvider;

impl LogoProvider for DefaultLogoProvider {
    fn logo_for(&self, currency: &Currency) -> Option<Logo> {
        match currency {
            Currency::Native(native) => {
                Some(Logo::Bundled(chain_info(native.chain()?).native_currency.logo))
            }
            Currency::Token(token) => {
                let network_name = chain_info(token.chain()).asset_repo_network_name?;
                Some(Logo::Url(format!(
                    "{}/{}/assets/{}/logo.png",
                    ASSET_REPO_BASE_URL,
                    network_name,
                    token.address()
                )))
            }
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct CurrencyInfo {
    pub currency: Currency,
    pub currency_id: String,
    pub logo: Option<Logo>,
    pub safety_info: SafetyInfo,
    pub is_spam: bool,
}

/// Memoized native currencies, one per ChainKey. Ids outside the registry
/// are never stored, so the map is bounded by the key set.
#[derive(Debug, Default)]
pub struct NativeCurrencyCache {
    cache: RefCell<BTreeMap<ChainKey, NativeCurrency>>,
}

impl NativeCurrencyCache {
    pub fn get_or_insert(&self, chain: ChainKey) -> NativeCurrency {
        self.cache
            .borrow_mut()
            .entry(chain)
            .or_insert_with(|| NativeCurrency::for_chain(chain))
            .clone()
    }

    pub fn len(&self) -> usize {
        self.cache.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.borrow().is_empty()
    }
}

pub struct CurrencyResolver<L = DefaultLogoProvider> {
    logo_provider: L,
    native_cache: NativeCurrencyCache,
}

impl Default for CurrencyResolver<DefaultLogoProvider> {
    fn default() -> Self {
        Self::new(DefaultLogoProvider)
    }
}

impl<L: LogoProvider> CurrencyResolver<L> {
    pub fn new(logo_provider: L) -> Self {
        Self {
            logo_provider,
            native_cache: NativeCurrencyCache::default(),
        }
    }

    pub fn native_currency_for(&self, chain: ChainKey) -> NativeCurrency {
        self.native_cache.get_or_insert(chain)
    }

    /// Like `native_currency_for`, for callers holding an unvalidated id.
    pub fn native_on_chain(&self, chain_id: ChainId) -> NativeCurrency {
        match ChainKey::from_id(chain_id) {
            Some(chain) => self.native_currency_for(chain),
            None => NativeCurrency::from_chain_id(chain_id),
        }
    }

    pub fn native_cache(&self) -> &NativeCurrencyCache {
        &self.native_cache
    }

    pub fn build_currency_info(
        &self,
        currency: Currency,
        classification: Option<Classification>,
    ) -> CurrencyInfo {
        let Classification {
            safety_info,
            is_spam,
        } = classification.unwrap_or_default();
        CurrencyInfo {
            currency_id: currency_id(&currency),
            logo: self.logo_provider.logo_for(&currency),
            currency,
            safety_info,
            is_spam,
        }
    }

    /// Currency info for paths where no safety check is available.
    pub fn build_partial_currency_info(&self, currency: Currency) -> CurrencyInfo {
        self.build_currency_info(currency, None)
    }
}
