use base58::FromBase58;
use core::fmt::Write;
use ink_prelude::{string::String, vec::Vec};

use crate::common::{Platform, PublicError, Result};

const EVM_ADDRESS_LEN: usize = 20;
const SVM_ADDRESS_LEN: usize = 32;

pub fn hex_string_to_vec(s: &str) -> Result<Vec<u8>> {
    let stripped = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .ok_or(PublicError::InvalidHex)?;
    hex::decode(stripped).map_err(|_| PublicError::InvalidHex)
}

pub fn slice_to_hex_string(v: &[u8]) -> String {
    let mut res = String::from("0x");
    for a in v.iter() {
        write!(res, "{:02x}", a).expect("should create hex string");
    }
    res
}

/// Raw bytes of an address. EVM addresses are hex, SVM addresses are base58 public keys.
pub fn decode_address(platform: Platform, address: &str) -> Result<Vec<u8>> {
    let (bytes, expected_len) = match platform {
        Platform::Evm => (
            hex_string_to_vec(address).map_err(|_| PublicError::InvalidAddress)?,
            EVM_ADDRESS_LEN,
        ),
        Platform::Svm => (
            address
                .from_base58()
                .map_err(|_| PublicError::InvalidAddress)?,
            SVM_ADDRESS_LEN,
        ),
    };
    if bytes.len() != expected_len {
        return Err(PublicError::InvalidAddress);
    }
    Ok(bytes)
}

pub fn is_valid_address(platform: Platform, address: &str) -> bool {
    decode_address(platform, address).is_ok()
}

/// EVM addresses compare case-insensitively (checksum casing is cosmetic),
/// base58 addresses compare exactly.
pub fn addresses_equal(platform: Platform, a: &str, b: &str) -> bool {
    match platform {
        Platform::Evm => match (decode_address(platform, a), decode_address(platform, b)) {
            (Ok(x), Ok(y)) => x == y,
            _ => false,
        },
        Platform::Svm => a == b,
    }
}
