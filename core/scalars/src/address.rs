use std::fmt;
use std::str::FromStr;

use sha3::{Digest, Keccak256};

use crate::Input;
use crate::ScalarCodec;
use crate::ScalarError;

/// The number of bytes in an address.
pub const ADDRESS_LENGTH: usize = 20;

const HEX_LENGTH: usize = ADDRESS_LENGTH * 2;

/// Represents an Ethereum-style account address.
///
/// The default value is the zero address. It is a valid address, so decoding
/// results must be checked through the returned error and never by comparing
/// the value against [Address::ZERO].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Address([u8; ADDRESS_LENGTH]);

impl Address {
    pub const ZERO: Self = Self([0; ADDRESS_LENGTH]);

    pub const fn new(bytes: [u8; ADDRESS_LENGTH]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; ADDRESS_LENGTH] {
        &self.0
    }

    /// Checks that the text is 40 hex digits with an optional `0x` or `0X` prefix.
    ///
    /// Letter case is not checked against the address checksum.
    pub fn is_hex_address(s: &str) -> bool {
        let digits = strip_hex_prefix(s).unwrap_or(s);

        digits.len() == HEX_LENGTH && digits.bytes().all(|b| b.is_ascii_hexdigit())
    }

    /// Returns the `0x`-prefixed lowercase hex form.
    pub fn to_lower_hex(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }

    /// Returns the `0x`-prefixed EIP-55 mixed-case checksum form.
    ///
    /// A hex letter is uppercased when the matching nibble of the Keccak-256 hash
    /// of the lowercase hex digits is 8 or greater.
    pub fn to_checksum_hex(&self) -> String {
        let lower = hex::encode(self.0);
        let hash = Keccak256::digest(lower.as_bytes());

        let mut out = String::with_capacity(HEX_LENGTH + 2);
        out.push_str("0x");

        for (i, c) in lower.chars().enumerate() {
            let byte = hash[i / 2];
            let nibble = if i % 2 == 0 { byte >> 4 } else { byte & 0x0f };

            if nibble >= 8 {
                out.push(c.to_ascii_uppercase());
            } else {
                out.push(c);
            }
        }

        out
    }
}

fn strip_hex_prefix(s: &str) -> Option<&str> {
    s.strip_prefix("0x").or_else(|| s.strip_prefix("0X"))
}

impl FromStr for Address {
    type Err = ScalarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !Self::is_hex_address(s) {
            return Err(ScalarError::invalid_format(
                Self::NAME,
                s,
                "expected 40 hex digits with an optional 0x prefix",
            ));
        }

        let digits = strip_hex_prefix(s).unwrap_or(s);

        let mut bytes = [0; ADDRESS_LENGTH];
        hex::decode_to_slice(digits, &mut bytes)
            .map_err(|err| ScalarError::invalid_format(Self::NAME, s, err))?;

        Ok(Self(bytes))
    }
}

impl ScalarCodec for Address {
    const NAME: &'static str = "Address";

    fn marshal(&self) -> String {
        self.to_checksum_hex()
    }

    fn unmarshal(input: Input) -> Result<Self, ScalarError> {
        input.into_string(Self::NAME)?.parse()
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_checksum_hex())
    }
}

impl fmt::LowerHex for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.write_str("0x")?;
        }

        f.write_str(&hex::encode(self.0))
    }
}

impl From<[u8; ADDRESS_LENGTH]> for Address {
    fn from(bytes: [u8; ADDRESS_LENGTH]) -> Self {
        Self(bytes)
    }
}

impl TryFrom<&[u8]> for Address {
    type Error = ScalarError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let Ok(bytes) = bytes.try_into() else {
            return Err(ScalarError::invalid_format(
                Self::NAME,
                hex::encode(bytes),
                format!("expected {ADDRESS_LENGTH} bytes, found {}", bytes.len()),
            ));
        };

        Ok(Self(bytes))
    }
}

impl From<Address> for [u8; ADDRESS_LENGTH] {
    fn from(address: Address) -> Self {
        address.0
    }
}
