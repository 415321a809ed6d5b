use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

use crate::Input;
use crate::ScalarCodec;
use crate::ScalarError;

/// Represents a variable-length byte string in `0x`-prefixed hex form.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Bytes(Vec<u8>);

impl Bytes {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.0
    }
}

impl FromStr for Bytes {
    type Err = ScalarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Only the first two characters decide whether the prefix is present,
        // everything else is left to the hex decoder.
        let digits = match s.get(..2) {
            Some("0x" | "0X") => &s[2..],
            _ => s,
        };

        hex::decode(digits)
            .map(Self)
            .map_err(|err| ScalarError::invalid_format(Self::NAME, s, err))
    }
}

impl ScalarCodec for Bytes {
    const NAME: &'static str = "Bytes";

    fn marshal(&self) -> String {
        format!("0x{}", hex::encode(&self.0))
    }

    fn unmarshal(input: Input) -> Result<Self, ScalarError> {
        input.into_string(Self::NAME)?.parse()
    }
}

impl fmt::Display for Bytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.marshal())
    }
}

impl Deref for Bytes {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<[u8]> for Bytes {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<Vec<u8>> for Bytes {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl From<&[u8]> for Bytes {
    fn from(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }
}

impl From<Bytes> for Vec<u8> {
    fn from(bytes: Bytes) -> Self {
        bytes.0
    }
}
