use serde::{Deserialize, Deserializer, Serialize, Serializer};

pub mod address;
pub mod error;
pub mod hash;

/// Opaque byte string, rendered as `0x`-prefixed lowercase hex.
#[derive(Clone, Default, Eq, PartialEq)]
pub struct Hex(Vec<u8>);

impl Hex {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<u8>> for Hex {
    fn from(value: Vec<u8>) -> Self {
        Self(value)
    }
}

impl From<&[u8]> for Hex {
    fn from(value: &[u8]) -> Self {
        Self(value.to_vec())
    }
}

impl<const N: usize> From<[u8; N]> for Hex {
    fn from(value: [u8; N]) -> Self {
        Self(value.to_vec())
    }
}

impl std::str::FromStr for Hex {
    type Err = error::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let hex = s.strip_prefix("0x").unwrap_or(s);
        hex::decode(hex)
            .map(Self)
            .map_err(|_| error::Error::InvalidHex(s.to_string()))
    }
}

impl std::fmt::Debug for Hex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Hex(0x{})", hex::encode(&self.0))
    }
}

impl std::fmt::Display for Hex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "0x{}", hex::encode(&self.0))
    }
}

impl Serialize for Hex {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let hex = format!("0x{}", hex::encode(&self.0));
        serializer.serialize_str(&hex)
    }
}

impl<'de> Deserialize<'de> for Hex {
    fn deserialize<D>(deserializer: D) -> Result<Hex, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::Error;

        let hex: String = Deserialize::deserialize(deserializer)?;
        let bin = hex::decode(hex.trim_start_matches("0x")).map_err(|_| {
            D::Error::invalid_value(serde::de::Unexpected::Str(&hex), &"Invalid hex string")
        })?;
        Ok(Hex(bin))
    }
}

/// Compile-time hex decoding into a fixed-size array, right-aligned.
const fn decode<const N: usize>(s: &str) -> [u8; N] {
    let s = s.as_bytes();
    let mut b = [0u8; N];
    let mut n = s.len();
    let parity = s.len() % 2;

    if s.is_empty() {
        return b;
    }
    let min = if s[0] == b'0' && s.len() > 1 && s[1] == b'x' {
        2
    } else {
        0
    };

    let mut i = N;
    while n > min {
        let c = s[n - 1];
        let c = match c {
            b'0'..=b'9' => c - b'0',
            b'a'..=b'f' => c - b'a' + 10,
            b'A'..=b'F' => c - b'A' + 10,
            _ => panic!("Invalid hex"),
        };

        if n % 2 == parity {
            b[i - 1] = c;
        } else {
            b[i - 1] += c << 4;
            i -= 1;
        }

        n -= 1;
    }
    b
}
