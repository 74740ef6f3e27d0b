use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::common::{decode, error::Error};

#[derive(Clone, Copy, Default, Hash, Eq, PartialEq)]
pub struct Address(pub [u8; 20]);

impl Address {
    pub fn zero() -> Self {
        Self([0u8; 20])
    }

    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|byte| byte == &0)
    }
}

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl std::fmt::Debug for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Address(0x{})", hex::encode(self.0))
    }
}

impl From<[u8; 20]> for Address {
    fn from(value: [u8; 20]) -> Self {
        Self(value)
    }
}

impl TryFrom<&[u8]> for Address {
    type Error = Error;

    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        if value.len() != 20 {
            return Err(Error::InvalidAddress);
        }
        let mut bytes = [0u8; 20];
        bytes.copy_from_slice(value);
        Ok(Address(bytes))
    }
}

impl TryFrom<&str> for Address {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let value = value.trim();
        if value.len() != 40 && value.len() != 42 {
            return Err(Error::InvalidAddress);
        }
        let mut bytes = [0u8; 20];
        hex::decode_to_slice(value.trim_start_matches("0x"), &mut bytes)
            .map_err(|_| Error::InvalidAddress)?;
        Ok(Address(bytes))
    }
}

impl std::str::FromStr for Address {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Address::try_from(s)
    }
}

impl Serialize for Address {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let hex = hex::encode(self.0);
        let hex = format!("0x{hex}");
        serializer.serialize_str(&hex)
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D>(deserializer: D) -> Result<Address, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::Error;

        let hex: String = Deserialize::deserialize(deserializer)?;
        Address::try_from(hex.as_str()).map_err(|_| {
            D::Error::invalid_value(serde::de::Unexpected::Str(&hex), &"20-byte hex address")
        })
    }
}

pub const fn addr(s: &str) -> Address {
    Address(decode(s))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_address() {
        let a = Address::try_from("0xe2148ee53c0755215df69b2616e552154edc584f").unwrap();
        assert_eq!(a, addr("0xe2148ee53c0755215df69b2616e552154edc584f"));
        assert_eq!(a.to_string(), "0xe2148ee53c0755215df69b2616e552154edc584f");

        let b = Address::try_from("18D19C5D3E685F5BE5B9C86E097F0E439285D216").unwrap();
        assert_eq!(b.to_string(), "0x18d19c5d3e685f5be5b9c86e097f0e439285d216");
    }

    #[test]
    fn test_parse_address_invalid() {
        assert_eq!(Address::try_from("0x1234"), Err(Error::InvalidAddress));
        assert_eq!(
            Address::try_from("0xz2148ee53c0755215df69b2616e552154edc584f"),
            Err(Error::InvalidAddress)
        );
        assert_eq!(Address::try_from(&[0u8; 19][..]), Err(Error::InvalidAddress));
    }

    #[test]
    fn test_zero() {
        assert!(Address::zero().is_zero());
        assert!(!addr("0x01").is_zero());
    }

    #[test]
    fn test_serde() {
        let a = addr("0x18d19c5d3e685f5be5b9c86e097f0e439285d216");
        let json = serde_json::to_value(a).unwrap();
        assert_eq!(json, serde_json::json!("0x18d19c5d3e685f5be5b9c86e097f0e439285d216"));
        let back: Address = serde_json::from_value(json).unwrap();
        assert_eq!(back, a);
        assert!(serde_json::from_value::<Address>(serde_json::json!("0x12")).is_err());
    }
}
