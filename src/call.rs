use serde::{Serialize, Serializer};

use crate::common::{Hex, address::Address, error::Error};

/// Transaction object of an `eth_call`: nothing is signed or committed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CallRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<Address>,
    pub to: Address,
    pub data: Hex,
}

impl CallRequest {
    pub fn new(to: Address, data: impl Into<Hex>) -> Self {
        Self {
            from: None,
            to,
            data: data.into(),
        }
    }

    pub fn with_sender(mut self, from: Address) -> Self {
        self.from = Some(from);
        self
    }
}

/// Block state the call is simulated against.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BlockTag {
    #[default]
    Latest,
    Earliest,
    Pending,
    Safe,
    Finalized,
    Number(u64),
}

impl std::fmt::Display for BlockTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BlockTag::Latest => f.write_str("latest"),
            BlockTag::Earliest => f.write_str("earliest"),
            BlockTag::Pending => f.write_str("pending"),
            BlockTag::Safe => f.write_str("safe"),
            BlockTag::Finalized => f.write_str("finalized"),
            BlockTag::Number(n) => write!(f, "{n:#x}"),
        }
    }
}

impl std::str::FromStr for BlockTag {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = match s.trim().to_ascii_lowercase().as_str() {
            "latest" => BlockTag::Latest,
            "earliest" => BlockTag::Earliest,
            "pending" => BlockTag::Pending,
            "safe" => BlockTag::Safe,
            "finalized" => BlockTag::Finalized,
            other => {
                let num = match other.strip_prefix("0x") {
                    Some(hex) => u64::from_str_radix(hex, 16),
                    None => other.parse::<u64>(),
                };
                BlockTag::Number(num.map_err(|_| Error::InvalidBlockTag(s.to_string()))?)
            }
        };
        Ok(tag)
    }
}

impl Serialize for BlockTag {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}
