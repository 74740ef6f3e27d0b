use eyre::WrapErr;

use crate::{
    call::{BlockTag, CallRequest},
    common::{
        Hex,
        address::{Address, addr},
    },
};

pub const DEFAULT_URL: &str = "http://localhost:8545";
pub const DEFAULT_FROM: Address = addr("0xe2148ee53c0755215df69b2616e552154edc584f");
pub const DEFAULT_TO: Address = addr("0x18d19c5d3e685f5be5b9c86e097f0e439285d216");
pub const DEFAULT_DATA: [u8; 4] = [0x8f, 0x11, 0x1f, 0x3c];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub url: String,
    pub call: CallRequest,
    pub block: BlockTag,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            call: CallRequest::new(DEFAULT_TO, DEFAULT_DATA).with_sender(DEFAULT_FROM),
            block: BlockTag::Latest,
        }
    }
}

impl Config {
    /// Reads `URL`, `FROM`, `TO`, `DATA` and `BLOCK` from the process environment.
    pub fn from_env() -> eyre::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> eyre::Result<Self> {
        let mut config = Self::default();
        if let Some(url) = lookup("URL") {
            config.url = url;
        }
        if let Some(from) = lookup("FROM") {
            let from = Address::try_from(from.as_str()).wrap_err_with(|| format!("FROM='{from}'"))?;
            config.call.from = Some(from);
        }
        if let Some(to) = lookup("TO") {
            config.call.to = Address::try_from(to.as_str()).wrap_err_with(|| format!("TO='{to}'"))?;
        }
        if let Some(data) = lookup("DATA") {
            config.call.data = data.parse::<Hex>().wrap_err("DATA")?;
        }
        if let Some(block) = lookup("BLOCK") {
            config.block = block.parse::<BlockTag>().wrap_err("BLOCK")?;
        }
        Ok(config)
    }
}
