use serde_json::Value;
use thiserror::Error;
#[cfg(feature = "tracing")]
use tracing::Level;

use crate::call::{BlockTag, CallRequest};

#[derive(Error, Debug)]
pub enum EthError {
    #[error("HTTP status {0}")]
    Http(u16),
    #[error("RPC error {code}: {message}")]
    Rpc {
        code: i64,
        message: String,
        data: Option<Value>,
    },
    #[error("RPC response has no result")]
    MissingResult,
    #[error("eth_call result is not a string")]
    NotAString,
}

impl EthError {
    /// Revert payload attached to an RPC error, if the node sent one.
    ///
    /// Most nodes put the hex string directly under `data`, some nest it
    /// one level deeper as `data.data`.
    pub fn revert_data(&self) -> Option<Vec<u8>> {
        let EthError::Rpc {
            data: Some(data), ..
        } = self
        else {
            return None;
        };
        let hex = data
            .as_str()
            .or_else(|| data.get("data").and_then(Value::as_str))?;
        hex::decode(hex.trim_start_matches("0x")).ok()
    }
}

#[derive(Clone)]
pub struct EthClient {
    http: reqwest::Client,
    url: String,
}

impl EthClient {
    pub fn new(url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            url: url.to_string(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Simulates `call` against the state of `block`, returning the raw
    /// hex string the node answered with.
    pub async fn call(&self, call: &CallRequest, block: &BlockTag) -> eyre::Result<String> {
        #[cfg(feature = "tracing")]
        tracing::debug!(url = %self.url, to = %call.to, %block, "eth_call");

        let value = self
            .rpc(serde_json::json!({
                "jsonrpc": "2.0",
                "method": "eth_call",
                "params": [
                    call,
                    block
                ],
                "id": 0
            }))
            .await?;

        value
            .as_str()
            .map(ToString::to_string)
            .ok_or_else(|| eyre::Report::new(EthError::NotAString))
    }

    async fn rpc(&self, value: Value) -> eyre::Result<Value> {
        #[cfg(feature = "tracing")]
        if tracing::enabled!(Level::TRACE) {
            let json = serde_json::to_string_pretty(&value).unwrap_or_default();
            tracing::trace!(json, "HTTP request");
        }
        let res = self.http.post(&self.url).json(&value).send().await?;

        let status = res.status();
        if !status.is_success() {
            #[cfg(feature = "tracing")]
            tracing::error!(code = status.as_u16(), message = status.as_str(), "Ethereum call failed");
            return Err(EthError::Http(status.as_u16()).into());
        }

        let response: Value = res.json().await?;
        #[cfg(feature = "tracing")]
        if tracing::enabled!(Level::TRACE) {
            let json = serde_json::to_string_pretty(&response).unwrap_or_default();
            tracing::trace!(json, "HTTP response");
        }

        Ok(parse_response(response)?)
    }
}

/// Splits a JSON-RPC response envelope into its `result` or its `error`.
pub fn parse_response(mut response: Value) -> Result<Value, EthError> {
    if let Some(error) = response.get("error") {
        if let Some(error) = error.as_object() {
            let code = error.get("code").and_then(Value::as_i64).unwrap_or_default();
            let message = error
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string();
            let data = error.get("data").cloned();
            return Err(EthError::Rpc {
                code,
                message,
                data,
            });
        }
        if let Some(error) = error.as_str() {
            return Err(EthError::Rpc {
                code: 0,
                message: error.to_string(),
                data: None,
            });
        }
    }
    response
        .get_mut("result")
        .map(Value::take)
        .ok_or(EthError::MissingResult)
}
