pub mod call;
pub mod common;
pub mod config;
pub mod eth;
pub mod report;
pub mod revert;

use crate::{
    call::{BlockTag, CallRequest},
    eth::EthClient,
    report::Outcome,
};

/// Issues one `eth_call` and folds every failure into [`Outcome::Failed`].
pub async fn run(eth: &EthClient, call: &CallRequest, block: &BlockTag) -> Outcome {
    let result = eth.call(call, block).await;
    #[cfg(feature = "tracing")]
    if let Err(error) = &result {
        tracing::debug!(url = eth.url(), error = %error, "Call failed");
    }
    result.into()
}
