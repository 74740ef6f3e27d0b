use crate::{
    eth::EthError,
    revert::{self, Revert},
};

/// Terminal state of a single call, ready to be printed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Returned(String),
    Failed {
        message: String,
        reason: Option<Revert>,
    },
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Returned(_))
    }
}

impl From<eyre::Result<String>> for Outcome {
    fn from(result: eyre::Result<String>) -> Self {
        match result {
            Ok(value) => Outcome::Returned(value),
            Err(report) => report.into(),
        }
    }
}

impl From<eyre::Report> for Outcome {
    fn from(report: eyre::Report) -> Self {
        let reason = report
            .downcast_ref::<EthError>()
            .and_then(EthError::revert_data)
            .map(|data| revert::decode(&data));
        Outcome::Failed {
            message: format!("{report:#}"),
            reason,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Returned(value) => f.write_str(value),
            Outcome::Failed { message, reason } => {
                write!(f, "Error: {message}")?;
                if let Some(reason) = reason {
                    write!(f, " (revert: {reason})")?;
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_returned_is_verbatim() {
        let outcome = Outcome::from(Ok::<_, eyre::Report>("0x00000000000000000000000000000000000000000000000000000000000000FF".to_string()));
        assert!(outcome.is_success());
        assert_eq!(
            outcome.to_string(),
            "0x00000000000000000000000000000000000000000000000000000000000000FF"
        );
    }

    #[test]
    fn test_failed_has_prefix() {
        let outcome = Outcome::from(eyre::eyre!("connection refused"));
        assert!(!outcome.is_success());
        assert_eq!(outcome.to_string(), "Error: connection refused");
    }

    #[test]
    fn test_failed_with_revert_reason() {
        let err = EthError::Rpc {
            code: 3,
            message: "execution reverted".to_string(),
            data: Some(json!(
                "0x4e487b710000000000000000000000000000000000000000000000000000000000000001"
            )),
        };
        let outcome = Outcome::from(eyre::Report::new(err));
        assert_eq!(
            outcome.to_string(),
            "Error: RPC error 3: execution reverted (revert: Panic(0x1: assertion failed))"
        );
    }

    #[test]
    fn test_failed_without_revert_data() {
        let outcome = Outcome::from(eyre::Report::new(EthError::Http(503)));
        assert_eq!(
            outcome,
            Outcome::Failed {
                message: "HTTP status 503".to_string(),
                reason: None,
            }
        );
    }
}
