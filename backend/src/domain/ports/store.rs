//! Shared error type for entity store adapters.
//!
//! Every repository port returns `StoreError` so the workflow services can
//! map persistence failures to user-facing errors in one place. Missing
//! rows are modelled as `Option`/`bool` results, not errors, because
//! absence is an expected outcome for lookups and idempotent deletes.

use std::future::Future;
use std::time::Duration;

use crate::domain::Error;

/// Persistence errors raised by entity store adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// Store connection could not be established.
    #[error("entity store connection failed: {message}")]
    Connection {
        /// Underlying failure description.
        message: String,
    },

    /// Query or mutation failed during execution.
    #[error("entity store query failed: {message}")]
    Query {
        /// Underlying failure description.
        message: String,
    },

    /// A uniqueness or referential constraint rejected the mutation.
    #[error("entity store rejected a conflicting mutation: {message}")]
    Conflict {
        /// Underlying failure description.
        message: String,
    },
}

impl StoreError {
    /// Create a connection error with the given message.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Create a query error with the given message.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }

    /// Create a conflict error with the given message.
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }
}

/// Map store failures to HTTP-safe domain errors.
///
/// Connection loss surfaces as `503` so clients retry; query failures stay
/// internal (and get redacted at the boundary); constraint conflicts keep
/// their message since they describe the caller's own collision.
#[must_use]
pub fn map_store_error(error: StoreError) -> Error {
    match error {
        StoreError::Connection { message } => Error::service_unavailable(message),
        StoreError::Query { message } => Error::internal(message),
        StoreError::Conflict { message } => Error::conflict(message),
    }
}

/// Upper bound on a single store call issued by a workflow service.
///
/// No operation in the store contract defines its own timeout, so a hung
/// network call would otherwise hang the triggering UI affordance
/// indefinitely. The bound keeps the worst case visible and retryable.
pub const STORE_CALL_TIMEOUT: Duration = Duration::from_secs(5);

/// Await a store future under [`STORE_CALL_TIMEOUT`], mapping failures to
/// HTTP-safe domain errors.
pub async fn store_call<T, F>(fut: F) -> Result<T, Error>
where
    F: Future<Output = Result<T, StoreError>>,
{
    match tokio::time::timeout(STORE_CALL_TIMEOUT, fut).await {
        Ok(result) => result.map_err(map_store_error),
        Err(_) => Err(Error::service_unavailable("entity store call timed out")),
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use crate::domain::ErrorCode;
    use rstest::rstest;

    #[rstest]
    #[case(StoreError::connection("refused"), ErrorCode::ServiceUnavailable)]
    #[case(StoreError::query("syntax"), ErrorCode::InternalError)]
    #[case(StoreError::conflict("duplicate email"), ErrorCode::Conflict)]
    fn store_errors_map_to_stable_codes(#[case] input: StoreError, #[case] expected: ErrorCode) {
        assert_eq!(map_store_error(input).code(), expected);
    }

    #[rstest]
    fn constructor_messages_survive_display() {
        let err = StoreError::query("relation does not exist");
        assert!(err.to_string().contains("relation does not exist"));
    }

    #[tokio::test]
    async fn store_call_passes_through_success() {
        let value = store_call(async { Ok::<_, StoreError>(7) })
            .await
            .expect("value passes through");
        assert_eq!(value, 7);
    }

    #[tokio::test(start_paused = true)]
    async fn store_call_times_out_hung_futures() {
        let err = store_call(async {
            tokio::time::sleep(STORE_CALL_TIMEOUT * 2).await;
            Ok::<_, StoreError>(())
        })
        .await
        .expect_err("hung call must time out");
        assert_eq!(err.code(), ErrorCode::ServiceUnavailable);
    }
}
