//! Read-only view of a cooperative cancellation token.

use tokio_util::sync::CancellationToken;

/// A query-only handle to an externally owned [`CancellationToken`].
///
/// Iterators only ever ask whether the token has been cancelled; settling it
/// is the job of whoever created the token. Cancellation is monotonic, so once
/// [`Signal::is_cancelled`] returns `true` it keeps returning `true`.
#[derive(Debug, Clone)]
pub struct Signal {
    token: CancellationToken,
}

impl Signal {
    /// Returns `true` once the underlying token has been cancelled.
    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }
}

impl From<CancellationToken> for Signal {
    fn from(token: CancellationToken) -> Self {
        Self { token }
    }
}

impl From<&CancellationToken> for Signal {
    fn from(token: &CancellationToken) -> Self {
        Self {
            token: token.clone(),
        }
    }
}
