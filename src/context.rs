//! Per-call cancellation and deadlines.
//!
//! Every client operation takes a [`CallContext`]. Cancelling its token or
//! letting its deadline pass makes the in-flight call return
//! [`AkerunError::Cancelled`] or [`AkerunError::DeadlineExceeded`]; the
//! pending request is dropped rather than awaited.

use std::future::Future;
use std::time::Duration;

use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

use crate::error::AkerunError;

/// Cancellation scope for one or more API calls.
///
/// Clones share the same cancellation token, so a context can be handed to
/// several concurrent calls and cancelled once.
#[derive(Debug, Clone)]
pub struct CallContext {
    cancel: CancellationToken,
    deadline: Option<Instant>,
}

impl Default for CallContext {
    fn default() -> Self {
        Self::new()
    }
}

impl CallContext {
    /// Creates a context that never cancels on its own.
    pub fn new() -> Self {
        CallContext {
            cancel: CancellationToken::new(),
            deadline: None,
        }
    }

    /// Creates a context driven by an existing cancellation token.
    pub fn with_cancellation(cancel: CancellationToken) -> Self {
        CallContext {
            cancel,
            deadline: None,
        }
    }

    /// Sets an absolute deadline.
    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Sets a deadline relative to now.
    pub fn with_timeout(self, timeout: Duration) -> Self {
        self.with_deadline(Instant::now() + timeout)
    }

    /// Returns the cancellation token.
    pub fn cancel_token(&self) -> &CancellationToken {
        &self.cancel
    }

    /// Returns the deadline, if any.
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Cancels every call running under this context.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// Returns true once the context has been cancelled.
    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }

    /// Drives `fut` to completion unless the context ends first.
    ///
    /// Cancellation wins ties with the deadline, and both win ties with a
    /// future that is ready at the same poll.
    pub(crate) async fn run<T, F>(&self, fut: F) -> Result<T, AkerunError>
    where
        F: Future<Output = Result<T, AkerunError>>,
    {
        if self.cancel.is_cancelled() {
            return Err(AkerunError::Cancelled);
        }
        if matches!(self.deadline, Some(deadline) if deadline <= Instant::now()) {
            return Err(AkerunError::DeadlineExceeded);
        }

        let deadline = async {
            match self.deadline {
                Some(deadline) => tokio::time::sleep_until(deadline).await,
                None => std::future::pending::<()>().await,
            }
        };

        tokio::select! {
            biased;
            _ = self.cancel.cancelled() => Err(AkerunError::Cancelled),
            _ = deadline => Err(AkerunError::DeadlineExceeded),
            result = fut => result,
        }
    }
}
