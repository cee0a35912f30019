use crate::domain::entities::FailureNotice;
use async_trait::async_trait;

/// Store for user-visible failure notices. The core records; the
/// presentation layer drains and decides how to render.
#[async_trait]
pub trait NoticeSink: Send + Sync {
    async fn record(&self, notice: FailureNotice);

    /// Remove and return all notices recorded so far, oldest first.
    async fn drain(&self) -> Vec<FailureNotice>;
}
