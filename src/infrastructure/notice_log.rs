use crate::application::ports::NoticeSink;
use crate::domain::entities::FailureNotice;
use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::warn;

/// In-memory failure-notice log. The view polls and drains it; every
/// recorded notice is also mirrored to the log output.
#[derive(Default)]
pub struct NoticeLog {
    notices: RwLock<Vec<FailureNotice>>,
}

impl NoticeLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn list(&self) -> Vec<FailureNotice> {
        self.notices.read().await.clone()
    }
}

#[async_trait]
impl NoticeSink for NoticeLog {
    async fn record(&self, notice: FailureNotice) {
        warn!("inventory failure notice: {}", notice.message);
        self.notices.write().await.push(notice);
    }

    async fn drain(&self) -> Vec<FailureNotice> {
        std::mem::take(&mut *self.notices.write().await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn drain_empties_the_log_in_order() {
        let log = NoticeLog::new();
        log.record(FailureNotice::new("first")).await;
        log.record(FailureNotice::new("second")).await;

        assert_eq!(log.list().await.len(), 2);

        let drained = log.drain().await;
        assert_eq!(drained.len(), 2);
        assert_eq!(drained[0].message, "first");
        assert_eq!(drained[1].message, "second");
        assert!(log.list().await.is_empty());
    }
}
