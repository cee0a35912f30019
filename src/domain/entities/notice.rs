use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// User-visible failure notice recorded when a remote mutation fails.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FailureNotice {
    pub id: Uuid,
    pub message: String,
    pub occurred_at: DateTime<Utc>,
}

impl FailureNotice {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            message: message.into(),
            occurred_at: Utc::now(),
        }
    }
}
