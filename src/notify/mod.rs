pub mod channel;

use serde::{Deserialize, Serialize};

pub const DEFAULT_CHANNEL: &str = "ai-news";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShareStatus {
    Success,
    Error,
}

/// Outcome of a share call: a status plus a human-readable confirmation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShareReceipt {
    pub status: ShareStatus,
    pub message: String,
}

impl ShareReceipt {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            status: ShareStatus::Success,
            message: message.into(),
        }
    }
}
