use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Per-provider health record kept by the list status tracker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListStatus {
    pub provider_id: i32,
    pub consecutive_failures: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disabled_till: Option<DateTime<Utc>>,
}

impl ListStatus {
    pub fn new(provider_id: i32) -> Self {
        Self {
            provider_id,
            consecutive_failures: 0,
            disabled_till: None,
        }
    }

    pub fn is_blocked(&self, now: DateTime<Utc>) -> bool {
        self.disabled_till.map(|till| till > now).unwrap_or(false)
    }
}
