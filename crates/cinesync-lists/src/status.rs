use chrono::{Duration, Utc};
use cinesync_models::ListStatus;
use std::collections::HashMap;
use std::sync::Mutex;
use tracing::{debug, warn};

/// Health tracking consumed by the fetch aggregator: which providers are
/// temporarily blocked, and the success/failure feedback that drives it.
pub trait ListStatusService: Send + Sync {
    fn blocked_providers(&self) -> Vec<ListStatus>;
    fn record_success(&self, provider_id: i32);
    fn record_failure(&self, provider_id: i32);
}

/// Escalating block durations, indexed by consecutive failures (capped).
const ESCALATION_MINUTES: &[i64] = &[5, 15, 30, 60, 180, 360];

/// In-memory tracker. A provider is blocked after repeated failures, for
/// longer each time, and cleared again on the first success.
#[derive(Default)]
pub struct ListStatusTracker {
    statuses: Mutex<HashMap<i32, ListStatus>>,
}

impl ListStatusTracker {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ListStatusService for ListStatusTracker {
    fn blocked_providers(&self) -> Vec<ListStatus> {
        let now = Utc::now();
        self.statuses
            .lock()
            .expect("list status lock poisoned")
            .values()
            .filter(|status| status.is_blocked(now))
            .cloned()
            .collect()
    }

    fn record_success(&self, provider_id: i32) {
        let mut statuses = self.statuses.lock().expect("list status lock poisoned");
        if statuses.remove(&provider_id).is_some() {
            debug!(provider_id, "list recovered, clearing failure record");
        }
    }

    fn record_failure(&self, provider_id: i32) {
        let mut statuses = self.statuses.lock().expect("list status lock poisoned");
        let status = statuses
            .entry(provider_id)
            .or_insert_with(|| ListStatus::new(provider_id));

        status.consecutive_failures += 1;
        let step = (status.consecutive_failures as usize - 1).min(ESCALATION_MINUTES.len() - 1);
        let till = Utc::now() + Duration::minutes(ESCALATION_MINUTES[step]);
        status.disabled_till = Some(till);

        warn!(
            provider_id,
            failures = status.consecutive_failures,
            disabled_till = %till,
            "list failed, blocking it temporarily"
        );
    }
}
