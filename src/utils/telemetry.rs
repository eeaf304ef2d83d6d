//! Submission counters
//!
//! In-process tallies of contact outcomes, logged at shutdown. Nothing about
//! the visitor (name, address, message) is kept.

use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::models::types::DeliveryOutcome;

/// Snapshot of the counters
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct SubmissionStats {
    pub received: u64,
    pub invalid: u64,
    pub delivered: u64,
    pub rejected: u64,
    pub failed: u64,
    pub avg_latency_ms: u64,
}

#[derive(Debug, Default)]
pub struct SubmissionCounters {
    received: AtomicU64,
    invalid: AtomicU64,
    delivered: AtomicU64,
    rejected: AtomicU64,
    failed: AtomicU64,
    /// Summed over delivery attempts only
    total_latency_ms: AtomicU64,
}

impl SubmissionCounters {
    pub fn new() -> Self {
        Self::default()
    }

    /// A contact request arrived
    pub fn record_received(&self) {
        self.received.fetch_add(1, Ordering::Relaxed);
    }

    /// The request failed validation or could not be parsed
    pub fn record_invalid(&self) {
        self.invalid.fetch_add(1, Ordering::Relaxed);
    }

    /// A delivery attempt finished
    pub fn record_outcome(&self, outcome: &DeliveryOutcome, latency_ms: u64) {
        let counter = match outcome {
            DeliveryOutcome::Delivered { .. } => &self.delivered,
            DeliveryOutcome::RejectedByRemote { .. } => &self.rejected,
            DeliveryOutcome::TransportFailure { .. } => &self.failed,
        };
        counter.fetch_add(1, Ordering::Relaxed);
        self.total_latency_ms.fetch_add(latency_ms, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> SubmissionStats {
        let delivered = self.delivered.load(Ordering::Relaxed);
        let rejected = self.rejected.load(Ordering::Relaxed);
        let failed = self.failed.load(Ordering::Relaxed);
        let attempts = delivered + rejected + failed;

        SubmissionStats {
            received: self.received.load(Ordering::Relaxed),
            invalid: self.invalid.load(Ordering::Relaxed),
            delivered,
            rejected,
            failed,
            avg_latency_ms: if attempts > 0 {
                self.total_latency_ms.load(Ordering::Relaxed) / attempts
            } else {
                0
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_by_outcome() {
        let counters = SubmissionCounters::new();
        for _ in 0..4 {
            counters.record_received();
        }
        counters.record_invalid();
        counters.record_outcome(&DeliveryOutcome::Delivered { id: None }, 100);
        counters.record_outcome(
            &DeliveryOutcome::RejectedByRemote {
                reason: "nope".to_string(),
            },
            50,
        );
        counters.record_outcome(
            &DeliveryOutcome::TransportFailure {
                detail: "down".to_string(),
            },
            30,
        );

        let stats = counters.snapshot();
        assert_eq!(stats.received, 4);
        assert_eq!(stats.invalid, 1);
        assert_eq!(stats.delivered, 1);
        assert_eq!(stats.rejected, 1);
        assert_eq!(stats.failed, 1);
        assert_eq!(stats.avg_latency_ms, 60);
    }

    #[test]
    fn test_empty_snapshot() {
        assert_eq!(SubmissionCounters::new().snapshot(), SubmissionStats::default());
    }
}
