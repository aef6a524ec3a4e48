//! Backward schedule of payments across recurring payments.
//!
//! Every entry point takes the anchor date explicitly and recomputes from
//! the recurring payment definitions. Nothing here performs I/O or keeps
//! state between calls.

mod merge;
mod occurrences;
mod retrieval;

use thiserror::Error;

use crate::cadence::InvalidCadence;
use crate::recurring_payment::RecurringPaymentId;

pub use merge::Schedule;
pub use occurrences::{occurrences, Occurrences};
pub use retrieval::{
    payments_since_n, payments_since_n_filter, payments_since_n_filter_scanning, Scanned,
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    #[error("Recurring payment '{id}' has an invalid cadence: {source}")]
    InvalidCadence {
        id: RecurringPaymentId,
        source: InvalidCadence,
    },
}
