use chrono::NaiveDate;
use tracing::debug;

use crate::recurring_payment::{Payment, RecurringPayment};
use crate::schedule::{Schedule, ScheduleError};

/// The latest `n` payments on or before `anchor`, fewer if the schedule
/// runs out.
pub fn payments_since_n(
    recurring_payments: &[RecurringPayment],
    anchor: NaiveDate,
    n: usize,
) -> Result<Vec<Payment<'_>>, ScheduleError> {
    Ok(Schedule::new(recurring_payments, anchor)?.take(n).collect())
}

/// The latest `n` payments on or before `anchor` accepted by `predicate`.
///
/// Keeps pulling from the schedule until `n` payments are accepted or the
/// schedule runs out. There is no bound on how many rejected payments are
/// examined: a predicate that rarely matches against open-ended cadences
/// walks back through a lot of calendar before giving up. Callers that need
/// a bound use `payments_since_n_filter_scanning`.
pub fn payments_since_n_filter<F>(
    recurring_payments: &[RecurringPayment],
    anchor: NaiveDate,
    n: usize,
    mut predicate: F,
) -> Result<Vec<Payment<'_>>, ScheduleError>
where
    F: FnMut(&Payment) -> bool,
{
    Ok(Schedule::new(recurring_payments, anchor)?
        .filter(|payment| predicate(payment))
        .take(n)
        .collect())
}

/// Payments found by `payments_since_n_filter_scanning`.
#[derive(Debug, PartialEq, Eq)]
pub struct Scanned<'a> {
    pub payments: Vec<Payment<'a>>,
    /// The scan limit stopped the search before `n` payments were accepted
    /// while the schedule still had payments to examine.
    pub limit_reached: bool,
}

/// Same as `payments_since_n_filter`, examining at most `scan_limit`
/// payments of the schedule.
pub fn payments_since_n_filter_scanning<F>(
    recurring_payments: &[RecurringPayment],
    anchor: NaiveDate,
    n: usize,
    scan_limit: usize,
    mut predicate: F,
) -> Result<Scanned<'_>, ScheduleError>
where
    F: FnMut(&Payment) -> bool,
{
    let mut schedule = Schedule::new(recurring_payments, anchor)?;
    let mut scanned = 0;
    let payments: Vec<Payment> = schedule
        .by_ref()
        .take(scan_limit)
        .inspect(|_| scanned += 1)
        .filter(|payment| predicate(payment))
        .take(n)
        .collect();

    let limit_reached = payments.len() < n && scanned == scan_limit && schedule.next().is_some();
    if limit_reached {
        debug!(scan_limit, found = payments.len(), n, "scan limit reached");
    }
    Ok(Scanned {
        payments,
        limit_reached,
    })
}
