use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use chrono::NaiveDate;
use tracing::debug;

use crate::recurring_payment::{Payment, RecurringPayment};
use crate::schedule::{occurrences, Occurrences};
use crate::schedule::ScheduleError;

// Next occurrence of one source, along with the rest of its sequence
struct Candidate<'a> {
    date: NaiveDate,
    position: usize,
    recurring_payment: &'a RecurringPayment,
    rest: Occurrences<'a>,
}

impl Candidate<'_> {
    // Latest date first, then lowest id, then input order
    fn key(&self) -> (NaiveDate, Reverse<&str>, Reverse<usize>) {
        (
            self.date,
            Reverse(self.recurring_payment.id.as_str()),
            Reverse(self.position),
        )
    }
}

impl PartialEq for Candidate<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Candidate<'_> {}

impl PartialOrd for Candidate<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Candidate<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

/// Payments of several recurring payments, latest first.
///
/// Holds at most one pending occurrence per enabled recurring payment.
/// Each call to `next` pops the latest pending occurrence and advances only
/// the sequence it came from.
pub struct Schedule<'a> {
    pending: BinaryHeap<Candidate<'a>>,
}

impl<'a> Schedule<'a> {
    /// Fails if any enabled recurring payment has an invalid cadence.
    pub fn new(
        recurring_payments: &'a [RecurringPayment],
        anchor: NaiveDate,
    ) -> Result<Schedule<'a>, ScheduleError> {
        let mut pending = BinaryHeap::with_capacity(recurring_payments.len());
        for (position, recurring_payment) in recurring_payments.iter().enumerate() {
            let mut rest = occurrences(recurring_payment, anchor)?;
            if let Some(date) = rest.next() {
                pending.push(Candidate {
                    date,
                    position,
                    recurring_payment,
                    rest,
                });
            }
        }
        debug!(
            sources = pending.len(),
            recurring_payments = recurring_payments.len(),
            %anchor,
            "schedule seeded"
        );
        Ok(Schedule { pending })
    }
}

impl<'a> Iterator for Schedule<'a> {
    type Item = Payment<'a>;

    fn next(&mut self) -> Option<Payment<'a>> {
        let mut candidate = self.pending.pop()?;
        let payment = Payment {
            date: candidate.date,
            recurring_payment: candidate.recurring_payment,
        };
        if let Some(date) = candidate.rest.next() {
            candidate.date = date;
            self.pending.push(candidate);
        }
        Some(payment)
    }
}
