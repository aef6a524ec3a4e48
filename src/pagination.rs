//! "Load more" policies.
//!
//! Both policies fetch one payment more than they show: the extra payment
//! only tells whether there is something after the page.

use chrono::NaiveDate;

use crate::recurring_payment::Payment;

#[derive(Debug, PartialEq, Eq)]
pub struct Page<'a, C> {
    pub payments: Vec<Payment<'a>>,
    pub next: Option<C>,
}

/// How many payments to fetch to show a page of `page_size`.
pub fn fetch_size(page_size: usize) -> usize {
    page_size.saturating_add(1)
}

/// Page of `page_size` payments whose cursor is the size of the next page.
///
/// `payments` must come from a fetch of `fetch_size(page_size)`.
pub fn by_size(mut payments: Vec<Payment>, page_size: usize, step: usize) -> Page<usize> {
    if payments.len() == fetch_size(page_size) {
        payments.truncate(page_size);
        Page {
            payments,
            next: Some(page_size.saturating_add(step)),
        }
    } else {
        Page {
            payments,
            next: None,
        }
    }
}

/// Page of `page_size` payments whose cursor is the date the next page
/// starts from.
///
/// The first payment left out becomes the first payment of the next page.
/// Only exact for a single recurring payment, whose dates never tie.
pub fn by_since(mut payments: Vec<Payment>, page_size: usize) -> Page<NaiveDate> {
    if payments.len() == fetch_size(page_size) {
        let next = payments[page_size].date;
        payments.truncate(page_size);
        Page {
            payments,
            next: Some(next),
        }
    } else {
        Page {
            payments,
            next: None,
        }
    }
}
