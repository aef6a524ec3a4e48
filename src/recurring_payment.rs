use chrono::NaiveDate;
use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use crate::amounts::Amount;
use crate::cadence::AnyCadence;
use crate::schedule::{payments_since_n, ScheduleError};

pub type RecurringPaymentId = String;

#[derive(Builder, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[builder(setter(into))]
pub struct RecurringPayment {
    pub id: RecurringPaymentId,
    pub name: String,
    #[builder(default = "true")]
    pub enabled: bool,
    #[builder(default)]
    pub debt: bool,
    pub cadence: AnyCadence,
    pub amount: Amount,
}

impl RecurringPayment {
    /// Latest `n` payments of this recurring payment on or before `since`.
    pub fn payments_since_n(
        &self,
        since: NaiveDate,
        n: usize,
    ) -> Result<Vec<Payment<'_>>, ScheduleError> {
        payments_since_n(std::slice::from_ref(self), since, n)
    }
}

/// One occurrence of a recurring payment.
#[derive(Debug, Clone, Copy)]
pub struct Payment<'a> {
    pub date: NaiveDate,
    pub recurring_payment: &'a RecurringPayment,
}

impl PartialEq for Payment<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.date == other.date && self.recurring_payment.id == other.recurring_payment.id
    }
}

impl Eq for Payment<'_> {}
