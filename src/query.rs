use crate::recurring_payment::{Payment, RecurringPayment};

/// Case-insensitive substring filter on recurring payment names.
///
/// An absent or empty query matches everything.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NameQuery {
    lowercase: Option<String>,
}

impl NameQuery {
    pub fn new(raw: Option<&str>) -> NameQuery {
        NameQuery {
            lowercase: raw
                .filter(|raw| !raw.is_empty())
                .map(|raw| raw.to_lowercase()),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        self.lowercase.as_deref()
    }

    pub fn matches(&self, recurring_payment: &RecurringPayment) -> bool {
        match &self.lowercase {
            None => true,
            Some(query) => recurring_payment.name.to_lowercase().contains(query),
        }
    }

    pub fn matches_payment(&self, payment: &Payment) -> bool {
        self.matches(payment.recurring_payment)
    }
}
