use std::fmt::{Display, Formatter};

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::cadence::interface::{Cadence, InvalidCadence};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixedLengthCadence {
    pub start_date: NaiveDate,
    pub every_days: u32,
}

impl Cadence for FixedLengthCadence {
    fn validate(&self) -> Result<(), InvalidCadence> {
        if self.every_days == 0 {
            return Err(InvalidCadence("Every days must be at least 1".to_string()));
        }
        Ok(())
    }

    fn occurrence_on_or_before(&self, date: &NaiveDate) -> Option<NaiveDate> {
        if date < &self.start_date {
            return None;
        }
        let days_since_start = (*date - self.start_date).num_days() as u64;
        let periods_since_start = days_since_start / self.every_days as u64;
        self.start_date
            .checked_add_days(Days::new(periods_since_start * self.every_days as u64))
    }
}

impl Display for FixedLengthCadence {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.every_days {
            1 => write!(f, "Daily from {}", self.start_date),
            days => write!(f, "Every {} days from {}", days, self.start_date),
        }
    }
}
