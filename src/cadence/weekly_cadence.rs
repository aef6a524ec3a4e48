use std::fmt::{Display, Formatter};

use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::cadence::interface::{one, Cadence, InvalidCadence};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyCadence {
    pub weekday: Weekday,
    #[serde(default = "one")]
    pub every_weeks: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
}

fn days_from(from: Weekday, to: Weekday) -> u64 {
    ((to.num_days_from_monday() + 7 - from.num_days_from_monday()) % 7) as u64
}

impl WeeklyCadence {
    // First occurrence on or after the start date, used as the phase reference
    fn first_occurrence(&self) -> Option<NaiveDate> {
        let start_date = self.start_date?;
        start_date.checked_add_days(Days::new(days_from(start_date.weekday(), self.weekday)))
    }
}

impl Cadence for WeeklyCadence {
    fn validate(&self) -> Result<(), InvalidCadence> {
        if self.every_weeks == 0 {
            return Err(InvalidCadence("Every weeks must be at least 1".to_string()));
        }
        if self.every_weeks > 1 && self.start_date.is_none() {
            return Err(InvalidCadence(format!(
                "A start date is required to repeat every {} weeks",
                self.every_weeks
            )));
        }
        Ok(())
    }

    fn occurrence_on_or_before(&self, date: &NaiveDate) -> Option<NaiveDate> {
        let mut occurrence =
            date.checked_sub_days(Days::new(days_from(self.weekday, date.weekday())))?;

        let Some(first_occurrence) = self.first_occurrence() else {
            return Some(occurrence);
        };

        let weeks_since_first = (occurrence - first_occurrence).num_days().div_euclid(7);
        let weeks_off_phase = weeks_since_first.rem_euclid(self.every_weeks as i64) as u64;
        occurrence = occurrence.checked_sub_days(Days::new(weeks_off_phase * 7))?;

        if occurrence < first_occurrence {
            return None;
        }
        Some(occurrence)
    }
}

impl Display for WeeklyCadence {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.every_weeks == 1 {
            write!(f, "Weekly on {}", self.weekday)
        } else {
            write!(f, "Every {} weeks on {}", self.every_weeks, self.weekday)
        }
    }
}
