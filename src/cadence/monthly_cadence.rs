use std::fmt::{Display, Formatter};

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::cadence::interface::{one, Cadence, InvalidCadence};

/// Occurs on `day_of_month` every `every_months` months.
///
/// Months shorter than `day_of_month` hold their occurrence on their last
/// day. When `start_date` is set, the `every_months` phase is counted from
/// its month and nothing occurs before it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyCadence {
    pub day_of_month: u32,
    #[serde(default = "one")]
    pub every_months: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
}

type MonthIndex = i64;

fn month_index(date: &NaiveDate) -> MonthIndex {
    date.year() as i64 * 12 + date.month0() as i64
}

fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        4 | 6 | 9 | 11 => 30,
        2 if NaiveDate::from_ymd_opt(year, 2, 29).is_some() => 29,
        2 => 28,
        _ => 31,
    }
}

impl MonthlyCadence {
    fn occurrence_in_month(&self, index: MonthIndex) -> Option<NaiveDate> {
        let year = i32::try_from(index.div_euclid(12)).ok()?;
        let month = index.rem_euclid(12) as u32 + 1;
        let day = self.day_of_month.min(days_in_month(year, month));
        NaiveDate::from_ymd_opt(year, month, day)
    }
}

impl Cadence for MonthlyCadence {
    fn validate(&self) -> Result<(), InvalidCadence> {
        if !(1..=31).contains(&self.day_of_month) {
            return Err(InvalidCadence(format!(
                "Day of month must be between 1 and 31, got {}",
                self.day_of_month
            )));
        }
        if self.every_months == 0 {
            return Err(InvalidCadence("Every months must be at least 1".to_string()));
        }
        Ok(())
    }

    fn occurrence_on_or_before(&self, date: &NaiveDate) -> Option<NaiveDate> {
        let every = self.every_months as MonthIndex;
        let phase = self.start_date.as_ref().map(month_index).unwrap_or(0);

        let mut index = month_index(date);
        index -= (index - phase).rem_euclid(every);

        let mut occurrence = self.occurrence_in_month(index)?;
        if occurrence > *date {
            // The cursor is earlier in its month than the occurrence day
            occurrence = self.occurrence_in_month(index - every)?;
        }

        match self.start_date {
            Some(start_date) if occurrence < start_date => None,
            _ => Some(occurrence),
        }
    }
}

impl Display for MonthlyCadence {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.every_months == 1 {
            write!(f, "Monthly on day {}", self.day_of_month)
        } else {
            write!(
                f,
                "Every {} months on day {}",
                self.every_months, self.day_of_month
            )
        }
    }
}
