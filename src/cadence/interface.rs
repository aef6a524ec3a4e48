use std::fmt::{Display, Formatter};

use chrono::NaiveDate;
#[cfg(test)]
use mockall::automock;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cadence::fixed_length_cadence::FixedLengthCadence;
use crate::cadence::monthly_cadence::MonthlyCadence;
use crate::cadence::weekly_cadence::WeeklyCadence;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct InvalidCadence(pub String);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AnyCadence {
    #[serde(rename = "monthly")]
    Monthly(MonthlyCadence),
    #[serde(rename = "weekly")]
    Weekly(WeeklyCadence),
    #[serde(rename = "fixed_length")]
    FixedLength(FixedLengthCadence),
}

impl AnyCadence {
    fn unpack(&self) -> &dyn Cadence {
        match self {
            AnyCadence::Monthly(c) => c,
            AnyCadence::Weekly(c) => c,
            AnyCadence::FixedLength(c) => c,
        }
    }
}

impl Cadence for AnyCadence {
    fn validate(&self) -> Result<(), InvalidCadence> {
        self.unpack().validate()
    }

    fn occurrence_on_or_before(&self, date: &NaiveDate) -> Option<NaiveDate> {
        self.unpack().occurrence_on_or_before(date)
    }
}

impl Display for AnyCadence {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            AnyCadence::Monthly(c) => Display::fmt(c, f),
            AnyCadence::Weekly(c) => Display::fmt(c, f),
            AnyCadence::FixedLength(c) => Display::fmt(c, f),
        }
    }
}

/// A periodicity rule, evaluated in closed form.
///
/// Implementations must answer `occurrence_on_or_before` without walking
/// from a fixed origin, so that stepping backward costs the same whatever
/// the distance to the reference date.
#[cfg_attr(test, automock)]
pub trait Cadence {
    fn validate(&self) -> Result<(), InvalidCadence>;

    /// Latest occurrence that is `<= date`.
    ///
    /// `None` when the cadence has no occurrence that early, either because
    /// `date` precedes the cadence start or because the calendar ran out.
    fn occurrence_on_or_before(&self, date: &NaiveDate) -> Option<NaiveDate>;
}

pub(super) fn one() -> u32 {
    1
}
