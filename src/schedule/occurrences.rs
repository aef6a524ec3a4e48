use chrono::NaiveDate;

use crate::cadence::Cadence;
use crate::recurring_payment::RecurringPayment;
use crate::schedule::ScheduleError;

/// Dates of one cadence, latest first, none after the anchor.
pub struct Occurrences<'a> {
    cadence: &'a dyn Cadence,
    cursor: Option<NaiveDate>,
}

impl<'a> Occurrences<'a> {
    pub fn new(cadence: &'a dyn Cadence, anchor: NaiveDate) -> Occurrences<'a> {
        Occurrences {
            cadence,
            cursor: Some(anchor),
        }
    }

    fn empty(cadence: &'a dyn Cadence) -> Occurrences<'a> {
        Occurrences {
            cadence,
            cursor: None,
        }
    }
}

impl Iterator for Occurrences<'_> {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<NaiveDate> {
        let cursor = self.cursor?;
        match self.cadence.occurrence_on_or_before(&cursor) {
            Some(occurrence) => {
                // Next occurrence must be strictly earlier
                self.cursor = occurrence.pred_opt();
                Some(occurrence)
            }
            None => {
                self.cursor = None;
                None
            }
        }
    }
}

/// Occurrence dates of `recurring_payment` on or before `anchor`.
///
/// A disabled recurring payment yields nothing and its cadence is not
/// validated.
pub fn occurrences(
    recurring_payment: &RecurringPayment,
    anchor: NaiveDate,
) -> Result<Occurrences<'_>, ScheduleError> {
    if !recurring_payment.enabled {
        return Ok(Occurrences::empty(&recurring_payment.cadence));
    }
    recurring_payment
        .cadence
        .validate()
        .map_err(|source| ScheduleError::InvalidCadence {
            id: recurring_payment.id.clone(),
            source,
        })?;
    Ok(Occurrences::new(&recurring_payment.cadence, anchor))
}
