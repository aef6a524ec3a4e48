mod fixed_length_cadence;
mod interface;
mod monthly_cadence;
mod weekly_cadence;

pub use fixed_length_cadence::FixedLengthCadence;
pub use interface::{AnyCadence, Cadence, InvalidCadence};
pub use monthly_cadence::MonthlyCadence;
pub use weekly_cadence::WeeklyCadence;

#[cfg(test)]
pub use interface::MockCadence;
