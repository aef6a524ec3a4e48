use std::path::PathBuf;

use chrono::{NaiveDate, Weekday};
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;

use crate::amounts::Amount;
use crate::cadence::{AnyCadence, Cadence, FixedLengthCadence, MonthlyCadence, WeeklyCadence};

const CADENCE_FORMAT: &str = "Format is monthly:DAY[:EVERY:START], weekly:WEEKDAY[:EVERY:START], daily:START or every:DAYS:START, eg. monthly:15 or every:14:2024-01-05";

pub fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| format!("Could not decode date {}: Format is YYYY-MM-DD, eg. 2024-05-20", s))
}

fn parse_page_size(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(size) if size > 0 => Ok(size),
        _ => Err(format!("Could not decode page size {}: expected a positive integer", s)),
    }
}

fn parse_amount(s: &str) -> Result<Amount, String> {
    let figure: Option<(&str, Decimal)> = (|| {
        let splitted_string = s.split(':').collect::<Vec<&str>>();
        if splitted_string.len() != 2 {
            return None;
        }
        let figure = Decimal::from_str_exact(splitted_string[1]).ok()?;
        Some((splitted_string[0], figure))
    })();

    let (currency, figure) = figure.ok_or(format!(
        "Could not decode amount {}: Format is {{CURRENCY_NAME}}:{{FIGURE}}, eg. EUR:12.50",
        s
    ))?;
    Amount::new(currency, figure)
}

fn parse_number(s: &str, rule: &str) -> Result<u32, String> {
    s.parse::<u32>()
        .map_err(|_| format!("Could not decode cadence {}: {} is not a number", rule, s))
}

pub fn parse_cadence(s: &str) -> Result<AnyCadence, String> {
    let parts = s.split(':').collect::<Vec<&str>>();
    let cadence = match parts.as_slice() {
        ["monthly", day] => AnyCadence::Monthly(MonthlyCadence {
            day_of_month: parse_number(day, s)?,
            every_months: 1,
            start_date: None,
        }),
        ["monthly", day, every, start] => AnyCadence::Monthly(MonthlyCadence {
            day_of_month: parse_number(day, s)?,
            every_months: parse_number(every, s)?,
            start_date: Some(parse_date(start)?),
        }),
        ["weekly", weekday] => AnyCadence::Weekly(WeeklyCadence {
            weekday: parse_weekday(weekday, s)?,
            every_weeks: 1,
            start_date: None,
        }),
        ["weekly", weekday, every, start] => AnyCadence::Weekly(WeeklyCadence {
            weekday: parse_weekday(weekday, s)?,
            every_weeks: parse_number(every, s)?,
            start_date: Some(parse_date(start)?),
        }),
        ["daily", start] => AnyCadence::FixedLength(FixedLengthCadence {
            start_date: parse_date(start)?,
            every_days: 1,
        }),
        ["every", days, start] => AnyCadence::FixedLength(FixedLengthCadence {
            start_date: parse_date(start)?,
            every_days: parse_number(days, s)?,
        }),
        _ => return Err(format!("Could not decode cadence {}: {}", s, CADENCE_FORMAT)),
    };

    cadence
        .validate()
        .map_err(|why| format!("Invalid cadence {}: {}", s, why))?;
    Ok(cadence)
}

fn parse_weekday(s: &str, rule: &str) -> Result<Weekday, String> {
    s.parse::<Weekday>()
        .map_err(|_| format!("Could not decode cadence {}: {} is not a weekday", rule, s))
}

#[derive(Parser)]
#[command(name = "fin", about = "Payments of your recurring payments, latest first")]
pub struct FinOptions {
    /// Directory holding config.json and fin.json, defaults to the current directory
    #[arg(short = 'V', long, global = true)]
    pub vault: Option<PathBuf>,

    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: FinCommand,
}

#[derive(Subcommand)]
pub enum FinCommand {
    /// Recurring payments and the latest payments
    Overview {
        /// Only list recurring payments whose name contains this
        #[arg(short = 'q', long)]
        query: Option<String>,

        /// Date to list payments from, defaults to today
        #[arg(short = 'a', long, value_parser = parse_date)]
        anchor: Option<NaiveDate>,
    },
    /// Latest payments across recurring payments
    Payments {
        #[arg(short = 's', long, value_parser = parse_page_size)]
        size: Option<usize>,

        /// Only list payments whose recurring payment name contains this
        #[arg(short = 'q', long)]
        query: Option<String>,

        #[arg(short = 'a', long, value_parser = parse_date)]
        anchor: Option<NaiveDate>,
    },
    /// One recurring payment and its latest payments
    Show {
        id: String,

        /// Date to list payments from, defaults to today
        #[arg(long, short_alias = 'a', visible_alias = "anchor", value_parser = parse_date)]
        since: Option<NaiveDate>,
    },
    /// Add a recurring payment
    Create {
        #[arg(short = 'n', long)]
        name: String,

        #[arg(short = 'c', long, value_parser = parse_cadence)]
        cadence: AnyCadence,

        #[arg(short = 'm', long, value_parser = parse_amount)]
        amount: Amount,

        #[arg(long)]
        debt: bool,

        #[arg(long)]
        disabled: bool,
    },
}

#[allow(non_snake_case)]
#[cfg(test)]
mod tests {
    use super::{parse_amount, parse_cadence, parse_date, FinCommand, FinOptions};
    use crate::amounts::Amount;
    use crate::cadence::{AnyCadence, FixedLengthCadence, MonthlyCadence, WeeklyCadence};
    use chrono::{NaiveDate, Weekday};
    use clap::{CommandFactory, Parser};
    use pretty_assertions::assert_eq;

    fn date(month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, month, day).unwrap()
    }

    #[test]
    fn options__well_formed() {
        FinOptions::command().debug_assert()
    }

    #[test]
    fn parse_cadence__monthly() {
        assert_eq!(
            parse_cadence("monthly:15").unwrap(),
            AnyCadence::Monthly(MonthlyCadence {
                day_of_month: 15,
                every_months: 1,
                start_date: None
            })
        )
    }

    #[test]
    fn parse_cadence__monthly_every_months() {
        assert_eq!(
            parse_cadence("monthly:31:3:2024-01-31").unwrap(),
            AnyCadence::Monthly(MonthlyCadence {
                day_of_month: 31,
                every_months: 3,
                start_date: Some(date(1, 31))
            })
        )
    }

    #[test]
    fn parse_cadence__weekly() {
        assert_eq!(
            parse_cadence("weekly:fri:2:2024-04-03").unwrap(),
            AnyCadence::Weekly(WeeklyCadence {
                weekday: Weekday::Fri,
                every_weeks: 2,
                start_date: Some(date(4, 3))
            })
        )
    }

    #[test]
    fn parse_cadence__daily_and_every() {
        assert_eq!(
            parse_cadence("daily:2024-04-03").unwrap(),
            AnyCadence::FixedLength(FixedLengthCadence {
                start_date: date(4, 3),
                every_days: 1
            })
        );
        assert_eq!(
            parse_cadence("every:14:2024-04-03").unwrap(),
            AnyCadence::FixedLength(FixedLengthCadence {
                start_date: date(4, 3),
                every_days: 14
            })
        )
    }

    #[test]
    fn parse_cadence__invalid_rule() {
        assert_eq!(
            parse_cadence("monthly:32").unwrap_err(),
            "Invalid cadence monthly:32: Day of month must be between 1 and 31, got 32"
        )
    }

    #[test]
    fn parse_cadence__unknown_rule() {
        assert!(parse_cadence("yearly:3")
            .unwrap_err()
            .starts_with("Could not decode cadence yearly:3: Format is"))
    }

    #[test]
    fn parse_cadence__not_a_weekday() {
        assert_eq!(
            parse_cadence("weekly:someday").unwrap_err(),
            "Could not decode cadence weekly:someday: someday is not a weekday"
        )
    }

    #[test]
    fn parse_amount__nominal() {
        assert_eq!(parse_amount("EUR:12.50").unwrap(), Amount::euro("12.50"))
    }

    #[test]
    fn parse_amount__missing_currency() {
        assert_eq!(
            parse_amount("12.50").unwrap_err(),
            "Could not decode amount 12.50: Format is {CURRENCY_NAME}:{FIGURE}, eg. EUR:12.50"
        )
    }

    #[test]
    fn parse_date__malformed() {
        assert_eq!(
            parse_date("20/05/2024").unwrap_err(),
            "Could not decode date 20/05/2024: Format is YYYY-MM-DD, eg. 2024-05-20"
        )
    }

    #[test]
    fn options__payments() {
        let options =
            FinOptions::try_parse_from(["fin", "-V", "/tmp/vault", "payments", "-s", "20", "-q", "rent"])
                .unwrap();
        let FinCommand::Payments { size, query, anchor } = options.command else {
            panic!("Expected the payments command")
        };
        assert_eq!(size, Some(20));
        assert_eq!(query.as_deref(), Some("rent"));
        assert_eq!(anchor, None);
        assert_eq!(options.vault, Some("/tmp/vault".into()))
    }

    #[test]
    fn options__payments__zero_size_rejected() {
        assert!(FinOptions::try_parse_from(["fin", "payments", "--size", "0"]).is_err())
    }

    #[test]
    fn options__show__malformed_since_rejected() {
        assert!(FinOptions::try_parse_from(["fin", "show", "a", "--since", "yesterday"]).is_err())
    }

    #[test]
    fn options__show__anchor_is_since() {
        for flag in ["--since", "--anchor", "-a"] {
            let options =
                FinOptions::try_parse_from(["fin", "show", "a", flag, "2024-01-31"]).unwrap();
            let FinCommand::Show { id, since } = options.command else {
                panic!("Expected the show command")
            };
            assert_eq!(id, "a");
            assert_eq!(since, Some(date(1, 31)))
        }
    }
}
