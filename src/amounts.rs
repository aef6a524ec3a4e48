use std::fmt::{Display, Formatter};

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

pub type Figure = Decimal;
pub type CurrencyIdent = String;

fn sign_for(currency: &CurrencyIdent) -> Option<&'static str> {
    match currency.as_str() {
        "EUR" => Some("€"),
        "JPY" => Some("¥"),
        "GBP" => Some("£"),
        "USD" => Some("$"),
        _ => None,
    }
}

/// Amount of one occurrence of a recurring payment, as stored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Amount {
    pub currency: CurrencyIdent,
    pub figure: Figure,
}

impl Amount {
    pub fn new(currency: &str, figure: Figure) -> Result<Amount, String> {
        if sign_for(&currency.to_string()).is_none() {
            return Err(format!(
                "Unsupported currency: {}. We support only EUR, JPY, GBP and USD for now.",
                currency
            ));
        }
        Ok(Amount {
            currency: currency.to_string(),
            figure: figure.round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven),
        })
    }
}

impl Display for Amount {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match sign_for(&self.currency) {
            Some(sign) => write!(f, "{}{}", sign, self.figure),
            None => write!(f, "{} {}", self.figure, self.currency),
        }
    }
}

#[cfg(test)]
impl Amount {
    pub fn euro(figure: &str) -> Amount {
        Amount::new(
            "EUR",
            Decimal::from_str_exact(figure).expect("can build a decimal from passed string"),
        )
        .expect("Can create an amount")
    }
}
