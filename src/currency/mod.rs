use std::fmt;

use serde::{Deserialize, Serialize};

/// Roubles per US dollar.
pub const USD_RATE: f64 = 60.20;
/// Roubles per euro.
pub const EUR_RATE: f64 = 80.34;
/// Base unit; balances are already kept in roubles.
pub const RUB_RATE: f64 = 1.0;

/// Currencies a cash report can be expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Currency {
    Usd,
    Eur,
    Rub,
}

impl Currency {
    pub const ALL: [Currency; 3] = [Currency::Usd, Currency::Eur, Currency::Rub];

    /// Looks up a lowercase code (`usd`, `eur`, `rub`). Anything else is unrecognized.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|currency| currency.code() == code)
    }

    pub fn code(self) -> &'static str {
        match self {
            Currency::Usd => "usd",
            Currency::Eur => "eur",
            Currency::Rub => "rub",
        }
    }

    /// Name printed after the amount in cash reports.
    pub fn display_name(self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Eur => "Euro",
            Currency::Rub => "руб",
        }
    }

    /// How many base units one unit of this currency is worth.
    pub fn rate(self) -> f64 {
        match self {
            Currency::Usd => USD_RATE,
            Currency::Eur => EUR_RATE,
            Currency::Rub => RUB_RATE,
        }
    }

    /// Converts an amount in base units into this currency.
    pub fn convert(self, base_amount: f64) -> f64 {
        base_amount / self.rate()
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
