use std::fmt;

use super::Reporter;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CaloriesReport {
    /// Up to this many kcal may still be eaten today.
    Allowed(f64),
    Stop,
}

impl fmt::Display for CaloriesReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaloriesReport::Allowed(balance) => write!(
                f,
                "Сегодня можно съесть что-нибудь ещё, но с общей калорийностью не более {balance} кКал"
            ),
            CaloriesReport::Stop => write!(f, "Хватит есть!"),
        }
    }
}

/// Reports the remaining calorie allowance.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CaloriesReporter;

impl Reporter for CaloriesReporter {
    type Report = CaloriesReport;

    fn report(&self, balance: f64) -> CaloriesReport {
        if balance > 0.0 {
            CaloriesReport::Allowed(balance)
        } else {
            CaloriesReport::Stop
        }
    }
}
