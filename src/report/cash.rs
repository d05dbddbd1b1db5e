use std::fmt;

use tracing::debug;

use crate::currency::Currency;

use super::Reporter;

/// Outcome of a cash report.
#[derive(Debug, Clone, PartialEq)]
pub enum CashReport {
    /// Balance is exactly zero, whatever currency was asked for.
    NoMoney,
    /// The requested code is not one of `usd`, `eur`, `rub`.
    UnknownCurrency(String),
    Remaining { amount: f64, currency: Currency },
    /// Over the limit; `amount` is the absolute debt.
    Debt { amount: f64, currency: Currency },
}

impl fmt::Display for CashReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CashReport::NoMoney => write!(f, "Денег нет, держись"),
            CashReport::UnknownCurrency(code) => write!(f, "Нет такой валюты - {code}!"),
            CashReport::Remaining { amount, currency } => {
                write!(f, "На сегодня осталось {amount:.2} {currency}")
            }
            CashReport::Debt { amount, currency } => {
                write!(f, "Денег нет, держись: твой долг - {amount:.2} {currency}")
            }
        }
    }
}

/// Reports the remaining cash balance in one currency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CashReporter {
    code: String,
}

impl CashReporter {
    pub fn new(code: impl Into<String>) -> Self {
        Self { code: code.into() }
    }

    pub fn code(&self) -> &str {
        &self.code
    }
}

impl Reporter for CashReporter {
    type Report = CashReport;

    fn report(&self, balance: f64) -> CashReport {
        if balance == 0.0 {
            return CashReport::NoMoney;
        }

        let Some(currency) = Currency::from_code(&self.code) else {
            debug!(code = %self.code, "unknown currency requested");
            return CashReport::UnknownCurrency(self.code.clone());
        };

        let amount = currency.convert(balance);
        if amount > 0.0 {
            CashReport::Remaining { amount, currency }
        } else {
            CashReport::Debt {
                amount: amount.abs(),
                currency,
            }
        }
    }
}
