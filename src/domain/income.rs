//! Dividend income totals for a set of manually entered holdings.

use thiserror::Error;
use time::{macros::format_description, Date};

/// One holding row as typed into the income form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HoldingEntry {
    pub id: String,
    pub symbol: String,
    /// Optional `YYYY-MM-DD`.
    pub start_date: String,
    /// Optional `YYYY-MM-DD`.
    pub end_date: String,
    pub shares: String,
    /// Per-share payments separated by commas or whitespace.
    pub payments: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct HoldingIncome {
    pub symbol: String,
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
    pub shares: f64,
    pub payments: Vec<f64>,
    pub total_dividends: f64,
}

impl HoldingIncome {
    pub fn per_share(&self) -> f64 {
        self.payments.iter().sum()
    }

    pub fn period_label(&self) -> String {
        match (self.start_date, self.end_date) {
            (Some(start), Some(end)) => format!("{start} to {end}"),
            (Some(start), None) => format!("from {start}"),
            (None, Some(end)) => format!("until {end}"),
            (None, None) => "Any period".to_string(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct IncomeSummary {
    pub holdings: Vec<HoldingIncome>,
    pub grand_total: f64,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum IncomeError {
    #[error("Every holding needs a stock symbol.")]
    MissingSymbol,
    #[error("Invalid number of shares for {symbol}")]
    InvalidShares { symbol: String },
    #[error("Invalid date '{value}' for {symbol}; use YYYY-MM-DD")]
    InvalidDate { symbol: String, value: String },
    #[error("End date is before start date for {symbol}")]
    InvertedPeriod { symbol: String },
    #[error("Invalid dividend payment '{value}' for {symbol}")]
    InvalidPayment { symbol: String, value: String },
}

/// Totals dividend income per holding. Stops at the first invalid row.
pub fn compute_income(entries: &[HoldingEntry]) -> Result<IncomeSummary, IncomeError> {
    let holdings = entries
        .iter()
        .map(compute_holding)
        .collect::<Result<Vec<_>, _>>()?;
    let grand_total = holdings.iter().map(|h| h.total_dividends).sum();

    Ok(IncomeSummary {
        holdings,
        grand_total,
    })
}

pub fn compute_holding(entry: &HoldingEntry) -> Result<HoldingIncome, IncomeError> {
    let symbol = entry.symbol.trim().to_uppercase();
    if symbol.is_empty() {
        return Err(IncomeError::MissingSymbol);
    }

    let shares = entry
        .shares
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|shares| shares.is_finite() && *shares > 0.0)
        .ok_or_else(|| IncomeError::InvalidShares {
            symbol: symbol.clone(),
        })?;

    let start_date = parse_date(&entry.start_date, &symbol)?;
    let end_date = parse_date(&entry.end_date, &symbol)?;
    if let (Some(start), Some(end)) = (start_date, end_date) {
        if end < start {
            return Err(IncomeError::InvertedPeriod { symbol });
        }
    }

    let payments = parse_payments(&entry.payments, &symbol)?;
    let total_dividends = payments.iter().sum::<f64>() * shares;

    Ok(HoldingIncome {
        symbol,
        start_date,
        end_date,
        shares,
        payments,
        total_dividends,
    })
}

fn parse_date(raw: &str, symbol: &str) -> Result<Option<Date>, IncomeError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    let format = format_description!("[year]-[month]-[day]");
    Date::parse(trimmed, &format)
        .map(Some)
        .map_err(|_| IncomeError::InvalidDate {
            symbol: symbol.to_string(),
            value: trimmed.to_string(),
        })
}

fn parse_payments(raw: &str, symbol: &str) -> Result<Vec<f64>, IncomeError> {
    raw.split(|ch: char| ch == ',' || ch == ';' || ch.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| {
            token
                .parse::<f64>()
                .ok()
                .filter(|value| value.is_finite() && *value >= 0.0)
                .ok_or_else(|| IncomeError::InvalidPayment {
                    symbol: symbol.to_string(),
                    value: token.to_string(),
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use time::Month;

    fn holding(symbol: &str, shares: &str, payments: &str) -> HoldingEntry {
        HoldingEntry {
            id: format!("holding-{symbol}"),
            symbol: symbol.to_string(),
            shares: shares.to_string(),
            payments: payments.to_string(),
            ..HoldingEntry::default()
        }
    }

    #[test]
    fn totals_payments_times_shares() {
        let income = compute_holding(&holding("ko", "10", "0.5, 0.5,, 0.6")).unwrap();
        assert_eq!(income.symbol, "KO");
        assert_eq!(income.payments, vec![0.5, 0.5, 0.6]);
        assert_relative_eq!(income.per_share(), 1.6, epsilon = 1e-12);
        assert_relative_eq!(income.total_dividends, 16.0, epsilon = 1e-9);
    }

    #[test]
    fn grand_total_sums_all_holdings() {
        let summary = compute_income(&[
            holding("KO", "10", "0.5 0.5"),
            holding("PEP", "2.5", "1.2;1.3"),
        ])
        .unwrap();
        assert_eq!(summary.holdings.len(), 2);
        assert_relative_eq!(summary.grand_total, 10.0 + 6.25, epsilon = 1e-9);
    }

    #[test]
    fn no_payments_means_zero_income() {
        let income = compute_holding(&holding("T", "100", "  ")).unwrap();
        assert!(income.payments.is_empty());
        assert_relative_eq!(income.total_dividends, 0.0);
    }

    #[test]
    fn rejects_non_positive_or_non_numeric_shares() {
        for shares in ["0", "-1", "x", "", "inf"] {
            assert_eq!(
                compute_holding(&holding("msft", shares, "1")),
                Err(IncomeError::InvalidShares {
                    symbol: "MSFT".to_string()
                }),
                "shares = {shares:?}"
            );
        }
    }

    #[test]
    fn share_error_message_names_the_symbol() {
        let err = compute_holding(&holding("aapl", "none", "")).unwrap_err();
        assert_eq!(err.to_string(), "Invalid number of shares for AAPL");
    }

    #[test]
    fn requires_a_symbol() {
        assert_eq!(
            compute_holding(&holding("  ", "1", "1")),
            Err(IncomeError::MissingSymbol)
        );
    }

    #[test]
    fn rejects_bad_payments() {
        assert_eq!(
            compute_holding(&holding("KO", "1", "0.5, abc")),
            Err(IncomeError::InvalidPayment {
                symbol: "KO".to_string(),
                value: "abc".to_string()
            })
        );
        assert!(compute_holding(&holding("KO", "1", "-0.5")).is_err());
    }

    #[test]
    fn stops_at_first_invalid_holding() {
        let result = compute_income(&[
            holding("KO", "10", "1"),
            holding("PEP", "0", "1"),
            holding("", "1", "1"),
        ]);
        assert_eq!(
            result,
            Err(IncomeError::InvalidShares {
                symbol: "PEP".to_string()
            })
        );
    }

    #[test]
    fn parses_optional_period() {
        let mut entry = holding("KO", "1", "1");
        entry.start_date = "2024-01-01".to_string();
        entry.end_date = " 2024-12-31 ".to_string();
        let income = compute_holding(&entry).unwrap();
        let start = income.start_date.unwrap();
        assert_eq!((start.year(), start.month(), start.day()), (2024, Month::January, 1));
        assert_eq!(income.period_label(), "2024-01-01 to 2024-12-31");

        entry.end_date.clear();
        let income = compute_holding(&entry).unwrap();
        assert_eq!(income.period_label(), "from 2024-01-01");
    }

    #[test]
    fn rejects_malformed_and_inverted_periods() {
        let mut entry = holding("KO", "1", "1");
        entry.start_date = "01/02/2024".to_string();
        assert_eq!(
            compute_holding(&entry),
            Err(IncomeError::InvalidDate {
                symbol: "KO".to_string(),
                value: "01/02/2024".to_string()
            })
        );

        entry.start_date = "2024-06-01".to_string();
        entry.end_date = "2024-01-01".to_string();
        assert_eq!(
            compute_holding(&entry),
            Err(IncomeError::InvertedPeriod {
                symbol: "KO".to_string()
            })
        );
    }
}
