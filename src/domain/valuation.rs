//! Gordon Growth (constant-growth dividend discount) valuation.

use thiserror::Error;

use super::app_state::Currency;

/// Raw text as typed into the calculator form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawValuationInput {
    pub dividend: String,
    pub required_return_pct: String,
    pub growth_rate_pct: String,
}

impl RawValuationInput {
    pub fn new(
        dividend: impl Into<String>,
        required_return_pct: impl Into<String>,
        growth_rate_pct: impl Into<String>,
    ) -> Self {
        Self {
            dividend: dividend.into(),
            required_return_pct: required_return_pct.into(),
            growth_rate_pct: growth_rate_pct.into(),
        }
    }
}

/// Parsed model inputs. Rates are fractions, not percentages.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValuationInput {
    /// Next-period dividend (D1).
    pub expected_dividend: f64,
    /// Required rate of return (r).
    pub required_return: f64,
    /// Constant dividend growth rate (g).
    pub growth_rate: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ValuationError {
    #[error("Please enter valid numerical values.")]
    InvalidNumber,
    #[error("Required return must be greater than the growth rate.")]
    InvalidDomain,
}

impl ValuationError {
    /// Heading for the dialog that presents this error.
    pub fn title(&self) -> &'static str {
        "Input Error"
    }
}

impl ValuationInput {
    /// Parses the three form fields. Percentage fields are divided by 100.
    ///
    /// Only checks that every field is a finite number; the `r > g`
    /// constraint is enforced by [`ValuationInput::price`].
    pub fn parse(
        dividend: &str,
        required_return_pct: &str,
        growth_rate_pct: &str,
    ) -> Result<Self, ValuationError> {
        Ok(Self {
            expected_dividend: parse_number(dividend)?,
            required_return: parse_number(required_return_pct)? / 100.0,
            growth_rate: parse_number(growth_rate_pct)? / 100.0,
        })
    }

    pub fn spread(&self) -> f64 {
        self.required_return - self.growth_rate
    }

    /// `D1 / (r - g)`, rejected when `r <= g`.
    ///
    /// A quotient that overflows to infinity is reported as
    /// [`ValuationError::InvalidNumber`].
    pub fn price(&self) -> Result<f64, ValuationError> {
        if self.required_return <= self.growth_rate {
            return Err(ValuationError::InvalidDomain);
        }
        let price = self.expected_dividend / self.spread();
        if !price.is_finite() {
            return Err(ValuationError::InvalidNumber);
        }
        Ok(price)
    }
}

/// A successful valuation together with the inputs that produced it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Valuation {
    pub input: ValuationInput,
    pub price: f64,
}

impl Valuation {
    pub fn display(&self, currency: Currency) -> String {
        format_price(self.price, currency)
    }
}

/// Parses, validates and prices one set of form inputs.
pub fn evaluate(raw: &RawValuationInput) -> Result<Valuation, ValuationError> {
    let input = ValuationInput::parse(
        &raw.dividend,
        &raw.required_return_pct,
        &raw.growth_rate_pct,
    )?;
    let price = input.price()?;
    Ok(Valuation { input, price })
}

/// Currency symbol followed by the amount at two decimals, e.g. `$33.33`.
pub fn format_price(price: f64, currency: Currency) -> String {
    format!("{}{:.2}", currency.symbol(), price)
}

fn parse_number(raw: &str) -> Result<f64, ValuationError> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or(ValuationError::InvalidNumber)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn run(dividend: &str, rate: &str, growth: &str) -> Result<Valuation, ValuationError> {
        evaluate(&RawValuationInput::new(dividend, rate, growth))
    }

    #[test]
    fn prices_the_textbook_example() {
        let valuation = run("2", "10", "4").unwrap();
        assert_relative_eq!(valuation.input.required_return, 0.10);
        assert_relative_eq!(valuation.input.growth_rate, 0.04);
        assert_relative_eq!(valuation.price, 2.0 / 0.06, epsilon = 1e-9);
        assert_eq!(valuation.display(Currency::Dollar), "$33.33");
    }

    #[test]
    fn equal_rates_are_a_domain_error() {
        assert_eq!(run("5", "8", "8"), Err(ValuationError::InvalidDomain));
    }

    #[test]
    fn growth_above_return_is_a_domain_error() {
        assert_eq!(run("5", "3", "7.5"), Err(ValuationError::InvalidDomain));
        assert_eq!(run("-1", "-2", "0"), Err(ValuationError::InvalidDomain));
    }

    #[test]
    fn non_numeric_fields_are_rejected() {
        assert_eq!(run("abc", "10", "4"), Err(ValuationError::InvalidNumber));
        assert_eq!(run("2", "ten", "4"), Err(ValuationError::InvalidNumber));
        assert_eq!(run("2", "10", ""), Err(ValuationError::InvalidNumber));
        assert_eq!(run("2", "10%", "4"), Err(ValuationError::InvalidNumber));
    }

    #[test]
    fn parse_failure_wins_over_domain_failure() {
        // Equal rates would be a domain error, but the dividend never parses.
        assert_eq!(run("x", "8", "8"), Err(ValuationError::InvalidNumber));
    }

    #[test]
    fn non_finite_numbers_are_rejected() {
        assert_eq!(run("inf", "10", "4"), Err(ValuationError::InvalidNumber));
        assert_eq!(run("2", "NaN", "4"), Err(ValuationError::InvalidNumber));
    }

    #[test]
    fn overflowing_prices_are_rejected() {
        assert_eq!(run("1e308", "1e-300", "0"), Err(ValuationError::InvalidNumber));
        assert_eq!(run("-1e308", "1e-300", "0"), Err(ValuationError::InvalidNumber));
    }

    #[test]
    fn surrounding_whitespace_and_exponents_parse() {
        let valuation = run("  2.5 ", "\t1e1", "4 ").unwrap();
        assert_relative_eq!(valuation.input.expected_dividend, 2.5);
        assert_relative_eq!(valuation.input.required_return, 0.10);
        assert_eq!(valuation.display(Currency::Dollar), "$41.67");
    }

    #[test]
    fn negative_growth_is_allowed() {
        let valuation = run("3", "5", "-1").unwrap();
        assert_relative_eq!(valuation.input.spread(), 0.06, epsilon = 1e-12);
        assert_eq!(valuation.display(Currency::Dollar), "$50.00");
    }

    #[test]
    fn evaluation_is_idempotent() {
        let raw = RawValuationInput::new("1.75", "9.2", "3.1");
        assert_eq!(evaluate(&raw), evaluate(&raw));
    }

    #[test]
    fn error_messages_match_the_dialog_text() {
        assert_eq!(
            ValuationError::InvalidNumber.to_string(),
            "Please enter valid numerical values."
        );
        assert_eq!(
            ValuationError::InvalidDomain.to_string(),
            "Required return must be greater than the growth rate."
        );
        assert_eq!(ValuationError::InvalidDomain.title(), "Input Error");
    }

    #[test]
    fn formats_with_the_selected_currency() {
        assert_eq!(format_price(0.0, Currency::Dollar), "$0.00");
        assert_eq!(format_price(1234.5, Currency::Euro), "€1234.50");
        assert_eq!(format_price(0.005, Currency::Pound), "£0.01");
    }
}
