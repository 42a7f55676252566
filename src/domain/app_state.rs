use time::OffsetDateTime;

use super::history::ValuationHistory;
use super::valuation::{evaluate, RawValuationInput, Valuation, ValuationError};

/// Currency symbol used when rendering prices and income totals.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Currency {
    #[default]
    Dollar,
    Euro,
    Pound,
    Yen,
}

impl Currency {
    pub const ALL: [Currency; 4] = [
        Currency::Dollar,
        Currency::Euro,
        Currency::Pound,
        Currency::Yen,
    ];

    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Dollar => "$",
            Currency::Euro => "€",
            Currency::Pound => "£",
            Currency::Yen => "¥",
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Currency::Dollar => "USD",
            Currency::Euro => "EUR",
            Currency::Pound => "GBP",
            Currency::Yen => "JPY",
        }
    }

    pub fn label(&self) -> String {
        format!("{} ({})", self.code(), self.symbol())
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|currency| currency.code().eq_ignore_ascii_case(code.trim()))
    }
}

/// Session-only preferences. Nothing here is written to disk.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppSettings {
    pub currency: Currency,
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub settings: AppSettings,
    pub history: ValuationHistory,
    /// Inputs queued for the calculator form, e.g. when re-running a history entry.
    pub pending_inputs: Option<RawValuationInput>,
}

impl AppState {
    pub fn currency(&self) -> Currency {
        self.settings.currency
    }

    pub fn reset_settings(&mut self) {
        self.settings = AppSettings::default();
    }

    pub fn take_pending_inputs(&mut self) -> Option<RawValuationInput> {
        self.pending_inputs.take()
    }

    /// Prices the form inputs and records the result in history.
    /// Rejected inputs leave history untouched.
    pub fn submit_valuation(
        &mut self,
        raw: RawValuationInput,
        now: OffsetDateTime,
    ) -> Result<Valuation, ValuationError> {
        let valuation = evaluate(&raw)?;
        self.history.record(raw, valuation, now);
        Ok(valuation)
    }
}
