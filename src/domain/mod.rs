//! Valuation and dividend income logic, free of any UI types.

pub mod app_state;
pub mod history;
pub mod income;
pub mod valuation;

pub use app_state::{AppSettings, AppState, Currency};
pub use history::{HistoryEntry, HISTORY_CAPACITY};
pub use income::{compute_income, HoldingEntry, HoldingIncome, IncomeSummary};
pub use valuation::{evaluate, format_price, RawValuationInput, Valuation};
