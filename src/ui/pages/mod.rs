pub mod calculator;
pub mod history;
pub mod income;
pub mod settings;

pub use calculator::CalculatorPage;
pub use history::HistoryPage;
pub use income::IncomePage;
pub use settings::SettingsPage;
