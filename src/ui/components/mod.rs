pub mod error_dialog;
pub mod history_table;
pub mod income_table;
pub mod kpi_card;
pub mod toast;
