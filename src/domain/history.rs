//! Session-only log of successful valuations.

use std::collections::VecDeque;

use time::{macros::format_description, OffsetDateTime};

use super::valuation::{RawValuationInput, Valuation};
use crate::util::generate_id;

/// Maximum number of valuations kept for the current session.
pub const HISTORY_CAPACITY: usize = 25;

#[derive(Clone, Debug, PartialEq)]
pub struct HistoryEntry {
    pub id: String,
    pub recorded_at: OffsetDateTime,
    /// Form text that produced the valuation, so it can be re-run verbatim.
    pub raw: RawValuationInput,
    pub valuation: Valuation,
}

impl HistoryEntry {
    pub fn timestamp_label(&self) -> String {
        let format = format_description!("[year]-[month]-[day] [hour]:[minute]:[second] UTC");
        self.recorded_at
            .format(&format)
            .unwrap_or_else(|_| self.recorded_at.unix_timestamp().to_string())
    }
}

/// In-memory log of successful valuations, oldest dropped first.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ValuationHistory {
    entries: VecDeque<HistoryEntry>,
}

impl ValuationHistory {
    pub fn record(
        &mut self,
        raw: RawValuationInput,
        valuation: Valuation,
        recorded_at: OffsetDateTime,
    ) -> &HistoryEntry {
        if self.entries.len() >= HISTORY_CAPACITY {
            self.entries.pop_front();
        }
        self.entries.push_back(HistoryEntry {
            id: generate_id("valuation"),
            recorded_at,
            raw,
            valuation,
        });
        &self.entries[self.entries.len() - 1]
    }

    /// Entries, newest first.
    pub fn entries(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter().rev()
    }

    pub fn find(&self, id: &str) -> Option<&HistoryEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
