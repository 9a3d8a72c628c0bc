//! In-memory store of dated values

use crate::data::RangeTotal;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One dated value, e.g. a daily closing quote
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LedgerEntry {
    pub date: NaiveDate,
    pub value: f64,
}

/// Dated values totalled per inclusive date range.
///
/// Several entries on the same date are summed together.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValueLedger {
    totals: BTreeMap<NaiveDate, f64>,
}

impl ValueLedger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a ledger from entries in any order
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = LedgerEntry>,
    {
        entries
            .into_iter()
            .map(|entry| (entry.date, entry.value))
            .collect()
    }

    /// Record a value on `date`
    pub fn insert(&mut self, date: NaiveDate, value: f64) {
        *self.totals.entry(date).or_insert(0.0) += value;
    }

    /// Number of distinct dates holding data
    pub fn len(&self) -> usize {
        self.totals.len()
    }

    /// Check if no values have been recorded
    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }
}

impl FromIterator<(NaiveDate, f64)> for ValueLedger {
    fn from_iter<T: IntoIterator<Item = (NaiveDate, f64)>>(iter: T) -> Self {
        let mut ledger = ValueLedger::new();
        ledger.extend(iter);
        ledger
    }
}

impl Extend<(NaiveDate, f64)> for ValueLedger {
    fn extend<T: IntoIterator<Item = (NaiveDate, f64)>>(&mut self, iter: T) {
        for (date, value) in iter {
            self.insert(date, value);
        }
    }
}

impl RangeTotal for ValueLedger {
    fn range_total(&self, range_start: NaiveDate, range_end: NaiveDate) -> Option<f64> {
        if range_end < range_start {
            return None;
        }

        let mut in_range = self.totals.range(range_start..=range_end).peekable();
        in_range.peek()?;
        Some(in_range.map(|(_, value)| value).sum())
    }
}
