use std::cmp::Ordering;
use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use super::senator::Senator;
use crate::config::FetchOptions;
use crate::error::Result;
use crate::fetch::{fetch_if_requested, FetchState, Record};
use crate::parser;
use crate::store::RecordKind;
use crate::xml::Document;

/// A bill (matéria), keyed by the service's bill code.
#[derive(Debug, Clone, Serialize)]
pub struct Bill {
    pub code: u32,
    /// Filing year.
    pub year: Option<i32>,
    /// Subtype acronym (PLS, PEC, ...).
    pub subtype: Option<String>,
    /// Chamber acronym (SF, CD).
    pub chamber: Option<String>,
    pub number: Option<String>,
    pub filing_date: Option<NaiveDate>,
    /// Whether the bill is still being processed.
    pub is_tracking: Option<bool>,
    pub summary: Option<String>,
    /// Authoring senators. Sparse: code, name, sex and state only.
    pub authors: Vec<Senator>,
    /// Fields without a dedicated attribute, by tag.
    pub extra: BTreeMap<String, String>,
    #[serde(skip)]
    fetch: FetchState,
}

impl Bill {
    /// A sparse bill with default options.
    #[must_use]
    pub fn new(code: u32) -> Self {
        Self::with_options(code, FetchOptions::default())
    }

    /// A bill with explicit options; fetched right away when `options.fetch`
    /// is set.
    #[must_use]
    pub fn with_options(code: u32, options: FetchOptions) -> Self {
        let mut bill = Self {
            code,
            year: None,
            subtype: None,
            chamber: None,
            number: None,
            filing_date: None,
            is_tracking: None,
            summary: None,
            authors: Vec::new(),
            extra: BTreeMap::new(),
            fetch: FetchState::new(RecordKind::Bill, options),
        };
        fetch_if_requested(&mut bill);
        bill
    }

    /// Filing year, preferring the filing date when known.
    pub fn effective_year(&self) -> Option<i32> {
        self.filing_date.map(|d| d.year()).or(self.year)
    }

    // Dated bills compare by date, undated ones by year; bills with neither
    // sort first. The code makes the order total.
    fn sort_key(&self) -> (Option<i32>, Option<NaiveDate>, u32) {
        (self.effective_year(), self.filing_date, self.code)
    }
}

impl Record for Bill {
    const KIND: RecordKind = RecordKind::Bill;

    fn key(&self) -> u32 {
        self.code
    }

    fn fetch_state(&self) -> &FetchState {
        &self.fetch
    }

    fn fetch_state_mut(&mut self) -> &mut FetchState {
        &mut self.fetch
    }

    fn populate(&mut self, document: &Document) -> Result<()> {
        parser::bill::populate(self, document)
    }
}

impl PartialEq for Bill {
    fn eq(&self, other: &Self) -> bool {
        self.sort_key() == other.sort_key()
    }
}

impl Eq for Bill {}

impl PartialOrd for Bill {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Bill {
    fn cmp(&self, other: &Self) -> Ordering {
        self.sort_key().cmp(&other.sort_key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bill(code: u32, year: Option<i32>, date: Option<(i32, u32, u32)>) -> Bill {
        let mut bill = Bill::new(code);
        bill.year = year;
        bill.filing_date = date.and_then(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d));
        bill
    }

    fn codes(bills: &[Bill]) -> Vec<u32> {
        bills.iter().map(|b| b.code).collect()
    }

    #[test]
    fn test_undated_bills_order_by_year() {
        let mut bills = vec![bill(1, Some(2001), None), bill(2, Some(1999), None)];
        bills.sort();
        assert_eq!(codes(&bills), vec![2, 1]);
    }

    #[test]
    fn test_dated_bills_order_by_date_regardless_of_year() {
        // Year fields contradict the dates; the dates win
        let mut bills = vec![
            bill(1, Some(1990), Some((2005, 3, 1))),
            bill(2, Some(2010), Some((2004, 12, 31))),
        ];
        bills.sort();
        assert_eq!(codes(&bills), vec![2, 1]);
    }

    #[test]
    fn test_bills_without_date_or_year_tie_break_on_code() {
        let mut bills = vec![bill(9, None, None), bill(3, None, None), bill(5, Some(1999), None)];
        bills.sort();
        assert_eq!(codes(&bills), vec![3, 9, 5]);
    }

    #[test]
    fn test_effective_year() {
        assert_eq!(bill(1, Some(1999), None).effective_year(), Some(1999));
        assert_eq!(bill(1, Some(1999), Some((2001, 1, 1))).effective_year(), Some(2001));
        assert_eq!(bill(1, None, None).effective_year(), None);
    }
}
