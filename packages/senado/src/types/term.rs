use std::fmt;

use serde::Serialize;

use super::senator::Senator;
use crate::config::FetchOptions;
use crate::error::Result;
use crate::fetch::{fetch_if_requested, FetchState, Record};
use crate::legislature;
use crate::parser;
use crate::store::RecordKind;
use crate::xml::Document;

/// A legislature, identified by its ordinal number.
///
/// Start and end years come from the static tables in
/// [`crate::legislature`]; only the senator list is fetched.
#[derive(Debug, Clone, Serialize)]
pub struct LegislativeTerm {
    pub number: u32,
    pub start_year: i32,
    pub end_year: i32,
    /// Senators who served, each with the single mandate listed for this
    /// legislature.
    pub senators: Vec<Senator>,
    #[serde(skip)]
    fetch: FetchState,
}

impl LegislativeTerm {
    /// A sparse legislature with default options.
    ///
    /// # Errors
    /// `UnknownLegislature` when `number` is outside the tables.
    pub fn new(number: u32) -> Result<Self> {
        Self::with_options(number, FetchOptions::default())
    }

    /// A legislature with explicit options; fetched right away when
    /// `options.fetch` is set.
    ///
    /// # Errors
    /// `UnknownLegislature` when `number` is outside the tables.
    pub fn with_options(number: u32, options: FetchOptions) -> Result<Self> {
        let (start_year, end_year) = legislature::years(number)?;
        let mut term = Self {
            number,
            start_year,
            end_year,
            senators: Vec::new(),
            fetch: FetchState::new(RecordKind::LegislativeTerm, options),
        };
        fetch_if_requested(&mut term);
        Ok(term)
    }
}

impl Record for LegislativeTerm {
    const KIND: RecordKind = RecordKind::LegislativeTerm;

    fn key(&self) -> u32 {
        self.number
    }

    fn fetch_state(&self) -> &FetchState {
        &self.fetch
    }

    fn fetch_state_mut(&mut self) -> &mut FetchState {
        &mut self.fetch
    }

    fn populate(&mut self, document: &Document) -> Result<()> {
        parser::term::populate(self, document)
    }
}

impl fmt::Display for LegislativeTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Legislatura {} ({}-{})",
            self.number, self.start_year, self.end_year
        )
    }
}

impl PartialEq for LegislativeTerm {
    fn eq(&self, other: &Self) -> bool {
        self.number == other.number
    }
}

impl Eq for LegislativeTerm {}

impl PartialOrd for LegislativeTerm {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for LegislativeTerm {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.number.cmp(&other.number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_legislature_years() {
        let term = LegislativeTerm::new(1).unwrap();
        assert_eq!((term.start_year, term.end_year), (1826, 1829));
        assert!(term.senators.is_empty());
    }

    #[test]
    fn test_unknown_legislature() {
        assert!(LegislativeTerm::new(0).is_err());
        assert!(LegislativeTerm::new(100).is_err());
    }

    #[test]
    fn test_order_by_number() {
        let mut terms = vec![
            LegislativeTerm::new(54).unwrap(),
            LegislativeTerm::new(2).unwrap(),
            LegislativeTerm::new(38).unwrap(),
        ];
        terms.sort();
        let numbers: Vec<u32> = terms.iter().map(|t| t.number).collect();
        assert_eq!(numbers, vec![2, 38, 54]);
    }

    #[test]
    fn test_display() {
        let term = LegislativeTerm::new(54).unwrap();
        assert_eq!(term.to_string(), "Legislatura 54 (2011-2015)");
    }
}
