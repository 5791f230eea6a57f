use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDate;
use serde::Serialize;

use super::bill::Bill;
use super::flags::decode_pair;
use super::mandate::Mandate;
use crate::config::FetchOptions;
use crate::error::Result;
use crate::fetch::{fetch_if_requested, FetchState, Record};
use crate::parser;
use crate::store::RecordKind;
use crate::xml::Document;

/// A senator, keyed by the service's parliamentarian code.
///
/// Senators reached through a bill or a legislature are sparse: only the
/// fields present in that document are filled in, and they stay unfetched
/// until `get_info` is called on them.
#[derive(Debug, Clone, Serialize)]
pub struct Senator {
    pub code: u32,
    /// Full name. The first non-empty value assigned is kept.
    pub name: Option<String>,
    pub is_male: Option<bool>,
    pub is_female: Option<bool>,
    /// State of birth (UF).
    pub state: Option<String>,
    pub birth_date: Option<NaiveDate>,
    /// Party acronyms, in document order.
    pub parties: Vec<String>,
    /// Sorted by start legislature.
    pub mandates: Vec<Mandate>,
    /// Authored bills, sorted chronologically.
    pub bills: Vec<Bill>,
    /// Fields without a dedicated attribute, by tag.
    pub extra: BTreeMap<String, String>,
    #[serde(skip)]
    fetch: FetchState,
}

impl Senator {
    /// A sparse senator with default options.
    #[must_use]
    pub fn new(code: u32) -> Self {
        Self::with_options(code, FetchOptions::default())
    }

    /// A senator with explicit options; fetched right away when
    /// `options.fetch` is set.
    #[must_use]
    pub fn with_options(code: u32, options: FetchOptions) -> Self {
        let mut senator = Self {
            code,
            name: None,
            is_male: None,
            is_female: None,
            state: None,
            birth_date: None,
            parties: Vec::new(),
            mandates: Vec::new(),
            bills: Vec::new(),
            extra: BTreeMap::new(),
            fetch: FetchState::new(RecordKind::Senator, options),
        };
        fetch_if_requested(&mut senator);
        senator
    }

    /// Set the name unless one is already known.
    pub fn set_name_if_absent(&mut self, name: Option<&str>) {
        if self.name.is_none() {
            self.name = name.filter(|n| !n.is_empty()).map(str::to_string);
        }
    }

    /// Derive the sex flags from the service's text ("Masculino", "Feminino").
    pub fn set_sex(&mut self, raw: Option<&str>) {
        let (is_male, is_female) = decode_pair(raw, 'm', 'f');
        self.is_male = is_male;
        self.is_female = is_female;
    }
}

impl Record for Senator {
    const KIND: RecordKind = RecordKind::Senator;

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
        parser::senator::populate(self, document)
    }
}

impl fmt::Display for Senator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "Senador {name}, no. {}", self.code),
            None => write!(f, "Senador no. {}", self.code),
        }
    }
}

// Senators order by birth date; unknown dates sort first and the code breaks
// ties, so sorting never depends on input order.
impl Senator {
    fn sort_key(&self) -> (Option<NaiveDate>, u32) {
        (self.birth_date, self.code)
    }
}

impl PartialEq for Senator {
    fn eq(&self, other: &Self) -> bool {
        self.sort_key() == other.sort_key()
    }
}

impl Eq for Senator {}

impl PartialOrd for Senator {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Senator {
    fn cmp(&self, other: &Self) -> Ordering {
        self.sort_key().cmp(&other.sort_key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::FetchPhase;

    fn born(code: u32, date: Option<(i32, u32, u32)>) -> Senator {
        let mut senator = Senator::new(code);
        senator.birth_date = date.and_then(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d));
        senator
    }

    #[test]
    fn test_new_is_sparse() {
        let senator = Senator::new(4981);
        assert_eq!(senator.code, 4981);
        assert!(senator.name.is_none());
        assert!(senator.parties.is_empty());
        assert!(senator.mandates.is_empty());
        assert_eq!(senator.fetch_phase(), FetchPhase::Pending);
    }

    #[test]
    fn test_sex_flags() {
        let mut senator = Senator::new(1);
        senator.set_sex(Some("Feminino"));
        assert_eq!((senator.is_male, senator.is_female), (Some(false), Some(true)));

        senator.set_sex(Some("Masculino"));
        assert_eq!((senator.is_male, senator.is_female), (Some(true), Some(false)));

        senator.set_sex(None);
        assert_eq!((senator.is_male, senator.is_female), (None, None));
    }

    #[test]
    fn test_first_name_wins() {
        let mut senator = Senator::new(1);
        senator.set_name_if_absent(None);
        senator.set_name_if_absent(Some("Ana Amélia de Lemos"));
        senator.set_name_if_absent(Some("Ana Amélia"));
        assert_eq!(senator.name.as_deref(), Some("Ana Amélia de Lemos"));
    }

    #[test]
    fn test_display() {
        let mut senator = Senator::new(4981);
        assert_eq!(senator.to_string(), "Senador no. 4981");
        senator.set_name_if_absent(Some("Ana Amélia"));
        assert_eq!(senator.to_string(), "Senador Ana Amélia, no. 4981");
    }

    #[test]
    fn test_order_by_birth_date() {
        let mut senators = vec![
            born(1, Some((1960, 1, 1))),
            born(2, Some((1945, 6, 30))),
            born(3, None),
        ];
        senators.sort();
        let codes: Vec<u32> = senators.iter().map(|s| s.code).collect();
        assert_eq!(codes, vec![3, 2, 1]);
    }

    #[test]
    fn test_each_senator_owns_its_containers() {
        let mut a = Senator::new(1);
        let b = Senator::new(2);
        a.parties.push("PP".to_string());
        assert!(b.parties.is_empty());
    }
}
