//! Record parsers: map document trees onto record fields.
//!
//! Each parser walks the children of the record node and dispatches on the
//! tag. Tags without a destination field are kept in the record's `extra`
//! map. Sub-entries with an unusable shape (a party without a code, a mandate
//! without its legislatures) are skipped with a warning instead of failing
//! the whole record.

pub mod bill;
pub mod senator;
pub mod term;

use std::collections::BTreeMap;
use std::str::FromStr;

use crate::error::{Result, SenadoError};
use crate::store::RecordKind;
use crate::types::Mandate;
use crate::xml::{Document, Element};

/// Locate the record node by child positions from the document root.
///
/// # Errors
/// `RecordNotFound` when the path does not exist, which is how the service
/// answers for unknown codes.
pub fn record_node<'a>(
    document: &'a Document,
    positions: &[usize],
    kind: RecordKind,
    id: u32,
) -> Result<&'a Element> {
    document
        .root()
        .descend(positions)
        .ok_or(SenadoError::RecordNotFound { kind, id })
}

/// Parse a numeric field. Absent text gives `None`.
pub fn parse_number<T: FromStr>(field: &'static str, text: Option<&str>) -> Result<Option<T>> {
    text.map(|t| {
        t.trim().parse().map_err(|_| SenadoError::InvalidField {
            field,
            value: t.to_string(),
        })
    })
    .transpose()
}

/// Parse a numeric field that must be present.
pub fn require_number<T: FromStr>(field: &'static str, text: Option<&str>) -> Result<T> {
    parse_number(field, text)?.ok_or(SenadoError::InvalidField {
        field,
        value: String::new(),
    })
}

/// Keep an unmapped element in the overflow map.
pub fn keep_extra(extra: &mut BTreeMap<String, String>, element: &Element) {
    extra.insert(
        element.tag.clone(),
        element.text().unwrap_or_default().to_string(),
    );
}

/// Party acronyms listed under a `Partidos` element, in order.
///
/// An entry with a `SiglaPartido` child takes its acronym from there; an
/// entry without one takes the text of its first child. Entries yielding no
/// text are skipped.
pub fn parse_parties(parties: &Element) -> Vec<String> {
    parties
        .children
        .iter()
        .filter_map(|party| {
            let code = match party.find_child("SiglaPartido") {
                Some(sigla) => sigla.text(),
                None => party.child(0).and_then(Element::text),
            };
            if code.is_none() {
                tracing::warn!(tag = %party.tag, "Skipping party entry without acronym");
            }
            code.map(str::to_string)
        })
        .collect()
}

/// Mandate fields collected while walking one mandate entry.
///
/// Fresh for every entry; anything not seen stays `None`.
#[derive(Debug, Default)]
pub struct MandateFields<'a> {
    state: Option<&'a str>,
    start_legislature: Option<&'a str>,
    end_legislature: Option<&'a str>,
    start_year: Option<&'a str>,
    end_year: Option<&'a str>,
    status: Option<&'a str>,
    url: Option<&'a str>,
}

impl<'a> MandateFields<'a> {
    /// Record `text` if `tag` is a mandate field. Returns whether it was.
    pub fn set(&mut self, tag: &str, text: Option<&'a str>) -> bool {
        let slot = match tag {
            "SiglaUF" => &mut self.state,
            "LegislaturaInicio" => &mut self.start_legislature,
            "LegislaturaFim" => &mut self.end_legislature,
            "AnoInicio" => &mut self.start_year,
            "AnoFim" => &mut self.end_year,
            "TitularSuplente" => &mut self.status,
            "PaginaNoMandato" => &mut self.url,
            _ => return false,
        };
        *slot = text;
        true
    }

    /// Build the mandate.
    ///
    /// # Errors
    /// `InvalidField` when a legislature or year is missing or not a number.
    pub fn build(&self) -> Result<Mandate> {
        let legislatures = (
            require_number("LegislaturaInicio", self.start_legislature)?,
            require_number("LegislaturaFim", self.end_legislature)?,
        );
        let years = (
            require_number("AnoInicio", self.start_year)?,
            require_number("AnoFim", self.end_year)?,
        );
        Ok(Mandate::new(
            self.state.map(str::to_string),
            legislatures,
            years,
            self.status,
            self.url.map(str::to_string),
        ))
    }
}
