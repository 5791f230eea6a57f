//! Senator history document (`senador/{code}/historico`).

use crate::config::{parse_date, FetchOptions};
use crate::error::Result;
use crate::fetch::Record;
use crate::store::RecordKind;
use crate::types::{Bill, Mandate, Senator};
use crate::xml::{Document, Element};

use super::{keep_extra, parse_number, parse_parties, require_number, MandateFields};

/// Position of the senator node below the document root.
pub const RECORD_PATH: &[usize] = &[1, 0];

/// Populate a senator from its history document.
pub fn populate(senator: &mut Senator, document: &Document) -> Result<()> {
    let node = super::record_node(document, RECORD_PATH, RecordKind::Senator, senator.code)?;
    let bill_options = senator.fetch_state().nested_options(RecordKind::Bill);

    for field in &node.children {
        let text = field.text();
        match field.tag.as_str() {
            "NomeCompleto" | "NomeParlamentar" => senator.set_name_if_absent(text),
            "Sexo" => senator.set_sex(text),
            "SiglaUfNatural" => senator.state = text.map(str::to_string),
            "DataNascimento" => {
                if let Some(date) = text {
                    senator.birth_date = Some(parse_date(date)?);
                }
            }
            "Partidos" => senator.parties.extend(parse_parties(field)),
            "Mandatos" => senator.mandates = parse_mandates(field),
            "MateriasDeAutoria" => {
                senator
                    .bills
                    .extend(parse_authored_bills(field, &bill_options)?);
                senator.bills.sort();
            }
            _ => keep_extra(&mut senator.extra, field),
        }
    }
    Ok(())
}

/// Mandates under a `Mandatos` element, sorted by start legislature.
pub fn parse_mandates(mandates: &Element) -> Vec<Mandate> {
    let mut parsed: Vec<Mandate> = mandates
        .children
        .iter()
        .filter_map(|entry| {
            let mut fields = MandateFields::default();
            for field in &entry.children {
                fields.set(&field.tag, field.text());
            }
            fields
                .build()
                .map_err(|e| tracing::warn!(error = %e, "Skipping incomplete mandate"))
                .ok()
        })
        .collect();
    parsed.sort();
    parsed
}

/// Bills under a `MateriasDeAutoria` element.
///
/// The first child of each entry holds the bill code. The bills are sparse
/// and not fetched.
pub fn parse_authored_bills(bills: &Element, options: &FetchOptions) -> Result<Vec<Bill>> {
    let mut parsed = Vec::with_capacity(bills.children.len());
    for entry in &bills.children {
        let Some(first) = entry.child(0) else {
            tracing::warn!(tag = %entry.tag, "Skipping empty authored bill entry");
            continue;
        };
        let code = require_number("CodigoMateria", first.text())?;
        let mut bill = Bill::with_options(code, options.clone());

        for field in entry.children.iter().skip(1) {
            let text = field.text();
            match field.tag.as_str() {
                "SiglaMateria" => bill.subtype = text.map(str::to_string),
                "NumeroMateria" => bill.number = text.map(str::to_string),
                "AnoMateria" => bill.year = parse_number("AnoMateria", text)?,
                "Ementa" => bill.summary = text.map(str::to_string),
                _ => keep_extra(&mut bill.extra, field),
            }
        }
        parsed.push(bill);
    }
    Ok(parsed)
}
