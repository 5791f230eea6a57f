//! Bill document (`materia/{code}`).

use crate::config::{parse_date, FetchOptions};
use crate::error::Result;
use crate::fetch::Record;
use crate::store::RecordKind;
use crate::types::{decode_sim, Bill, Senator};
use crate::xml::{Document, Element};

use super::{keep_extra, parse_number, require_number};

/// Position of the bill node below the document root.
pub const RECORD_PATH: &[usize] = &[1];

/// Populate a bill from its document.
pub fn populate(bill: &mut Bill, document: &Document) -> Result<()> {
    let node = super::record_node(document, RECORD_PATH, RecordKind::Bill, bill.code)?;
    let author_options = bill.fetch_state().nested_options(RecordKind::Senator);

    for section in &node.children {
        match section.tag.as_str() {
            "IdentificacaoMateria" => parse_identification(bill, section)?,
            "DadosBasicosMateria" => parse_basic_data(bill, section)?,
            "Autoria" => bill.authors.extend(parse_authors(section, &author_options)?),
            _ => keep_extra(&mut bill.extra, section),
        }
    }
    Ok(())
}

fn parse_identification(bill: &mut Bill, section: &Element) -> Result<()> {
    for field in &section.children {
        let text = field.text();
        match field.tag.as_str() {
            "AnoMateria" => bill.year = parse_number("AnoMateria", text)?,
            "IndicadorTramitando" => bill.is_tracking = decode_sim(text),
            "NumeroMateria" => bill.number = text.map(str::to_string),
            "SiglaCasaIdentificacaoMateria" => bill.chamber = text.map(str::to_string),
            "SiglaSubtipoMateria" => bill.subtype = text.map(str::to_string),
            _ => keep_extra(&mut bill.extra, field),
        }
    }
    Ok(())
}

fn parse_basic_data(bill: &mut Bill, section: &Element) -> Result<()> {
    for field in &section.children {
        let text = field.text();
        match field.tag.as_str() {
            "DataApresentacao" => {
                if let Some(date) = text {
                    bill.filing_date = Some(parse_date(date)?);
                }
            }
            "EmentaMateria" => bill.summary = text.map(str::to_string),
            _ => keep_extra(&mut bill.extra, field),
        }
    }
    Ok(())
}

/// Authoring senators under an `Autoria` element.
///
/// Only authors identified as parliamentarians are kept; committees and
/// other bodies have no senator code. The senators are sparse and not
/// fetched.
pub fn parse_authors(authorship: &Element, options: &FetchOptions) -> Result<Vec<Senator>> {
    let mut authors = Vec::new();
    for author in &authorship.children {
        let Some(ident) = author.find_child("IdentificacaoParlamentar") else {
            tracing::debug!(tag = %author.tag, "Skipping author without parliamentarian");
            continue;
        };
        let Some(code) = ident.find_child("CodigoParlamentar") else {
            tracing::warn!("Skipping parliamentarian author without code");
            continue;
        };

        let mut senator = Senator::with_options(
            require_number("CodigoParlamentar", code.text())?,
            options.clone(),
        );
        for field in &ident.children {
            let text = field.text();
            match field.tag.as_str() {
                "NomeParlamentar" => senator.set_name_if_absent(text),
                "SexoParlamentar" => senator.set_sex(text),
                "UfParlamentar" => senator.state = text.map(str::to_string),
                _ => {}
            }
        }
        authors.push(senator);
    }
    Ok(authors)
}
