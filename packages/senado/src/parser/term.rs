//! Legislature senator list (`senador/lista/legislatura/{number}`).

use crate::error::Result;
use crate::fetch::Record;
use crate::store::RecordKind;
use crate::types::{LegislativeTerm, Senator};
use crate::xml::Document;

use super::{keep_extra, parse_parties, MandateFields};

/// Position of the senator list below the document root.
pub const RECORD_PATH: &[usize] = &[1, 0];

/// Senators are cached two directories above the legislature cache
/// (`senador/lista/legislatura` -> `senador`).
const SENATOR_BASE_LEVELS_UP: usize = 2;

/// Populate a legislature from its senator list.
///
/// Each list entry must carry an `id` attribute with the senator code; the
/// first child is the identification block and is not read. Every senator
/// gets exactly one mandate, built from the fields of its entry.
pub fn populate(term: &mut LegislativeTerm, document: &Document) -> Result<()> {
    let list = super::record_node(
        document,
        RECORD_PATH,
        RecordKind::LegislativeTerm,
        term.number,
    )?;
    let senator_base = term.fetch_state().store().ancestor(SENATOR_BASE_LEVELS_UP);
    let options = term.fetch_state().nested_options_at(&senator_base);

    let mut senators = Vec::with_capacity(list.children.len());
    for entry in &list.children {
        let Some(code) = entry.attribute("id").and_then(|id| id.trim().parse::<u32>().ok()) else {
            tracing::warn!(tag = %entry.tag, "Skipping senator entry without numeric id");
            continue;
        };
        let mut senator = Senator::with_options(code, options.clone());
        let mut mandate = MandateFields::default();

        for field in entry.children.iter().skip(1) {
            let text = field.text();
            match field.tag.as_str() {
                "NomeCompleto" | "NomeParlamentar" => senator.set_name_if_absent(text),
                "SexoParlamentar" => senator.set_sex(text),
                "Partidos" => senator.parties = parse_parties(field),
                tag if mandate.set(tag, text) => {}
                _ => keep_extra(&mut senator.extra, field),
            }
        }

        match mandate.build() {
            Ok(m) => senator.mandates = vec![m],
            Err(e) => tracing::warn!(code, error = %e, "Senator listed without a usable mandate"),
        }
        senators.push(senator);
    }

    term.senators = senators;
    Ok(())
}
