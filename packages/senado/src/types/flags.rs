//! Two-valued flags decoded from free text.

/// Decode a pair of mutually exclusive flags from the first letter of `raw`.
///
/// Returns `(Some(true), Some(false))` when the first letter matches `first`,
/// `(Some(false), Some(true))` when it matches `second`, and `(None, None)`
/// for anything else, including absent or empty input. Matching ignores case.
///
/// # Examples
/// ```
/// use congresso_senado::types::decode_pair;
///
/// assert_eq!(decode_pair(Some("Masculino"), 'm', 'f'), (Some(true), Some(false)));
/// assert_eq!(decode_pair(Some("Feminino"), 'm', 'f'), (Some(false), Some(true)));
/// assert_eq!(decode_pair(None, 'm', 'f'), (None, None));
/// ```
pub fn decode_pair(raw: Option<&str>, first: char, second: char) -> (Option<bool>, Option<bool>) {
    let letter = raw
        .and_then(|s| s.trim().chars().next())
        .map(|c| c.to_lowercase().next().unwrap_or(c));
    match letter {
        Some(c) if c == first => (Some(true), Some(false)),
        Some(c) if c == second => (Some(false), Some(true)),
        _ => (None, None),
    }
}

/// Decode the holder/substitute flags of a mandate status.
///
/// The first letter of the status decides: `t` ("Titular") is a holder, any
/// other present text ("Suplente", "1º Suplente") is a substitute. Absent or
/// blank status gives `(None, None)`. Leading digits and symbols are ignored.
///
/// # Examples
/// ```
/// use congresso_senado::types::decode_status;
///
/// assert_eq!(decode_status(Some("Titular")), (Some(true), Some(false)));
/// assert_eq!(decode_status(Some("1º Suplente")), (Some(false), Some(true)));
/// assert_eq!(decode_status(None), (None, None));
/// ```
pub fn decode_status(raw: Option<&str>) -> (Option<bool>, Option<bool>) {
    let Some(text) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return (None, None);
    };
    let is_holder = text
        .chars()
        .find(|c| c.is_alphabetic() && *c != 'º' && *c != 'ª')
        .is_some_and(|c| c.eq_ignore_ascii_case(&'t'));
    (Some(is_holder), Some(!is_holder))
}

/// `Some(true)` when `raw` is "sim" (any case), `Some(false)` for any other
/// text, `None` when absent.
pub fn decode_sim(raw: Option<&str>) -> Option<bool> {
    raw.map(|s| s.trim().eq_ignore_ascii_case("sim"))
}
