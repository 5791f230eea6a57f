use serde::Serialize;

use super::flags::decode_status;

/// One senator's service for one state over a span of legislatures.
///
/// Mandates are immutable once built. They order by start legislature; the
/// remaining fields only break ties.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Mandate {
    start_legislature: u32,
    end_legislature: u32,
    start_year: i32,
    end_year: i32,
    state: Option<String>,
    is_holder: Option<bool>,
    is_substitute: Option<bool>,
    url: Option<String>,
}

impl Mandate {
    /// Build a mandate.
    ///
    /// `status` is the raw holder/substitute text ("Titular", "1º Suplente");
    /// the two flags are derived from its first letter.
    #[must_use]
    pub fn new(
        state: Option<String>,
        legislatures: (u32, u32),
        years: (i32, i32),
        status: Option<&str>,
        url: Option<String>,
    ) -> Self {
        let (is_holder, is_substitute) = decode_status(status);
        Self {
            start_legislature: legislatures.0,
            end_legislature: legislatures.1,
            start_year: years.0,
            end_year: years.1,
            state,
            is_holder,
            is_substitute,
            url,
        }
    }

    pub fn state(&self) -> Option<&str> {
        self.state.as_deref()
    }

    pub fn start_legislature(&self) -> u32 {
        self.start_legislature
    }

    pub fn end_legislature(&self) -> u32 {
        self.end_legislature
    }

    pub fn start_year(&self) -> i32 {
        self.start_year
    }

    pub fn end_year(&self) -> i32 {
        self.end_year
    }

    /// Whether the senator held the seat (titular).
    pub fn is_holder(&self) -> Option<bool> {
        self.is_holder
    }

    /// Whether the senator was a substitute (suplente).
    pub fn is_substitute(&self) -> Option<bool> {
        self.is_substitute
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }
}
