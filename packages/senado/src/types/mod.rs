//! Record types: senators, their mandates, bills and legislatures.

mod bill;
mod flags;
mod mandate;
mod senator;
mod term;

pub use bill::Bill;
pub use flags::{decode_pair, decode_sim, decode_status};
pub use mandate::Mandate;
pub use senator::Senator;
pub use term::LegislativeTerm;
