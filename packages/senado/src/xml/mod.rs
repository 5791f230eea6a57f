//! Document model: an owned tree of tagged nodes.

mod document;
mod utils;

pub use document::{Document, Element};
pub use utils::{element_children, get_tag_name, get_text};
