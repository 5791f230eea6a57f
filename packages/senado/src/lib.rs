//! Congresso Senado - Fetch and parse Brazilian Senate open-data records.
//!
//! This crate retrieves senators, bills (matérias) and legislatures from the
//! Senate open-data service (`dadosabertos`) as XML, from a local cache or
//! from the network, and maps them onto typed records.
//!
//! # Example
//!
//! ```no_run
//! use congresso_senado::{FetchOptions, Record, Senator, Source};
//!
//! let mut senator = Senator::with_options(4981, FetchOptions::default().with_write(true));
//! match senator.get_info(Source::Either) {
//!     Ok(status) => println!("{senator}: {status:?}"),
//!     Err(e) => eprintln!("{e}"),
//! }
//! ```
//!
//! # Architecture
//!
//! - [`config`]: Constants, date parsing and [`FetchOptions`]
//! - [`error`]: Error types and Result alias
//! - [`store`]: Record kinds, endpoints and cache layout
//! - [`http`]: HTTP client for the open-data service
//! - [`retrieval`]: Local/remote retrieval and write-back
//! - [`xml`]: Document model
//! - [`parser`]: Per-kind record parsers
//! - [`types`]: Record types (Senator, Mandate, Bill, LegislativeTerm)
//! - [`fetch`]: The `get_info` orchestration shared by all records
//! - [`legislature`]: Static legislature year tables
//! - [`cli`]: Command-line interface

pub mod cli;
pub mod config;
pub mod error;
pub mod fetch;
pub mod http;
pub mod legislature;
pub mod parser;
pub mod retrieval;
pub mod store;
pub mod types;
pub mod xml;

// Re-export commonly used items
pub use config::FetchOptions;
pub use error::{ErrorKind, Result, SenadoError};
pub use fetch::{FetchPhase, FetchStatus, Record};
pub use retrieval::Source;
pub use store::RecordKind;
pub use types::{Bill, LegislativeTerm, Mandate, Senator};
