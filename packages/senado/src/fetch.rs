//! Fetch orchestration shared by every record kind.
//!
//! A record is created sparse, holding only its key. [`Record::get_info`]
//! runs retrieval, parsing and write-back once; the record is either fully
//! populated afterwards or left exactly as it was, and every later call
//! returns [`SenadoError::AlreadyFetched`].

use std::path::{Path, PathBuf};

use crate::config::FetchOptions;
use crate::error::{ErrorKind, Result, SenadoError};
use crate::retrieval::{persist, retrieve, Origin, Source};
use crate::store::{RecordKind, RecordStore};
use crate::xml::Document;

/// Successful outcome of [`Record::get_info`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchStatus {
    /// Fields populated; nothing to save or the document was saved.
    Fetched,
    /// Fields populated, but write-back was refused or failed.
    NotSaved { path: PathBuf, reason: String },
}

/// Where a record is in its fetch lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchPhase {
    #[default]
    Pending,
    Fetched,
    NotSaved,
    Failed(ErrorKind),
}

/// Per-record fetch bookkeeping.
#[derive(Debug, Clone)]
pub struct FetchState {
    options: FetchOptions,
    store: RecordStore,
    phase: FetchPhase,
    document: Option<Document>,
}

impl FetchState {
    #[must_use]
    pub fn new(kind: RecordKind, options: FetchOptions) -> Self {
        let store = RecordStore::resolve(kind, options.base_local.as_deref());
        Self {
            options,
            store,
            phase: FetchPhase::Pending,
            document: None,
        }
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn phase(&self) -> FetchPhase {
        self.phase
    }

    /// Options for a record of `kind` reached through a cross-reference,
    /// cached next to this one.
    #[must_use]
    pub fn nested_options(&self, kind: RecordKind) -> FetchOptions {
        self.options.nested(self.store.sibling(kind))
    }

    /// Options for a record cached under an explicit directory.
    #[must_use]
    pub fn nested_options_at(&self, base: &Path) -> FetchOptions {
        self.options.nested(base.to_path_buf())
    }
}

/// A record that can be fetched from the service.
///
/// `get_info` takes `&mut self`; a record must not be shared while it is
/// being fetched.
pub trait Record: Clone {
    const KIND: RecordKind;

    /// Identifying key (code or legislature number).
    fn key(&self) -> u32;

    fn fetch_state(&self) -> &FetchState;

    fn fetch_state_mut(&mut self) -> &mut FetchState;

    /// Populate fields from a retrieved document.
    fn populate(&mut self, document: &Document) -> Result<()>;

    /// Remote URL of this record.
    fn endpoint(&self) -> String {
        Self::KIND.endpoint(&self.fetch_state().options.base_url, self.key())
    }

    /// Local cache file of this record.
    fn cache_path(&self) -> PathBuf {
        self.fetch_state().store.path_for(self.key())
    }

    fn fetch_phase(&self) -> FetchPhase {
        self.fetch_state().phase
    }

    fn is_fetched(&self) -> bool {
        self.fetch_state().phase != FetchPhase::Pending
    }

    /// The document kept after fetching.
    ///
    /// # Errors
    /// `DocumentAbsent` when the record was not fetched or its document was
    /// discarded.
    fn document(&self) -> Result<&Document> {
        self.fetch_state()
            .document
            .as_ref()
            .ok_or(SenadoError::DocumentAbsent)
    }

    /// Retrieve, parse and optionally save this record. Runs at most once.
    ///
    /// # Errors
    /// `AlreadyFetched` on every call after the first, otherwise the first
    /// retrieval or parse failure. On failure the fields are left untouched.
    fn get_info(&mut self, source: Source) -> Result<FetchStatus> {
        if self.is_fetched() {
            return Err(SenadoError::AlreadyFetched);
        }

        let result = run_fetch(self, source);
        let phase = match &result {
            Ok(FetchStatus::Fetched) => FetchPhase::Fetched,
            Ok(FetchStatus::NotSaved { .. }) => FetchPhase::NotSaved,
            Err(e) => FetchPhase::Failed(e.kind()),
        };
        self.fetch_state_mut().phase = phase;
        result
    }
}

fn run_fetch<R: Record>(record: &mut R, source: Source) -> Result<FetchStatus> {
    let endpoint = record.endpoint();
    let cache_path = record.cache_path();
    tracing::debug!(kind = %R::KIND, key = record.key(), ?source, "Fetching record");

    let retrieved = retrieve(&endpoint, &cache_path, source)?;

    // Parse into a copy so a failure leaves the record untouched
    let mut staged = record.clone();
    staged.populate(&retrieved.document)?;
    *record = staged;

    let options = record.fetch_state().options.clone();
    let mut status = FetchStatus::Fetched;
    if options.write && retrieved.origin == Origin::Remote {
        if let Err(e) = persist(&retrieved.document, &cache_path) {
            tracing::warn!(error = %e, "Document not saved");
            status = FetchStatus::NotSaved {
                path: cache_path,
                reason: e.to_string(),
            };
        }
    }

    if !options.discard_document {
        record.fetch_state_mut().document = Some(retrieved.document);
    }
    Ok(status)
}

/// Run `get_info` right away when the options ask for it.
///
/// Failures are logged; they remain visible through [`Record::fetch_phase`].
pub(crate) fn fetch_if_requested<R: Record>(record: &mut R) {
    if !record.fetch_state().options.fetch {
        return;
    }
    if let Err(e) = record.get_info(Source::Either) {
        tracing::warn!(kind = %R::KIND, key = record.key(), error = %e, "Fetch on construction failed");
    }
}
