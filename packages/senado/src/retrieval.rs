//! Retrieval engine: local cache, remote endpoint, or local with remote
//! fallback, plus write-back that never overwrites.

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind as IoErrorKind, Write};
use std::path::Path;

use crate::error::{Result, SenadoError};
use crate::http::{create_client, download_bytes};
use crate::xml::Document;

/// Where a document may be retrieved from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Source {
    /// Cache only.
    Local,
    /// Network only.
    Remote,
    /// Cache first, network on any cache failure.
    #[default]
    Either,
}

/// Where a retrieved document actually came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    Local,
    Remote,
}

/// A document and its origin.
#[derive(Debug)]
pub struct Retrieved {
    pub document: Document,
    pub origin: Origin,
}

/// Retrieve a document.
///
/// # Arguments
/// * `endpoint` - Remote URL of the record
/// * `cache_path` - Local cache file of the record
/// * `source` - Which sources to try
pub fn retrieve(endpoint: &str, cache_path: &Path, source: Source) -> Result<Retrieved> {
    match source {
        Source::Local => retrieve_local(cache_path),
        Source::Remote => retrieve_remote(endpoint),
        Source::Either => retrieve_local(cache_path).or_else(|err| {
            tracing::debug!(error = %err, "Local retrieval failed, trying remote");
            retrieve_remote(endpoint)
        }),
    }
}

/// Read and parse the cache file.
pub fn retrieve_local(cache_path: &Path) -> Result<Retrieved> {
    let raw = fs::read(cache_path).map_err(|source| SenadoError::LocalUnavailable {
        path: cache_path.to_path_buf(),
        source,
    })?;
    let document = Document::parse(raw)?;
    tracing::debug!(path = %cache_path.display(), "Loaded cached document");
    Ok(Retrieved {
        document,
        origin: Origin::Local,
    })
}

/// Download and parse the remote document.
pub fn retrieve_remote(endpoint: &str) -> Result<Retrieved> {
    let client = create_client()?;
    let raw = download_bytes(&client, endpoint)?;
    let document = Document::parse(raw)?;
    tracing::debug!(url = %endpoint, "Downloaded document");
    Ok(Retrieved {
        document,
        origin: Origin::Remote,
    })
}

/// Write the raw document to the cache.
///
/// Parent directories are created as needed. The file is opened with
/// exclusive creation, so an existing file is never touched.
///
/// # Errors
/// `PersistFailed` when the destination exists or the write fails.
pub fn persist(document: &Document, cache_path: &Path) -> Result<()> {
    let failed = |reason: String| SenadoError::PersistFailed {
        path: cache_path.to_path_buf(),
        reason,
    };

    if let Some(parent) = cache_path.parent() {
        fs::create_dir_all(parent).map_err(|e| failed(e.to_string()))?;
    }

    let mut file = match OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(cache_path)
    {
        Ok(file) => file,
        Err(e) if e.kind() == IoErrorKind::AlreadyExists => {
            return Err(failed("file already exists".to_string()));
        }
        Err(e) => return Err(failed(e.to_string())),
    };

    let written = file
        .write_all(document.raw())
        .and_then(|()| file.sync_all());
    if let Err(e) = written {
        // Do not leave a truncated cache entry behind
        drop(file);
        let _ = fs::remove_file(cache_path);
        return Err(failed(e.to_string()));
    }

    tracing::debug!(path = %cache_path.display(), "Saved document");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const XML: &str = "<Root><Metadados/><Dados><Item>1</Item></Dados></Root>";

    #[test]
    fn test_local_missing_file() {
        let dir = tempdir().unwrap();
        let err = retrieve_local(&dir.path().join("1.xml")).unwrap_err();
        assert!(matches!(err, SenadoError::LocalUnavailable { .. }));
    }

    #[test]
    fn test_local_malformed_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("1.xml");
        fs::write(&path, "<Root>").unwrap();

        let err = retrieve_local(&path).unwrap_err();
        assert!(matches!(err, SenadoError::MalformedDocument(_)));
    }

    #[test]
    fn test_local_success() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("1.xml");
        fs::write(&path, XML).unwrap();

        let retrieved = retrieve("http://127.0.0.1:9/unused", &path, Source::Local).unwrap();
        assert_eq!(retrieved.origin, Origin::Local);
        assert_eq!(retrieved.document.root().tag, "Root");
    }

    #[test]
    fn test_persist_creates_parent_dirs() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("senador").join("7.xml");
        let document = Document::parse(XML.as_bytes().to_vec()).unwrap();

        persist(&document, &path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), XML);
    }

    #[test]
    fn test_persist_never_overwrites() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("7.xml");
        fs::write(&path, "original").unwrap();
        let document = Document::parse(XML.as_bytes().to_vec()).unwrap();

        let err = persist(&document, &path).unwrap_err();
        assert!(matches!(err, SenadoError::PersistFailed { .. }));
        assert_eq!(fs::read_to_string(&path).unwrap(), "original");
    }
}
