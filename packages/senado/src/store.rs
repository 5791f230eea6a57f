//! Local cache layout and remote endpoints per record kind.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::config::{DATA_DIR_ENV, DEFAULT_DATA_DIR};

/// The kinds of record the service exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    Senator,
    Bill,
    LegislativeTerm,
}

impl RecordKind {
    /// Name used by the service for this kind.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Senator => "senador",
            Self::Bill => "materia",
            Self::LegislativeTerm => "legislatura",
        }
    }

    /// Cache directory of this kind, relative to the data root.
    #[must_use]
    pub fn cache_segments(&self) -> &'static [&'static str] {
        match self {
            Self::Senator => &["senador"],
            Self::Bill => &["materia"],
            Self::LegislativeTerm => &["senador", "lista", "legislatura"],
        }
    }

    /// Remote endpoint for a record of this kind.
    ///
    /// # Examples
    /// ```
    /// use congresso_senado::store::RecordKind;
    ///
    /// assert_eq!(
    ///     RecordKind::Senator.endpoint("http://example.org/dadosabertos", 4981),
    ///     "http://example.org/dadosabertos/senador/4981/historico"
    /// );
    /// ```
    #[must_use]
    pub fn endpoint(&self, base_url: &str, id: u32) -> String {
        let base = base_url.trim_end_matches('/');
        match self {
            Self::Senator => format!("{base}/senador/{id}/historico"),
            Self::Bill => format!("{base}/materia/{id}"),
            Self::LegislativeTerm => format!("{base}/senador/lista/legislatura/{id}"),
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Data root used when no cache directory is configured.
///
/// `$SENADO_DATA_DIR` when set, otherwise `./data`.
pub fn default_data_root() -> PathBuf {
    std::env::var_os(DATA_DIR_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR))
}

/// Expand a leading `~` and make the path absolute.
pub fn normalize_base(path: &Path) -> PathBuf {
    let expanded = match path.strip_prefix("~") {
        Ok(rest) => match std::env::var_os("HOME") {
            Some(home) => PathBuf::from(home).join(rest),
            None => path.to_path_buf(),
        },
        Err(_) => path.to_path_buf(),
    };
    std::path::absolute(&expanded).unwrap_or(expanded)
}

/// Cache directory for one record kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordStore {
    kind: RecordKind,
    base: PathBuf,
}

impl RecordStore {
    /// Resolve the cache directory of `kind`, honouring an explicit override.
    #[must_use]
    pub fn resolve(kind: RecordKind, base_local: Option<&Path>) -> Self {
        let base = match base_local {
            Some(path) => normalize_base(path),
            None => {
                let mut base = default_data_root();
                base.extend(kind.cache_segments());
                normalize_base(&base)
            }
        };
        Self { kind, base }
    }

    #[must_use]
    pub fn kind(&self) -> RecordKind {
        self.kind
    }

    #[must_use]
    pub fn base(&self) -> &Path {
        &self.base
    }

    /// Cache file of a record: `{base}/{id}.xml`.
    #[must_use]
    pub fn path_for(&self, id: u32) -> PathBuf {
        self.base.join(format!("{id}.xml"))
    }

    /// The directory `levels` above the base, or the base itself when the
    /// path is too short.
    #[must_use]
    pub fn ancestor(&self, levels: usize) -> PathBuf {
        self.base
            .ancestors()
            .nth(levels)
            .map_or_else(|| self.base.clone(), Path::to_path_buf)
    }

    /// Cache directory of another kind living next to this one.
    ///
    /// Senators and bills share a parent directory, so the bill cache of
    /// `data/senador` is `data/materia`.
    #[must_use]
    pub fn sibling(&self, kind: RecordKind) -> PathBuf {
        let root = self.ancestor(self.kind.cache_segments().len());
        let mut base = root;
        base.extend(kind.cache_segments());
        base
    }
}
