//! Session persistence: a compact URL-hash codec, a name-keyed JSON store
//! codec, and the load/write-through policy that keeps both in step.
//!
//! Hash layout: one band character per token in slot order (`i`/`m`/`o`),
//! a `/`, then one character per category in dataset order (`i` visible,
//! `o` hidden). The store only carries bands, keyed by token name.

use crate::band::Band;
use crate::error::{HashError, PersistError, StoreError};
use crate::session::Session;
use fnv::FnvHashMap;
use std::collections::BTreeMap;

pub const HASH_SEPARATOR: char = '/';
pub const VISIBLE_CHAR: char = 'i';
pub const HIDDEN_CHAR: char = 'o';

/// Logical persisted state: band per token and visibility per category.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snapshot {
    pub bands: Vec<Band>,
    pub categories_visible: Vec<bool>,
}

impl Snapshot {
    /// Everything inner, every category visible.
    pub fn initial(token_count: usize, category_count: usize) -> Self {
        Self {
            bands: vec![Band::Inner; token_count],
            categories_visible: vec![true; category_count],
        }
    }
}

pub fn encode_hash(snapshot: &Snapshot) -> String {
    let mut out =
        String::with_capacity(snapshot.bands.len() + 1 + snapshot.categories_visible.len());
    out.extend(snapshot.bands.iter().map(|b| b.hash_char()));
    out.push(HASH_SEPARATOR);
    out.extend(snapshot.categories_visible.iter().map(|&v| {
        if v {
            VISIBLE_CHAR
        } else {
            HIDDEN_CHAR
        }
    }));
    out
}

/// Validate and decode a hash (a leading `#` is ignored).
///
/// Validation covers the whole string before anything is returned, so a
/// rejected hash can never be partially applied.
pub fn decode_hash(
    raw: &str,
    token_count: usize,
    category_count: usize,
) -> Result<Snapshot, HashError> {
    let hash = raw.strip_prefix('#').unwrap_or(raw);
    if hash.is_empty() {
        return Err(HashError::Empty);
    }
    let parts: Vec<&str> = hash.split(HASH_SEPARATOR).collect();
    let &[band_part, category_part] = parts.as_slice() else {
        return Err(HashError::Segments(parts.len()));
    };

    let band_len = band_part.chars().count();
    if band_part.is_empty() || band_len != token_count {
        return Err(HashError::BandLength {
            expected: token_count,
            found: band_len,
        });
    }
    let category_len = category_part.chars().count();
    if category_part.is_empty() || category_len != category_count {
        return Err(HashError::CategoryLength {
            expected: category_count,
            found: category_len,
        });
    }

    let bands = band_part
        .chars()
        .enumerate()
        .map(|(index, ch)| Band::from_hash_char(ch).ok_or(HashError::BandChar { index, ch }))
        .collect::<Result<Vec<_>, _>>()?;
    let categories_visible = category_part
        .chars()
        .enumerate()
        .map(|(index, ch)| match ch {
            VISIBLE_CHAR => Ok(true),
            HIDDEN_CHAR => Ok(false),
            _ => Err(HashError::CategoryChar { index, ch }),
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Snapshot {
        bands,
        categories_visible,
    })
}

/// JSON object mapping token name to band name.
pub fn encode_store<'a>(
    entries: impl IntoIterator<Item = (&'a str, Band)>,
) -> Result<String, serde_json::Error> {
    let map: BTreeMap<&str, Band> = entries.into_iter().collect();
    serde_json::to_string(&map)
}

/// Parse the store blob. Entries whose value is not a valid band are dropped;
/// unknown names are kept here and ignored when applied.
pub fn decode_store(json: &str) -> Result<FnvHashMap<String, Band>, StoreError> {
    let value: serde_json::Value = serde_json::from_str(json)?;
    let serde_json::Value::Object(map) = value else {
        return Err(StoreError::NotAnObject);
    };
    Ok(map
        .into_iter()
        .filter_map(|(name, v)| {
            let band = v.as_str()?.parse::<Band>().ok()?;
            Some((name, band))
        })
        .collect())
}

/// Where persisted state lives. Reads that fail are reported as absent.
pub trait PersistenceBackend {
    fn read_hash(&self) -> Option<String>;
    /// Replace the current hash in place (no new history entry).
    fn replace_hash(&mut self, hash: &str) -> Result<(), PersistError>;
    fn read_store(&self) -> Option<String>;
    fn write_store(&mut self, json: &str) -> Result<(), PersistError>;
}

/// In-memory backend for tests and headless use, with injectable failures.
#[derive(Clone, Debug, Default)]
pub struct MemoryBackend {
    pub hash: Option<String>,
    pub store: Option<String>,
    pub fail_store_writes: bool,
    pub fail_hash_writes: bool,
    pub store_writes: usize,
    pub hash_writes: usize,
}

impl PersistenceBackend for MemoryBackend {
    fn read_hash(&self) -> Option<String> {
        self.hash.clone()
    }

    fn replace_hash(&mut self, hash: &str) -> Result<(), PersistError> {
        if self.fail_hash_writes {
            return Err(PersistError::History("injected failure".into()));
        }
        self.hash = Some(format!("#{hash}"));
        self.hash_writes += 1;
        Ok(())
    }

    fn read_store(&self) -> Option<String> {
        self.store.clone()
    }

    fn write_store(&mut self, json: &str) -> Result<(), PersistError> {
        if self.fail_store_writes {
            return Err(PersistError::Write("quota exceeded".into()));
        }
        self.store = Some(json.to_string());
        self.store_writes += 1;
        Ok(())
    }
}

/// Which representation the session was restored from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadSource {
    Hash,
    Store,
    Defaults,
}

/// Restore state: a valid hash wins, otherwise the store, otherwise defaults.
pub fn restore<B: PersistenceBackend + ?Sized>(session: &mut Session, backend: &B) -> LoadSource {
    if let Some(raw) = backend.read_hash().filter(|h| !h.trim_start_matches('#').is_empty()) {
        match decode_hash(&raw, session.token_count(), session.category_count()) {
            Ok(snapshot) => {
                session.apply_snapshot(&snapshot);
                log::info!("[persist] restored from url hash");
                return LoadSource::Hash;
            }
            Err(e) => log::warn!("[persist] ignoring url hash {:?}: {}", raw, e),
        }
    }

    let Some(json) = backend.read_store() else {
        return LoadSource::Defaults;
    };
    match decode_store(&json) {
        Ok(selections) => {
            let applied = session.apply_store_selections(&selections);
            log::info!("[persist] restored {} band(s) from local storage", applied);
            LoadSource::Store
        }
        Err(e) => {
            log::warn!("[persist] could not load from local storage: {}", e);
            LoadSource::Defaults
        }
    }
}

/// Rewrite both representations from the current session.
///
/// Both writes are attempted even if the first fails; the first error is
/// returned.
pub fn write_through<B: PersistenceBackend + ?Sized>(
    session: &Session,
    backend: &mut B,
) -> Result<(), PersistError> {
    let store_result = encode_store(session.store_entries())
        .map_err(|e| PersistError::Encode(e.to_string()))
        .and_then(|json| backend.write_store(&json));
    let hash_result = backend.replace_hash(&encode_hash(&session.snapshot()));
    store_result.and(hash_result)
}

/// Rewrite only the URL hash. Start-up uses this so a shared link never
/// clobbers the visitor's own stored selections.
pub fn sync_hash<B: PersistenceBackend + ?Sized>(session: &Session, backend: &mut B) {
    if let Err(e) = backend.replace_hash(&encode_hash(&session.snapshot())) {
        log::warn!("[persist] could not update url hash: {}", e);
    }
}

/// [`write_through`], logging instead of propagating failures.
pub fn persist<B: PersistenceBackend + ?Sized>(session: &Session, backend: &mut B) {
    if let Err(e) = write_through(session, backend) {
        log::warn!("[persist] could not save selections: {}", e);
    }
}
