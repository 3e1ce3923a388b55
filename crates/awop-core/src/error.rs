use thiserror::Error;

/// A band name outside `inner | middle | outer`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown band {0:?}")]
pub struct UnknownBand(pub String);

/// Why a URL hash was rejected. Any of these rejects the whole hash.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HashError {
    #[error("hash is empty")]
    Empty,
    #[error("expected exactly one '/' separator, found {0} segments")]
    Segments(usize),
    #[error("band segment has length {found}, expected {expected}")]
    BandLength { expected: usize, found: usize },
    #[error("category segment has length {found}, expected {expected}")]
    CategoryLength { expected: usize, found: usize },
    #[error("invalid band character {ch:?} at position {index}")]
    BandChar { index: usize, ch: char },
    #[error("invalid category character {ch:?} at position {index}")]
    CategoryChar { index: usize, ch: char },
}

/// Problems reading the local-storage snapshot.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store JSON is malformed: {0}")]
    Json(#[from] serde_json::Error),
    #[error("store JSON is not an object")]
    NotAnObject,
}

/// A backend write that did not happen (quota, storage disabled, ...).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PersistError {
    #[error("storage unavailable: {0}")]
    StorageUnavailable(String),
    #[error("storage write failed: {0}")]
    Write(String),
    #[error("history update failed: {0}")]
    History(String),
    #[error("could not encode snapshot: {0}")]
    Encode(String),
}
