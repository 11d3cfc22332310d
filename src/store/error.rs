use thiserror::Error;

/// Errors surfaced by the key-value state store.
///
/// There are only two failure kinds: the backing file could not be read
/// (or parsed), or it could not be written. Callers decide what either
/// means for them; the store itself never recovers silently on reads.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Failed to read state file: {0}")]
    ReadFailed(String),

    #[error("Failed to write state file: {0}")]
    WriteFailed(String),
}
