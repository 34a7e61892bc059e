use thiserror::Error;

use crate::types::PageId;

/// Invariant violations and environment failures. None of these are
/// recoverable by retrying the statement; the embedding shell decides
/// whether to terminate.
#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("corrupted database file: {reason}")]
    CorruptedFile { reason: String },

    #[error("page number {page_num} out of bounds (max {max})")]
    PageOutOfBounds { page_num: PageId, max: PageId },

    #[error("tried to flush page {page_num}, which was never loaded")]
    FlushUnloadedPage { page_num: PageId },
}

pub type Result<T> = std::result::Result<T, DatabaseError>;
