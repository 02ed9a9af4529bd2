//! Batch deletion that tolerates per-file failures.

use crate::error::FileError;
use crate::types::{DeletionOutcome, ImageRecord};

/// Unlink every record, continuing past failures.
///
/// A record lands in `deleted` only when `remove_file` returned `Ok`.
pub fn delete_images<'a>(records: &[&'a ImageRecord]) -> DeletionOutcome<'a> {
    let mut outcome = DeletionOutcome::default();

    for &record in records {
        match std::fs::remove_file(&record.path) {
            Ok(()) => {
                tracing::debug!("Deleted {:?}", record.path);
                outcome.bytes_freed += record.byte_size;
                outcome.deleted.push(record);
            }
            Err(source) => {
                let err = FileError::Delete {
                    path: record.path.clone(),
                    source,
                };
                tracing::warn!("{err}");
                outcome.failures.push(err);
            }
        }
    }

    outcome
}
