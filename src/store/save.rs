//! The save pipeline: validate, attach the receipt, then write.
//!
//! The photo leg runs strictly before the store write: a receipt that fails
//! to compress or upload aborts the save, so the store never holds a record
//! pointing at an image that does not exist. An in-flight save cannot be
//! aborted once submitted.

use time::OffsetDateTime;

use crate::Error;
use crate::photo::{CompressionLimits, ReceiptUploader, compress_receipt};
use crate::transaction::{Transaction, TransactionDraft, TransactionId};

use super::client::DocumentStore;

/// Persist a draft to the store.
///
/// For edits without a newly attached photo, the existing record's photo
/// URL is carried forward from the current snapshot. Returns the id of the
/// written record.
///
/// # Errors
/// Validation, compression, upload, and store errors are returned in that
/// order; nothing is written unless every earlier stage succeeded.
pub async fn save_transaction(
    store: &dyn DocumentStore,
    uploader: &dyn ReceiptUploader,
    current: &[Transaction],
    draft: TransactionDraft,
    photo: Option<&[u8]>,
    editing: Option<&str>,
) -> Result<TransactionId, Error> {
    draft.validate()?;

    let mut record = draft.into_record();
    record.updated_at = Some(OffsetDateTime::now_utc());

    if let Some(bytes) = photo {
        let compressed = compress_receipt(bytes, &CompressionLimits::default())?;
        let url = uploader.upload(compressed).await?;
        record.photo_url = Some(url);
    } else if let Some(id) = editing {
        record.photo_url = current
            .iter()
            .find(|transaction| transaction.id == id)
            .and_then(|transaction| transaction.photo_url.clone());
    }

    match editing {
        Some(id) => {
            store.update(id, &record).await?;
            tracing::info!("updated transaction {id}");
            Ok(id.to_owned())
        }
        None => {
            let id = store.create(&record).await?;
            tracing::info!("created transaction {id}");
            Ok(id)
        }
    }
}

/// Delete a record from the store.
///
/// # Errors
/// Returns [Error::DeleteMissingTransaction] if the record is already gone,
/// or [Error::StoreRequest] for other store failures; both surface to the
/// notification layer, and the latter is retryable by the user.
pub async fn delete_transaction(store: &dyn DocumentStore, id: &str) -> Result<(), Error> {
    store.delete(id).await?;
    tracing::info!("deleted transaction {id}");
    Ok(())
}
