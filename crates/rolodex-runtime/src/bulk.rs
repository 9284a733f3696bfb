//! Bulk contact deletion.
//!
//! Deletes run one at a time and the report aggregates per-id
//! outcomes; one failed row never aborts the rest.

use log::{info, warn};
use rolodex_client::api::DirectoryApi;
use rolodex_types::ContactId;

#[derive(Debug, Clone, Default)]
pub struct BulkDeleteReport {
    pub requested: usize,
    pub deleted: usize,
    pub failed: Vec<(ContactId, String)>,
}

impl BulkDeleteReport {
    pub fn all_succeeded(&self) -> bool {
        self.failed.is_empty()
    }
}

pub async fn delete_contacts<A: DirectoryApi>(api: &A, ids: &[ContactId]) -> BulkDeleteReport {
    let mut report = BulkDeleteReport {
        requested: ids.len(),
        ..Default::default()
    };

    for &id in ids {
        match api.delete_contact(id).await {
            Ok(()) => report.deleted += 1,
            Err(err) => {
                warn!("failed to delete contact {}: {}", id, err);
                report.failed.push((id, err.to_string()));
            }
        }
    }

    info!(
        "bulk delete finished: {}/{} deleted, {} failed",
        report.deleted,
        report.requested,
        report.failed.len()
    );
    report
}
