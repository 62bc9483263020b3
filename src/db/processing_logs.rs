//! Append-only processing audit rows (`logs_processamento`).

use chrono::Utc;
use sea_orm::{ConnectionTrait, EntityTrait, Set};
use tracing::{error, info};

use crate::entity::processing_log::{ActiveModel, Entity as ProcessingLog};
use crate::error::ProcessingResult;
use crate::models::ProcessingStatus;

/// Record the terminal outcome of one delivery.
pub async fn record_processing<C>(
    db: &C,
    deliverable_id: Option<&str>,
    status: ProcessingStatus,
    message: &str,
) -> ProcessingResult<()>
where
    C: ConnectionTrait,
{
    let model = ActiveModel {
        deliverable_id: Set(deliverable_id.map(str::to_string)),
        processed_at: Set(Utc::now().naive_utc()),
        status: Set(status.as_str().to_string()),
        message: Set(Some(message.to_string())),
        ..Default::default()
    };

    ProcessingLog::insert(model)
        .exec_without_returning(db)
        .await
        .inspect_err(|e| {
            error!(
                deliverable_id = ?deliverable_id,
                "Failed to record processing log: {}", e
            );
        })?;

    info!(
        deliverable_id = ?deliverable_id,
        status = %status,
        "Processing log recorded: {}", message
    );
    Ok(())
}
