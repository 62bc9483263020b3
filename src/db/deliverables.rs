//! Database operations for deliverables (`entregaveis`).
//!
//! A deliverable already present means the provider redelivered the event;
//! that is not an error.

use sea_orm::{ConnectionTrait, EntityTrait, Set};
use tracing::{error, info};

use super::UpsertOutcome;
use super::validation::{check_length, limits};
use crate::entity::deliverable::{ActiveModel, Entity as Deliverable};
use crate::error::ProcessingResult;
use crate::models::DeliverableRecord;

/// Insert a deliverable unless one with the same event id exists.
pub async fn insert_deliverable<C>(
    db: &C,
    record: &DeliverableRecord,
) -> ProcessingResult<UpsertOutcome>
where
    C: ConnectionTrait,
{
    upsert(db, record).await.inspect_err(|e| {
        error!(deliverable_id = %record.id, "Failed to insert deliverable: {}", e);
    })
}

async fn upsert<C: ConnectionTrait>(
    db: &C,
    record: &DeliverableRecord,
) -> ProcessingResult<UpsertOutcome> {
    if Deliverable::find_by_id(record.id.as_str())
        .one(db)
        .await?
        .is_some()
    {
        info!(deliverable_id = %record.id, "Deliverable already exists, skipping insert");
        return Ok(UpsertOutcome::AlreadyPresent);
    }

    check_length("id_entregavel", Some(&record.id), limits::DELIVERABLE_ID)?;
    check_length(
        "id_avaliacao",
        record.evaluation_id.as_deref(),
        limits::EVALUATION_ID,
    )?;

    let model = ActiveModel {
        id: Set(record.id.clone()),
        evaluation_id: Set(record.evaluation_id.clone()),
        submitted_at: Set(record.submitted_at),
        respondent_name: Set(record.respondent_name.clone()),
        required_comment: Set(record.required_comment.clone()),
        optional_comment: Set(record.optional_comment.clone()),
        checklist_id: Set(record.checklist_id.clone()),
    };
    Deliverable::insert(model).exec_without_returning(db).await?;

    info!(
        deliverable_id = %record.id,
        submitted_at = ?record.submitted_at_display(),
        "Deliverable inserted"
    );
    Ok(UpsertOutcome::Inserted)
}
