//! Database operations for checklists.

use sea_orm::{ConnectionTrait, EntityTrait, Set};
use tracing::{error, info};

use super::UpsertOutcome;
use super::validation::{check_length, limits};
use crate::entity::checklist::{ActiveModel, Entity as Checklist};
use crate::error::ProcessingResult;

/// Insert a checklist unless it already exists.
pub async fn insert_checklist<C>(db: &C, checklist_id: &str) -> ProcessingResult<UpsertOutcome>
where
    C: ConnectionTrait,
{
    upsert(db, checklist_id).await.inspect_err(|e| {
        error!(checklist_id = %checklist_id, "Failed to insert checklist: {}", e);
    })
}

async fn upsert<C: ConnectionTrait>(db: &C, checklist_id: &str) -> ProcessingResult<UpsertOutcome> {
    if Checklist::find_by_id(checklist_id).one(db).await?.is_some() {
        info!(checklist_id = %checklist_id, "Checklist already exists, skipping insert");
        return Ok(UpsertOutcome::AlreadyPresent);
    }

    check_length("id_checklist", Some(checklist_id), limits::CHECKLIST_ID)?;

    let model = ActiveModel {
        id: Set(checklist_id.to_string()),
    };
    Checklist::insert(model).exec_without_returning(db).await?;

    info!(checklist_id = %checklist_id, "Checklist inserted");
    Ok(UpsertOutcome::Inserted)
}
