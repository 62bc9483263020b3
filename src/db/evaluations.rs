//! Database operations for evaluations (`avaliacoes`).

use sea_orm::{ConnectionTrait, EntityTrait, Set};
use tracing::{error, info};

use super::UpsertOutcome;
use super::validation::{check_length, limits};
use crate::entity::evaluation::{ActiveModel, Entity as Evaluation};
use crate::error::ProcessingResult;
use crate::models::EvaluationStatus;

/// Insert an evaluation with status `in_progress` unless it already exists.
///
/// An existing row is left untouched, including its checklist and status.
pub async fn insert_evaluation<C>(
    db: &C,
    evaluation_id: &str,
    checklist_id: Option<&str>,
) -> ProcessingResult<UpsertOutcome>
where
    C: ConnectionTrait,
{
    upsert(db, evaluation_id, checklist_id)
        .await
        .inspect_err(|e| {
            error!(evaluation_id = %evaluation_id, "Failed to insert evaluation: {}", e);
        })
}

async fn upsert<C: ConnectionTrait>(
    db: &C,
    evaluation_id: &str,
    checklist_id: Option<&str>,
) -> ProcessingResult<UpsertOutcome> {
    if Evaluation::find_by_id(evaluation_id).one(db).await?.is_some() {
        info!(evaluation_id = %evaluation_id, "Evaluation already exists, skipping insert");
        return Ok(UpsertOutcome::AlreadyPresent);
    }

    check_length("id_avaliacao", Some(evaluation_id), limits::EVALUATION_ID)?;
    check_length("id_checklist", checklist_id, limits::CHECKLIST_ID)?;

    let model = ActiveModel {
        id: Set(evaluation_id.to_string()),
        checklist_id: Set(checklist_id.map(str::to_string)),
        status: Set(EvaluationStatus::InProgress.as_str().to_string()),
    };
    Evaluation::insert(model).exec_without_returning(db).await?;

    info!(
        evaluation_id = %evaluation_id,
        checklist_id = ?checklist_id,
        "Evaluation inserted"
    );
    Ok(UpsertOutcome::Inserted)
}
