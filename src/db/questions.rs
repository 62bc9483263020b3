//! Database operations for questions (`perguntas`) and their association
//! with deliverables (`perguntas_entregaveis`).

use sea_orm::{ConnectionTrait, EntityTrait, Set};
use tracing::{error, info};

use super::UpsertOutcome;
use super::validation::{check_length, limits, require};
use crate::entity::question::{ActiveModel, Entity as Question};
use crate::entity::question_deliverable::{
    ActiveModel as QuestionDeliverableActiveModel, Entity as QuestionDeliverable,
};
use crate::error::ProcessingResult;
use crate::models::QuestionRecord;

/// Make sure the (question, evaluation) pair exists.
///
/// Existing rows are not updated, so later edits to the form title or order
/// do not change stored questions.
pub async fn ensure_question<C>(db: &C, record: &QuestionRecord) -> ProcessingResult<UpsertOutcome>
where
    C: ConnectionTrait,
{
    upsert_question(db, record).await.inspect_err(|e| {
        error!(question_id = %record.id, "Failed to check/insert question: {}", e);
    })
}

async fn upsert_question<C: ConnectionTrait>(
    db: &C,
    record: &QuestionRecord,
) -> ProcessingResult<UpsertOutcome> {
    let evaluation_id = require("id_avaliacao", record.evaluation_id.as_deref())?;

    let existing = Question::find_by_id((record.id.clone(), evaluation_id.to_string()))
        .one(db)
        .await?;
    if existing.is_some() {
        info!(question_id = %record.id, "Question already exists, skipping insert");
        return Ok(UpsertOutcome::AlreadyPresent);
    }

    check_length("id_pergunta", Some(&record.id), limits::QUESTION_ID)?;

    let model = ActiveModel {
        id: Set(record.id.clone()),
        evaluation_id: Set(evaluation_id.to_string()),
        text: Set(record.text_or_placeholder().to_string()),
        question_type: Set(record.question_type.clone()),
        order: Set(record.order),
        field_ref: Set(record.field_ref.clone()),
    };
    Question::insert(model).exec_without_returning(db).await?;

    info!(question_id = %record.id, order = record.order, "Question inserted");
    Ok(UpsertOutcome::Inserted)
}

/// Link a question to a deliverable unless the link exists.
pub async fn associate_question<C>(
    db: &C,
    question_id: &str,
    deliverable_id: &str,
) -> ProcessingResult<UpsertOutcome>
where
    C: ConnectionTrait,
{
    upsert_association(db, question_id, deliverable_id)
        .await
        .inspect_err(|e| {
            error!(
                question_id = %question_id,
                deliverable_id = %deliverable_id,
                "Failed to associate question with deliverable: {}", e
            );
        })
}

async fn upsert_association<C: ConnectionTrait>(
    db: &C,
    question_id: &str,
    deliverable_id: &str,
) -> ProcessingResult<UpsertOutcome> {
    let existing =
        QuestionDeliverable::find_by_id((question_id.to_string(), deliverable_id.to_string()))
            .one(db)
            .await?;
    if existing.is_some() {
        info!(
            question_id = %question_id,
            deliverable_id = %deliverable_id,
            "Question already associated with deliverable"
        );
        return Ok(UpsertOutcome::AlreadyPresent);
    }

    let model = QuestionDeliverableActiveModel {
        question_id: Set(question_id.to_string()),
        deliverable_id: Set(deliverable_id.to_string()),
    };
    QuestionDeliverable::insert(model)
        .exec_without_returning(db)
        .await?;

    info!(
        question_id = %question_id,
        deliverable_id = %deliverable_id,
        "Question associated with deliverable"
    );
    Ok(UpsertOutcome::Inserted)
}
