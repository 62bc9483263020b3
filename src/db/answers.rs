//! Database operations for answers (`respostas`).

use sea_orm::{ConnectionTrait, EntityTrait, Set};
use tracing::{error, info};

use crate::entity::answer::{ActiveModel, Entity as Answer};
use crate::error::ProcessingResult;
use crate::models::AnswerRecord;

/// Append an answer row.
///
/// There is no existence check: a redelivered event adds its answers again.
pub async fn insert_answer<C>(db: &C, record: &AnswerRecord) -> ProcessingResult<()>
where
    C: ConnectionTrait,
{
    let model = ActiveModel {
        deliverable_id: Set(record.deliverable_id.clone()),
        question_id: Set(record.question_id.clone()),
        evaluation_id: Set(record.evaluation_id.clone()),
        value: Set(record.value),
        text: Set(record.text.clone()),
        answer_type: Set(record.answer_type.clone()),
        field_ref: Set(record.field_ref.clone()),
        ..Default::default()
    };

    Answer::insert(model)
        .exec_without_returning(db)
        .await
        .inspect_err(|e| {
            error!(
                question_id = ?record.question_id,
                "Failed to insert answer: {}", e
            );
        })?;

    info!(question_id = ?record.question_id, "Answer inserted");
    Ok(())
}
