//! Question entity, keyed by (question id, evaluation id).

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "perguntas")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_name = "id_pergunta")]
    pub id: String,
    #[sea_orm(primary_key, auto_increment = false, column_name = "id_avaliacao")]
    pub evaluation_id: String,
    #[sea_orm(column_name = "texto_pergunta", column_type = "Text")]
    pub text: String,
    #[sea_orm(column_name = "tipo_pergunta")]
    pub question_type: Option<String>,
    /// 1-based position in the form definition
    #[sea_orm(column_name = "ordem")]
    pub order: i32,
    #[sea_orm(column_name = "ref")]
    pub field_ref: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::evaluation::Entity",
        from = "Column::EvaluationId",
        to = "super::evaluation::Column::Id"
    )]
    Evaluation,
}

impl Related<super::evaluation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Evaluation.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
