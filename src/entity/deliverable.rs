//! Deliverable entity: one submission event from the provider.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "entregaveis")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_name = "id_entregavel")]
    pub id: String,
    #[sea_orm(column_name = "id_avaliacao")]
    pub evaluation_id: Option<String>,
    #[sea_orm(column_name = "data_recebimento")]
    pub submitted_at: Option<DateTime>,
    #[sea_orm(column_name = "nome_respondente")]
    pub respondent_name: Option<String>,
    #[sea_orm(column_name = "comentario_obrigatorio", column_type = "Text", nullable)]
    pub required_comment: Option<String>,
    #[sea_orm(column_name = "comentario_opcional", column_type = "Text", nullable)]
    pub optional_comment: Option<String>,
    #[sea_orm(column_name = "id_checklist")]
    pub checklist_id: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::evaluation::Entity",
        from = "Column::EvaluationId",
        to = "super::evaluation::Column::Id"
    )]
    Evaluation,
    #[sea_orm(has_many = "super::answer::Entity")]
    Answer,
}

impl Related<super::evaluation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Evaluation.def()
    }
}

impl Related<super::answer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Answer.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
