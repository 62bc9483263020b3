//! Evaluation entity: one form definition, grouping many deliverables.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "avaliacoes")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_name = "id_avaliacao")]
    pub id: String,
    #[sea_orm(column_name = "id_checklist")]
    pub checklist_id: Option<String>,
    pub status: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::checklist::Entity",
        from = "Column::ChecklistId",
        to = "super::checklist::Column::Id"
    )]
    Checklist,
    #[sea_orm(has_many = "super::deliverable::Entity")]
    Deliverable,
    #[sea_orm(has_many = "super::question::Entity")]
    Question,
}

impl Related<super::checklist::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Checklist.def()
    }
}

impl Related<super::deliverable::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Deliverable.def()
    }
}

impl Related<super::question::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Question.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
