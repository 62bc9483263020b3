//! Join table between questions and the deliverables that carried them.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "perguntas_entregaveis")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_name = "id_pergunta")]
    pub question_id: String,
    #[sea_orm(primary_key, auto_increment = false, column_name = "id_entregavel")]
    pub deliverable_id: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::deliverable::Entity",
        from = "Column::DeliverableId",
        to = "super::deliverable::Column::Id",
        on_delete = "Cascade"
    )]
    Deliverable,
}

impl Related<super::deliverable::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Deliverable.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
