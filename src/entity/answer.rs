//! Answer entity. Rows are append-only; there is no natural key.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "respostas")]
pub struct Model {
    #[sea_orm(primary_key, column_name = "id_resposta")]
    pub id: i32,
    #[sea_orm(column_name = "id_entregavel")]
    pub deliverable_id: String,
    #[sea_orm(column_name = "id_pergunta")]
    pub question_id: Option<String>,
    #[sea_orm(column_name = "id_avaliacao")]
    pub evaluation_id: Option<String>,
    #[sea_orm(column_name = "valor_resposta")]
    pub value: Option<f64>,
    #[sea_orm(column_name = "texto_resposta", column_type = "Text", nullable)]
    pub text: Option<String>,
    #[sea_orm(column_name = "tipo_resposta")]
    pub answer_type: Option<String>,
    #[sea_orm(column_name = "ref")]
    pub field_ref: Option<String>,
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
