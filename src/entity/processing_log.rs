//! Processing audit trail. Deliberately not linked to `entregaveis`: failure
//! rows are written after the deliverable insert was rolled back.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "logs_processamento")]
pub struct Model {
    #[sea_orm(primary_key, column_name = "id_log")]
    pub id: i32,
    #[sea_orm(column_name = "id_entregavel")]
    pub deliverable_id: Option<String>,
    #[sea_orm(column_name = "data_processamento")]
    pub processed_at: DateTime,
    pub status: String,
    #[sea_orm(column_name = "mensagem", column_type = "Text", nullable)]
    pub message: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
