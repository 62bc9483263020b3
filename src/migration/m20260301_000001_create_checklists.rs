//! Create checklists table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Checklists::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Checklists::IdChecklist)
                            .string_len(45)
                            .not_null()
                            .primary_key(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Checklists::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Checklists {
    Table,
    IdChecklist,
}
