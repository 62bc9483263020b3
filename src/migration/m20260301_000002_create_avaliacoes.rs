//! Create avaliacoes (evaluations) table.

use sea_orm_migration::prelude::*;

use super::m20260301_000001_create_checklists::Checklists;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Avaliacoes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Avaliacoes::IdAvaliacao)
                            .string_len(45)
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Avaliacoes::IdChecklist).string_len(45).null())
                    .col(
                        ColumnDef::new(Avaliacoes::Status)
                            .string_len(20)
                            .not_null()
                            .default("in_progress"),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_avaliacoes_checklist")
                            .from(Avaliacoes::Table, Avaliacoes::IdChecklist)
                            .to(Checklists::Table, Checklists::IdChecklist),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Avaliacoes::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Avaliacoes {
    Table,
    IdAvaliacao,
    IdChecklist,
    Status,
}
