//! Create entregaveis (deliverables) table.

use sea_orm_migration::prelude::*;

use super::m20260301_000001_create_checklists::Checklists;
use super::m20260301_000002_create_avaliacoes::Avaliacoes;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Entregaveis::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Entregaveis::IdEntregavel)
                            .string_len(255)
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Entregaveis::IdAvaliacao).string_len(45).null())
                    .col(ColumnDef::new(Entregaveis::DataRecebimento).date_time().null())
                    .col(ColumnDef::new(Entregaveis::NomeRespondente).string().null())
                    .col(ColumnDef::new(Entregaveis::ComentarioObrigatorio).text().null())
                    .col(ColumnDef::new(Entregaveis::ComentarioOpcional).text().null())
                    .col(ColumnDef::new(Entregaveis::IdChecklist).string_len(45).null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_entregaveis_avaliacao")
                            .from(Entregaveis::Table, Entregaveis::IdAvaliacao)
                            .to(Avaliacoes::Table, Avaliacoes::IdAvaliacao),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_entregaveis_checklist")
                            .from(Entregaveis::Table, Entregaveis::IdChecklist)
                            .to(Checklists::Table, Checklists::IdChecklist),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_entregaveis_avaliacao")
                    .table(Entregaveis::Table)
                    .col(Entregaveis::IdAvaliacao)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Entregaveis::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Entregaveis {
    Table,
    IdEntregavel,
    IdAvaliacao,
    DataRecebimento,
    NomeRespondente,
    ComentarioObrigatorio,
    ComentarioOpcional,
    IdChecklist,
}
