//! Create perguntas_entregaveis join table.

use sea_orm_migration::prelude::*;

use super::m20260301_000003_create_entregaveis::Entregaveis;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PerguntasEntregaveis::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PerguntasEntregaveis::IdPergunta)
                            .string_len(50)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PerguntasEntregaveis::IdEntregavel)
                            .string_len(255)
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(PerguntasEntregaveis::IdPergunta)
                            .col(PerguntasEntregaveis::IdEntregavel),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_perguntas_entregaveis_entregavel")
                            .from(PerguntasEntregaveis::Table, PerguntasEntregaveis::IdEntregavel)
                            .to(Entregaveis::Table, Entregaveis::IdEntregavel)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PerguntasEntregaveis::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum PerguntasEntregaveis {
    Table,
    IdPergunta,
    IdEntregavel,
}
