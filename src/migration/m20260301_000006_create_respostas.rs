//! Create respostas (answers) table.

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
                    .table(Respostas::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Respostas::IdResposta)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Respostas::IdEntregavel).string_len(255).not_null())
                    .col(ColumnDef::new(Respostas::IdPergunta).string_len(50).null())
                    .col(ColumnDef::new(Respostas::IdAvaliacao).string_len(45).null())
                    .col(ColumnDef::new(Respostas::ValorResposta).double().null())
                    .col(ColumnDef::new(Respostas::TextoResposta).text().null())
                    .col(ColumnDef::new(Respostas::TipoResposta).string_len(50).null())
                    .col(ColumnDef::new(Respostas::Ref).string().null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_respostas_entregavel")
                            .from(Respostas::Table, Respostas::IdEntregavel)
                            .to(Entregaveis::Table, Entregaveis::IdEntregavel)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_respostas_entregavel")
                    .table(Respostas::Table)
                    .col(Respostas::IdEntregavel)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Respostas::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Respostas {
    Table,
    IdResposta,
    IdEntregavel,
    IdPergunta,
    IdAvaliacao,
    ValorResposta,
    TextoResposta,
    TipoResposta,
    Ref,
}
