//! Create perguntas (questions) table.

use sea_orm_migration::prelude::*;

use super::m20260301_000002_create_avaliacoes::Avaliacoes;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Perguntas::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Perguntas::IdPergunta).string_len(50).not_null())
                    .col(ColumnDef::new(Perguntas::IdAvaliacao).string_len(45).not_null())
                    .col(ColumnDef::new(Perguntas::TextoPergunta).text().not_null())
                    .col(ColumnDef::new(Perguntas::TipoPergunta).string_len(50).null())
                    .col(ColumnDef::new(Perguntas::Ordem).integer().not_null())
                    .col(ColumnDef::new(Perguntas::Ref).string().null())
                    .primary_key(
                        Index::create()
                            .col(Perguntas::IdPergunta)
                            .col(Perguntas::IdAvaliacao),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_perguntas_avaliacao")
                            .from(Perguntas::Table, Perguntas::IdAvaliacao)
                            .to(Avaliacoes::Table, Avaliacoes::IdAvaliacao),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Perguntas::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Perguntas {
    Table,
    IdPergunta,
    IdAvaliacao,
    TextoPergunta,
    TipoPergunta,
    Ordem,
    Ref,
}
