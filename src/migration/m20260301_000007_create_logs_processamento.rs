//! Create logs_processamento (processing audit) table.
//!
//! No foreign key to entregaveis: failure rows outlive a rolled-back insert.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(LogsProcessamento::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(LogsProcessamento::IdLog)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(LogsProcessamento::IdEntregavel)
                            .string_len(255)
                            .null(),
                    )
                    .col(
                        ColumnDef::new(LogsProcessamento::DataProcessamento)
                            .date_time()
                            .not_null(),
                    )
                    .col(ColumnDef::new(LogsProcessamento::Status).string_len(20).not_null())
                    .col(ColumnDef::new(LogsProcessamento::Mensagem).text().null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_logs_processamento_entregavel")
                    .table(LogsProcessamento::Table)
                    .col(LogsProcessamento::IdEntregavel)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(LogsProcessamento::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum LogsProcessamento {
    Table,
    IdLog,
    IdEntregavel,
    DataProcessamento,
    Status,
    Mensagem,
}
