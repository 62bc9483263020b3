//! SeaORM database migrations.

pub use sea_orm_migration::prelude::*;

mod m20260301_000001_create_checklists;
mod m20260301_000002_create_avaliacoes;
mod m20260301_000003_create_entregaveis;
mod m20260301_000004_create_perguntas;
mod m20260301_000005_create_perguntas_entregaveis;
mod m20260301_000006_create_respostas;
mod m20260301_000007_create_logs_processamento;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_create_checklists::Migration),
            Box::new(m20260301_000002_create_avaliacoes::Migration),
            Box::new(m20260301_000003_create_entregaveis::Migration),
            Box::new(m20260301_000004_create_perguntas::Migration),
            Box::new(m20260301_000005_create_perguntas_entregaveis::Migration),
            Box::new(m20260301_000006_create_respostas::Migration),
            Box::new(m20260301_000007_create_logs_processamento::Migration),
        ]
    }
}
