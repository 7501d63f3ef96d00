use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Convenio::Table)
                    .if_not_exists()
                    .col(pk_auto(Convenio::IdConvenio))
                    .col(string(Convenio::Nome))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Convenio::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Convenio {
    #[sea_orm(iden = "Convenio")]
    Table,
    IdConvenio,
    Nome,
}
