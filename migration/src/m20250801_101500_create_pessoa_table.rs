use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Pessoa::Table)
                    .if_not_exists()
                    .col(pk_auto(Pessoa::IdPessoa))
                    .col(string(Pessoa::Nome))
                    .col(string_uniq(Pessoa::Cpf))
                    .col(string_null(Pessoa::Telefone))
                    .col(string_null(Pessoa::Email))
                    .col(string_null(Pessoa::Endereco))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Pessoa::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Pessoa {
    #[sea_orm(iden = "Pessoa")]
    Table,
    IdPessoa,
    Nome,
    Cpf,
    Telefone,
    Email,
    Endereco,
}
