use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Paciente::Table)
                    .if_not_exists()
                    .col(integer(Paciente::IdPaciente).primary_key())
                    .col(date(Paciente::DataNascimento))
                    .col(integer_null(Paciente::IdConvenio))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_paciente_pessoa")
                            .from(Paciente::Table, Paciente::IdPaciente)
                            .to(Pessoa::Table, Pessoa::IdPessoa),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_paciente_convenio")
                            .from(Paciente::Table, Paciente::IdConvenio)
                            .to(Convenio::Table, Convenio::IdConvenio),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Paciente::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Paciente {
    #[sea_orm(iden = "Paciente")]
    Table,
    IdPaciente,
    DataNascimento,
    IdConvenio,
}

#[derive(DeriveIden)]
enum Pessoa {
    #[sea_orm(iden = "Pessoa")]
    Table,
    IdPessoa,
}

#[derive(DeriveIden)]
enum Convenio {
    #[sea_orm(iden = "Convenio")]
    Table,
    IdConvenio,
}
