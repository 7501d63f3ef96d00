pub use sea_orm_migration::prelude::*;

mod m20250801_101500_create_pessoa_table;
mod m20250801_101730_create_convenio_table;
mod m20250801_102045_create_paciente_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250801_101500_create_pessoa_table::Migration),
            Box::new(m20250801_101730_create_convenio_table::Migration),
            Box::new(m20250801_102045_create_paciente_table::Migration),
        ]
    }
}
