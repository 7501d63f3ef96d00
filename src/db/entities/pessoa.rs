use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "Pessoa")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id_pessoa: i32,
    pub nome: String,
    #[sea_orm(unique)]
    pub cpf: String,
    pub telefone: Option<String>,
    pub email: Option<String>,
    pub endereco: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_one = "super::paciente::Entity")]
    Paciente,
}

impl Related<super::paciente::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Paciente.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
