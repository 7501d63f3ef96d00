use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Health-insurance lookup table; read-only from this API's perspective.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "Convenio")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id_convenio: i32,
    pub nome: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::paciente::Entity")]
    Paciente,
}

impl Related<super::paciente::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Paciente.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
