use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// 1:1 extension of [`super::pessoa`]; shares its primary key.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "Paciente")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id_paciente: i32,
    pub data_nascimento: Date,
    pub id_convenio: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::pessoa::Entity",
        from = "Column::IdPaciente",
        to = "super::pessoa::Column::IdPessoa"
    )]
    Pessoa,
    #[sea_orm(
        belongs_to = "super::convenio::Entity",
        from = "Column::IdConvenio",
        to = "super::convenio::Column::IdConvenio"
    )]
    Convenio,
}

impl Related<super::pessoa::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Pessoa.def()
    }
}

impl Related<super::convenio::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Convenio.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
