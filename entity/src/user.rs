use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// The owning user looked up through `cupcake::Column::CreatedBy`.
/// Read-only from this subsystem.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub created_at: Option<DateTimeUtc>,
    pub updated_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::cupcake::Entity")]
    Cupcake,
}

impl Related<super::cupcake::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Cupcake.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
