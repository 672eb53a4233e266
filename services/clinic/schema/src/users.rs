use sea_orm::entity::prelude::*;

/// Common person record. `kind` tells which subtype table holds the rest.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub full_name: String,
    pub email: String,
    pub age: i32,
    pub address_id: Option<i32>,
    pub kind: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::addresses::Entity",
        from = "Column::AddressId",
        to = "super::addresses::Column::Id"
    )]
    Address,
    #[sea_orm(has_one = "super::patients::Entity")]
    Patient,
    #[sea_orm(has_one = "super::psychologists::Entity")]
    Psychologist,
}

impl Related<super::addresses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Address.def()
    }
}

impl Related<super::patients::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Patient.def()
    }
}

impl Related<super::psychologists::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Psychologist.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
