use sea_orm::entity::prelude::*;

/// Treatment approach shared by many psychologists.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "approaches")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub description: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::psychologists::Entity")]
    Psychologists,
}

impl Related<super::psychologists::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Psychologists.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
