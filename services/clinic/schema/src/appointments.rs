use sea_orm::entity::prelude::*;

/// Session between one psychologist and one patient.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "appointments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub psychologist_id: i32,
    pub patient_id: i32,
    pub kind: String,
    pub date: String,
    /// `false` = in progress, `true` = completed.
    pub status: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::psychologists::Entity",
        from = "Column::PsychologistId",
        to = "super::psychologists::Column::UserId"
    )]
    Psychologist,
    #[sea_orm(
        belongs_to = "super::patients::Entity",
        from = "Column::PatientId",
        to = "super::patients::Column::UserId"
    )]
    Patient,
}

impl Related<super::psychologists::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Psychologist.def()
    }
}

impl Related<super::patients::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Patient.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
