use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_index(
                Index::create()
                    .table(Appointments::Table)
                    .col(Appointments::PsychologistId)
                    .name("idx_appointments_psychologist_id")
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .table(Appointments::Table)
                    .col(Appointments::PatientId)
                    .name("idx_appointments_patient_id")
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .table(Appointments::Table)
                    .col(Appointments::Status)
                    .name("idx_appointments_status")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_appointments_status")
                    .table(Appointments::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("idx_appointments_patient_id")
                    .table(Appointments::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("idx_appointments_psychologist_id")
                    .table(Appointments::Table)
                    .to_owned(),
            )
            .await
    }
}

#[derive(Iden)]
enum Appointments {
    Table,
    PsychologistId,
    PatientId,
    Status,
}
