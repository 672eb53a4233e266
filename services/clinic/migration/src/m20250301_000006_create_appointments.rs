use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Appointments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Appointments::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Appointments::PsychologistId)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Appointments::PatientId).integer().not_null())
                    .col(ColumnDef::new(Appointments::Kind).string_len(100).not_null())
                    .col(ColumnDef::new(Appointments::Date).string().not_null())
                    .col(
                        ColumnDef::new(Appointments::Status)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Appointments::Table, Appointments::PsychologistId)
                            .to(Psychologists::Table, Psychologists::UserId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Appointments::Table, Appointments::PatientId)
                            .to(Patients::Table, Patients::UserId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Appointments::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Appointments {
    Table,
    Id,
    PsychologistId,
    PatientId,
    Kind,
    Date,
    Status,
}

#[derive(Iden)]
enum Psychologists {
    Table,
    UserId,
}

#[derive(Iden)]
enum Patients {
    Table,
    UserId,
}
