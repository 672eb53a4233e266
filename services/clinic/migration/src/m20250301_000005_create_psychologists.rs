use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Psychologists::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Psychologists::UserId)
                            .integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Psychologists::LicenseNumber)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Psychologists::ApproachId).integer().null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Psychologists::Table, Psychologists::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Psychologists::Table, Psychologists::ApproachId)
                            .to(Approaches::Table, Approaches::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Psychologists::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Psychologists {
    Table,
    UserId,
    LicenseNumber,
    ApproachId,
}

#[derive(Iden)]
enum Users {
    Table,
    Id,
}

#[derive(Iden)]
enum Approaches {
    Table,
    Id,
}
