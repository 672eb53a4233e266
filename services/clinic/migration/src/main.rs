use sea_orm_migration::prelude::*;

#[tokio::main]
async fn main() {
    cli::run_cli(clinic_migration::Migrator).await;
}
