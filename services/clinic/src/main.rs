use sea_orm::Database;
use sea_orm_migration::MigratorTrait;
use tracing::info;

use clinic::config::ClinicConfig;
use clinic::infra::viacep::ViaCepClient;
use clinic::router::build_router;
use clinic::seed;
use clinic::state::AppState;
use clinic_core::tracing::init_tracing;
use clinic_migration::Migrator;

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    let config = ClinicConfig::from_env();
    init_tracing(&config.log_level);

    let db = Database::connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    if config.run_migrations {
        Migrator::up(&db, None)
            .await
            .expect("failed to run migrations");
    }

    let state = AppState {
        db,
        address_client: ViaCepClient::new(&config.viacep_base_url),
    };

    if config.seed_on_start {
        seed::run_all(&state, &config.seed_dir)
            .await
            .expect("seeding failed");
    }

    let router = build_router(state);
    let http_addr = format!("0.0.0.0:{}", config.clinic_port);
    let listener = tokio::net::TcpListener::bind(&http_addr)
        .await
        .expect("failed to bind");

    info!("clinic service listening on {http_addr}");
    axum::serve(listener, router).await.expect("server error");
}
