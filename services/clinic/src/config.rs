use std::path::PathBuf;

use clinic_core::config::{flag_or, parse_or, require, string_or};

/// Clinic service configuration loaded from environment variables.
#[derive(Debug)]
pub struct ClinicConfig {
    /// Database connection URL (`postgres://...` or `sqlite://...`).
    pub database_url: String,
    /// TCP port for the HTTP server (default 8080). Env var: `CLINIC_PORT`.
    pub clinic_port: u16,
    /// ViaCEP base URL without trailing slash. Env var: `VIACEP_BASE_URL`.
    pub viacep_base_url: String,
    /// Directory holding the seed files (default `files`). Env var: `SEED_DIR`.
    pub seed_dir: PathBuf,
    pub seed_on_start: bool,
    pub run_migrations: bool,
    /// Fallback log directive when `RUST_LOG` is unset. Env var: `LOG_LEVEL`.
    pub log_level: String,
}

impl ClinicConfig {
    pub const DEFAULT_PORT: u16 = 8080;
    pub const DEFAULT_VIACEP_BASE_URL: &'static str = "https://viacep.com.br/ws";

    pub fn from_env() -> Self {
        Self {
            database_url: require("DATABASE_URL"),
            clinic_port: parse_or("CLINIC_PORT", Self::DEFAULT_PORT),
            viacep_base_url: string_or("VIACEP_BASE_URL", Self::DEFAULT_VIACEP_BASE_URL)
                .trim_end_matches('/')
                .to_owned(),
            seed_dir: PathBuf::from(string_or("SEED_DIR", "files")),
            seed_on_start: flag_or("SEED_ON_START", true),
            run_migrations: flag_or("RUN_MIGRATIONS", true),
            log_level: string_or("LOG_LEVEL", "info"),
        }
    }
}
