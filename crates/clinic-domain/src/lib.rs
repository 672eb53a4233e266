//! Domain types shared across the clinic crates.
//!
//! This crate contains only pure types with no framework dependencies.
//! Import in `usecase/` and `domain/` layers; never in `infra/` or `handlers/`.

pub mod appointment;
pub mod postal_code;
pub mod sort;
pub mod user;
