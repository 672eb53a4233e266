//! Test utilities for the clinic service.
//!
//! Provides an in-memory migrated database, throwaway seed directories and a
//! loopback HTTP upstream. Import from tests only.

pub mod db;
pub mod fixture;
pub mod upstream;
