pub mod address;
pub mod appointment;
pub mod approach;
pub mod inclusion;
pub mod patient;
pub mod psychologist;
pub mod user;
