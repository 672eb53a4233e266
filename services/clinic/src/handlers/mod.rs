pub mod appointment;
pub mod approach;
pub mod body;
pub mod patient;
pub mod psychologist;
pub mod user;
pub mod views;
