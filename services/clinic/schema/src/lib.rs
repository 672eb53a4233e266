pub mod addresses;
pub mod appointments;
pub mod approaches;
pub mod patients;
pub mod psychologists;
pub mod users;
