pub mod db;
pub mod viacep;
