pub mod errors;
pub mod person;
pub mod user;
