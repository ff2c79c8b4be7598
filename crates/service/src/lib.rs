//! Service layer providing business-oriented operations on top of the stores.
//! - Separates business logic from data access.
//! - Reuses validation and entity definitions in `models` crate.
//! - Provides clear error types and documented interfaces.

pub mod errors;
pub mod people;
pub mod storage;
pub mod users;
