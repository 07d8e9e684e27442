//! # Taskman Shared Library
//!
//! This crate contains the persistence layer shared by the taskman API
//! server and its tests.
//!
//! ## Module Organization
//!
//! - `db`: SQLite connection pool and migration runner
//! - `models`: Database models (User, Task) and their CRUD queries

pub mod db;
pub mod models;

/// Current version of the taskman shared library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
