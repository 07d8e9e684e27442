/// API route handlers
///
/// This module contains all route handlers organized by resource:
///
/// - `health`: Health check endpoint
/// - `user`: User resource endpoints (list, get, create, update, delete)
/// - `task`: Task resource endpoints (list, get, create, update, delete)

pub mod health;
pub mod task;
pub mod user;

use serde::{Deserialize, Serialize};

/// Minimal acknowledgment body returned by the mutating endpoints
///
/// Contains the HTTP status code and a human-readable transaction outcome,
/// e.g. `{"status_code": 201, "transaction": "Successful"}`.
#[derive(Debug, Serialize, Deserialize)]
pub struct Ack {
    /// HTTP status code of the response
    pub status_code: u16,

    /// Transaction outcome string
    pub transaction: String,
}

impl Ack {
    /// Ack for a successful create (201)
    pub fn created() -> Self {
        Self {
            status_code: 201,
            transaction: "Successful".to_string(),
        }
    }

    /// Ack for a successful update or delete (200)
    pub fn ok(transaction: &str) -> Self {
        Self {
            status_code: 200,
            transaction: transaction.to_string(),
        }
    }
}
