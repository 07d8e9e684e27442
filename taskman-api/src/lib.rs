//! # Taskman API Server Library
//!
//! This library provides the core functionality for the taskman API server.
//!
//! ## Modules
//!
//! - `app`: Application state and router builder
//! - `config`: Configuration management
//! - `error`: Error handling and HTTP response mapping
//! - `routes`: API route handlers (health, user, task)

pub mod app;
pub mod config;
pub mod error;
pub mod routes;
