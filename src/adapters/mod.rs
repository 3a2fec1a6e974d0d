//! Adapters - Implementations of port interfaces.
//!
//! - `access` - Level access backed by the payment log
//! - `auth` - Session token validation (JWT, mock)
//! - `http` - Axum routers, DTOs and middleware
//! - `memory` - In-memory stores for tests and local runs
//! - `paypal` - PayPal gateway and its mock
//! - `postgres` - PostgreSQL persistence

pub mod access;
pub mod auth;
pub mod http;
pub mod memory;
pub mod paypal;
pub mod postgres;
