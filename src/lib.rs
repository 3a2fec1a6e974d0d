//! Mindful Path - Life-Balance Assessment Backend
//!
//! Scores three levels of twelve-domain questionnaires, gates the paid
//! levels behind completed payments and assembles cumulative feedback
//! reports.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
