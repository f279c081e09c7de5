//! Kotoba · Japanese placement backend library.
//!
//! Core pieces:
//! - `placement`: (score, total) → JLPT starting level
//! - `bank`: the fixed placement-test corpus + tolerant scoring
//! - `catalog`: static vocabulary reference data
//! - `gateway`: narrow client for the hosted account/billing service
//! - `routes`: axum HTTP surface wrapping the above

pub mod telemetry;
pub mod domain;
pub mod config;
pub mod seeds;
pub mod placement;
pub mod bank;
pub mod catalog;
pub mod romaji;
pub mod gateway;
pub mod state;
pub mod protocol;
pub mod logic;
pub mod routes;
