//! Scoring engine and candidate registry for Outstanding School Paper Adviser
//! (OSPA) nominations.

pub mod config;
pub mod error;
pub mod registry;
pub mod scoring;
pub mod telemetry;
