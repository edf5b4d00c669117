//! growthpath-core: assessment scoring, report aggregation, and plan generation.
//!
//! This crate defines the data model every other growthpath crate builds
//! on, the three scorers (personality, memory, speech), the final report
//! aggregator, improvement plan generation, and the key-value storage
//! capability the front ends persist results through.

pub mod analysis;
pub mod dashboard;
pub mod error;
pub mod memory;
pub mod model;
pub mod personality;
pub mod plan;
pub mod speech;
pub mod storage;
