//! Carbon footprint quiz: deterministic scoring of five lifestyle answers,
//! language-model enrichment of the result, and static fallback content when
//! enrichment is unavailable.

pub mod config;
pub mod enrichment;
pub mod error;
pub mod quiz;
pub mod telemetry;
