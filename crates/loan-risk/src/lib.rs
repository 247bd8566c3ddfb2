//! Loan default risk scoring service core.
//!
//! The crate owns the inference request pipeline: an applicant record is
//! expanded into a feature row, one-hot encoded, reindexed against the
//! training-time schema, scaled, and handed to the frozen classifier. The
//! model, scaler, and column list are opaque artifacts produced by an
//! offline training pipeline and loaded once at startup.

pub mod config;
pub mod error;
pub mod scoring;
pub mod telemetry;
