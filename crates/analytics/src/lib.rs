//! # Dashboard Analytics
//!
//! Derives the headline KPIs and the pipeline stage breakdown from windows of
//! the period series.
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Logic:** This is a pure logic crate. It has no knowledge of storage
//!   or rendering and depends only on `core-types` and the configured stub values.
//! - **Stateless Calculation:** `KpiEngine` takes a slice of `PeriodRecord`s and
//!   produces a `KpiSet`; nothing is cached between queries.
//!
//! ## Public API
//!
//! - `KpiEngine`: The KPI Aggregator.
//! - `KpiSet` / `KpiDatum`: The six computed metrics and their trend data.
//! - `decompose`: The Pipeline Decomposer over the latest period.
//! - `AnalyticsError`: The specific error types that can be returned from this crate.

// Declare the modules that constitute this crate.
pub mod engine;
pub mod error;
pub mod pipeline;
pub mod report;

// Re-export the key components to create a clean, public-facing API.
pub use engine::KpiEngine;
pub use error::AnalyticsError;
pub use pipeline::{decompose, PipelineStage, StageBucket};
pub use report::{KpiDatum, KpiKind, KpiSet, KpiUnit};
