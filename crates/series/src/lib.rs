//! # Synthetic Period Series
//!
//! Generates the deterministic 12-month business series, owns it for the
//! lifetime of a dashboard, and selects windows of it by range token.
//!
//! ## Public API
//!
//! - `SequenceGenerator`: seeds a Park-Miller generator and walks 12 months back from an anchor.
//! - `Series`: the canonical record collection, with the single override-by-label mutation.
//! - `filter_range`: the range filter over any chronological slice of records.

pub mod filter;
pub mod generator;
pub mod rng;
pub mod series;

pub use filter::filter_range;
pub use generator::{SequenceGenerator, SERIES_MONTHS};
pub use rng::ParkMiller;
pub use series::Series;
