//! # Dashboard Core Types
//!
//! Layer 0 of the workspace: the plain data shapes shared by every other crate,
//! plus the validated parsing and decimal formatting rules they all agree on.
//! This crate has no knowledge of storage, configuration or rendering.

pub mod enums;
pub mod error;
pub mod money;
pub mod structs;

// Re-export the core types to provide a clean public API.
pub use enums::{Direction, Month, Productivity, RangeToken, Theme};
pub use error::CoreError;
pub use money::{format_currency, format_number, parse_amount, percent_change};
pub use structs::{CustomEntry, EntryId, NewEntry, PeriodRecord, TeamMember, YearMonth};
