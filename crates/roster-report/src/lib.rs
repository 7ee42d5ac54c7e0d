//! roster-report — Text reports for the roster manager.
//!
//! Renders the record store as a fixed-width grid with one column per
//! student and one row per course.

pub mod table;

pub use table::{render_table, TableOutcome};
