//! roster-core — Record store, entry validators and sample data.
//!
//! This crate defines the data model that the roster manager builds on,
//! the append-only store holding it for the session, and the validation
//! rules every interactive entry goes through.

pub mod config;
pub mod error;
pub mod model;
pub mod sample;
pub mod store;
pub mod validate;

pub use config::{load_config_from, RosterConfig, SampleSettings};
pub use error::{RosterError, SampleError, ValidationError};
pub use model::{Course, Mark, Score, Student};
pub use store::RosterStore;
