//! Traits for record types
//!
//! This module contains the trait that describes a record type's fields to the
//! mapping engines.

pub mod record;

pub use record::{FieldDescriptor, Record};
