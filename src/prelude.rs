//! Convenience re-exports for common rowmap usage
//!
//! # Example
//!
//! ```rust
//! use rowmap::prelude::*;
//!
//! let reflector: Reflector<Tag> = Reflector::from_default();
//! assert!(reflector.config().is_case_sensitive());
//!
//! #[record]
//! struct Tag {
//!     id: i64,
//!     label: Option<String>,
//! }
//! ```

// Facade
pub use crate::core::Reflector;
pub use crate::errors::RowmapError;

// Record derive
pub use record_derive::{record, Record};

// Mapper types, traits, result sets and configuration
pub use record_mapper::prelude::*;
