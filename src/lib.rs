//! # rowmap
//!
//! Bidirectional mapping between typed Rust records and relational rows: executed query
//! results become records, and records become single-table INSERT statements.
//!
//! ## Quick Start
//!
//! ```rust
//! use rowmap::prelude::*;
//!
//! #[record]
//! pub struct User {
//!     #[column(name = "usr_id")]
//!     pub id: i32,
//!     pub name: String,
//!     pub active: bool,
//! }
//!
//! fn main() -> Result<(), RowmapError> {
//!     let mut reflector = Reflector::<User>::from_default();
//!     reflector.config_mut().set_case_sensitive(false);
//!
//!     let mut rows = MemoryResultSet::new(["USR_ID", "NAME", "ACTIVE"]).with_row(vec![
//!         SqlValue::Integer(1),
//!         SqlValue::Text("Alice".into()),
//!         SqlValue::Boolean(true),
//!     ]);
//!     let users = reflector.reflect(&mut rows)?;
//!     assert_eq!(users[0].name, "Alice");
//!
//!     let sql = reflector.serialize_to_sql(&users, "users", None)?;
//!     assert_eq!(sql, "INSERT INTO users (usr_id, name, active) VALUES (1,'Alice',true)");
//!     Ok(())
//! }
//! ```
//!
//! String literals are embedded without escaping; the generated SQL must not be fed
//! untrusted text.

pub mod core;
pub mod errors;
pub mod prelude;

// Re-export the main public types for convenience
pub use crate::core::Reflector;
pub use crate::errors::RowmapError;

// Re-export centralized config
pub use mapper_config::{ConfigError, DatePattern, MapperConfig};

// Re-export internal crates used by macros and public API
// These MUST be public for the generated macro code to work correctly
pub use record_derive::{record, Record};
pub use record_mapper;
pub use type_mapping;
