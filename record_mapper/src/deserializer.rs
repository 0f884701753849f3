//! Result rows into records
//!
//! Bindings are resolved once per result set from its column labels; every row then
//! becomes a fresh record built by the factory with each bound field assigned.

use mapper_config::MapperConfig;
use tracing::{info, warn};

use crate::coercion::read_cell;
use crate::errors::MapperError;
use crate::resolver::{resolve, ColumnSet, FieldBinding};
use crate::result_set::ResultSet;
use crate::traits::Record;
use crate::trace_log;

pub struct Deserializer<'a, T> {
    factory: &'a dyn Fn() -> T,
    config: &'a MapperConfig,
}

impl<'a, T: Record> Deserializer<'a, T> {
    pub fn new(factory: &'a dyn Fn() -> T, config: &'a MapperConfig) -> Self {
        Self { factory, config }
    }

    /// Read every remaining row of `result_set` into records
    ///
    /// Returns an empty list when no field matches a column. Any metadata, cell or
    /// assignment failure aborts the whole call; rows already consumed from the
    /// result set stay consumed.
    pub fn reflect<R: ResultSet + ?Sized>(&self, result_set: &mut R) -> Result<Vec<T>, MapperError> {
        let columns =
            ColumnSet::from_result_set(&*result_set).map_err(MapperError::MetadataAccess)?;
        let bindings = resolve(
            T::field_descriptors(),
            &columns,
            self.config.is_case_sensitive(),
        );

        if bindings.is_empty() {
            warn!("No fields found in the result set. No deserialization will be performed.");
            return Ok(Vec::new());
        }

        info!(
            "Deserializing {} columns: {}",
            bindings.len(),
            bindings
                .iter()
                .map(FieldBinding::column)
                .collect::<Vec<_>>()
                .join(", ")
        );

        let mut records = Vec::new();
        while result_set.advance().map_err(MapperError::RowAccess)? {
            records.push(self.read_row(&*result_set, &bindings)?);
        }

        info!("Deserialized {} rows", records.len());
        Ok(records)
    }

    fn read_row<R: ResultSet + ?Sized>(
        &self,
        result_set: &R,
        bindings: &[FieldBinding],
    ) -> Result<T, MapperError> {
        let mut record = (self.factory)();
        for binding in bindings {
            let value = read_cell(result_set, binding)?;
            trace_log!("Setting field {} from column {}", binding.name(), binding.label);
            record
                .set_field(binding.name(), value)
                .map_err(|source| MapperError::FieldAssignment {
                    field: binding.name(),
                    source,
                })?;
        }
        Ok(record)
    }
}
