//! Records into INSERT statements
//!
//! Every persistent field is written in declaration order, optionally restricted to a
//! caller-supplied set of column names. Values are embedded as literals.

use std::marker::PhantomData;

use mapper_config::MapperConfig;
use tracing::{info, warn};
use type_mapping::sql_literal;

use crate::debug_log;
use crate::errors::MapperError;
use crate::resolver::{persistent_bindings, ColumnSet, FieldBinding};
use crate::traits::Record;

pub struct Serializer<'a, T> {
    config: &'a MapperConfig,
    _record: PhantomData<fn() -> T>,
}

impl<'a, T: Record> Serializer<'a, T> {
    pub fn new(config: &'a MapperConfig) -> Self {
        Self {
            config,
            _record: PhantomData,
        }
    }

    /// Build `INSERT INTO <table> (<columns>) VALUES (...),(...)` for `objects`
    ///
    /// Returns an empty string when there are no objects or no columns left after
    /// filtering.
    pub fn serialize_to_sql(
        &self,
        objects: &[T],
        table_name: &str,
        field_filter: Option<&ColumnSet>,
    ) -> Result<String, MapperError> {
        if objects.is_empty() {
            warn!("No objects to serialize");
            return Ok(String::new());
        }

        let mut bindings = persistent_bindings(T::field_descriptors());
        if let Some(filter) = field_filter {
            let case_sensitive = self.config.is_case_sensitive();
            bindings.retain(|binding| filter.contains_column(binding.column(), case_sensitive));
        }

        if bindings.is_empty() {
            warn!("No fields found in the record type. No serialization will be performed.");
            return Ok(String::new());
        }

        let columns = bindings
            .iter()
            .map(FieldBinding::column)
            .collect::<Vec<_>>()
            .join(", ");
        info!("Serializing {} fields: {}", bindings.len(), columns);

        let values = objects
            .iter()
            .map(|object| self.format_values(object, &bindings))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(format!(
            "INSERT INTO {} ({}) VALUES {}",
            table_name,
            columns,
            values.join(",")
        ))
    }

    fn format_values(&self, object: &T, bindings: &[FieldBinding]) -> Result<String, MapperError> {
        let mut literals = Vec::with_capacity(bindings.len());
        for binding in bindings {
            let value = object
                .get_field(binding.name())
                .map_err(|source| MapperError::FieldRead {
                    field: binding.name(),
                    source,
                })?;
            let literal = sql_literal(binding.kind(), &value, self.config).map_err(|source| {
                MapperError::Literal {
                    field: binding.name(),
                    source,
                }
            })?;
            debug_log!("Field {} rendered as {}", binding.name(), literal);
            literals.push(literal);
        }
        Ok(format!("({})", literals.join(",")))
    }
}
