//! Core rowmap functionality
//!
//! This module contains the `Reflector` facade, which owns the mapping configuration
//! for one record type and drives both mapping directions with it.

use mapper_config::MapperConfig;
use record_mapper::{ColumnSet, Deserializer, Record, ResultSet, Serializer};
use tracing::info;

use crate::errors::RowmapError;

/// Per-type entry point for result rows into records and records into INSERT text
pub struct Reflector<T> {
    factory: Box<dyn Fn() -> T + Send + Sync>,
    config: MapperConfig,
}

impl<T: Record> Reflector<T> {
    /// Create a reflector with the default configuration
    pub fn new<F>(factory: F) -> Self
    where
        F: Fn() -> T + Send + Sync + 'static,
    {
        Self::with_config(factory, MapperConfig::default())
    }

    pub fn with_config<F>(factory: F, config: MapperConfig) -> Self
    where
        F: Fn() -> T + Send + Sync + 'static,
    {
        Self {
            factory: Box::new(factory),
            config,
        }
    }

    /// Create a reflector configured from the environment, see [`MapperConfig::load`]
    pub fn load_config<F>(factory: F) -> Result<Self, RowmapError>
    where
        F: Fn() -> T + Send + Sync + 'static,
    {
        let config = MapperConfig::load()?;
        info!(
            "Loaded mapper configuration: case_sensitive={}, date_format={}, date_time_format={}",
            config.is_case_sensitive(),
            config.date_format(),
            config.date_time_format()
        );
        Ok(Self::with_config(factory, config))
    }

    pub fn config(&self) -> &MapperConfig {
        &self.config
    }

    /// Changes apply to subsequent calls only
    pub fn config_mut(&mut self) -> &mut MapperConfig {
        &mut self.config
    }

    /// Read every remaining row of `result_set` into a new record
    pub fn reflect<R: ResultSet + ?Sized>(&self, result_set: &mut R) -> Result<Vec<T>, RowmapError> {
        let deserializer = Deserializer::new(&*self.factory, &self.config);
        Ok(deserializer.reflect(result_set)?)
    }

    /// Build one INSERT statement for `objects`, or `""` when there is nothing to insert
    ///
    /// With `field_filter`, only columns named in the filter are written.
    pub fn serialize_to_sql(
        &self,
        objects: &[T],
        table_name: &str,
        field_filter: Option<&ColumnSet>,
    ) -> Result<String, RowmapError> {
        let serializer = Serializer::new(&self.config);
        Ok(serializer.serialize_to_sql(objects, table_name, field_filter)?)
    }
}

impl<T: Record + Default + 'static> Reflector<T> {
    /// Create a reflector building records with `T::default`
    pub fn from_default() -> Self {
        Self::new(T::default)
    }
}

impl<T: Record + Default + 'static> Default for Reflector<T> {
    fn default() -> Self {
        Self::from_default()
    }
}

impl<T> std::fmt::Debug for Reflector<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Reflector")
            .field("type", &std::any::type_name::<T>())
            .field("config", &self.config)
            .finish()
    }
}
