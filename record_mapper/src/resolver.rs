//! Field resolution
//!
//! Binds a record type's declared fields to column names, honoring column overrides,
//! transient fields and the configured case sensitivity.

use std::collections::HashSet;

use type_mapping::FieldKind;

use crate::errors::DriverError;
use crate::result_set::ResultSet;
use crate::traits::FieldDescriptor;

/// Unique column names seen in a result set or allowed by a filter
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnSet {
    labels: HashSet<String>,
}

impl ColumnSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect the labels of every column in a result set's metadata
    pub fn from_result_set<R: ResultSet + ?Sized>(result_set: &R) -> Result<Self, DriverError> {
        let count = result_set.column_count()?;
        let mut labels = HashSet::with_capacity(count);
        for index in 0..count {
            labels.insert(result_set.column_label(index)?);
        }
        Ok(Self { labels })
    }

    pub fn insert(&mut self, label: impl Into<String>) -> bool {
        self.labels.insert(label.into())
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(String::as_str)
    }

    /// Find the label matching `column`
    ///
    /// An exact match always wins. Without case sensitivity the smallest label equal
    /// ignoring case is returned, so the choice is stable across runs.
    pub fn find(&self, column: &str, case_sensitive: bool) -> Option<&str> {
        if let Some(label) = self.labels.get(column) {
            return Some(label.as_str());
        }
        if case_sensitive {
            return None;
        }
        self.labels
            .iter()
            .filter(|label| eq_ignore_case(label, column))
            .min()
            .map(String::as_str)
    }

    pub fn contains_column(&self, column: &str, case_sensitive: bool) -> bool {
        self.find(column, case_sensitive).is_some()
    }
}

impl<S: Into<String>> FromIterator<S> for ColumnSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            labels: iter.into_iter().map(Into::into).collect(),
        }
    }
}

fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}

/// A field paired with the column it maps to for one mapping call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldBinding {
    pub field: &'static FieldDescriptor,
    /// The label as it appears in the column set; cells are read by this label
    pub label: String,
}

impl FieldBinding {
    pub fn name(&self) -> &'static str {
        self.field.name
    }

    /// The field's resolved column name
    pub fn column(&self) -> &'static str {
        self.field.column
    }

    pub fn kind(&self) -> FieldKind {
        self.field.kind
    }
}

/// Bind every persistent field whose column is present in `columns`,
/// in declaration order
pub fn resolve(
    fields: &'static [FieldDescriptor],
    columns: &ColumnSet,
    case_sensitive: bool,
) -> Vec<FieldBinding> {
    fields
        .iter()
        .filter(|field| field.persistent)
        .filter_map(|field| {
            columns
                .find(field.column, case_sensitive)
                .map(|label| FieldBinding {
                    field,
                    label: label.to_string(),
                })
        })
        .collect()
}

/// Bind every persistent field to its own column name, in declaration order
///
/// When two fields resolve to the same column the first declared one is kept.
pub fn persistent_bindings(fields: &'static [FieldDescriptor]) -> Vec<FieldBinding> {
    let mut seen = HashSet::new();
    fields
        .iter()
        .filter(|field| field.persistent)
        .filter(|field| seen.insert(field.column))
        .map(|field| FieldBinding {
            field,
            label: field.column.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::Account;
    use crate::traits::Record;

    fn names(bindings: &[FieldBinding]) -> Vec<&'static str> {
        bindings.iter().map(FieldBinding::name).collect()
    }

    #[test]
    fn test_resolve_keeps_declaration_order() {
        let columns: ColumnSet = ["active", "username", "usr_id"].into_iter().collect();
        let bindings = resolve(Account::field_descriptors(), &columns, true);
        assert_eq!(names(&bindings), vec!["id", "username", "active"]);
    }

    #[test]
    fn test_resolve_uses_column_override() {
        let columns: ColumnSet = ["id", "usr_id"].into_iter().collect();
        let bindings = resolve(Account::field_descriptors(), &columns, true);
        assert_eq!(bindings.len(), 1);
        assert_eq!(bindings[0].name(), "id");
        assert_eq!(bindings[0].label, "usr_id");
    }

    #[test]
    fn test_resolve_case_sensitivity() {
        let columns: ColumnSet = ["USERNAME"].into_iter().collect();

        assert!(resolve(Account::field_descriptors(), &columns, true).is_empty());

        let bindings = resolve(Account::field_descriptors(), &columns, false);
        assert_eq!(names(&bindings), vec!["username"]);
        assert_eq!(bindings[0].label, "USERNAME");
        assert_eq!(bindings[0].column(), "username");
    }

    #[test]
    fn test_resolve_skips_transient_fields() {
        let columns: ColumnSet = ["display_name", "username"].into_iter().collect();
        let bindings = resolve(Account::field_descriptors(), &columns, true);
        assert_eq!(names(&bindings), vec!["username"]);
    }

    #[test]
    fn test_resolve_no_match_is_empty() {
        let columns: ColumnSet = ["unrelated"].into_iter().collect();
        assert!(resolve(Account::field_descriptors(), &columns, false).is_empty());
    }

    #[test]
    fn test_find_prefers_exact_match() {
        let columns: ColumnSet = ["Name", "NAME", "name"].into_iter().collect();
        assert_eq!(columns.find("name", false), Some("name"));
        assert_eq!(columns.find("nAmE", false), Some("NAME"));
        assert_eq!(columns.find("nAmE", true), None);
    }

    #[test]
    fn test_find_ignores_non_ascii_case() {
        let columns: ColumnSet = ["STRAßE", "ÉTAT"].into_iter().collect();
        assert!(columns.contains_column("état", false));
        assert!(!columns.contains_column("état", true));
    }

    #[test]
    fn test_persistent_bindings() {
        let bindings = persistent_bindings(Account::field_descriptors());
        let columns: Vec<_> = bindings.iter().map(FieldBinding::column).collect();
        assert_eq!(
            columns,
            vec!["usr_id", "username", "active", "balance", "joined_on", "last_login", "grade"]
        );
    }
}
