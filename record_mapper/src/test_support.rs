//! Hand-written record used by the unit tests

use chrono::{NaiveDate, NaiveDateTime};
use type_mapping::{FieldKind, FromSqlValue, SqlValue, ToSqlValue};

use crate::errors::FieldAccessError;
use crate::traits::{FieldDescriptor, Record};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Account {
    pub id: i32,
    pub username: String,
    pub active: bool,
    pub balance: Option<f64>,
    pub joined_on: Option<NaiveDate>,
    pub last_login: Option<NaiveDateTime>,
    pub grade: char,
    pub display_name: String,
}

static ACCOUNT_FIELDS: [FieldDescriptor; 8] = [
    FieldDescriptor::new("id", FieldKind::Int32).column("usr_id"),
    FieldDescriptor::new("username", FieldKind::Text),
    FieldDescriptor::new("active", FieldKind::Boolean),
    FieldDescriptor::new("balance", FieldKind::Float64).nullable(),
    FieldDescriptor::new("joined_on", FieldKind::Date).nullable(),
    FieldDescriptor::new("last_login", FieldKind::DateTime).nullable(),
    FieldDescriptor::new("grade", FieldKind::Char),
    FieldDescriptor::new("display_name", FieldKind::Text).transient(),
];

fn assign<T: FromSqlValue>(
    slot: &mut T,
    field: &'static str,
    value: SqlValue,
) -> Result<(), FieldAccessError> {
    *slot = T::from_sql_value(value).map_err(|e| FieldAccessError::coercion(field, e))?;
    Ok(())
}

impl Record for Account {
    fn field_descriptors() -> &'static [FieldDescriptor] {
        &ACCOUNT_FIELDS
    }

    fn get_field(&self, field: &str) -> Result<SqlValue, FieldAccessError> {
        match field {
            "id" => Ok(self.id.to_sql_value()),
            "username" => Ok(self.username.to_sql_value()),
            "active" => Ok(self.active.to_sql_value()),
            "balance" => Ok(self.balance.to_sql_value()),
            "joined_on" => Ok(self.joined_on.to_sql_value()),
            "last_login" => Ok(self.last_login.to_sql_value()),
            "grade" => Ok(self.grade.to_sql_value()),
            _ => Err(FieldAccessError::UnknownField(field.to_string())),
        }
    }

    fn set_field(&mut self, field: &str, value: SqlValue) -> Result<(), FieldAccessError> {
        match field {
            "id" => assign(&mut self.id, "id", value),
            "username" => assign(&mut self.username, "username", value),
            "active" => assign(&mut self.active, "active", value),
            "balance" => assign(&mut self.balance, "balance", value),
            "joined_on" => assign(&mut self.joined_on, "joined_on", value),
            "last_login" => assign(&mut self.last_login, "last_login", value),
            "grade" => assign(&mut self.grade, "grade", value),
            _ => Err(FieldAccessError::UnknownField(field.to_string())),
        }
    }
}

pub fn account(id: i32, username: &str, active: bool) -> Account {
    Account {
        id,
        username: username.to_string(),
        active,
        grade: 'A',
        ..Account::default()
    }
}
