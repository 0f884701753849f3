//! Integration tests for derived records and the Reflector facade
//!
//! Rows come from in-memory result sets; statements are compared as text.

use chrono::{NaiveDate, NaiveDateTime};
use rowmap::prelude::*;
use uuid::Uuid;

#[record]
#[derive(PartialEq)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub active: bool,
}

#[record]
#[derive(PartialEq)]
pub struct Event {
    #[column(name = "evt_id")]
    pub id: i64,
    pub title: String,
    pub day: Option<NaiveDate>,
    pub starts_at: Option<NaiveDateTime>,
    pub priority: i16,
    pub flag: i8,
    pub code: char,
    pub score: f32,
    pub weight: f64,
    #[transient]
    pub note: String,
}

#[derive(Debug, Default, PartialEq, Record)]
pub struct Wrapper<V>
where
    V: FromSqlValue + ToSqlValue,
{
    #[column(name = "wrapped", kind = "Int64")]
    pub value: V,
}

#[record]
pub struct Session {
    pub token: Uuid,
    pub payload: serde_json::Value,
}

fn users() -> Vec<User> {
    vec![User {
        id: 1,
        name: "Alice".to_string(),
        active: true,
    }]
}

fn launch() -> Event {
    let day = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
    Event {
        id: 7,
        title: "Launch".to_string(),
        day: Some(day),
        starts_at: day.and_hms_opt(10, 15, 0),
        priority: 3,
        flag: 1,
        code: 'X',
        score: 1.5,
        weight: 2.25,
        note: String::new(),
    }
}

fn event_rows(case: fn(&str) -> String) -> MemoryResultSet {
    let event = launch();
    let columns = [
        "evt_id", "title", "day", "starts_at", "priority", "flag", "code", "score", "weight",
    ];
    MemoryResultSet::new(columns.iter().map(|column| case(column))).with_row(vec![
        SqlValue::BigInt(event.id),
        SqlValue::Text(event.title.clone()),
        SqlValue::from(event.day),
        SqlValue::from(event.starts_at),
        SqlValue::SmallInt(event.priority),
        SqlValue::TinyInt(event.flag),
        SqlValue::Text(event.code.to_string()),
        SqlValue::Float(event.score),
        SqlValue::Double(event.weight),
    ])
}

#[test]
fn test_derived_descriptors() {
    let fields = Event::field_descriptors();
    assert_eq!(fields.len(), 10);

    assert_eq!(fields[0].name, "id");
    assert_eq!(fields[0].column, "evt_id");
    assert_eq!(fields[0].kind, FieldKind::Int64);
    assert_eq!(fields[2].kind, FieldKind::Date);
    assert!(fields[2].nullable);
    assert_eq!(fields[3].kind, FieldKind::DateTime);
    assert_eq!(fields[4].kind, FieldKind::Short);
    assert_eq!(fields[5].kind, FieldKind::Byte);
    assert_eq!(fields[6].kind, FieldKind::Char);
    assert_eq!(fields[7].kind, FieldKind::Float32);
    assert!(!fields[9].persistent);

    assert_eq!(Session::field_descriptors()[0].kind, FieldKind::Opaque);
    assert_eq!(Wrapper::<i64>::field_descriptors()[0].kind, FieldKind::Int64);
}

#[test]
fn test_derived_accessors() {
    let mut user = User::default();
    user.set_field("name", SqlValue::Text("Bob".into())).unwrap();
    assert_eq!(user.get_field("name").unwrap(), SqlValue::Text("Bob".into()));

    assert!(matches!(
        user.get_field("missing"),
        Err(FieldAccessError::UnknownField(_))
    ));
    assert!(matches!(
        user.set_field("active", SqlValue::Null),
        Err(FieldAccessError::Coercion { field: "active", .. })
    ));

    let mut event = launch();
    assert!(matches!(
        event.get_field("note"),
        Err(FieldAccessError::UnknownField(_))
    ));
    event.set_field("day", SqlValue::Null).unwrap();
    assert_eq!(event.day, None);
}

#[test]
fn test_users_insert() -> anyhow::Result<()> {
    let reflector = Reflector::<User>::from_default();
    let sql = reflector.serialize_to_sql(&users(), "users", None)?;
    assert_eq!(sql, "INSERT INTO users (id, name, active) VALUES (1,'Alice',true)");
    Ok(())
}

#[test]
fn test_users_insert_filtered() -> anyhow::Result<()> {
    let reflector = Reflector::<User>::from_default();
    let filter: ColumnSet = ["id"].into_iter().collect();
    let sql = reflector.serialize_to_sql(&users(), "users", Some(&filter))?;
    assert_eq!(sql, "INSERT INTO users (id) VALUES (1)");
    Ok(())
}

#[test]
fn test_empty_inputs_produce_empty_statement() -> anyhow::Result<()> {
    let reflector = Reflector::<User>::from_default();
    assert_eq!(reflector.serialize_to_sql(&[], "t", None)?, "");

    let filter: ColumnSet = ["unrelated"].into_iter().collect();
    assert_eq!(reflector.serialize_to_sql(&users(), "users", Some(&filter))?, "");
    Ok(())
}

#[test]
fn test_multiple_rows_and_nulls() -> anyhow::Result<()> {
    let reflector = Reflector::<Event>::from_default();
    let mut quiet = launch();
    quiet.id = 8;
    quiet.title = "Quiet".to_string();
    quiet.day = None;
    quiet.starts_at = None;

    let sql = reflector.serialize_to_sql(&[launch(), quiet], "events", None)?;
    assert_eq!(
        sql,
        "INSERT INTO events (evt_id, title, day, starts_at, priority, flag, code, score, weight) VALUES \
         (7,'Launch',CONVERT(DATE,'2024-03-05'),CONVERT(DATETIME,'2024-03-05 10:15:00'),'3','1','X',1.5,2.25),\
         (8,'Quiet',NULL,NULL,'3','1','X',1.5,2.25)"
    );
    Ok(())
}

#[test]
fn test_reflect_every_kind() -> anyhow::Result<()> {
    let reflector = Reflector::<Event>::from_default();
    let events = reflector.reflect(&mut event_rows(str::to_string))?;
    assert_eq!(events, vec![launch()]);
    Ok(())
}

#[test]
fn test_case_insensitive_columns() -> anyhow::Result<()> {
    let mut reflector = Reflector::<Event>::from_default();
    let mut rows = event_rows(str::to_uppercase);
    assert!(reflector.reflect(&mut rows)?.is_empty());

    reflector.config_mut().set_case_sensitive(false);
    let events = reflector.reflect(&mut event_rows(str::to_uppercase))?;
    assert_eq!(events, vec![launch()]);
    Ok(())
}

#[test]
fn test_factory_supplies_unmapped_fields() -> anyhow::Result<()> {
    let reflector = Reflector::new(|| Event {
        note: "imported".to_string(),
        ..Event::default()
    });
    let events = reflector.reflect(&mut event_rows(str::to_string))?;
    assert_eq!(events[0].note, "imported");
    assert_eq!(events[0].title, "Launch");
    Ok(())
}

#[test]
fn test_round_trip_through_statement_values() -> anyhow::Result<()> {
    let reflector = Reflector::<User>::from_default();
    let mut rows = MemoryResultSet::new(["id", "name", "active"])
        .with_row(vec![
            SqlValue::Integer(1),
            SqlValue::Text("Alice".into()),
            SqlValue::Boolean(true),
        ])
        .with_row(vec![
            SqlValue::Integer(2),
            SqlValue::Text("Bob".into()),
            SqlValue::Boolean(false),
        ]);

    let loaded = reflector.reflect(&mut rows)?;
    let sql = reflector.serialize_to_sql(&loaded, "users", None)?;
    assert_eq!(
        sql,
        "INSERT INTO users (id, name, active) VALUES (1,'Alice',true),(2,'Bob',false)"
    );
    Ok(())
}

#[test]
fn test_configured_formats() -> anyhow::Result<()> {
    let config = MapperConfig::from_toml_str(
        r#"
        wrap_booleans_in_quotes = true
        date_format = "dd.MM.yyyy"
        date_time_format = "yyyy-MM-dd'T'HH:mm"
        "#,
    )?;
    let reflector = Reflector::with_config(Event::default, config);
    let filter: ColumnSet = ["day", "starts_at"].into_iter().collect();

    let sql = reflector.serialize_to_sql(&[launch()], "events", Some(&filter))?;
    assert_eq!(
        sql,
        "INSERT INTO events (day, starts_at) VALUES (CONVERT(DATE,'05.03.2024'),CONVERT(DATETIME,'2024-03-05T10:15'))"
    );

    let user_reflector = Reflector::with_config(User::default, reflector.config().clone());
    let sql = user_reflector.serialize_to_sql(&users(), "users", None)?;
    assert_eq!(sql, "INSERT INTO users (id, name, active) VALUES (1,'Alice','true')");
    Ok(())
}

#[test]
fn test_generic_record_with_kind_override() -> anyhow::Result<()> {
    let reflector = Reflector::<Wrapper<i64>>::from_default();
    let mut rows = MemoryResultSet::new(["wrapped"]).with_row(vec![SqlValue::Integer(5)]);

    let loaded = reflector.reflect(&mut rows)?;
    assert_eq!(loaded, vec![Wrapper { value: 5 }]);
    assert_eq!(
        reflector.serialize_to_sql(&loaded, "wrappers", None)?,
        "INSERT INTO wrappers (wrapped) VALUES (5)"
    );
    Ok(())
}

#[test]
fn test_opaque_fields_pass_through() -> anyhow::Result<()> {
    let token = Uuid::new_v4();
    let payload = serde_json::json!({"theme": "dark"});
    let reflector = Reflector::<Session>::from_default();
    let mut rows = MemoryResultSet::new(["token", "payload"])
        .with_row(vec![SqlValue::Uuid(token), SqlValue::Json(payload.clone())]);

    let sessions = reflector.reflect(&mut rows)?;
    assert_eq!(sessions[0].token, token);
    assert_eq!(sessions[0].payload, payload);

    let sql = reflector.serialize_to_sql(&sessions, "sessions", None)?;
    assert_eq!(
        sql,
        format!(
            "INSERT INTO sessions (token, payload) VALUES ('{}','{}')",
            token, payload
        )
    );
    Ok(())
}

#[record]
#[derive(PartialEq)]
pub struct Priced {
    pub id: i32,
    pub active: bool,
    pub price: f64,
}

#[test]
fn test_null_into_primitive_fields_reads_zero() -> anyhow::Result<()> {
    let reflector = Reflector::<Priced>::from_default();
    let mut rows = MemoryResultSet::new(["id", "active", "price"]).with_row(vec![
        SqlValue::Integer(1),
        SqlValue::Null,
        SqlValue::Double(2.0),
    ]);

    let loaded = reflector.reflect(&mut rows)?;
    assert_eq!(
        loaded,
        vec![Priced {
            id: 1,
            active: false,
            price: 2.0,
        }]
    );
    assert_eq!(
        reflector.serialize_to_sql(&loaded, "prices", None)?,
        "INSERT INTO prices (id, active, price) VALUES (1,false,2.0)"
    );
    Ok(())
}

#[test]
fn test_default_reflector() -> anyhow::Result<()> {
    let reflector: Reflector<User> = Reflector::default();
    assert!(reflector.config().is_case_sensitive());
    assert_eq!(
        reflector.serialize_to_sql(&users(), "users", None)?,
        "INSERT INTO users (id, name, active) VALUES (1,'Alice',true)"
    );
    Ok(())
}

#[test]
fn test_null_into_required_text_fails() {
    let reflector = Reflector::<User>::from_default();
    let mut rows = MemoryResultSet::new(["id", "name"])
        .with_row(vec![SqlValue::Integer(1), SqlValue::Null]);

    match reflector.reflect(&mut rows) {
        Err(RowmapError::Mapping(MapperError::FieldAssignment { field, .. })) => {
            assert_eq!(field, "name")
        }
        other => panic!("unexpected result: {:?}", other),
    }
}
