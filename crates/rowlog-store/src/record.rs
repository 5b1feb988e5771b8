//! Row types written to and read back from the log.

use std::fmt;

/// A single scalar value in a row
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Field {
    Text(String),
    Int(i64),
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Text(s) => f.write_str(s),
            Field::Int(n) => write!(f, "{}", n),
        }
    }
}

impl From<&str> for Field {
    fn from(s: &str) -> Self {
        Field::Text(s.to_string())
    }
}

impl From<i64> for Field {
    fn from(n: i64) -> Self {
        Field::Int(n)
    }
}

impl From<u32> for Field {
    fn from(n: u32) -> Self {
        Field::from(i64::from(n))
    }
}

/// An ordered sequence of fields to append
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row(pub Vec<Field>);

impl Row {
    pub fn new(fields: impl IntoIterator<Item = Field>) -> Self {
        Self(fields.into_iter().collect())
    }

    /// Text rendering of every field, in order
    pub fn fields_as_text(&self) -> Vec<String> {
        self.0.iter().map(ToString::to_string).collect()
    }
}

/// Shape of the rows this tool appends: name, age, location
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub name: String,
    pub age: u32,
    pub location: String,
}

impl Person {
    pub fn new(name: &str, age: u32, location: &str) -> Self {
        Self {
            name: name.to_string(),
            age,
            location: location.to_string(),
        }
    }
}

impl From<Person> for Row {
    fn from(p: Person) -> Self {
        Row::new([
            Field::Text(p.name),
            Field::from(p.age),
            Field::Text(p.location),
        ])
    }
}

/// The fixed rows appended on every run, in order.
pub fn default_dataset() -> Vec<Person> {
    vec![
        Person::new("shyam", 13, "bagar"),
        Person::new("none", 15, "simpani"),
    ]
}

/// A row as parsed back from disk. Every field is text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReadRow(pub Vec<String>);

impl ReadRow {
    /// Fields rejoined with `,`
    pub fn joined(&self) -> String {
        self.0.join(",")
    }
}

impl From<&csv::StringRecord> for ReadRow {
    fn from(record: &csv::StringRecord) -> Self {
        ReadRow(record.iter().map(str::to_string).collect())
    }
}
