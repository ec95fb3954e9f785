// Entity records for the dictionary tables
//
// Each record maps one row of an entity table. The Record trait carries
// the column metadata the generic DAO needs to build SQL; ChildRecord
// adds the indexed foreign-key column for query-by-parent. No validation
// beyond type and nullability happens at this layer.

use libsql::{Row, Value};

use super::DbError;

/// A record type mapped to one entity table.
pub trait Record: Send + Sync + Sized {
    /// Table this record maps to.
    const TABLE: &'static str;
    /// Column names, excluding the generated `id` primary key.
    const COLUMNS: &'static [&'static str];

    /// Primary key; 0 until the row has been inserted.
    fn id(&self) -> i64;

    /// Column values in `COLUMNS` order.
    fn values(&self) -> Vec<Value>;

    /// Decode a row selected as `id, COLUMNS...`.
    fn from_row(row: &Row) -> Result<Self, DbError>;
}

/// A record that belongs to a parent row through an indexed foreign key.
pub trait ChildRecord: Record {
    /// Foreign-key column referencing the parent table's `id`.
    const PARENT_COLUMN: &'static str;

    fn parent_id(&self) -> i64;
}

fn decode<T>(result: Result<T, libsql::Error>) -> Result<T, DbError> {
    result.map_err(|e| DbError::Decode(e.to_string()))
}

fn text_or_null(value: &Option<String>) -> Value {
    match value {
        Some(text) => Value::Text(text.clone()),
        None => Value::Null,
    }
}

/// Root record for a cached headword.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EntryRow {
    pub id: i64,
    pub word: String,
}

impl Record for EntryRow {
    const TABLE: &'static str = "entry";
    const COLUMNS: &'static [&'static str] = &["word"];

    fn id(&self) -> i64 {
        self.id
    }

    fn values(&self) -> Vec<Value> {
        vec![Value::Text(self.word.clone())]
    }

    fn from_row(row: &Row) -> Result<Self, DbError> {
        Ok(Self {
            id: decode(row.get(0))?,
            word: decode(row.get(1))?,
        })
    }
}

/// Pronunciation of an entry, with an optional audio reference.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PhoneticRow {
    pub id: i64,
    pub entry_id: i64,
    pub text: Option<String>,
    pub audio: Option<String>,
}

impl Record for PhoneticRow {
    const TABLE: &'static str = "phonetic";
    const COLUMNS: &'static [&'static str] = &["entry_id", "text", "audio"];

    fn id(&self) -> i64 {
        self.id
    }

    fn values(&self) -> Vec<Value> {
        vec![
            Value::Integer(self.entry_id),
            text_or_null(&self.text),
            text_or_null(&self.audio),
        ]
    }

    fn from_row(row: &Row) -> Result<Self, DbError> {
        Ok(Self {
            id: decode(row.get(0))?,
            entry_id: decode(row.get(1))?,
            text: decode(row.get(2))?,
            audio: decode(row.get(3))?,
        })
    }
}

impl ChildRecord for PhoneticRow {
    const PARENT_COLUMN: &'static str = "entry_id";

    fn parent_id(&self) -> i64 {
        self.entry_id
    }
}

/// One sense of an entry, tagged with part of speech.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MeaningRow {
    pub id: i64,
    pub entry_id: i64,
    pub part_of_speech: String,
}

impl Record for MeaningRow {
    const TABLE: &'static str = "meaning";
    const COLUMNS: &'static [&'static str] = &["entry_id", "part_of_speech"];

    fn id(&self) -> i64 {
        self.id
    }

    fn values(&self) -> Vec<Value> {
        vec![
            Value::Integer(self.entry_id),
            Value::Text(self.part_of_speech.clone()),
        ]
    }

    fn from_row(row: &Row) -> Result<Self, DbError> {
        Ok(Self {
            id: decode(row.get(0))?,
            entry_id: decode(row.get(1))?,
            part_of_speech: decode(row.get(2))?,
        })
    }
}

impl ChildRecord for MeaningRow {
    const PARENT_COLUMN: &'static str = "entry_id";

    fn parent_id(&self) -> i64 {
        self.entry_id
    }
}

/// A definition belonging to a meaning, with an optional usage example.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DefinitionRow {
    pub id: i64,
    pub meaning_id: i64,
    pub definition: String,
    pub example: Option<String>,
}

impl Record for DefinitionRow {
    const TABLE: &'static str = "definition";
    const COLUMNS: &'static [&'static str] = &["meaning_id", "definition", "example"];

    fn id(&self) -> i64 {
        self.id
    }

    fn values(&self) -> Vec<Value> {
        vec![
            Value::Integer(self.meaning_id),
            Value::Text(self.definition.clone()),
            text_or_null(&self.example),
        ]
    }

    fn from_row(row: &Row) -> Result<Self, DbError> {
        Ok(Self {
            id: decode(row.get(0))?,
            meaning_id: decode(row.get(1))?,
            definition: decode(row.get(2))?,
            example: decode(row.get(3))?,
        })
    }
}

impl ChildRecord for DefinitionRow {
    const PARENT_COLUMN: &'static str = "meaning_id";

    fn parent_id(&self) -> i64 {
        self.meaning_id
    }
}

/// A synonym belonging to a meaning.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SynonymRow {
    pub id: i64,
    pub meaning_id: i64,
    pub value: String,
}

impl Record for SynonymRow {
    const TABLE: &'static str = "synonym";
    const COLUMNS: &'static [&'static str] = &["meaning_id", "value"];

    fn id(&self) -> i64 {
        self.id
    }

    fn values(&self) -> Vec<Value> {
        vec![
            Value::Integer(self.meaning_id),
            Value::Text(self.value.clone()),
        ]
    }

    fn from_row(row: &Row) -> Result<Self, DbError> {
        Ok(Self {
            id: decode(row.get(0))?,
            meaning_id: decode(row.get(1))?,
            value: decode(row.get(2))?,
        })
    }
}

impl ChildRecord for SynonymRow {
    const PARENT_COLUMN: &'static str = "meaning_id";

    fn parent_id(&self) -> i64 {
        self.meaning_id
    }
}

/// An antonym belonging to a meaning.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AntonymRow {
    pub id: i64,
    pub meaning_id: i64,
    pub value: String,
}

impl Record for AntonymRow {
    const TABLE: &'static str = "antonym";
    const COLUMNS: &'static [&'static str] = &["meaning_id", "value"];

    fn id(&self) -> i64 {
        self.id
    }

    fn values(&self) -> Vec<Value> {
        vec![
            Value::Integer(self.meaning_id),
            Value::Text(self.value.clone()),
        ]
    }

    fn from_row(row: &Row) -> Result<Self, DbError> {
        Ok(Self {
            id: decode(row.get(0))?,
            meaning_id: decode(row.get(1))?,
            value: decode(row.get(2))?,
        })
    }
}

impl ChildRecord for AntonymRow {
    const PARENT_COLUMN: &'static str = "meaning_id";

    fn parent_id(&self) -> i64 {
        self.meaning_id
    }
}

/// Standalone lookup-index record; one row per headword ever cached.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TermRow {
    pub id: i64,
    pub word: String,
}

impl Record for TermRow {
    const TABLE: &'static str = "term";
    const COLUMNS: &'static [&'static str] = &["word"];

    fn id(&self) -> i64 {
        self.id
    }

    fn values(&self) -> Vec<Value> {
        vec![Value::Text(self.word.clone())]
    }

    fn from_row(row: &Row) -> Result<Self, DbError> {
        Ok(Self {
            id: decode(row.get(0))?,
            word: decode(row.get(1))?,
        })
    }
}
