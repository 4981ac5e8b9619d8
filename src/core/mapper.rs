use crate::domain::model::{Continent, Country, Region};
use crate::utils::error::{AppError, Result};
use rusqlite::types::Value;
use rusqlite::Row;

/// Maps an entity to and from a flat row whose column order is `COLUMNS`.
///
/// The primary key is always the first column. `into_values` followed by
/// `from_values` gives back the same entity, NULLs included.
pub trait RecordMapper: Sized {
    const ENTITY: &'static str;
    const TABLE: &'static str;
    const COLUMNS: &'static [&'static str];

    fn id(&self) -> Option<i64>;
    fn with_id(self, id: i64) -> Self;
    fn from_values(values: Vec<Value>) -> Result<Self>;
    fn into_values(self) -> Vec<Value>;

    fn id_column() -> &'static str {
        Self::COLUMNS[0]
    }

    /// Columns written by UPDATE and INSERT, i.e. everything but the key.
    fn mutable_columns() -> &'static [&'static str] {
        &Self::COLUMNS[1..]
    }
}

/// Copies every column of a result row into owned values.
pub fn read_row(row: &Row<'_>, width: usize) -> rusqlite::Result<Vec<Value>> {
    (0..width).map(|i| row.get::<_, Value>(i)).collect()
}

struct Columns<E> {
    values: std::vec::IntoIter<Value>,
    names: std::slice::Iter<'static, &'static str>,
    _entity: std::marker::PhantomData<E>,
}

impl<E: RecordMapper> Columns<E> {
    fn new(values: Vec<Value>) -> Result<Self> {
        if values.len() != E::COLUMNS.len() {
            return Err(AppError::RowMappingError {
                column: E::TABLE.to_string(),
                message: format!(
                    "expected {} columns, got {}",
                    E::COLUMNS.len(),
                    values.len()
                ),
            });
        }
        Ok(Self {
            values: values.into_iter(),
            names: E::COLUMNS.iter(),
            _entity: std::marker::PhantomData,
        })
    }

    fn next(&mut self) -> (String, Value) {
        let name = self.names.next().copied().unwrap_or_default();
        let value = self.values.next().unwrap_or(Value::Null);
        (format!("{}.{}", E::TABLE, name), value)
    }

    fn text(&mut self) -> Result<Option<String>> {
        match self.next() {
            (_, Value::Null) => Ok(None),
            (_, Value::Text(text)) => Ok(Some(text)),
            (column, other) => Err(AppError::RowMappingError {
                column,
                message: format!("expected text, found {:?}", other.data_type()),
            }),
        }
    }

    fn integer(&mut self) -> Result<Option<i64>> {
        match self.next() {
            (_, Value::Null) => Ok(None),
            (_, Value::Integer(n)) => Ok(Some(n)),
            (column, other) => Err(AppError::RowMappingError {
                column,
                message: format!("expected integer, found {:?}", other.data_type()),
            }),
        }
    }
}

fn text(value: Option<String>) -> Value {
    value.map(Value::Text).unwrap_or(Value::Null)
}

fn integer(value: Option<i64>) -> Value {
    value.map(Value::Integer).unwrap_or(Value::Null)
}

impl RecordMapper for Continent {
    const ENTITY: &'static str = "continent";
    const TABLE: &'static str = "continent";
    const COLUMNS: &'static [&'static str] = &["continent_id", "continent_code", "name"];

    fn id(&self) -> Option<i64> {
        self.continent_id
    }

    fn with_id(self, id: i64) -> Self {
        Self {
            continent_id: Some(id),
            ..self
        }
    }

    fn from_values(values: Vec<Value>) -> Result<Self> {
        let mut row = Columns::<Self>::new(values)?;
        Ok(Self {
            continent_id: row.integer()?,
            continent_code: row.text()?,
            name: row.text()?,
        })
    }

    fn into_values(self) -> Vec<Value> {
        vec![
            integer(self.continent_id),
            text(self.continent_code),
            text(self.name),
        ]
    }
}

impl RecordMapper for Country {
    const ENTITY: &'static str = "country";
    const TABLE: &'static str = "country";
    const COLUMNS: &'static [&'static str] = &[
        "country_id",
        "country_code",
        "name",
        "continent_id",
        "wikipedia_link",
        "keywords",
    ];

    fn id(&self) -> Option<i64> {
        self.country_id
    }

    fn with_id(self, id: i64) -> Self {
        Self {
            country_id: Some(id),
            ..self
        }
    }

    fn from_values(values: Vec<Value>) -> Result<Self> {
        let mut row = Columns::<Self>::new(values)?;
        Ok(Self {
            country_id: row.integer()?,
            country_code: row.text()?,
            name: row.text()?,
            continent_id: row.integer()?,
            wikipedia_link: row.text()?,
            keywords: row.text()?,
        })
    }

    fn into_values(self) -> Vec<Value> {
        vec![
            integer(self.country_id),
            text(self.country_code),
            text(self.name),
            integer(self.continent_id),
            text(self.wikipedia_link),
            text(self.keywords),
        ]
    }
}

impl RecordMapper for Region {
    const ENTITY: &'static str = "region";
    const TABLE: &'static str = "region";
    const COLUMNS: &'static [&'static str] = &[
        "region_id",
        "region_code",
        "local_code",
        "name",
        "continent_id",
        "country_id",
        "wikipedia_link",
        "keywords",
    ];

    fn id(&self) -> Option<i64> {
        self.region_id
    }

    fn with_id(self, id: i64) -> Self {
        Self {
            region_id: Some(id),
            ..self
        }
    }

    fn from_values(values: Vec<Value>) -> Result<Self> {
        let mut row = Columns::<Self>::new(values)?;
        Ok(Self {
            region_id: row.integer()?,
            region_code: row.text()?,
            local_code: row.text()?,
            name: row.text()?,
            continent_id: row.integer()?,
            country_id: row.integer()?,
            wikipedia_link: row.text()?,
            keywords: row.text()?,
        })
    }

    fn into_values(self) -> Vec<Value> {
        vec![
            integer(self.region_id),
            text(self.region_code),
            text(self.local_code),
            text(self.name),
            integer(self.continent_id),
            integer(self.country_id),
            text(self.wikipedia_link),
            text(self.keywords),
        ]
    }
}
