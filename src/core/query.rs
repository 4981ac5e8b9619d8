//! Parameterized SQL construction.
//!
//! Every value ends up in a bound parameter list; only table and column
//! names, which are compile-time constants, are written into the SQL text.

use rusqlite::types::Value;

/// SQL text plus the values bound to its `?N` placeholders, in order.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundQuery {
    pub sql: String,
    pub params: Vec<Value>,
}

/// Equality clauses joined with `AND`. An empty predicate matches every row.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Predicate {
    clauses: Vec<(&'static str, Value)>,
}

impl Predicate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `column = value` when the filter is present.
    pub fn eq<T: Into<Value>>(mut self, column: &'static str, value: Option<T>) -> Self {
        if let Some(value) = value {
            self.clauses.push((column, value.into()));
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    /// Renders the clauses with placeholders numbered from `first_param`.
    fn render(&self, first_param: usize) -> String {
        if self.clauses.is_empty() {
            return "1 = 1".to_string();
        }

        self.clauses
            .iter()
            .enumerate()
            .map(|(i, (column, _))| format!("{} = ?{}", column, first_param + i))
            .collect::<Vec<_>>()
            .join(" AND ")
    }

    fn values(&self) -> impl Iterator<Item = Value> + '_ {
        self.clauses.iter().map(|(_, value)| value.clone())
    }
}

pub fn select(table: &str, columns: &[&str], predicate: &Predicate) -> BoundQuery {
    BoundQuery {
        sql: format!(
            "SELECT {} FROM {} WHERE {}",
            columns.join(", "),
            table,
            predicate.render(1)
        ),
        params: predicate.values().collect(),
    }
}

/// Trims text and turns blank text into NULL. Other values pass through.
pub fn normalize(value: Value) -> Value {
    match value {
        Value::Text(text) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                Value::Null
            } else if trimmed.len() == text.len() {
                Value::Text(text)
            } else {
                Value::Text(trimmed.to_string())
            }
        }
        other => other,
    }
}

/// `UPDATE` that sets every listed column on the row with the given key.
#[derive(Debug, Clone)]
pub struct Update {
    table: &'static str,
    id_column: &'static str,
    id: i64,
    assignments: Vec<(&'static str, Value)>,
}

impl Update {
    pub fn new(table: &'static str, id_column: &'static str, id: i64) -> Self {
        Self {
            table,
            id_column,
            id,
            assignments: Vec::new(),
        }
    }

    pub fn set(mut self, column: &'static str, value: Value) -> Self {
        self.assignments.push((column, normalize(value)));
        self
    }

    pub fn build(self) -> BoundQuery {
        let mut sql = format!("UPDATE {} SET ", self.table);
        let set_list = self
            .assignments
            .iter()
            .enumerate()
            .map(|(i, (column, _))| format!("{} = ?{}", column, i + 1))
            .collect::<Vec<_>>()
            .join(", ");
        sql.push_str(&set_list);
        sql.push_str(&format!(
            " WHERE {} = ?{}",
            self.id_column,
            self.assignments.len() + 1
        ));

        let mut params: Vec<Value> = self.assignments.into_iter().map(|(_, v)| v).collect();
        params.push(Value::Integer(self.id));

        BoundQuery { sql, params }
    }
}

/// `INSERT` with an explicit primary key.
#[derive(Debug, Clone)]
pub struct Insert {
    table: &'static str,
    columns: Vec<(&'static str, Value)>,
}

impl Insert {
    pub fn new(table: &'static str, id_column: &'static str, id: i64) -> Self {
        Self {
            table,
            columns: vec![(id_column, Value::Integer(id))],
        }
    }

    pub fn value(mut self, column: &'static str, value: Value) -> Self {
        self.columns.push((column, normalize(value)));
        self
    }

    pub fn build(self) -> BoundQuery {
        let names = self
            .columns
            .iter()
            .map(|(column, _)| *column)
            .collect::<Vec<_>>()
            .join(", ");
        let placeholders = (1..=self.columns.len())
            .map(|i| format!("?{}", i))
            .collect::<Vec<_>>()
            .join(", ");

        BoundQuery {
            sql: format!(
                "INSERT INTO {} ({}) VALUES ({})",
                self.table, names, placeholders
            ),
            params: self.columns.into_iter().map(|(_, v)| v).collect(),
        }
    }
}
