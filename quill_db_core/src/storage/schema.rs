use crate::error::{DbError, DbResult};
use crate::types::datatype::DataType;
use std::collections::HashSet;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Constraint {
    Primary,
    Increment,
    Unique,
    NotNull,
    /// Explicitly nullable; the default when no constraint is given.
    Null,
}

impl Constraint {
    pub fn as_str(&self) -> &'static str {
        match self {
            Constraint::Primary => "PRIMARY",
            Constraint::Increment => "INCREMENT",
            Constraint::Unique => "UNIQUE",
            Constraint::NotNull => "NOT_NULL",
            Constraint::Null => "NULL",
        }
    }

    pub fn parse(s: &str) -> Result<Constraint, String> {
        match s.to_uppercase().as_str() {
            "PRIMARY" | "PRIMARY KEY" => Ok(Constraint::Primary),
            "INCREMENT" | "AUTO_INCREMENT" => Ok(Constraint::Increment),
            "UNIQUE" => Ok(Constraint::Unique),
            "NOT_NULL" | "NOT NULL" => Ok(Constraint::NotNull),
            "NULL" => Ok(Constraint::Null),
            other => Err(format!(
                "Unknown constraint '{other}'. Use primary|increment|unique|not_null|null"
            )),
        }
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Type and constraint descriptor for one field.
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaField {
    pub data_type: DataType,
    pub constraints: Vec<Constraint>,
}

impl SchemaField {
    pub fn new(data_type: DataType) -> Self {
        Self {
            data_type,
            constraints: Vec::new(),
        }
    }

    pub fn with(mut self, constraint: Constraint) -> Self {
        if !self.constraints.contains(&constraint) {
            self.constraints.push(constraint);
        }
        self
    }

    pub fn has(&self, constraint: Constraint) -> bool {
        self.constraints.contains(&constraint)
    }

    pub fn is_primary(&self) -> bool {
        self.has(Constraint::Primary)
    }

    pub fn is_increment(&self) -> bool {
        self.has(Constraint::Increment)
    }

    /// PRIMARY and UNIQUE values may not repeat across rows.
    pub fn is_unique(&self) -> bool {
        self.is_primary() || self.has(Constraint::Unique)
    }

    /// A value must be supplied on insert. PK implies NOT NULL unless the
    /// engine assigns it.
    pub fn requires_value(&self) -> bool {
        !self.is_increment() && (self.has(Constraint::NotNull) || self.is_primary())
    }
}

/// A named field in a table schema.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub name: String,
    pub field: SchemaField,
}

/// Ordered list of columns.
#[derive(Debug, Clone, PartialEq)]
pub struct Schema {
    pub columns: Vec<Column>,
}

impl Schema {
    /// Builds a schema, rejecting definitions that break the schema invariants.
    pub fn new(fields: Vec<(String, SchemaField)>) -> DbResult<Self> {
        if fields.is_empty() {
            return Err(DbError::schema("A table needs at least one field"));
        }

        let mut seen: HashSet<&str> = HashSet::new();
        let mut primary: Option<&str> = None;
        for (name, field) in &fields {
            if name.is_empty() {
                return Err(DbError::schema("Field names cannot be empty"));
            }
            if !seen.insert(name.as_str()) {
                return Err(DbError::schema(format!("Duplicate field '{name}'")));
            }
            if field.is_primary() {
                if let Some(existing) = primary {
                    return Err(DbError::schema(format!(
                        "Only one PRIMARY field is allowed, found '{existing}' and '{name}'"
                    )));
                }
                primary = Some(name.as_str());
            }
            if field.is_increment() && field.data_type != DataType::Int {
                return Err(DbError::schema(format!(
                    "INCREMENT field '{name}' must be INT, not {}",
                    field.data_type
                )));
            }
            if field.has(Constraint::NotNull) && field.has(Constraint::Null) {
                return Err(DbError::schema(format!(
                    "Field '{name}' cannot be both NULL and NOT_NULL"
                )));
            }
        }

        let columns = fields
            .into_iter()
            .map(|(name, field)| Column { name, field })
            .collect();
        Ok(Self { columns })
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name == name)
    }

    /// Like `index_of`, but an unknown name is a schema error.
    pub fn resolve(&self, name: &str, context: &str) -> DbResult<usize> {
        self.index_of(name)
            .ok_or_else(|| DbError::schema(format!("Unknown field '{name}' in {context}")))
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }
}
