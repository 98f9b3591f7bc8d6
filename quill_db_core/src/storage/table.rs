use crate::error::{DbError, DbResult};
use crate::storage::schema::{Schema, SchemaField};
use crate::types::predicate::{Conditions, Predicate};
use crate::types::value::Value;
use crate::types::{Record, Row};
use std::collections::BTreeMap;

/// Field name -> new value, as carried by INSERT and UPDATE.
pub type Assignments = BTreeMap<String, Value>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

/// Result ordering for `search`. Without a field, `Asc` keeps insertion
/// order and `Desc` reverses it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Sort {
    pub field: Option<String>,
    pub order: SortOrder,
}

impl Sort {
    pub fn by(field: impl Into<String>, order: SortOrder) -> Self {
        Self {
            field: Some(field.into()),
            order,
        }
    }
}

/// Which fields `search` returns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Projection {
    All,
    Fields(Vec<String>),
}

/// Rows in insertion order plus the schema they conform to.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    name: String,
    schema: Schema,
    rows: Vec<Row>,
    next_auto_increment: i64,
}

impl Table {
    pub fn create(name: impl Into<String>, fields: Vec<(String, SchemaField)>) -> DbResult<Self> {
        Ok(Self {
            name: name.into(),
            schema: Schema::new(fields)?,
            rows: Vec::new(),
            next_auto_increment: 1,
        })
    }

    /// Reassembles a table from persisted parts. Rows must already match the
    /// schema layout.
    pub(crate) fn from_parts(
        name: String,
        schema: Schema,
        rows: Vec<Row>,
        next_auto_increment: i64,
    ) -> Self {
        Self {
            name,
            schema,
            rows,
            next_auto_increment,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn next_auto_increment(&self) -> i64 {
        self.next_auto_increment
    }

    /// Validates and appends one row, returning it with any assigned ids.
    pub fn insert(&mut self, mut data: Assignments) -> DbResult<Record> {
        for name in data.keys() {
            self.schema.resolve(name, "INSERT")?;
        }

        // NOT_NULL presence is checked before any coercion.
        for col in &self.schema.columns {
            let present = data.get(&col.name).is_some_and(|v| !v.is_null());
            if col.field.requires_value() && !present {
                return Err(DbError::constraint(format!(
                    "Field '{}' is NOT NULL",
                    col.name
                )));
            }
        }

        let mut next_id = self.next_auto_increment;
        let mut row: Row = Vec::with_capacity(self.schema.column_count());
        for col in &self.schema.columns {
            let supplied = data.remove(&col.name);
            let value = if col.field.is_increment() {
                let id = next_id;
                next_id += 1;
                Value::Int(id)
            } else {
                match supplied {
                    Some(v) => v.coerce(col.field.data_type, &col.name)?,
                    None => Value::Null,
                }
            };
            row.push(value);
        }

        self.validate_unique(&self.rows, &row, None)?;

        let record = self.to_record(&row);
        self.rows.push(row);
        self.next_auto_increment = next_id;
        Ok(record)
    }

    /// Rewrites every matching row. Nothing is written unless all rewritten
    /// rows pass validation.
    pub fn update(&mut self, data: Assignments, conditions: &Conditions) -> DbResult<usize> {
        let mut compiled: Vec<(usize, Value)> = Vec::new();
        for (name, value) in data {
            let idx = self.schema.resolve(&name, "UPDATE")?;
            let field = &self.schema.columns[idx].field;
            if field.is_increment() {
                return Err(DbError::constraint(format!(
                    "Field '{name}' is INCREMENT and cannot be assigned"
                )));
            }
            if value.is_null() && field.requires_value() {
                return Err(DbError::constraint(format!("Field '{name}' is NOT NULL")));
            }
            let value = value.coerce(field.data_type, &name)?;
            compiled.push((idx, value));
        }

        let filter = self.compile_conditions(conditions)?;
        let mut staged = self.rows.clone();
        let mut touched: Vec<usize> = Vec::new();
        for (i, row) in staged.iter_mut().enumerate() {
            if row_matches(row, &filter) {
                for (idx, value) in &compiled {
                    row[*idx] = value.clone();
                }
                touched.push(i);
            }
        }

        if !compiled.is_empty() {
            for &i in &touched {
                self.validate_unique(&staged, &staged[i], Some(i))?;
            }
        }

        self.rows = staged;
        Ok(touched.len())
    }

    /// Removes every matching row and returns the removed rows in table order.
    pub fn delete(&mut self, conditions: &Conditions) -> DbResult<Vec<Record>> {
        let filter = self.compile_conditions(conditions)?;
        let (removed, kept): (Vec<Row>, Vec<Row>) = std::mem::take(&mut self.rows)
            .into_iter()
            .partition(|row| row_matches(row, &filter));
        self.rows = kept;
        Ok(removed.iter().map(|row| self.to_record(row)).collect())
    }

    pub fn search(
        &self,
        fields: &Projection,
        sort: &Sort,
        conditions: &Conditions,
    ) -> DbResult<Vec<Record>> {
        let filter = self.compile_conditions(conditions)?;
        let projection: Vec<usize> = match fields {
            Projection::All => (0..self.schema.column_count()).collect(),
            Projection::Fields(names) => {
                if names.is_empty() {
                    return Err(DbError::schema("SELECT list cannot be empty"));
                }
                names
                    .iter()
                    .map(|n| self.schema.resolve(n, "SELECT list"))
                    .collect::<DbResult<_>>()?
            }
        };
        let sort_idx = sort
            .field
            .as_deref()
            .map(|f| self.schema.resolve(f, "sort"))
            .transpose()?;

        let mut matched: Vec<&Row> = self
            .rows
            .iter()
            .filter(|row| row_matches(row, &filter))
            .collect();
        match (sort_idx, sort.order) {
            (Some(i), SortOrder::Asc) => matched.sort_by(|a, b| a[i].sort_cmp(&b[i])),
            (Some(i), SortOrder::Desc) => matched.sort_by(|a, b| b[i].sort_cmp(&a[i])),
            (None, SortOrder::Asc) => {}
            (None, SortOrder::Desc) => matched.reverse(),
        }

        Ok(matched
            .into_iter()
            .map(|row| {
                projection
                    .iter()
                    .map(|&i| (self.schema.columns[i].name.clone(), row[i].clone()))
                    .collect::<Record>()
            })
            .collect())
    }

    fn compile_conditions<'a>(
        &self,
        conditions: &'a Conditions,
    ) -> DbResult<Vec<(usize, &'a Predicate)>> {
        conditions
            .iter()
            .map(|(name, pred)| Ok((self.schema.resolve(name, "WHERE")?, pred)))
            .collect()
    }

    fn to_record(&self, row: &Row) -> Record {
        self.schema
            .columns
            .iter()
            .zip(row)
            .map(|(col, v)| (col.name.clone(), v.clone()))
            .collect()
    }

    fn validate_unique(&self, rows: &[Row], candidate: &Row, skip_idx: Option<usize>) -> DbResult<()> {
        for (idx, col) in self.schema.columns.iter().enumerate() {
            if !col.field.is_unique() || candidate[idx].is_null() {
                continue;
            }
            let clash = rows
                .iter()
                .enumerate()
                .filter(|(row_idx, _)| Some(*row_idx) != skip_idx)
                .any(|(_, existing)| existing[idx].loose_eq(&candidate[idx]));
            if clash {
                let kind = if col.field.is_primary() { "PRIMARY" } else { "UNIQUE" };
                return Err(DbError::constraint(format!(
                    "{kind} field '{}' already holds {}",
                    col.name,
                    candidate[idx].to_literal()
                )));
            }
        }
        Ok(())
    }
}

fn row_matches(row: &Row, filter: &[(usize, &Predicate)]) -> bool {
    filter.iter().all(|(idx, pred)| pred.matches(&row[*idx]))
}
