//! INSERT statement.

use std::fmt;

use crate::alias::{self, AliasMode};
use crate::assignment::{Assignment, write_assignments};
use crate::error::{SqlbError, SqlbResult};
use crate::expr::{Expr, write_list};
use crate::query::traits::Statement;
use crate::schema::{Column, Table, TableSource, write_columns};

/// INSERT statement builder.
///
/// Without explicit values one `?` is emitted per column; after
/// [`named_values`](Self::named_values) with no values the columns are
/// emitted as `:name` bind markers instead.
#[derive(Debug, Clone)]
pub struct InsertQuery {
    table: Table,
    ignore: bool,
    columns: Vec<Column>,
    values: Vec<Option<Expr>>,
    values_mode: AliasMode,
    on_duplicate: Vec<Assignment>,
}

impl InsertQuery {
    pub fn new(table: &impl TableSource) -> Self {
        Self {
            table: table.table().clone(),
            ignore: false,
            columns: Vec::new(),
            values: Vec::new(),
            values_mode: AliasMode::NoAlias,
            on_duplicate: Vec::new(),
        }
    }

    /// `INSERT IGNORE`
    pub fn ignore(mut self) -> Self {
        self.ignore = true;
        self
    }

    /// Set the column list.
    pub fn columns<'a>(mut self, columns: impl IntoIterator<Item = &'a Column>) -> Self {
        self.columns = columns.into_iter().cloned().collect();
        self
    }

    /// Set positional values.
    pub fn values<I, E>(self, values: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<Expr>,
    {
        self.values_opt(values.into_iter().map(|e| Some(e.into())))
    }

    /// Set positional values; `None` renders as `NULL`.
    pub fn values_opt(mut self, values: impl IntoIterator<Item = Option<Expr>>) -> Self {
        self.values = values.into_iter().collect();
        self.values_mode = AliasMode::NoAlias;
        self
    }

    /// Set values rendered as named bind markers: columns become `:name`.
    pub fn named_values<I, E>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<Expr>,
    {
        self.values = values.into_iter().map(|e| Some(e.into())).collect();
        self.values_mode = AliasMode::ColonPrefix;
        self
    }

    /// `ON DUPLICATE KEY UPDATE a=..., b=...`
    pub fn on_duplicate_key_update(mut self, assignments: impl IntoIterator<Item = Assignment>) -> Self {
        self.on_duplicate = assignments.into_iter().collect();
        self
    }

    fn write_values(&self, out: &mut String) {
        if !self.values.is_empty() {
            write_list(out, self.values.iter().map(Option::as_ref), self.values_mode);
        } else if self.values_mode == AliasMode::ColonPrefix {
            write_columns(out, &self.columns, AliasMode::ColonPrefix);
        } else {
            for i in 0..self.columns.len() {
                if i > 0 {
                    out.push_str(", ");
                }
                out.push('?');
            }
        }
    }
}

impl Statement for InsertQuery {
    fn kind(&self) -> &'static str {
        "INSERT"
    }

    fn render_mode(&self) -> AliasMode {
        AliasMode::NoAlias
    }

    fn write_statement(&self, out: &mut String, mode: AliasMode) {
        if self.ignore {
            out.push_str("INSERT IGNORE INTO ");
        } else {
            out.push_str("INSERT INTO ");
        }
        alias::push_quoted(out, self.table.name());
        out.push_str(" (");
        write_columns(out, &self.columns, mode);
        out.push_str(") VALUES (");
        self.write_values(out);
        out.push(')');
        if !self.on_duplicate.is_empty() {
            out.push_str(" ON DUPLICATE KEY UPDATE ");
            write_assignments(out, &self.on_duplicate, mode);
        }
    }

    fn validate(&self) -> SqlbResult<()> {
        if self.table.name().is_empty() {
            return Err(SqlbError::EmptyName("insert table"));
        }
        if self.columns.iter().any(|c| c.name().is_empty()) {
            return Err(SqlbError::EmptyName("insert column"));
        }
        Ok(())
    }
}

impl fmt::Display for InsertQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_sql())
    }
}
