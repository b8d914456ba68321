//! FROM / JOIN table sources.

use crate::alias::AliasMode;
use crate::condition::{Clause, Cond, ConditionGroup};
use crate::error::{SqlbError, SqlbResult};
use crate::expr::WriteSql;
use crate::schema::{Table, TableSource};

/// Join kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JoinKind {
    Inner,
    Left,
    Right,
    Outer,
}

impl JoinKind {
    /// Keyword with surrounding spaces, e.g. `" LEFT JOIN "`.
    pub fn keyword(self) -> &'static str {
        match self {
            JoinKind::Inner => " JOIN ",
            JoinKind::Left => " LEFT JOIN ",
            JoinKind::Right => " RIGHT JOIN ",
            JoinKind::Outer => " OUTER JOIN ",
        }
    }
}

/// One `<KIND> JOIN table ON cond` entry.
#[derive(Debug, Clone)]
pub struct Join {
    kind: JoinKind,
    table: Option<Table>,
    on: ConditionGroup,
}

impl Join {
    /// Create a join. The ON condition becomes a top-level group.
    ///
    /// A join without a table renders nothing.
    pub fn new(kind: JoinKind, table: Option<Table>, on: impl Into<Cond>) -> Self {
        Self {
            kind,
            table,
            on: on.into().into_clause(Clause::On),
        }
    }

    pub fn kind(&self) -> JoinKind {
        self.kind
    }

    pub fn table(&self) -> Option<&Table> {
        self.table.as_ref()
    }

    pub fn on(&self) -> &ConditionGroup {
        &self.on
    }

    pub fn validate(&self) -> SqlbResult<()> {
        let table = self.table.as_ref().ok_or(SqlbError::MissingTable("join"))?;
        if table.name().is_empty() {
            return Err(SqlbError::EmptyName("join table"));
        }
        self.on.validate()
    }
}

impl WriteSql for Join {
    fn write_sql(&self, out: &mut String, mode: AliasMode) {
        let Some(table) = &self.table else {
            return;
        };
        out.push_str(self.kind.keyword());
        table.write_source(out, mode);
        self.on.write_sql(out, mode);
    }
}

/// A FROM clause: one table plus zero or more joins.
#[derive(Debug, Clone, Default)]
pub struct FromTables {
    table: Option<Table>,
    joins: Vec<Join>,
}

impl FromTables {
    pub fn new(table: Table) -> Self {
        Self {
            table: Some(table),
            joins: Vec::new(),
        }
    }

    /// Append a join against `other`.
    pub fn join(mut self, kind: JoinKind, other: &impl TableSource, on: impl Into<Cond>) -> Self {
        self.joins
            .push(Join::new(kind, Some(other.table().clone()), on));
        self
    }

    /// Append a prebuilt join.
    pub fn push_join(mut self, join: Join) -> Self {
        self.joins.push(join);
        self
    }

    pub fn inner_join(self, other: &impl TableSource, on: impl Into<Cond>) -> Self {
        self.join(JoinKind::Inner, other, on)
    }

    pub fn left_join(self, other: &impl TableSource, on: impl Into<Cond>) -> Self {
        self.join(JoinKind::Left, other, on)
    }

    pub fn right_join(self, other: &impl TableSource, on: impl Into<Cond>) -> Self {
        self.join(JoinKind::Right, other, on)
    }

    pub fn outer_join(self, other: &impl TableSource, on: impl Into<Cond>) -> Self {
        self.join(JoinKind::Outer, other, on)
    }

    pub fn table(&self) -> Option<&Table> {
        self.table.as_ref()
    }

    pub fn joins(&self) -> &[Join] {
        &self.joins
    }

    pub fn has_joins(&self) -> bool {
        !self.joins.is_empty()
    }

    pub fn validate(&self) -> SqlbResult<()> {
        let table = self.table.as_ref().ok_or(SqlbError::MissingTable("from"))?;
        if table.name().is_empty() {
            return Err(SqlbError::EmptyName("from table"));
        }
        self.joins.iter().try_for_each(Join::validate)
    }
}

impl WriteSql for FromTables {
    fn write_sql(&self, out: &mut String, mode: AliasMode) {
        let Some(table) = &self.table else {
            return;
        };
        out.push_str(" FROM ");
        table.write_source(out, mode);
        for join in &self.joins {
            join.write_sql(out, mode);
        }
    }
}

impl From<Table> for FromTables {
    fn from(table: Table) -> Self {
        FromTables::new(table)
    }
}

impl<T: TableSource> From<&T> for FromTables {
    fn from(source: &T) -> Self {
        FromTables::new(source.table().clone())
    }
}
