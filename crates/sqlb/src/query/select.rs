//! SELECT statement.

use std::fmt;

use crate::alias::AliasMode;
use crate::condition::{Clause, Cond, ConditionGroup};
use crate::error::{SqlbError, SqlbResult};
use crate::expr::{Expr, WriteSql, write_list};
use crate::join::FromTables;
use crate::order::{OrderBy, OrderBys};
use crate::query::traits::Statement;
use crate::schema::{Column, write_columns};

/// Row lock requested by a SELECT.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum LockMode {
    #[default]
    None,
    /// `FOR SHARE`
    Share,
    /// `FOR UPDATE`
    Update,
}

/// SELECT statement builder.
#[derive(Debug, Clone, Default)]
pub struct SelectQuery {
    exprs: Vec<Expr>,
    from: Option<FromTables>,
    where_: Option<ConditionGroup>,
    group_by: Vec<Column>,
    having: Option<ConditionGroup>,
    order_by: OrderBys,
    limit: u64,
    offset: u64,
    lock: LockMode,
    alias_mode: Option<AliasMode>,
}

impl SelectQuery {
    pub fn new<I, E>(exprs: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<Expr>,
    {
        Self {
            exprs: exprs.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Append one result expression.
    pub fn column(mut self, expr: impl Into<Expr>) -> Self {
        self.exprs.push(expr.into());
        self
    }

    /// Set the FROM clause: a table, a schema or a join tree.
    pub fn from(mut self, from: impl Into<FromTables>) -> Self {
        self.from = Some(from.into());
        self
    }

    /// Set the WHERE condition, replacing any previous one.
    pub fn where_(mut self, cond: impl Into<Cond>) -> Self {
        self.where_ = Some(cond.into().into_clause(Clause::Where));
        self
    }

    /// Append GROUP BY columns.
    pub fn group_by<'a>(mut self, columns: impl IntoIterator<Item = &'a Column>) -> Self {
        self.group_by.extend(columns.into_iter().cloned());
        self
    }

    /// Set the HAVING condition, replacing any previous one.
    pub fn having(mut self, cond: impl Into<Cond>) -> Self {
        self.having = Some(cond.into().into_clause(Clause::Having));
        self
    }

    /// Append ORDER BY items.
    pub fn order_by(mut self, orders: impl IntoIterator<Item = OrderBy>) -> Self {
        self.order_by.extend(orders);
        self
    }

    pub fn limit(mut self, limit: u64) -> Self {
        self.limit = limit;
        self
    }

    pub fn offset(mut self, offset: u64) -> Self {
        self.offset = offset;
        self
    }

    pub fn lock_for_share(mut self) -> Self {
        self.lock = LockMode::Share;
        self
    }

    pub fn lock_for_update(mut self) -> Self {
        self.lock = LockMode::Update;
        self
    }

    /// Force the alias mode instead of choosing it from the FROM tree.
    pub fn alias_mode(mut self, mode: AliasMode) -> Self {
        self.alias_mode = Some(mode);
        self
    }

    pub fn has_joins(&self) -> bool {
        self.from.as_ref().is_some_and(FromTables::has_joins)
    }

    fn write_limit(&self, out: &mut String) {
        if self.limit == 0 && self.offset == 0 {
            return;
        }
        out.push_str(" LIMIT ");
        if self.offset > 0 {
            out.push_str(&self.offset.to_string());
            out.push_str(", ");
        }
        out.push_str(&self.limit.to_string());
    }
}

impl Statement for SelectQuery {
    fn kind(&self) -> &'static str {
        "SELECT"
    }

    /// `UseAlias` when the FROM tree joins tables, else `NoAlias`.
    fn render_mode(&self) -> AliasMode {
        match self.alias_mode {
            Some(mode) => mode,
            None if self.has_joins() => AliasMode::UseAlias,
            None => AliasMode::NoAlias,
        }
    }

    fn write_statement(&self, out: &mut String, mode: AliasMode) {
        out.push_str("SELECT ");
        write_list(out, self.exprs.iter().map(Some), mode);
        if let Some(from) = &self.from {
            from.write_sql(out, mode);
        }
        if let Some(cond) = &self.where_ {
            cond.write_sql(out, mode);
        }
        if !self.group_by.is_empty() {
            out.push_str(" GROUP BY ");
            write_columns(out, &self.group_by, mode);
        }
        if let Some(cond) = &self.having {
            cond.write_sql(out, mode);
        }
        self.order_by.write_sql(out, mode);
        self.write_limit(out);
        match self.lock {
            LockMode::None => {}
            LockMode::Share => out.push_str(" FOR SHARE"),
            LockMode::Update => out.push_str(" FOR UPDATE"),
        }
    }

    fn validate(&self) -> SqlbResult<()> {
        if self.exprs.is_empty() {
            return Err(SqlbError::EmptySelect);
        }
        if let Some(from) = &self.from {
            from.validate()?;
        }
        [&self.where_, &self.having]
            .into_iter()
            .flatten()
            .try_for_each(ConditionGroup::validate)
    }
}

/// A SELECT used as an expression renders under the enclosing mode.
impl WriteSql for SelectQuery {
    fn write_sql(&self, out: &mut String, mode: AliasMode) {
        self.write_statement(out, mode);
    }
}

impl fmt::Display for SelectQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_sql())
    }
}
