//! DELETE statement.

use std::fmt;

use crate::alias::{self, AliasMode};
use crate::condition::{Clause, Cond, ConditionGroup};
use crate::error::{SqlbError, SqlbResult};
use crate::expr::WriteSql;
use crate::order::{OrderBy, OrderBys};
use crate::query::traits::{Statement, write_limit};
use crate::schema::{Table, TableSource};

/// DELETE statement builder, rendered in the short `` DELETE `tbl` `` form.
#[derive(Debug, Clone)]
pub struct DeleteQuery {
    table: Table,
    where_: Option<ConditionGroup>,
    order_by: OrderBys,
    limit: u64,
}

impl DeleteQuery {
    pub fn new(table: &impl TableSource) -> Self {
        Self {
            table: table.table().clone(),
            where_: None,
            order_by: OrderBys::new(),
            limit: 0,
        }
    }

    pub fn where_(mut self, cond: impl Into<Cond>) -> Self {
        self.where_ = Some(cond.into().into_clause(Clause::Where));
        self
    }

    pub fn order_by(mut self, orders: impl IntoIterator<Item = OrderBy>) -> Self {
        self.order_by.extend(orders);
        self
    }

    pub fn limit(mut self, limit: u64) -> Self {
        self.limit = limit;
        self
    }
}

impl Statement for DeleteQuery {
    fn kind(&self) -> &'static str {
        "DELETE"
    }

    fn render_mode(&self) -> AliasMode {
        AliasMode::NoAlias
    }

    fn write_statement(&self, out: &mut String, mode: AliasMode) {
        out.push_str("DELETE ");
        alias::push_quoted(out, self.table.name());
        if let Some(cond) = &self.where_ {
            cond.write_sql(out, mode);
        }
        self.order_by.write_sql(out, mode);
        write_limit(out, self.limit);
    }

    fn validate(&self) -> SqlbResult<()> {
        if self.table.name().is_empty() {
            return Err(SqlbError::EmptyName("delete table"));
        }
        match &self.where_ {
            Some(cond) => cond.validate(),
            None => Ok(()),
        }
    }
}

impl fmt::Display for DeleteQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_sql())
    }
}
