//! Expression layer: the closed set of nodes every statement is built from.
//!
//! This module provides the [`Expr`] enum which covers:
//! - Raw literal fragments and the `?` placeholder
//! - Column and table references (rendered through [`AliasMode`])
//! - Function calls, comma-separated lists and back-to-back concatenation
//! - Arithmetic operations, comparisons and boolean condition groups
//! - Subqueries and inline ORDER BY lists
//!
//! Rendering appends to a caller-supplied `String` and never fails.

use crate::alias::{AliasMode, push_as};
use crate::condition::{Cond, Condition, ConditionGroup};
use crate::operation::Operation;
use crate::order::{OrderBy, OrderBys};
use crate::query::SelectQuery;
use crate::schema::{Column, Table};

/// Anything that can render itself as SQL under an alias mode.
pub trait WriteSql {
    /// Append the SQL for this node to `out`.
    fn write_sql(&self, out: &mut String, mode: AliasMode);

    /// Render this node into a fresh string.
    fn to_sql_with(&self, mode: AliasMode) -> String {
        let mut out = String::new();
        self.write_sql(&mut out, mode);
        out
    }
}

/// The bind-parameter marker, rendered as `?`.
pub const PLACEHOLDER: Expr = Expr::Placeholder;

/// Expression node.
#[derive(Debug, Clone)]
pub enum Expr {
    /// Pre-formatted SQL text, emitted verbatim (`1`, `'x'`, `*`, ...).
    Literal(String),

    /// Driver bind-parameter marker: `?`
    Placeholder,

    /// Column reference.
    Column(Column),

    /// Table reference, rendered as `*` or `` `t`.* ``.
    Table(Table),

    /// Function call: `name(args) [AS alias]`
    Function(Function),

    /// Members rendered back-to-back with no separator.
    Concat(Vec<Expr>),

    /// Members rendered comma-separated; `None` renders as `NULL`.
    List(Vec<Option<Expr>>),

    /// Binary arithmetic: `lhs op rhs`
    Operation(Box<Operation>),

    /// Binary comparison: `lhs op rhs`
    Condition(Box<Condition>),

    /// Boolean combination of conditions.
    Group(ConditionGroup),

    /// Inline ` ORDER BY ...` list (e.g. inside `GROUP_CONCAT`).
    OrderBy(OrderBys),

    /// Nested SELECT statement.
    Subquery(Box<SelectQuery>),
}

impl Expr {
    /// Create a raw SQL fragment.
    pub fn raw(sql: impl Into<String>) -> Self {
        Expr::Literal(sql.into())
    }

    /// Create a comma-separated list of present expressions.
    pub fn list<I, E>(items: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<Expr>,
    {
        Expr::List(items.into_iter().map(|e| Some(e.into())).collect())
    }

    /// Create a comma-separated list where `None` entries render as `NULL`.
    pub fn list_opt(items: impl IntoIterator<Item = Option<Expr>>) -> Self {
        Expr::List(items.into_iter().collect())
    }

    /// Create a concatenation: members are rendered with no separator.
    pub fn concat<I, E>(items: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<Expr>,
    {
        Expr::Concat(items.into_iter().map(Into::into).collect())
    }

    /// Whether this node is a nested SELECT.
    pub fn is_subquery(&self) -> bool {
        matches!(self, Expr::Subquery(_))
    }
}

impl WriteSql for Expr {
    fn write_sql(&self, out: &mut String, mode: AliasMode) {
        match self {
            Expr::Literal(sql) => out.push_str(sql),
            Expr::Placeholder => out.push('?'),
            Expr::Column(column) => column.write_sql(out, mode),
            Expr::Table(table) => table.write_sql(out, mode),
            Expr::Function(func) => func.write_sql(out, mode),
            Expr::Concat(items) => {
                for item in items {
                    item.write_sql(out, mode);
                }
            }
            Expr::List(items) => write_list(out, items.iter().map(Option::as_ref), mode),
            Expr::Operation(op) => op.write_sql(out, mode),
            Expr::Condition(cond) => cond.write_sql(out, mode),
            Expr::Group(group) => group.write_sql(out, mode),
            Expr::OrderBy(orders) => orders.write_sql(out, mode),
            Expr::Subquery(query) => query.write_sql(out, mode),
        }
    }
}

/// Write `items` joined by `", "`. Absent members render as `NULL` so that
/// positions line up with column lists.
pub(crate) fn write_list<'a>(
    out: &mut String,
    items: impl IntoIterator<Item = Option<&'a Expr>>,
    mode: AliasMode,
) {
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        match item {
            Some(expr) => expr.write_sql(out, mode),
            None => out.push_str("NULL"),
        }
    }
}

/// Function call expression.
#[derive(Debug, Clone)]
pub struct Function {
    name: String,
    args: Vec<Option<Expr>>,
    alias: String,
}

impl Function {
    /// Create a function call with present arguments.
    pub fn new<I, E>(name: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<Expr>,
    {
        Self {
            name: name.into(),
            args: args.into_iter().map(|e| Some(e.into())).collect(),
            alias: String::new(),
        }
    }

    /// Create a function call where `None` arguments render as `NULL`.
    pub fn with_args_opt(name: impl Into<String>, args: impl IntoIterator<Item = Option<Expr>>) -> Self {
        Self {
            name: name.into(),
            args: args.into_iter().collect(),
            alias: String::new(),
        }
    }

    /// Set the `AS` alias.
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = alias.into();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn alias(&self) -> &str {
        &self.alias
    }
}

impl WriteSql for Function {
    fn write_sql(&self, out: &mut String, mode: AliasMode) {
        out.push_str(&self.name);
        out.push('(');
        write_list(out, self.args.iter().map(Option::as_ref), mode);
        out.push(')');
        if !self.alias.is_empty() {
            push_as(out, &self.alias);
        }
    }
}

/// Shorthand for [`Function::new`].
pub fn func<I, E>(name: impl Into<String>, args: I) -> Function
where
    I: IntoIterator<Item = E>,
    E: Into<Expr>,
{
    Function::new(name, args)
}

// ==================== Conversions ====================

impl From<Column> for Expr {
    fn from(column: Column) -> Self {
        Expr::Column(column)
    }
}

impl From<&Column> for Expr {
    fn from(column: &Column) -> Self {
        Expr::Column(column.clone())
    }
}

impl From<Table> for Expr {
    fn from(table: Table) -> Self {
        Expr::Table(table)
    }
}

impl From<&Table> for Expr {
    fn from(table: &Table) -> Self {
        Expr::Table(table.clone())
    }
}

impl From<Function> for Expr {
    fn from(func: Function) -> Self {
        Expr::Function(func)
    }
}

impl From<Operation> for Expr {
    fn from(op: Operation) -> Self {
        Expr::Operation(Box::new(op))
    }
}

impl From<Condition> for Expr {
    fn from(cond: Condition) -> Self {
        Expr::Condition(Box::new(cond))
    }
}

impl From<ConditionGroup> for Expr {
    fn from(group: ConditionGroup) -> Self {
        Expr::Group(group)
    }
}

impl From<Cond> for Expr {
    fn from(cond: Cond) -> Self {
        match cond {
            Cond::Single(c) => c.into(),
            Cond::Group(g) => g.into(),
        }
    }
}

impl From<OrderBys> for Expr {
    fn from(orders: OrderBys) -> Self {
        Expr::OrderBy(orders)
    }
}

impl From<OrderBy> for Expr {
    fn from(order: OrderBy) -> Self {
        Expr::OrderBy(OrderBys::from(vec![order]))
    }
}

impl From<SelectQuery> for Expr {
    fn from(query: SelectQuery) -> Self {
        Expr::Subquery(Box::new(query))
    }
}
