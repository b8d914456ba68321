//! Table and column references.
//!
//! A [`Table`] is a plain `{ name, alias }` value. A [`Column`] is a shared
//! handle: cloning it yields the *same* column, so aliasing it with
//! [`Column::set_alias`] is visible through every clone, including ones
//! already placed inside other statements.
//!
//! Schemas are registered explicitly, either by hand:
//!
//! ```
//! use sqlb::Table;
//!
//! let user = Table::new("user").with_alias("u");
//! let id = user.column("id");
//! assert_eq!(id.table().map(|t| t.alias()), Some("u"));
//! ```
//!
//! or with the [`table!`](crate::table) macro.

use crate::alias::{self, AliasMode, Owner};
use crate::assignment::Assignment;
use crate::condition::{CompareOp, Cond, Condition};
use crate::expr::{Expr, WriteSql};
use crate::join::{FromTables, JoinKind};
use crate::operation::{ArithOp, Operation};
use crate::order::OrderBy;
use crate::query::{DeleteQuery, InsertQuery, SelectQuery, UpdateQuery};
use std::sync::{Arc, PoisonError, RwLock};

/// A table reference: name plus optional alias (empty = unset).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Table {
    name: String,
    alias: String,
}

impl Table {
    /// Create a table reference without alias.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            alias: String::new(),
        }
    }

    /// Return a copy of this table with `alias` set.
    ///
    /// Columns already created from `self` keep pointing at `self`.
    pub fn with_alias(&self, alias: impl Into<String>) -> Self {
        Self {
            name: self.name.clone(),
            alias: alias.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn alias(&self) -> &str {
        &self.alias
    }

    /// The qualifier used in `` `q`.`col` ``: the alias if set, else the name.
    pub fn qualifier(&self) -> &str {
        if self.alias.is_empty() {
            &self.name
        } else {
            &self.alias
        }
    }

    /// Register a column owned by this table.
    pub fn column(&self, name: impl Into<String>) -> Column {
        Column::with_owner(name.into(), Some(self.clone()))
    }

    pub(crate) fn owner(&self) -> Owner<'_> {
        Owner {
            name: &self.name,
            alias: &self.alias,
        }
    }

    /// Append `` `name`[ AS `alias`] `` as used by FROM and JOIN.
    pub(crate) fn write_source(&self, out: &mut String, mode: AliasMode) {
        alias::push_quoted(out, &self.name);
        if mode.renders_table_alias() && !self.alias.is_empty() {
            alias::push_as(out, &self.alias);
        }
    }
}

impl WriteSql for Table {
    /// As an expression a table selects all of its columns.
    fn write_sql(&self, out: &mut String, mode: AliasMode) {
        if mode == AliasMode::NoAlias {
            out.push('*');
        } else {
            alias::push_quoted(out, self.qualifier());
            out.push_str(".*");
        }
    }
}

/// Anything that owns a [`Table`]: the table itself or a registered schema.
pub trait TableSource {
    fn table(&self) -> &Table;

    /// `*` / `` `t`.* `` for this table.
    fn star(&self) -> Expr {
        Expr::Table(self.table().clone())
    }

    /// `FROM this JOIN other ON ...`
    fn inner_join(&self, other: &impl TableSource, on: impl Into<Cond>) -> FromTables {
        FromTables::new(self.table().clone()).join(JoinKind::Inner, other, on)
    }

    /// `FROM this LEFT JOIN other ON ...`
    fn left_join(&self, other: &impl TableSource, on: impl Into<Cond>) -> FromTables {
        FromTables::new(self.table().clone()).join(JoinKind::Left, other, on)
    }

    /// `FROM this RIGHT JOIN other ON ...`
    fn right_join(&self, other: &impl TableSource, on: impl Into<Cond>) -> FromTables {
        FromTables::new(self.table().clone()).join(JoinKind::Right, other, on)
    }

    /// `FROM this OUTER JOIN other ON ...`
    fn outer_join(&self, other: &impl TableSource, on: impl Into<Cond>) -> FromTables {
        FromTables::new(self.table().clone()).join(JoinKind::Outer, other, on)
    }

    /// `SELECT exprs FROM this`. No expressions selects `*`.
    fn select<I, E>(&self, exprs: I) -> SelectQuery
    where
        I: IntoIterator<Item = E>,
        E: Into<Expr>,
    {
        let mut exprs: Vec<Expr> = exprs.into_iter().map(Into::into).collect();
        if exprs.is_empty() {
            exprs.push(self.star());
        }
        SelectQuery::new(exprs).from(self.table())
    }

    /// `SELECT * FROM this`
    fn select_all(&self) -> SelectQuery {
        SelectQuery::new([self.star()]).from(self.table())
    }

    /// `INSERT INTO this`
    fn insert(&self) -> InsertQuery {
        InsertQuery::new(self.table())
    }

    /// `UPDATE this SET assignments`
    fn update(&self, assignments: impl IntoIterator<Item = Assignment>) -> UpdateQuery {
        UpdateQuery::new(self.table()).set(assignments)
    }

    /// `DELETE this`
    fn delete(&self) -> DeleteQuery {
        DeleteQuery::new(self.table())
    }
}

impl TableSource for Table {
    fn table(&self) -> &Table {
        self
    }
}

#[derive(Debug)]
struct ColumnInner {
    name: String,
    alias: RwLock<String>,
    table: Option<Table>,
}

/// A column reference.
///
/// `Clone` shares the underlying column; see [`Column::set_alias`].
#[derive(Debug, Clone)]
pub struct Column {
    inner: Arc<ColumnInner>,
}

impl Column {
    /// Create a column that belongs to no table.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_owner(name.into(), None)
    }

    fn with_owner(name: String, table: Option<Table>) -> Self {
        Self {
            inner: Arc::new(ColumnInner {
                name,
                alias: RwLock::new(String::new()),
                table,
            }),
        }
    }

    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// Current alias (empty = unset).
    pub fn alias(&self) -> String {
        self.inner
            .alias
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Owning table, if the column was registered through one.
    pub fn table(&self) -> Option<&Table> {
        self.inner.table.as_ref()
    }

    /// Alias this column in place and return the same column.
    ///
    /// Every clone of this column, including clones already held by other
    /// statements, observes the new alias.
    pub fn set_alias(&self, alias: impl Into<String>) -> Column {
        *self
            .inner
            .alias
            .write()
            .unwrap_or_else(PoisonError::into_inner) = alias.into();
        self.clone()
    }

    /// Remove the alias (in place).
    pub fn clear_alias(&self) {
        self.inner
            .alias
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    /// Whether `self` and `other` are the same column (not merely equal names).
    pub fn same_as(&self, other: &Column) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    // ==================== Comparisons ====================

    /// General comparison with a possibly-absent right operand.
    pub fn cmp_opt(&self, op: CompareOp, rhs: Option<Expr>) -> Condition {
        Condition::new(self, op, rhs)
    }

    /// `col = rhs`
    pub fn eq(&self, rhs: impl Into<Expr>) -> Condition {
        self.cmp_opt(CompareOp::Eq, Some(rhs.into()))
    }

    /// `col != rhs`
    pub fn ne(&self, rhs: impl Into<Expr>) -> Condition {
        self.cmp_opt(CompareOp::Ne, Some(rhs.into()))
    }

    /// `col > rhs`
    pub fn gt(&self, rhs: impl Into<Expr>) -> Condition {
        self.cmp_opt(CompareOp::Gt, Some(rhs.into()))
    }

    /// `col >= rhs`
    pub fn ge(&self, rhs: impl Into<Expr>) -> Condition {
        self.cmp_opt(CompareOp::Ge, Some(rhs.into()))
    }

    /// `col < rhs`
    pub fn lt(&self, rhs: impl Into<Expr>) -> Condition {
        self.cmp_opt(CompareOp::Lt, Some(rhs.into()))
    }

    /// `col <= rhs`
    pub fn le(&self, rhs: impl Into<Expr>) -> Condition {
        self.cmp_opt(CompareOp::Le, Some(rhs.into()))
    }

    /// `col IN (rhs)`
    pub fn in_(&self, rhs: impl Into<Expr>) -> Condition {
        self.cmp_opt(CompareOp::In, Some(rhs.into()))
    }

    /// `col NOT IN (rhs)`
    pub fn not_in(&self, rhs: impl Into<Expr>) -> Condition {
        self.cmp_opt(CompareOp::NotIn, Some(rhs.into()))
    }

    /// `col = rhs`, or `col IS NULL` when `rhs` is `None`.
    pub fn eq_opt(&self, rhs: Option<Expr>) -> Condition {
        self.cmp_opt(CompareOp::Eq, rhs)
    }

    /// `col != rhs`, or `col IS NOT NULL` when `rhs` is `None`.
    pub fn ne_opt(&self, rhs: Option<Expr>) -> Condition {
        self.cmp_opt(CompareOp::Ne, rhs)
    }

    /// `col IS NULL`
    pub fn is_null(&self) -> Condition {
        self.eq_opt(None)
    }

    /// `col IS NOT NULL`
    pub fn is_not_null(&self) -> Condition {
        self.ne_opt(None)
    }

    // ==================== Arithmetic ====================

    /// `col+rhs`
    pub fn plus(&self, rhs: impl Into<Expr>) -> Operation {
        Operation::new(self, ArithOp::Add, Some(rhs.into()))
    }

    /// `col-rhs`
    pub fn minus(&self, rhs: impl Into<Expr>) -> Operation {
        Operation::new(self, ArithOp::Sub, Some(rhs.into()))
    }

    /// `col*rhs`
    pub fn times(&self, rhs: impl Into<Expr>) -> Operation {
        Operation::new(self, ArithOp::Mul, Some(rhs.into()))
    }

    /// `col/rhs`
    pub fn div(&self, rhs: impl Into<Expr>) -> Operation {
        Operation::new(self, ArithOp::Div, Some(rhs.into()))
    }

    // ==================== Assignment & ordering ====================

    /// `col=value` for UPDATE SET / ON DUPLICATE KEY UPDATE.
    pub fn assign(&self, value: impl Into<Expr>) -> Assignment {
        Assignment::new(self, Some(value.into()))
    }

    /// `col=value`, or `col=NULL` when `value` is `None`.
    pub fn assign_opt(&self, value: Option<Expr>) -> Assignment {
        Assignment::new(self, value)
    }

    pub fn asc(&self) -> OrderBy {
        OrderBy::asc(self)
    }

    pub fn desc(&self) -> OrderBy {
        OrderBy::desc(self)
    }
}

impl WriteSql for Column {
    fn write_sql(&self, out: &mut String, mode: AliasMode) {
        let alias = self
            .inner
            .alias
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        alias::write_reference(
            out,
            mode,
            &self.inner.name,
            &alias,
            self.inner.table.as_ref().map(Table::owner),
        );
    }
}

/// Write columns joined by `", "`.
pub(crate) fn write_columns(out: &mut String, columns: &[Column], mode: AliasMode) {
    for (i, column) in columns.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        column.write_sql(out, mode);
    }
}

/// Declare a table schema: a struct holding the [`Table`] plus one bound
/// [`Column`] per field.
///
/// Column SQL names default to the field name; give a string literal to
/// override it.
///
/// ```
/// sqlb::table! {
///     pub struct UserTable("user") {
///         pub id,
///         pub name: "user_name",
///     }
/// }
///
/// let u = UserTable::new("u");
/// assert_eq!(u.table.name(), "user");
/// assert_eq!(u.table.alias(), "u");
/// assert_eq!(u.id.name(), "id");
/// assert_eq!(u.name.name(), "user_name");
/// ```
#[macro_export]
macro_rules! table {
    (@column $field:ident $column:literal) => {
        $column
    };
    (@column $field:ident) => {
        stringify!($field)
    };
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident($table:literal) {
            $(
                $(#[$field_meta:meta])*
                $field_vis:vis $field:ident $(: $column:literal)?
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            pub table: $crate::Table,
            $(
                $(#[$field_meta])*
                $field_vis $field: $crate::Column,
            )*
        }

        impl $name {
            /// Register the schema under `alias` (empty for none).
            pub fn new(alias: &str) -> Self {
                let table = $crate::Table::new($table).with_alias(alias);
                Self {
                    $( $field: table.column($crate::table!(@column $field $($column)?)), )*
                    table,
                }
            }
        }

        impl $crate::TableSource for $name {
            fn table(&self) -> &$crate::Table {
                &self.table
            }
        }

        impl ::std::convert::From<&$name> for $crate::Expr {
            fn from(schema: &$name) -> Self {
                $crate::Expr::Table(schema.table.clone())
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    crate::table! {
        struct TestTable("test") {
            id,
            user_name,
            age: "user_age",
        }
    }

    fn render(column: &Column, mode: AliasMode) -> String {
        column.to_sql_with(mode)
    }

    #[test]
    fn column_alias_is_shared() {
        let c = Column::new("test");
        assert_eq!(c.alias(), "");
        let held = c.clone();
        c.set_alias("t");
        assert_eq!(c.alias(), "t");
        assert_eq!(held.alias(), "t");
        assert!(held.same_as(&c));
        assert!(!Column::new("test").same_as(&c));
    }

    #[test]
    fn column_render_modes() {
        let table = Table::new("test");
        let aliased = Table::new("test").with_alias("t");

        assert_eq!(render(&Column::new("col"), AliasMode::NoAlias), "`col`");
        assert_eq!(render(&table.column("col"), AliasMode::UseAlias), "`test`.`col`");
        assert_eq!(render(&aliased.column("col"), AliasMode::UseAlias), "`t`.`col`");
        assert_eq!(
            render(&aliased.column("col").set_alias("c"), AliasMode::UseAlias),
            "`t`.`col` AS `c`"
        );
        assert_eq!(render(&aliased.column("col").set_alias("c"), AliasMode::OnlyAlias), "`c`");
        assert_eq!(render(&table.column("col"), AliasMode::ColonPrefix), ":col");
        assert_eq!(render(&Column::new(""), AliasMode::NoAlias), "");
        assert_eq!(
            render(&Table::new("test").with_alias("t").column("").set_alias("c"), AliasMode::UseAlias),
            ""
        );
    }

    #[test]
    fn clearing_alias_falls_back_to_qualified_name() {
        let column = Table::new("test").column("col").set_alias("c");
        assert_eq!(render(&column, AliasMode::OnlyAlias), "`c`");
        column.clear_alias();
        assert_eq!(render(&column, AliasMode::OnlyAlias), "`test`.`col`");
        assert_eq!(render(&column, AliasMode::NoAlias), "`col`");
    }

    #[test]
    fn table_as_expression() {
        assert_eq!(Table::new("").to_sql_with(AliasMode::NoAlias), "*");
        let t = Table::new("test").with_alias("t");
        assert_eq!(t.to_sql_with(AliasMode::NoAlias), "*");
        assert_eq!(t.to_sql_with(AliasMode::UseAlias), "`t`.*");
        assert_eq!(Table::new("test").to_sql_with(AliasMode::OnlyAlias), "`test`.*");
    }

    #[test]
    fn with_alias_copies() {
        let base = Table::new("test");
        let col = base.column("id");
        let aliased = base.with_alias("t");
        assert_eq!(base.alias(), "");
        assert_eq!(aliased.alias(), "t");
        assert_eq!(col.table().map(Table::alias), Some(""));
    }

    #[test]
    fn macro_registers_columns() {
        for alias in ["", "test", "t"] {
            let t = TestTable::new(alias);
            assert_eq!(t.table.name(), "test");
            assert_eq!(t.table.alias(), alias);
            assert_eq!(t.id.name(), "id");
            assert_eq!(t.id.table(), Some(&t.table));
            assert_eq!(t.user_name.name(), "user_name");
            assert_eq!(t.user_name.table(), Some(&t.table));
            assert_eq!(t.age.name(), "user_age");
        }
    }

    #[test]
    fn star_expression() {
        let t = TestTable::new("t");
        assert_eq!(t.star().to_sql_with(AliasMode::UseAlias), "`t`.*");
        assert_eq!(Expr::from(&t).to_sql_with(AliasMode::NoAlias), "*");
    }
}
