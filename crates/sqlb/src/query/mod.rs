//! Statement builders.
//!
//! Each builder is a thin assembler over the expression layer: it renders
//! its clauses in order into one buffer under one alias mode.
//!
//! # Usage
//!
//! ```
//! use sqlb::prelude::*;
//!
//! sqlb::table! {
//!     pub struct UserTable("user") {
//!         pub id,
//!         pub name,
//!     }
//! }
//!
//! let u = UserTable::new("u");
//!
//! let q = select([&u.id, &u.name])
//!     .from(&u)
//!     .where_(u.id.gt(PLACEHOLDER).and(u.name.eq(Expr::raw("'x'"))));
//! assert_eq!(q.to_sql(), "SELECT `id`, `name` FROM `user` WHERE `id` > ? AND `name` = 'x'");
//!
//! let q = update(&u).set([u.name.assign(PLACEHOLDER)]).where_(u.id.eq(PLACEHOLDER));
//! assert_eq!(q.to_sql(), "UPDATE `user` SET `name`=? WHERE `id` = ?");
//! ```

mod delete;
mod insert;
mod select;
mod traits;
mod update;

pub use delete::DeleteQuery;
pub use insert::InsertQuery;
pub use select::{LockMode, SelectQuery};
pub use traits::Statement;
pub use update::UpdateQuery;

use crate::expr::Expr;
use crate::schema::TableSource;

/// Create a SELECT statement with the given result expressions.
pub fn select<I, E>(exprs: I) -> SelectQuery
where
    I: IntoIterator<Item = E>,
    E: Into<Expr>,
{
    SelectQuery::new(exprs)
}

/// Create an INSERT statement for `table`.
pub fn insert(table: &impl TableSource) -> InsertQuery {
    InsertQuery::new(table)
}

/// Create an UPDATE statement for `table`.
pub fn update(table: &impl TableSource) -> UpdateQuery {
    UpdateQuery::new(table)
}

/// Create a DELETE statement for `table`.
pub fn delete(table: &impl TableSource) -> DeleteQuery {
    DeleteQuery::new(table)
}
