//! # sqlb
//!
//! A composable SQL statement builder for MySQL-flavoured SQL.
//!
//! ## Features
//!
//! - **Typed AST**: columns, literals, arithmetic, comparisons and boolean
//!   groups are plain values that render themselves
//! - **Minimal brackets**: same-operator AND/OR groups are flattened on
//!   construction, nested groups are bracketed, top-level ones are not
//! - **Alias modes**: one switch decides whether references render bare,
//!   table-qualified, alias-only or as `:name` bind markers
//! - **Explicit schemas**: the [`table!`] macro declares a table and its columns
//! - **Infallible rendering**: malformed nodes degrade to the smallest
//!   fragment; `validate()` reports them separately
//!
//! ## Statement builders
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
//! let u1 = UserTable::new("u1");
//! let u2 = UserTable::new("u2");
//!
//! let q = select([&u1])
//!     .from(u1.inner_join(&u2, u1.id.eq(&u2.id)))
//!     .where_(u2.name.eq(PLACEHOLDER))
//!     .limit(10);
//! assert_eq!(
//!     q.to_sql(),
//!     "SELECT `u1`.* FROM `user` AS `u1` JOIN `user` AS `u2` ON `u1`.`id` = `u2`.`id` \
//!      WHERE `u2`.`name` = ? LIMIT 10"
//! );
//!
//! let q = insert(&u1).columns([&u1.id, &u1.name]).named_values(Vec::<Expr>::new());
//! assert_eq!(q.to_sql(), "INSERT INTO `user` (`id`, `name`) VALUES (:id, :name)");
//!
//! let q = delete(&u1).where_(u1.id.gt(PLACEHOLDER));
//! assert_eq!(q.to_sql(), "DELETE `user` WHERE `id` > ?");
//! ```

pub mod alias;
pub mod assignment;
pub mod buffer;
pub mod condition;
pub mod error;
pub mod expr;
pub mod join;
pub mod operation;
pub mod order;
pub mod prelude;
pub mod query;
pub mod schema;

pub use alias::AliasMode;
pub use assignment::Assignment;
pub use buffer::{BufferPool, with_buffer};
pub use condition::{BoolOp, Clause, CompareOp, Cond, Condition, ConditionGroup, and, not, or};
pub use error::{SqlbError, SqlbResult};
pub use expr::{Expr, Function, PLACEHOLDER, WriteSql, func};
pub use join::{FromTables, Join, JoinKind};
pub use operation::{ArithOp, Operation};
pub use order::{OrderBy, OrderBys};
pub use query::{
    DeleteQuery, InsertQuery, LockMode, SelectQuery, Statement, UpdateQuery, delete, insert,
    select, update,
};
pub use schema::{Column, Table, TableSource};
