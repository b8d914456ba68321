//! Convenient imports for typical `sqlb` usage.
//!
//! ```
//! use sqlb::prelude::*;
//! ```

pub use crate::{
    AliasMode, Column, Cond, Expr, PLACEHOLDER, Statement, Table, TableSource, WriteSql, and,
    delete, func, insert, not, or, select, update,
};
pub use crate::{SqlbError, SqlbResult};
