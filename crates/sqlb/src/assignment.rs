//! `col=value` assignments for UPDATE SET and ON DUPLICATE KEY UPDATE.

use crate::alias::AliasMode;
use crate::expr::{Expr, WriteSql};
use crate::schema::Column;

/// `` `col`=value ``, rendered without spaces. An absent value renders `=NULL`.
#[derive(Debug, Clone)]
pub struct Assignment {
    column: Column,
    value: Option<Expr>,
}

impl Assignment {
    pub fn new(column: &Column, value: Option<Expr>) -> Self {
        Self {
            column: column.clone(),
            value,
        }
    }

    pub fn column(&self) -> &Column {
        &self.column
    }

    pub fn value(&self) -> Option<&Expr> {
        self.value.as_ref()
    }
}

impl WriteSql for Assignment {
    fn write_sql(&self, out: &mut String, mode: AliasMode) {
        self.column.write_sql(out, mode);
        match &self.value {
            Some(value) => {
                out.push('=');
                value.write_sql(out, mode);
            }
            None => out.push_str("=NULL"),
        }
    }
}

/// Write assignments joined by `", "`.
pub(crate) fn write_assignments(out: &mut String, assignments: &[Assignment], mode: AliasMode) {
    for (i, assignment) in assignments.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        assignment.write_sql(out, mode);
    }
}
