//! Binary arithmetic: `lhs op rhs`.

use crate::alias::AliasMode;
use crate::condition::{CompareOp, Condition};
use crate::expr::{Expr, WriteSql};

/// Arithmetic operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArithOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl ArithOp {
    pub fn as_str(self) -> &'static str {
        match self {
            ArithOp::Add => "+",
            ArithOp::Sub => "-",
            ArithOp::Mul => "*",
            ArithOp::Div => "/",
        }
    }
}

/// Arithmetic expression, rendered without surrounding spaces (`` `col`+1 ``).
#[derive(Debug, Clone)]
pub struct Operation {
    op: ArithOp,
    lhs: Expr,
    rhs: Option<Expr>,
}

impl Operation {
    /// Create an operation. An absent `rhs` renders as `NULL`.
    pub fn new(lhs: impl Into<Expr>, op: ArithOp, rhs: Option<Expr>) -> Self {
        Self {
            op,
            lhs: lhs.into(),
            rhs,
        }
    }

    pub fn op(&self) -> ArithOp {
        self.op
    }

    pub fn lhs(&self) -> &Expr {
        &self.lhs
    }

    pub fn rhs(&self) -> Option<&Expr> {
        self.rhs.as_ref()
    }

    fn compare(self, op: CompareOp, rhs: impl Into<Expr>) -> Condition {
        Condition::new(self, op, Some(rhs.into()))
    }

    /// `(lhs op rhs) = value`
    pub fn eq(self, rhs: impl Into<Expr>) -> Condition {
        self.compare(CompareOp::Eq, rhs)
    }

    pub fn ne(self, rhs: impl Into<Expr>) -> Condition {
        self.compare(CompareOp::Ne, rhs)
    }

    pub fn gt(self, rhs: impl Into<Expr>) -> Condition {
        self.compare(CompareOp::Gt, rhs)
    }

    pub fn ge(self, rhs: impl Into<Expr>) -> Condition {
        self.compare(CompareOp::Ge, rhs)
    }

    pub fn lt(self, rhs: impl Into<Expr>) -> Condition {
        self.compare(CompareOp::Lt, rhs)
    }

    pub fn le(self, rhs: impl Into<Expr>) -> Condition {
        self.compare(CompareOp::Le, rhs)
    }
}

impl WriteSql for Operation {
    fn write_sql(&self, out: &mut String, mode: AliasMode) {
        self.lhs.write_sql(out, mode);
        out.push_str(self.op.as_str());
        match &self.rhs {
            Some(rhs) => rhs.write_sql(out, mode),
            None => out.push_str("NULL"),
        }
    }
}
