//! ORDER BY lists.

use crate::alias::AliasMode;
use crate::expr::WriteSql;
use crate::schema::Column;

/// One ORDER BY item. ASC is implicit and never rendered.
#[derive(Debug, Clone)]
pub struct OrderBy {
    column: Column,
    desc: bool,
}

impl OrderBy {
    pub fn asc(column: &Column) -> Self {
        Self {
            column: column.clone(),
            desc: false,
        }
    }

    pub fn desc(column: &Column) -> Self {
        Self {
            column: column.clone(),
            desc: true,
        }
    }

    pub fn column(&self) -> &Column {
        &self.column
    }

    pub fn is_desc(&self) -> bool {
        self.desc
    }
}

impl WriteSql for OrderBy {
    fn write_sql(&self, out: &mut String, mode: AliasMode) {
        self.column.write_sql(out, mode);
        if self.desc {
            out.push_str(" DESC");
        }
    }
}

/// ORDER BY list, rendered as `" ORDER BY a, b DESC"` (nothing when empty).
#[derive(Debug, Clone, Default)]
pub struct OrderBys(Vec<OrderBy>);

impl OrderBys {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, order: OrderBy) {
        self.0.push(order);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, OrderBy> {
        self.0.iter()
    }
}

impl From<Vec<OrderBy>> for OrderBys {
    fn from(orders: Vec<OrderBy>) -> Self {
        Self(orders)
    }
}

impl FromIterator<OrderBy> for OrderBys {
    fn from_iter<I: IntoIterator<Item = OrderBy>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Extend<OrderBy> for OrderBys {
    fn extend<I: IntoIterator<Item = OrderBy>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl WriteSql for OrderBys {
    fn write_sql(&self, out: &mut String, mode: AliasMode) {
        if self.0.is_empty() {
            return;
        }
        out.push_str(" ORDER BY ");
        for (i, order) in self.0.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            order.write_sql(out, mode);
        }
    }
}
