//! Comparisons and boolean condition groups.
//!
//! [`Condition`] is a single binary comparison. [`ConditionGroup`] combines
//! conditions with AND / OR / NOT. Groups are merged on construction: a
//! group never holds a direct member group with the same operator, so
//! `a.and(b).and(c)` is one flat three-member AND group. At render time
//! every nested group is bracketed, and only the group attached to a clause
//! (WHERE / HAVING / ON) renders without brackets, prefixed by the clause
//! keyword.
//!
//! ```
//! use sqlb::{AliasMode, Column, Expr, WriteSql, PLACEHOLDER};
//!
//! let a = Column::new("a");
//! let b = Column::new("b");
//! let c = Column::new("c");
//! let cond = a.eq(PLACEHOLDER).and(b.gt(Expr::raw("1"))).or(c.is_null());
//! assert_eq!(
//!     cond.to_sql_with(AliasMode::NoAlias),
//!     "((`a` = ? AND `b` > 1) OR `c` IS NULL)"
//! );
//! ```

use crate::alias::AliasMode;
use crate::error::{SqlbError, SqlbResult};
use crate::expr::{Expr, WriteSql};

/// Comparison operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompareOp {
    Eq,
    Ne,
    Gt,
    Ge,
    Lt,
    Le,
    In,
    NotIn,
}

impl CompareOp {
    pub fn as_str(self) -> &'static str {
        match self {
            CompareOp::Eq => "=",
            CompareOp::Ne => "!=",
            CompareOp::Gt => ">",
            CompareOp::Ge => ">=",
            CompareOp::Lt => "<",
            CompareOp::Le => "<=",
            CompareOp::In => "IN",
            CompareOp::NotIn => "NOT IN",
        }
    }

    /// IN / NOT IN always bracket their right operand.
    pub fn is_membership(self) -> bool {
        matches!(self, CompareOp::In | CompareOp::NotIn)
    }
}

/// Binary comparison: `lhs op rhs`.
#[derive(Debug, Clone)]
pub struct Condition {
    op: CompareOp,
    lhs: Expr,
    rhs: Option<Expr>,
}

impl Condition {
    /// Create a comparison. `rhs = None` means "absent":
    /// `=` renders `IS NULL`, `!=` renders `IS NOT NULL`, any other operator
    /// renders a literal `NULL` operand.
    pub fn new(lhs: impl Into<Expr>, op: CompareOp, rhs: Option<Expr>) -> Self {
        Self {
            op,
            lhs: lhs.into(),
            rhs,
        }
    }

    pub fn op(&self) -> CompareOp {
        self.op
    }

    pub fn lhs(&self) -> &Expr {
        &self.lhs
    }

    pub fn rhs(&self) -> Option<&Expr> {
        self.rhs.as_ref()
    }

    /// `self AND other`, merging into `other` when it is an AND group.
    pub fn and(self, other: impl Into<Cond>) -> ConditionGroup {
        Cond::Single(self).and(other)
    }

    /// `self OR other`, merging into `other` when it is an OR group.
    pub fn or(self, other: impl Into<Cond>) -> ConditionGroup {
        Cond::Single(self).or(other)
    }

    /// `NOT self`
    pub fn not(self) -> ConditionGroup {
        Cond::Single(self).not()
    }
}

impl WriteSql for Condition {
    fn write_sql(&self, out: &mut String, mode: AliasMode) {
        let mode = mode.for_operands();

        self.lhs.write_sql(out, mode);
        let Some(rhs) = &self.rhs else {
            match self.op {
                CompareOp::Eq => out.push_str(" IS NULL"),
                CompareOp::Ne => out.push_str(" IS NOT NULL"),
                op => {
                    out.push(' ');
                    out.push_str(op.as_str());
                    out.push(' ');
                    if op.is_membership() {
                        out.push_str("(NULL)");
                    } else {
                        out.push_str("NULL");
                    }
                }
            }
            return;
        };

        out.push(' ');
        out.push_str(self.op.as_str());
        out.push(' ');
        let bracket = self.op.is_membership() || rhs.is_subquery();
        if bracket {
            out.push('(');
        }
        rhs.write_sql(out, mode);
        if bracket {
            out.push(')');
        }
    }
}

/// Boolean operator of a [`ConditionGroup`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoolOp {
    And,
    Or,
    /// Exactly one member.
    Not,
}

impl BoolOp {
    fn joiner(self) -> &'static str {
        match self {
            BoolOp::Or => " OR ",
            BoolOp::And | BoolOp::Not => " AND ",
        }
    }
}

/// Clause a top-level group is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Clause {
    Where,
    Having,
    On,
}

impl Clause {
    pub fn introducer(self) -> &'static str {
        match self {
            Clause::Where => " WHERE ",
            Clause::Having => " HAVING ",
            Clause::On => " ON ",
        }
    }
}

/// Either a single comparison or a group.
#[derive(Debug, Clone)]
pub enum Cond {
    Single(Condition),
    Group(ConditionGroup),
}

impl Cond {
    /// `self AND other`
    pub fn and(self, other: impl Into<Cond>) -> ConditionGroup {
        self.combine(BoolOp::And, other.into())
    }

    /// `self OR other`
    pub fn or(self, other: impl Into<Cond>) -> ConditionGroup {
        self.combine(BoolOp::Or, other.into())
    }

    /// `NOT self`. Never merged: `NOT NOT a` stays two layers.
    ///
    /// Negating a group that renders nothing yields an empty group.
    pub fn not(self) -> ConditionGroup {
        if let Cond::Group(group) = &self
            && group.renders_nothing()
        {
            return ConditionGroup::default();
        }
        ConditionGroup {
            members: vec![self.nested()],
            op: BoolOp::Not,
            clause: None,
        }
    }

    fn combine(self, op: BoolOp, other: Cond) -> ConditionGroup {
        match self {
            Cond::Group(group) => group.combine(op, other),
            single => {
                let mut group = ConditionGroup::empty(op);
                group.push_member(single);
                group.push_member(other);
                group
            }
        }
    }

    /// Attach this condition to `clause`, making it the top-level group.
    ///
    /// A single condition becomes a one-member AND group, which renders
    /// identically to the bare condition.
    pub fn into_clause(self, clause: Clause) -> ConditionGroup {
        let mut group = match self {
            Cond::Group(group) => group,
            single => {
                let mut group = ConditionGroup::empty(BoolOp::And);
                group.members.push(single);
                group
            }
        };
        group.clause = Some(clause);
        group
    }

    fn nested(self) -> Cond {
        match self {
            Cond::Group(mut group) => {
                group.clause = None;
                Cond::Group(group)
            }
            single => single,
        }
    }

    fn validate(&self) -> SqlbResult<()> {
        match self {
            Cond::Single(_) => Ok(()),
            Cond::Group(group) => group.validate(),
        }
    }
}

impl WriteSql for Cond {
    fn write_sql(&self, out: &mut String, mode: AliasMode) {
        match self {
            Cond::Single(cond) => cond.write_sql(out, mode),
            Cond::Group(group) => group.write_sql(out, mode),
        }
    }
}

impl From<Condition> for Cond {
    fn from(cond: Condition) -> Self {
        Cond::Single(cond)
    }
}

impl From<ConditionGroup> for Cond {
    fn from(group: ConditionGroup) -> Self {
        Cond::Group(group)
    }
}

/// Boolean combination of conditions.
///
/// Invariants kept by every combinator:
/// - a NOT group has exactly one member;
/// - no direct member is a group with the same operator;
/// - only a group attached to a clause is top-level.
#[derive(Debug, Clone)]
pub struct ConditionGroup {
    members: Vec<Cond>,
    op: BoolOp,
    clause: Option<Clause>,
}

impl Default for ConditionGroup {
    fn default() -> Self {
        Self::empty(BoolOp::And)
    }
}

impl ConditionGroup {
    fn empty(op: BoolOp) -> Self {
        Self {
            members: Vec::new(),
            op,
            clause: None,
        }
    }

    /// Build a group from raw parts, without merging.
    ///
    /// This bypasses the combinators' invariants; use [`validate`](Self::validate)
    /// to check a group built this way.
    pub fn from_parts(op: BoolOp, members: Vec<Cond>) -> Self {
        Self {
            members,
            op,
            clause: None,
        }
    }

    pub fn op(&self) -> BoolOp {
        self.op
    }

    pub fn members(&self) -> &[Cond] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn clause(&self) -> Option<Clause> {
        self.clause
    }

    pub fn is_top_level(&self) -> bool {
        self.clause.is_some()
    }

    /// `self AND other`
    pub fn and(self, other: impl Into<Cond>) -> ConditionGroup {
        self.combine(BoolOp::And, other.into())
    }

    /// `self OR other`
    pub fn or(self, other: impl Into<Cond>) -> ConditionGroup {
        self.combine(BoolOp::Or, other.into())
    }

    /// `NOT self`
    pub fn not(self) -> ConditionGroup {
        Cond::Group(self).not()
    }

    fn combine(mut self, op: BoolOp, other: Cond) -> ConditionGroup {
        if self.renders_nothing() {
            let mut group = ConditionGroup::empty(op);
            group.push_member(other);
            return group;
        }
        if self.op != op {
            let mut group = ConditionGroup::empty(op);
            group.push_member(Cond::Group(self));
            group.push_member(other);
            return group;
        }
        self.clause = None;
        self.push_member(other);
        self
    }

    /// Append `member`, splicing in its members if it is a group with the
    /// same operator as `self`.
    ///
    /// Groups that render nothing are dropped so no joiner is written for them.
    fn push_member(&mut self, member: Cond) {
        match member.nested() {
            Cond::Group(group) if group.renders_nothing() => {}
            Cond::Group(group) if group.op == self.op && self.op != BoolOp::Not => {
                self.members.extend(group.members);
            }
            member => self.members.push(member),
        }
    }

    /// Whether this group has no member that produces any SQL.
    pub fn renders_nothing(&self) -> bool {
        self.members.iter().all(|member| match member {
            Cond::Single(_) => false,
            Cond::Group(group) => group.renders_nothing(),
        })
    }

    /// Check the NOT-arity invariant over the whole tree.
    pub fn validate(&self) -> SqlbResult<()> {
        if self.op == BoolOp::Not && self.members.len() != 1 {
            return Err(SqlbError::InvalidNot {
                members: self.members.len(),
            });
        }
        self.members.iter().try_for_each(Cond::validate)
    }
}

impl WriteSql for ConditionGroup {
    fn write_sql(&self, out: &mut String, mode: AliasMode) {
        if self.renders_nothing() {
            return;
        }

        match self.clause {
            Some(clause) => out.push_str(clause.introducer()),
            None => out.push('('),
        }
        if self.op == BoolOp::Not {
            out.push_str("NOT ");
        }
        let visible = self.members.iter().filter(|member| match member {
            Cond::Single(_) => true,
            Cond::Group(group) => !group.renders_nothing(),
        });
        for (i, member) in visible.enumerate() {
            if i > 0 {
                out.push_str(self.op.joiner());
            }
            member.write_sql(out, mode);
        }
        if self.clause.is_none() {
            out.push(')');
        }
    }
}

/// AND all `conds` together, flattening nested AND groups.
pub fn and<I, C>(conds: I) -> ConditionGroup
where
    I: IntoIterator<Item = C>,
    C: Into<Cond>,
{
    collect(BoolOp::And, conds)
}

/// OR all `conds` together, flattening nested OR groups.
pub fn or<I, C>(conds: I) -> ConditionGroup
where
    I: IntoIterator<Item = C>,
    C: Into<Cond>,
{
    collect(BoolOp::Or, conds)
}

/// `NOT cond`
pub fn not(cond: impl Into<Cond>) -> ConditionGroup {
    cond.into().not()
}

fn collect<I, C>(op: BoolOp, conds: I) -> ConditionGroup
where
    I: IntoIterator<Item = C>,
    C: Into<Cond>,
{
    let mut group = ConditionGroup::empty(op);
    for cond in conds {
        group.push_member(cond.into());
    }
    group
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::PLACEHOLDER;
    use crate::schema::{Column, Table};

    fn col(name: &str) -> Column {
        Column::new(name)
    }

    fn lit(sql: &str) -> Expr {
        Expr::raw(sql)
    }

    fn render(node: &impl WriteSql, mode: AliasMode) -> String {
        node.to_sql_with(mode)
    }

    fn render_where(cond: impl Into<Cond>) -> String {
        render(&cond.into().into_clause(Clause::Where), AliasMode::NoAlias)
    }

    #[test]
    fn condition_literals() {
        let one = || lit("1");
        assert_eq!(render(&Condition::new(one(), CompareOp::Eq, Some(one())), AliasMode::NoAlias), "1 = 1");
        assert_eq!(render(&Condition::new(one(), CompareOp::Eq, Some(PLACEHOLDER)), AliasMode::NoAlias), "1 = ?");
        assert_eq!(render(&Condition::new(one(), CompareOp::Eq, None), AliasMode::NoAlias), "1 IS NULL");
        assert_eq!(render(&Condition::new(one(), CompareOp::Ne, None), AliasMode::NoAlias), "1 IS NOT NULL");
        assert_eq!(render(&Condition::new(one(), CompareOp::Gt, None), AliasMode::NoAlias), "1 > NULL");
    }

    #[test]
    fn absent_rhs_on_column() {
        let c = col("col");
        assert_eq!(render(&c.eq_opt(None), AliasMode::NoAlias), "`col` IS NULL");
        assert_eq!(render(&c.ne_opt(None), AliasMode::NoAlias), "`col` IS NOT NULL");
        assert_eq!(render(&c.cmp_opt(CompareOp::Gt, None), AliasMode::NoAlias), "`col` > NULL");
        assert_eq!(render(&c.is_null(), AliasMode::NoAlias), "`col` IS NULL");
        assert_eq!(render(&c.is_not_null(), AliasMode::NoAlias), "`col` IS NOT NULL");
    }

    #[test]
    fn membership_always_bracketed() {
        let c = col("col1");
        assert_eq!(render(&c.in_(PLACEHOLDER), AliasMode::NoAlias), "`col1` IN (?)");
        assert_eq!(
            render(&c.not_in(Expr::list([lit("1"), lit("2")])), AliasMode::NoAlias),
            "`col1` NOT IN (1, 2)"
        );
        assert_eq!(
            render(&c.cmp_opt(CompareOp::In, None), AliasMode::NoAlias),
            "`col1` IN (NULL)"
        );
    }

    #[test]
    fn operand_alias_modes() {
        let table = Table::new("test");
        let aliased = Table::new("test").with_alias("t");

        let cases = [
            (col("col1").eq(col("col2")), AliasMode::NoAlias, "`col1` = `col2`"),
            (col("col1").eq(col("col2")), AliasMode::UseAlias, "`col1` = `col2`"),
            (
                col("col1").set_alias("c1").eq(col("col2").set_alias("c2")),
                AliasMode::UseAlias,
                "`c1` = `c2`",
            ),
            (
                table.column("col1").eq(aliased.column("col2")),
                AliasMode::UseAlias,
                "`test`.`col1` = `t`.`col2`",
            ),
            (
                table.column("col1").set_alias("c1").eq(aliased.column("col2").set_alias("c2")),
                AliasMode::UseAlias,
                "`c1` = `c2`",
            ),
            (
                table.column("col1").eq(aliased.column("col2")),
                AliasMode::OnlyAlias,
                "`test`.`col1` = `t`.`col2`",
            ),
            (table.column("col1").eq(lit("1")), AliasMode::NoAlias, "`col1` = 1"),
            (table.column("col1").eq(lit("1")), AliasMode::UseAlias, "`test`.`col1` = 1"),
            (aliased.column("col1").eq(lit("1")), AliasMode::UseAlias, "`t`.`col1` = 1"),
            (
                aliased.column("col1").set_alias("c1").eq(lit("1")),
                AliasMode::UseAlias,
                "`c1` = 1",
            ),
            (
                table.column("col1").eq(aliased.column("col2").set_alias("c2")),
                AliasMode::UseAlias,
                "`test`.`col1` = `c2`",
            ),
        ];

        for (cond, mode, expected) in cases {
            assert_eq!(render(&cond, mode), expected);
        }
    }

    #[test]
    fn and_chain_is_flat() {
        let (a, b, c, d) = (col("a"), col("b"), col("c"), col("d"));
        let group = a.eq(PLACEHOLDER).and(b.eq(PLACEHOLDER)).and(c.eq(PLACEHOLDER)).and(d.eq(PLACEHOLDER));
        assert_eq!(group.len(), 4);
        assert_eq!(
            render(&group, AliasMode::NoAlias),
            "(`a` = ? AND `b` = ? AND `c` = ? AND `d` = ?)"
        );
    }

    #[test]
    fn condition_prepends_into_same_operator_group() {
        let (a, b, c) = (col("a"), col("b"), col("c"));
        let group = a.eq(lit("1")).or(b.eq(lit("2")).or(c.eq(lit("3"))));
        assert_eq!(group.op(), BoolOp::Or);
        assert_eq!(group.len(), 3);
        assert_eq!(render(&group, AliasMode::NoAlias), "(`a` = 1 OR `b` = 2 OR `c` = 3)");
    }

    #[test]
    fn condition_nests_different_operator_group() {
        let (a, b, c) = (col("a"), col("b"), col("c"));
        let group = a.eq(lit("1")).and(b.eq(lit("2")).or(c.eq(lit("3"))));
        assert_eq!(group.len(), 2);
        assert_eq!(
            render(&group, AliasMode::NoAlias),
            "(`a` = 1 AND (`b` = 2 OR `c` = 3))"
        );
    }

    #[test]
    fn group_with_different_operator_becomes_nested() {
        let (a, b, c) = (col("a"), col("b"), col("c"));
        let group = a.eq(lit("1")).and(b.eq(lit("2"))).or(c.eq(lit("3")));
        assert_eq!(group.op(), BoolOp::Or);
        assert_eq!(
            render_where(group),
            " WHERE (`a` = 1 AND `b` = 2) OR `c` = 3"
        );
    }

    #[test]
    fn nested_group_brackets_in_every_alias_mode() {
        let table = Table::new("test").with_alias("t");
        let (a, b) = (table.column("a"), table.column("b").set_alias("bb"));
        let c = col("c").set_alias("cc");
        let group = Cond::from(a.eq(lit("1")).and(b.eq(lit("2"))).or(c.eq(lit("3"))))
            .into_clause(Clause::Where);

        for mode in [
            AliasMode::NoAlias,
            AliasMode::UseAlias,
            AliasMode::OnlyAlias,
            AliasMode::ColonPrefix,
        ] {
            let operand = mode.for_operands();
            let expected = format!(
                " WHERE ({} = 1 AND {} = 2) OR {} = 3",
                a.to_sql_with(operand),
                b.to_sql_with(operand),
                c.to_sql_with(operand),
            );
            assert_eq!(render(&group, mode), expected, "{mode:?}");
        }
        assert_eq!(
            render(&group, AliasMode::UseAlias),
            " WHERE (`t`.`a` = 1 AND `bb` = 2) OR `cc` = 3"
        );
        assert_eq!(render(&group, AliasMode::ColonPrefix), " WHERE (:a = 1 AND :b = 2) OR :c = 3");
    }

    #[test]
    fn group_merges_same_operator_group() {
        let (a, b, c, d) = (col("a"), col("b"), col("c"), col("d"));
        let left = a.eq(lit("1")).or(b.eq(lit("2")));
        let right = c.eq(lit("3")).or(d.eq(lit("4")));
        let group = left.or(right);
        assert_eq!(group.len(), 4);
        assert!(group.members().iter().all(|m| matches!(m, Cond::Single(_))));
    }

    #[test]
    fn group_flattens_right_operand_into_new_group() {
        let (a, b, c, d) = (col("a"), col("b"), col("c"), col("d"));
        let left = a.eq(lit("1")).or(b.eq(lit("2")));
        let right = c.eq(lit("3")).and(d.eq(lit("4")));
        let group = left.and(right);
        assert_eq!(group.len(), 3);
        assert_eq!(
            render(&group, AliasMode::NoAlias),
            "((`a` = 1 OR `b` = 2) AND `c` = 3 AND `d` = 4)"
        );
    }

    #[test]
    fn not_is_never_merged() {
        let a = col("a");
        let group = a.eq(lit("1")).not().not();
        assert_eq!(group.op(), BoolOp::Not);
        assert_eq!(group.len(), 1);
        assert_eq!(render(&group, AliasMode::NoAlias), "(NOT (NOT `a` = 1))");
        assert!(group.validate().is_ok());
    }

    #[test]
    fn not_at_top_level() {
        let a = col("a");
        assert_eq!(render_where(a.eq(lit("1")).not()), " WHERE NOT `a` = 1");
    }

    #[test]
    fn not_group_joined_into_and() {
        let (a, b) = (col("a"), col("b"));
        let group = a.eq(lit("1")).not().and(b.eq(lit("2")));
        assert_eq!(group.op(), BoolOp::And);
        assert_eq!(render(&group, AliasMode::NoAlias), "((NOT `a` = 1) AND `b` = 2)");
    }

    #[test]
    fn empty_group_renders_nothing() {
        let group = ConditionGroup::default();
        assert_eq!(render(&group, AliasMode::NoAlias), "");
        assert_eq!(render(&Cond::Group(group).into_clause(Clause::Where), AliasMode::NoAlias), "");
    }

    #[test]
    fn empty_group_is_absorbed_by_combinators() {
        let (a, b) = (col("a"), col("b"));

        let group = ConditionGroup::default().or(a.eq(PLACEHOLDER));
        assert_eq!(group.op(), BoolOp::Or);
        assert_eq!(group.len(), 1);
        assert_eq!(render(&group, AliasMode::NoAlias), "(`a` = ?)");
        assert_eq!(render_where(group), " WHERE `a` = ?");

        let group = or([
            Cond::from(and(Vec::<Cond>::new())),
            Cond::from(b.gt(PLACEHOLDER)),
        ]);
        assert_eq!(group.len(), 1);
        assert_eq!(render_where(group), " WHERE `b` > ?");

        let group = a.eq(lit("1")).and(ConditionGroup::default().not());
        assert_eq!(render(&group, AliasMode::NoAlias), "(`a` = 1)");
    }

    #[test]
    fn empty_members_are_skipped_when_rendering() {
        let b = col("b");
        let group = ConditionGroup::from_parts(
            BoolOp::Or,
            vec![
                ConditionGroup::from_parts(BoolOp::And, vec![]).into(),
                b.gt(PLACEHOLDER).into(),
                ConditionGroup::default().into(),
            ],
        );
        assert_eq!(render_where(group), " WHERE `b` > ?");

        let hollow = ConditionGroup::from_parts(
            BoolOp::And,
            vec![ConditionGroup::default().into(), ConditionGroup::default().into()],
        );
        assert!(hollow.renders_nothing());
        assert_eq!(render_where(hollow), "");
    }

    #[test]
    fn clause_introducers() {
        let a = col("a");
        let cond = Cond::from(a.eq(PLACEHOLDER));
        assert_eq!(render(&cond.clone().into_clause(Clause::Where), AliasMode::NoAlias), " WHERE `a` = ?");
        assert_eq!(render(&cond.clone().into_clause(Clause::Having), AliasMode::NoAlias), " HAVING `a` = ?");
        assert_eq!(render(&cond.into_clause(Clause::On), AliasMode::NoAlias), " ON `a` = ?");
    }

    #[test]
    fn top_level_group_loses_clause_when_combined() {
        let (a, b, c) = (col("a"), col("b"), col("c"));
        let top = Cond::from(a.eq(lit("1")).or(b.eq(lit("2")))).into_clause(Clause::Where);
        assert!(top.is_top_level());

        let group = c.eq(lit("3")).and(top);
        assert!(!group.is_top_level());
        assert_eq!(
            render(&group, AliasMode::NoAlias),
            "(`c` = 3 AND (`a` = 1 OR `b` = 2))"
        );
    }

    #[test]
    fn variadic_constructors_flatten() {
        let (a, b, c) = (col("a"), col("b"), col("c"));
        let group = and([
            Cond::from(a.eq(lit("1"))),
            Cond::from(b.eq(lit("2")).and(c.eq(lit("3")))),
        ]);
        assert_eq!(group.len(), 3);

        let any = or([a.eq(lit("1")), b.eq(lit("2"))]);
        assert_eq!(render(&any, AliasMode::NoAlias), "(`a` = 1 OR `b` = 2)");

        assert_eq!(render(&not(c.eq(lit("3"))), AliasMode::NoAlias), "(NOT `c` = 3)");
        assert!(and(Vec::<Condition>::new()).is_empty());
    }

    #[test]
    fn malformed_not_group_is_flagged() {
        let a = col("a");
        let b = col("b");

        let empty = ConditionGroup::from_parts(BoolOp::Not, vec![]);
        assert_eq!(empty.validate(), Err(SqlbError::InvalidNot { members: 0 }));
        assert_eq!(render(&empty, AliasMode::NoAlias), "");

        let two = ConditionGroup::from_parts(
            BoolOp::Not,
            vec![a.eq(lit("1")).into(), b.eq(lit("2")).into()],
        );
        assert_eq!(two.validate(), Err(SqlbError::InvalidNot { members: 2 }));

        let nested = a.eq(lit("1")).and(two);
        assert!(nested.validate().unwrap_err().is_invalid_not());
    }
}
