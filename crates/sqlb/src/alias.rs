//! Alias resolution for column and table references.
//!
//! Every reference is rendered under one [`AliasMode`] chosen for the whole
//! statement. The modes form a fallback chain:
//!
//! - `OnlyAlias` → the reference's own alias, else falls through to `UseAlias`
//! - `UseAlias`  → `` `table`.`name` [AS `alias`] ``, else own alias, else `NoAlias`
//! - `NoAlias`   → bare `` `name` ``
//!
//! `ColonPrefix` is separate: it renders `:name` for named bind parameters.

/// How a column or table reference renders its qualifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum AliasMode {
    /// Bare backtick-quoted name, never a qualifier or `AS` clause.
    #[default]
    NoAlias,
    /// Table-qualified name, with `AS` clause when the reference has an alias.
    UseAlias,
    /// Only the reference's own alias; falls back to `UseAlias`.
    OnlyAlias,
    /// `:name`, unquoted. Only meaningful for columns.
    ColonPrefix,
}

impl AliasMode {
    /// The mode used for operands inside a comparison or join condition.
    ///
    /// `AS` clauses must never appear inside a comparison, so `UseAlias` is
    /// downgraded to `OnlyAlias`. Every other mode is kept.
    pub fn for_operands(self) -> Self {
        match self {
            AliasMode::UseAlias => AliasMode::OnlyAlias,
            other => other,
        }
    }

    /// Whether table sources (`FROM`/`JOIN`) should render `AS alias`.
    pub fn renders_table_alias(self) -> bool {
        self != AliasMode::NoAlias
    }
}

/// Append `` `ident` `` to `out`. No escaping is performed.
pub(crate) fn push_quoted(out: &mut String, ident: &str) {
    out.push('`');
    out.push_str(ident);
    out.push('`');
}

/// Append `` AS `alias` `` to `out`.
pub(crate) fn push_as(out: &mut String, alias: &str) {
    out.push_str(" AS ");
    push_quoted(out, alias);
}

/// Owning table of a reference, as seen by the resolver.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Owner<'a> {
    pub name: &'a str,
    pub alias: &'a str,
}

impl Owner<'_> {
    fn qualifier(&self) -> &str {
        if self.alias.is_empty() {
            self.name
        } else {
            self.alias
        }
    }
}

/// Render a named reference (a column) under `mode`.
///
/// An empty `name` renders nothing in every mode, alias or not.
pub(crate) fn write_reference(
    out: &mut String,
    mode: AliasMode,
    name: &str,
    alias: &str,
    owner: Option<Owner<'_>>,
) {
    if name.is_empty() {
        return;
    }

    match mode {
        AliasMode::OnlyAlias if !alias.is_empty() => push_quoted(out, alias),
        AliasMode::OnlyAlias | AliasMode::UseAlias => {
            if let Some(owner) = owner {
                out.push('`');
                out.push_str(owner.qualifier());
                out.push_str("`.`");
                out.push_str(name);
                if !alias.is_empty() {
                    out.push_str("` AS `");
                    out.push_str(alias);
                }
                out.push('`');
            } else if !alias.is_empty() {
                push_quoted(out, alias);
            } else {
                push_quoted(out, name);
            }
        }
        AliasMode::NoAlias => push_quoted(out, name),
        AliasMode::ColonPrefix => {
            out.push(':');
            out.push_str(name);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(mode: AliasMode, name: &str, alias: &str, owner: Option<Owner<'_>>) -> String {
        let mut out = String::new();
        write_reference(&mut out, mode, name, alias, owner);
        out
    }

    const PLAIN: Owner<'static> = Owner { name: "test", alias: "" };
    const ALIASED: Owner<'static> = Owner { name: "test", alias: "t" };

    #[test]
    fn no_alias_is_always_bare() {
        assert_eq!(render(AliasMode::NoAlias, "col", "", None), "`col`");
        assert_eq!(render(AliasMode::NoAlias, "col", "c", Some(ALIASED)), "`col`");
        assert_eq!(render(AliasMode::NoAlias, "", "c", Some(ALIASED)), "");
    }

    #[test]
    fn use_alias_qualifies_with_table() {
        assert_eq!(render(AliasMode::UseAlias, "col", "", Some(PLAIN)), "`test`.`col`");
        assert_eq!(render(AliasMode::UseAlias, "col", "", Some(ALIASED)), "`t`.`col`");
        assert_eq!(
            render(AliasMode::UseAlias, "col", "c", Some(ALIASED)),
            "`t`.`col` AS `c`"
        );
    }

    #[test]
    fn use_alias_without_table_falls_back() {
        assert_eq!(render(AliasMode::UseAlias, "col", "c", None), "`c`");
        assert_eq!(render(AliasMode::UseAlias, "col", "", None), "`col`");
        assert_eq!(render(AliasMode::UseAlias, "", "", None), "");
    }

    #[test]
    fn only_alias_prefers_own_alias() {
        assert_eq!(render(AliasMode::OnlyAlias, "col", "c", Some(ALIASED)), "`c`");
        assert_eq!(render(AliasMode::OnlyAlias, "col", "", Some(ALIASED)), "`t`.`col`");
        assert_eq!(render(AliasMode::OnlyAlias, "col", "", None), "`col`");
    }

    #[test]
    fn empty_name_renders_nothing_with_owner_or_alias() {
        for mode in [AliasMode::UseAlias, AliasMode::OnlyAlias] {
            assert_eq!(render(mode, "", "", Some(ALIASED)), "", "{mode:?}");
            assert_eq!(render(mode, "", "c", Some(ALIASED)), "", "{mode:?}");
            assert_eq!(render(mode, "", "", Some(PLAIN)), "", "{mode:?}");
            assert_eq!(render(mode, "", "c", None), "", "{mode:?}");
        }
    }

    #[test]
    fn colon_prefix_is_unquoted() {
        assert_eq!(render(AliasMode::ColonPrefix, "col", "c", Some(ALIASED)), ":col");
        assert_eq!(render(AliasMode::ColonPrefix, "", "", None), "");
    }

    #[test]
    fn operand_downgrade() {
        assert_eq!(AliasMode::UseAlias.for_operands(), AliasMode::OnlyAlias);
        assert_eq!(AliasMode::NoAlias.for_operands(), AliasMode::NoAlias);
        assert_eq!(AliasMode::OnlyAlias.for_operands(), AliasMode::OnlyAlias);
        assert_eq!(AliasMode::ColonPrefix.for_operands(), AliasMode::ColonPrefix);
    }
}
