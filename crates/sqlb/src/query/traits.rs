//! The contract shared by all statement builders.

use crate::alias::AliasMode;
use crate::buffer;
use crate::error::SqlbResult;

/// A complete SQL statement.
///
/// Rendering ([`to_sql`](Self::to_sql)) never fails; [`validate`](Self::validate)
/// is the separate, explicit check for malformed trees.
pub trait Statement {
    /// Statement keyword, e.g. `"SELECT"`.
    fn kind(&self) -> &'static str;

    /// Alias mode the whole statement is rendered under.
    fn render_mode(&self) -> AliasMode;

    /// Append the statement to `out` under `mode`.
    fn write_statement(&self, out: &mut String, mode: AliasMode);

    /// Check the statement tree.
    fn validate(&self) -> SqlbResult<()>;

    /// Render the statement using a pooled scratch buffer.
    fn to_sql(&self) -> String {
        let mode = self.render_mode();
        let sql = buffer::with_buffer(|buf| {
            self.write_statement(buf, mode);
            buf.as_str().to_owned()
        });

        #[cfg(feature = "tracing")]
        tracing::trace!(
            target: "sqlb",
            kind = self.kind(),
            alias_mode = ?mode,
            len = sql.len(),
            "rendered statement"
        );

        sql
    }

    /// [`validate`](Self::validate), then [`to_sql`](Self::to_sql).
    fn validated_sql(&self) -> SqlbResult<String> {
        if let Err(err) = self.validate() {
            #[cfg(feature = "tracing")]
            tracing::debug!(target: "sqlb", kind = self.kind(), error = %err, "statement failed validation");
            return Err(err);
        }
        Ok(self.to_sql())
    }
}

/// Append ` LIMIT n` when `n > 0`.
pub(crate) fn write_limit(out: &mut String, limit: u64) {
    if limit > 0 {
        out.push_str(" LIMIT ");
        out.push_str(&limit.to_string());
    }
}
