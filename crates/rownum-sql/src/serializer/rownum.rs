//! Pagination for databases that only number rows after fetching them.
//!
//! Oracle has no `LIMIT`/`OFFSET` clause. The `ROWNUM` pseudo-column numbers
//! rows as they are produced, but can only be filtered on from an enclosing
//! query. A paginated query is wrapped twice:
//!
//! ```text
//! SELECT * FROM (
//!     SELECT "_t".*, ROWNUM "_rn" FROM (<query>) "_t" WHERE ROWNUM <= ?
//! ) WHERE "_rn" >= ?
//! ```
//!
//! where `<query>` is the original query with its limit and offset removed.
//! The upper bound is bound first, then the lower bound, matching the order
//! of the placeholders.

use super::{statement::row_count, statement::DerivedTable, Ident, Indentation, Params, ToSql};

use rownum_core::{
    stmt::{self, Argument},
    Error, Result,
};

/// Alias of the query being paginated
const INNER_ALIAS: &str = "_t";

/// Alias of the `ROWNUM` column
const ROW_NUMBER: &str = "_rn";

pub(super) struct RowNum<'a>(pub(super) &'a stmt::Query);

/// First and last row number to return, both inclusive and one-based.
#[derive(Debug, PartialEq, Eq)]
struct RowBounds {
    min: i64,
    max: i64,
}

impl RowBounds {
    fn new(limit: Option<u64>, offset: Option<u64>) -> RowBounds {
        let offset = offset.unwrap_or(0);

        RowBounds {
            min: row_count(offset.saturating_add(1)),
            max: limit.map_or(i64::MAX, |limit| row_count(offset.saturating_add(limit))),
        }
    }
}

impl ToSql for RowNum<'_> {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) -> Result<()> {
        let query = self.0;

        if query.for_update() {
            return Err(Error::unsupported_feature(
                "SELECT FOR UPDATE not supported when using offset/limit params",
            ));
        }

        let bounds = RowBounds::new(query.limit(), query.offset());

        tracing::debug!(
            limit = ?query.limit(),
            offset = ?query.offset(),
            min_row = bounds.min,
            max_row = bounds.max,
            "paginating query with ROWNUM"
        );

        let inner = query.without_pagination(INNER_ALIAS);

        fmt!(f, "SELECT * ");
        f.newline(Indentation::Same);
        fmt!(f, "FROM (");
        f.newline(Indentation::Inner);
        fmt!(f, "SELECT " Ident(INNER_ALIAS) ".*, ROWNUM " Ident(ROW_NUMBER) " ");
        f.newline(Indentation::Same);
        fmt!(f, "FROM " DerivedTable(&inner));
        f.newline(Indentation::Same);
        fmt!(f, "WHERE ROWNUM <= " Argument::long(bounds.max));
        f.newline(Indentation::Outer);
        fmt!(f, ") ");
        f.newline(Indentation::Same);
        fmt!(f, "WHERE " Ident(ROW_NUMBER) " >= " Argument::long(bounds.min) " ");

        Ok(())
    }
}
