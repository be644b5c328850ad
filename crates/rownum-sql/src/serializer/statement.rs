use super::{rownum::RowNum, Comma, Flavor, Ident, Indentation, Params, ToSql};

use rownum_core::{
    stmt::{self, Argument},
    Error, Result,
};

impl ToSql for &stmt::Query {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) -> Result<()> {
        // Without a LIMIT clause the whole query is restructured instead.
        if self.is_paginated() && !f.serializer.capability.native_limit {
            return RowNum(self).to_sql(f);
        }

        match self {
            stmt::Query::Select(select) => select.to_sql(f),
            stmt::Query::Union(union) => union.to_sql(f),
        }
    }
}

impl ToSql for &stmt::Select {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) -> Result<()> {
        let distinct = if self.distinct { "DISTINCT " } else { "" };

        if self.columns.is_empty() {
            fmt!(f, "SELECT " distinct "* ");
        } else {
            fmt!(f, "SELECT " distinct Comma(&self.columns) " ");
        }

        f.newline(Indentation::Same);
        fmt!(f, "FROM " self.source);

        if let Some(filter) = &self.filter {
            f.newline(Indentation::Same);
            fmt!(f, "WHERE " filter " ");
        }

        if !self.group_by.is_empty() {
            f.newline(Indentation::Same);
            fmt!(f, "GROUP BY " Comma(&self.group_by) " ");
        }

        if let Some(having) = &self.having {
            f.newline(Indentation::Same);
            fmt!(f, "HAVING " having " ");
        }

        fmt!(
            f,
            OrderBy(&self.order_by)
            Pagination { limit: self.limit, offset: self.offset }
        );

        if self.for_update {
            if !f.serializer.capability.select_for_update {
                return Err(Error::unsupported_feature(format!(
                    "SELECT FOR UPDATE not supported by {:?}",
                    f.serializer.flavor
                )));
            }

            f.newline(Indentation::Same);
            fmt!(f, "FOR UPDATE ");
        }

        Ok(())
    }
}

impl ToSql for &stmt::Union {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) -> Result<()> {
        // A union on the left chains without parentheses unless it orders or
        // paginates its own rows
        let chains = matches!(&*self.left, stmt::Query::Union(left) if left.order_by.is_empty())
            && !self.left.is_paginated();

        if chains {
            self.left.to_sql(f)?;
        } else {
            fmt!(f, Subquery(&self.left) " ");
        }

        let op = match self.op {
            stmt::SetOp::Union => "UNION ",
            stmt::SetOp::UnionAll => "UNION ALL ",
        };

        f.newline(Indentation::Same);
        fmt!(f, op);
        f.newline(Indentation::Same);
        fmt!(
            f,
            Subquery(&self.right) " "
            OrderBy(&self.order_by)
            Pagination { limit: self.limit, offset: self.offset }
        );

        Ok(())
    }
}

impl ToSql for &stmt::Source {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) -> Result<()> {
        match self {
            stmt::Source::Table(table) => table.to_sql(f),
            stmt::Source::Join(join) => (**join).to_sql(f),
            stmt::Source::Query(query) => DerivedTable(query).to_sql(f),
        }
    }
}

impl ToSql for &stmt::TableRef {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) -> Result<()> {
        if let Some(schema) = &self.schema {
            fmt!(f, Ident(schema) ".");
        }

        fmt!(f, Ident(&self.name) " ");

        // Table aliases are written without `AS`, which Oracle rejects
        if let Some(alias) = &self.alias {
            fmt!(f, Ident(alias) " ");
        }

        Ok(())
    }
}

impl ToSql for &stmt::Join {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) -> Result<()> {
        self.left.to_sql(f)?;
        f.newline(Indentation::Same);
        fmt!(f, self.kind.keyword() self.right);

        match (self.kind, &self.condition) {
            (stmt::JoinKind::Cross, None) => {}
            (stmt::JoinKind::Cross, Some(_)) => {
                return Err(Error::invalid_statement(
                    "CROSS JOIN does not take an ON condition",
                ));
            }
            (_, Some(condition)) => fmt!(f, "ON " condition " "),
            (kind, None) => {
                return Err(Error::invalid_statement(format!(
                    "{kind:?} join requires an ON condition"
                )));
            }
        }

        Ok(())
    }
}

/// A query used as a table, followed by its alias.
pub(super) struct DerivedTable<'a>(pub(super) &'a stmt::Query);

impl ToSql for DerivedTable<'_> {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) -> Result<()> {
        fmt!(f, Subquery(self.0) " ");

        if let Some(alias) = self.0.table_alias() {
            fmt!(f, Ident(alias) " ");
        }

        Ok(())
    }
}

/// A parenthesized query, indented one level when pretty printing.
pub(super) struct Subquery<'a>(pub(super) &'a stmt::Query);

impl ToSql for Subquery<'_> {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) -> Result<()> {
        fmt!(f, "(");
        f.newline(Indentation::Inner);
        self.0.to_sql(f)?;
        f.remove_last_blank();
        f.newline(Indentation::Outer);
        fmt!(f, ")");
        Ok(())
    }
}

struct OrderBy<'a>(&'a [stmt::OrderByExpr]);

impl ToSql for OrderBy<'_> {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) -> Result<()> {
        if !self.0.is_empty() {
            f.newline(Indentation::Same);
            fmt!(f, "ORDER BY " Comma(self.0) " ");
        }
        Ok(())
    }
}

impl ToSql for &stmt::OrderByExpr {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) -> Result<()> {
        fmt!(f, self.expr);

        match self.order {
            Some(stmt::Direction::Asc) => fmt!(f, " ASC"),
            Some(stmt::Direction::Desc) => fmt!(f, " DESC"),
            None => {}
        }

        Ok(())
    }
}

impl ToSql for &stmt::ExprAlias {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) -> Result<()> {
        fmt!(f, self.expr);

        if let Some(alias) = &self.alias {
            fmt!(f, " AS " Ident(alias));
        }

        Ok(())
    }
}

/// The native `LIMIT`/`OFFSET` clause. Limit and offset are always bound as
/// arguments.
struct Pagination {
    limit: Option<u64>,
    offset: Option<u64>,
}

impl ToSql for Pagination {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) -> Result<()> {
        if self.limit.is_none() && self.offset.is_none() {
            return Ok(());
        }

        f.newline(Indentation::Same);

        match f.serializer.flavor {
            Flavor::Oracle => {
                return Err(Error::invariant_violation(
                    "Oracle has no LIMIT/OFFSET clause; paginated queries are rewritten with ROWNUM",
                ));
            }
            Flavor::Mysql => {
                // MySQL cannot skip rows without a row count
                let offset = row_count(self.offset.unwrap_or(0));
                let count = self.limit.map_or(i64::MAX, row_count);

                fmt!(f, "LIMIT " Argument::long(offset) ", " Argument::long(count) " ");
            }
            Flavor::Sqlite => {
                // A negative limit means no limit
                let limit = self.limit.map_or(-1, row_count);
                fmt!(f, "LIMIT " Argument::long(limit) " ");

                if let Some(offset) = self.offset {
                    fmt!(f, "OFFSET " Argument::long(row_count(offset)) " ");
                }
            }
            Flavor::Generic | Flavor::Postgresql => {
                if let Some(limit) = self.limit {
                    fmt!(f, "LIMIT " Argument::long(row_count(limit)) " ");
                }

                if let Some(offset) = self.offset {
                    fmt!(f, "OFFSET " Argument::long(row_count(offset)) " ");
                }
            }
        }

        Ok(())
    }
}

/// Converts a row count to the bound integer type, saturating at `i64::MAX`.
pub(super) fn row_count(n: u64) -> i64 {
    i64::try_from(n).unwrap_or(i64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Serializer;

    #[test]
    fn oracle_native_pagination_is_unreachable() {
        let serializer = Serializer::oracle();
        let mut dst = String::new();
        let mut params: Vec<Argument> = vec![];

        let mut f = super::super::Formatter {
            serializer: &serializer,
            dst: &mut dst,
            params: &mut params,
            depth: 0,
        };

        let err = Pagination {
            limit: Some(10),
            offset: None,
        }
        .to_sql(&mut f)
        .unwrap_err();

        assert!(err.is_invariant_violation());
        assert!(params.is_empty());
    }

    #[test]
    fn row_count_saturates() {
        assert_eq!(row_count(10), 10);
        assert_eq!(row_count(u64::MAX), i64::MAX);
    }
}
