use super::{Expr, ExprAlias, OrderByExpr, Query, Source};

/// A `SELECT` query.
#[derive(Debug, Clone, PartialEq)]
pub struct Select {
    /// `SELECT DISTINCT` when true
    pub distinct: bool,

    /// The projection. Empty selects `*`.
    pub columns: Vec<ExprAlias>,

    /// The `FROM` part of the query
    pub source: Source,

    /// Query filter
    pub filter: Option<Expr>,

    pub group_by: Vec<Expr>,

    pub having: Option<Expr>,

    pub order_by: Vec<OrderByExpr>,

    /// Maximum number of rows to return
    pub limit: Option<u64>,

    /// Number of rows to skip. `None` is the same as zero.
    pub offset: Option<u64>,

    /// Lock the selected rows (`FOR UPDATE`)
    pub for_update: bool,

    /// Alias used when this query is a derived table of another query
    pub table_alias: Option<String>,
}

impl Select {
    pub fn new(source: impl Into<Source>) -> Select {
        Select {
            distinct: false,
            columns: vec![],
            source: source.into(),
            filter: None,
            group_by: vec![],
            having: None,
            order_by: vec![],
            limit: None,
            offset: None,
            for_update: false,
            table_alias: None,
        }
    }

    pub fn column(mut self, column: impl Into<ExprAlias>) -> Select {
        self.columns.push(column.into());
        self
    }

    pub fn column_as(self, expr: impl Into<Expr>, alias: impl Into<String>) -> Select {
        self.column(ExprAlias::new(expr, alias))
    }

    pub fn distinct(mut self) -> Select {
        self.distinct = true;
        self
    }

    /// Adds a filter, ANDed with any existing one.
    pub fn filter(mut self, expr: impl Into<Expr>) -> Select {
        self.filter = Some(match self.filter.take() {
            Some(existing) => Expr::and(existing, expr),
            None => expr.into(),
        });
        self
    }

    pub fn group_by(mut self, expr: impl Into<Expr>) -> Select {
        self.group_by.push(expr.into());
        self
    }

    pub fn having(mut self, expr: impl Into<Expr>) -> Select {
        self.having = Some(expr.into());
        self
    }

    pub fn order_by(mut self, order_by: impl Into<OrderByExpr>) -> Select {
        self.order_by.push(order_by.into());
        self
    }

    pub fn limit(mut self, limit: u64) -> Select {
        self.limit = Some(limit);
        self
    }

    pub fn offset(mut self, offset: u64) -> Select {
        self.offset = Some(offset);
        self
    }

    pub fn for_update(mut self) -> Select {
        self.for_update = true;
        self
    }

    pub fn alias(mut self, alias: impl Into<String>) -> Select {
        self.table_alias = Some(alias.into());
        self
    }

    /// Returns a copy with `limit` and `offset` cleared and the table alias
    /// replaced by `alias`.
    pub fn without_pagination(&self, alias: &str) -> Select {
        Select {
            limit: None,
            offset: None,
            table_alias: Some(alias.to_string()),
            ..self.clone()
        }
    }
}

impl From<Select> for Source {
    fn from(value: Select) -> Self {
        Source::Query(Box::new(Query::Select(value)))
    }
}
