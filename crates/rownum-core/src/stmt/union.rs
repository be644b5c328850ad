use super::{OrderByExpr, Query, SetOp};

/// Two queries combined with `UNION` or `UNION ALL`.
#[derive(Debug, Clone, PartialEq)]
pub struct Union {
    pub left: Box<Query>,
    pub right: Box<Query>,
    pub op: SetOp,

    /// Ordering of the combined result
    pub order_by: Vec<OrderByExpr>,

    pub limit: Option<u64>,
    pub offset: Option<u64>,

    /// Alias used when this query is a derived table of another query
    pub table_alias: Option<String>,
}

impl Union {
    pub fn new(left: impl Into<Query>, right: impl Into<Query>, op: SetOp) -> Union {
        Union {
            left: Box::new(left.into()),
            right: Box::new(right.into()),
            op,
            order_by: vec![],
            limit: None,
            offset: None,
            table_alias: None,
        }
    }

    pub fn is_union_all(&self) -> bool {
        matches!(self.op, SetOp::UnionAll)
    }

    pub fn order_by(mut self, order_by: impl Into<OrderByExpr>) -> Union {
        self.order_by.push(order_by.into());
        self
    }

    pub fn limit(mut self, limit: u64) -> Union {
        self.limit = Some(limit);
        self
    }

    pub fn offset(mut self, offset: u64) -> Union {
        self.offset = Some(offset);
        self
    }

    pub fn alias(mut self, alias: impl Into<String>) -> Union {
        self.table_alias = Some(alias.into());
        self
    }

    /// Returns a copy with `limit` and `offset` cleared and the table alias
    /// replaced by `alias`. The operands are left untouched.
    pub fn without_pagination(&self, alias: &str) -> Union {
        Union {
            limit: None,
            offset: None,
            table_alias: Some(alias.to_string()),
            ..self.clone()
        }
    }
}
