use super::{Expr, Query};

#[derive(Debug, Clone, PartialEq)]
pub struct ExprInSubquery {
    pub expr: Box<Expr>,
    pub query: Box<Query>,
    pub negate: bool,
}

impl Expr {
    pub fn in_subquery(expr: impl Into<Expr>, query: impl Into<Query>) -> Expr {
        ExprInSubquery {
            expr: Box::new(expr.into()),
            query: Box::new(query.into()),
            negate: false,
        }
        .into()
    }

    pub fn not_in_subquery(expr: impl Into<Expr>, query: impl Into<Query>) -> Expr {
        ExprInSubquery {
            expr: Box::new(expr.into()),
            query: Box::new(query.into()),
            negate: true,
        }
        .into()
    }
}

impl From<ExprInSubquery> for Expr {
    fn from(value: ExprInSubquery) -> Self {
        Self::InSubquery(value)
    }
}
