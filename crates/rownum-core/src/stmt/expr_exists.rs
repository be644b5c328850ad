use super::{Expr, Query};

#[derive(Debug, Clone, PartialEq)]
pub struct ExprExists {
    pub query: Box<Query>,
    pub negate: bool,
}

impl Expr {
    pub fn exists(query: impl Into<Query>) -> Expr {
        Expr::Exists(ExprExists {
            query: Box::new(query.into()),
            negate: false,
        })
    }

    pub fn not_exists(query: impl Into<Query>) -> Expr {
        Expr::Exists(ExprExists {
            query: Box::new(query.into()),
            negate: true,
        })
    }
}

impl From<ExprExists> for Expr {
    fn from(value: ExprExists) -> Self {
        Self::Exists(value)
    }
}
