use super::Expr;

/// A projected column: an expression with an optional `AS` alias.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprAlias {
    pub expr: Expr,
    pub alias: Option<String>,
}

impl ExprAlias {
    pub fn new(expr: impl Into<Expr>, alias: impl Into<String>) -> ExprAlias {
        ExprAlias {
            expr: expr.into(),
            alias: Some(alias.into()),
        }
    }
}

impl From<Expr> for ExprAlias {
    fn from(expr: Expr) -> Self {
        ExprAlias { expr, alias: None }
    }
}
