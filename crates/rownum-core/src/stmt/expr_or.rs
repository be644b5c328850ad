use super::Expr;

#[derive(Debug, Clone, PartialEq)]
pub struct ExprOr {
    pub operands: Vec<Expr>,
}

impl Expr {
    /// ORs two expressions, flattening into an existing OR on the left.
    pub fn or(lhs: impl Into<Expr>, rhs: impl Into<Expr>) -> Expr {
        match lhs.into() {
            Expr::Or(mut expr_or) => {
                expr_or.operands.push(rhs.into());
                expr_or.into()
            }
            lhs => ExprOr {
                operands: vec![lhs, rhs.into()],
            }
            .into(),
        }
    }
}

impl From<ExprOr> for Expr {
    fn from(value: ExprOr) -> Self {
        Self::Or(value)
    }
}
