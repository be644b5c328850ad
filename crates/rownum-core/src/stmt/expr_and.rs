use super::Expr;

#[derive(Debug, Clone, PartialEq)]
pub struct ExprAnd {
    pub operands: Vec<Expr>,
}

impl Expr {
    /// ANDs two expressions, flattening into an existing AND on the left.
    pub fn and(lhs: impl Into<Expr>, rhs: impl Into<Expr>) -> Expr {
        match lhs.into() {
            Expr::And(mut expr_and) => {
                expr_and.operands.push(rhs.into());
                expr_and.into()
            }
            lhs => ExprAnd {
                operands: vec![lhs, rhs.into()],
            }
            .into(),
        }
    }
}

impl From<ExprAnd> for Expr {
    fn from(value: ExprAnd) -> Self {
        Self::And(value)
    }
}
