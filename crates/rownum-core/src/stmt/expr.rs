use super::{
    Argument, ExprAggregate, ExprAnd, ExprBetween, ExprBinaryOp, ExprColumn, ExprExists,
    ExprFunc, ExprInList, ExprInSubquery, ExprIsNull, ExprOr,
};

/// A scalar SQL expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Aggregate function call, e.g. `COUNT(*)`
    Aggregate(ExprAggregate),

    /// AND a set of boolean expressions
    And(ExprAnd),

    /// A bound argument, written as a placeholder
    Arg(Argument),

    /// `expr [NOT] BETWEEN low AND high`
    Between(ExprBetween),

    /// Binary expression
    BinaryOp(ExprBinaryOp),

    /// Reference to a column, optionally qualified with a table name or alias
    Column(ExprColumn),

    /// `[NOT] EXISTS (subquery)`
    Exists(ExprExists),

    /// Scalar function call
    Func(ExprFunc),

    /// `expr [NOT] IN (a, b, ...)`
    InList(ExprInList),

    /// `expr [NOT] IN (subquery)`
    InSubquery(ExprInSubquery),

    /// `expr IS [NOT] NULL`
    IsNull(ExprIsNull),

    /// Negates a boolean expression
    Not(Box<Expr>),

    /// OR a set of boolean expressions
    Or(ExprOr),
}

impl Expr {
    pub fn not(expr: impl Into<Expr>) -> Expr {
        Expr::Not(Box::new(expr.into()))
    }

    /// Returns true when the expression is made of operands joined by an
    /// operator, and needs parentheses when nested in another operator.
    pub fn is_compound(&self) -> bool {
        matches!(
            self,
            Expr::And(_)
                | Expr::Or(_)
                | Expr::BinaryOp(_)
                | Expr::Not(_)
                | Expr::Between(_)
                | Expr::IsNull(_)
                | Expr::InList(_)
                | Expr::InSubquery(_)
        )
    }
}
