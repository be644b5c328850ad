use super::Expr;

#[derive(Debug, Clone, PartialEq)]
pub struct ExprInList {
    pub expr: Box<Expr>,

    /// Candidate values. Must not be empty.
    pub list: Vec<Expr>,

    pub negate: bool,
}

impl Expr {
    pub fn in_list(expr: impl Into<Expr>, list: impl IntoIterator<Item = Expr>) -> Expr {
        ExprInList {
            expr: Box::new(expr.into()),
            list: list.into_iter().collect(),
            negate: false,
        }
        .into()
    }

    pub fn not_in_list(expr: impl Into<Expr>, list: impl IntoIterator<Item = Expr>) -> Expr {
        ExprInList {
            expr: Box::new(expr.into()),
            list: list.into_iter().collect(),
            negate: true,
        }
        .into()
    }
}

impl From<ExprInList> for Expr {
    fn from(value: ExprInList) -> Self {
        Self::InList(value)
    }
}
