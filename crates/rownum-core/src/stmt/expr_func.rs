use super::Expr;

/// A scalar function call, written as `name(args...)`.
///
/// The function name is written verbatim and is not quoted, but it is still
/// held to the maximum identifier length.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprFunc {
    pub name: String,
    pub args: Vec<Expr>,
}

impl Expr {
    pub fn func(name: impl Into<String>, args: impl IntoIterator<Item = Expr>) -> Expr {
        Expr::Func(ExprFunc {
            name: name.into(),
            args: args.into_iter().collect(),
        })
    }
}

impl From<ExprFunc> for Expr {
    fn from(value: ExprFunc) -> Self {
        Self::Func(value)
    }
}
