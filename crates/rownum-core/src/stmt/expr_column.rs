use super::Expr;

/// Reference to a column.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprColumn {
    /// Table name or alias qualifying the column, if any.
    pub table: Option<String>,

    /// The column name
    pub name: String,
}

impl Expr {
    pub fn column(name: impl Into<String>) -> Expr {
        Expr::Column(ExprColumn {
            table: None,
            name: name.into(),
        })
    }

    /// A column qualified with its table name or alias, `table.name`.
    pub fn qualified_column(table: impl Into<String>, name: impl Into<String>) -> Expr {
        Expr::Column(ExprColumn {
            table: Some(table.into()),
            name: name.into(),
        })
    }
}

impl From<ExprColumn> for Expr {
    fn from(value: ExprColumn) -> Self {
        Self::Column(value)
    }
}
