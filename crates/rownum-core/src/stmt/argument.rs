use super::{Expr, Type, Value};

/// A positional statement argument: a value together with the SQL type it is
/// bound as.
///
/// Serializing an argument writes a placeholder and hands the argument to the
/// parameter list, so placeholders and arguments line up one to one, in
/// order.
#[derive(Debug, Clone, PartialEq)]
pub struct Argument {
    pub value: Value,
    pub ty: Type,
}

impl Argument {
    pub fn new(value: impl Into<Value>, ty: Type) -> Argument {
        Argument {
            value: value.into(),
            ty,
        }
    }

    /// A 64-bit integer argument.
    pub fn long(value: i64) -> Argument {
        Argument::new(value, Type::Long)
    }
}

impl Expr {
    /// A bound argument typed after its value.
    pub fn arg(value: impl Into<Value>) -> Expr {
        let value = value.into();
        let ty = value.infer_ty();
        Expr::Arg(Argument { value, ty })
    }
}

impl From<Argument> for Expr {
    fn from(value: Argument) -> Self {
        Self::Arg(value)
    }
}
