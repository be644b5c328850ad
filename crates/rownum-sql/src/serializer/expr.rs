use super::{statement::Subquery, Comma, Delimited, Ident, Params, ToSql};

use rownum_core::{stmt, Error, Result};
use std::fmt::Write;

impl ToSql for &stmt::Expr {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) -> Result<()> {
        use stmt::Expr::*;

        match self {
            Aggregate(expr) => {
                let distinct = if expr.distinct { "DISTINCT " } else { "" };
                fmt!(f, expr.func "(" distinct);

                match &expr.arg {
                    Some(arg) => fmt!(f, arg),
                    None => fmt!(f, "*"),
                }

                fmt!(f, ")");
            }
            And(expr) => {
                fmt!(f, Delimited(expr.operands.iter().map(Condition), " AND "));
            }
            Arg(arg) => {
                fmt!(f, arg);
            }
            Between(expr) => {
                let not = if expr.negate { " NOT" } else { "" };
                fmt!(
                    f,
                    Operand(&expr.expr) not " BETWEEN " Operand(&expr.low) " AND " Operand(&expr.high)
                );
            }
            BinaryOp(expr) => {
                fmt!(f, Operand(&expr.lhs) " " expr.op " " Operand(&expr.rhs));
            }
            Column(expr) => {
                if let Some(table) = &expr.table {
                    fmt!(f, Ident(table) ".");
                }
                fmt!(f, Ident(&expr.name));
            }
            Exists(expr) => {
                let not = if expr.negate { "NOT " } else { "" };
                fmt!(f, not "EXISTS " Subquery(&expr.query));
            }
            Func(expr) => {
                // Function names are written as given, never quoted
                f.serializer.check_name(&expr.name)?;
                fmt!(f, expr.name.as_str() "(" Comma(&expr.args) ")");
            }
            InList(expr) => {
                if expr.list.is_empty() {
                    return Err(Error::invalid_statement("IN list is empty"));
                }

                let not = if expr.negate { " NOT" } else { "" };
                fmt!(f, Operand(&expr.expr) not " IN (" Comma(&expr.list) ")");
            }
            InSubquery(expr) => {
                let not = if expr.negate { " NOT" } else { "" };
                fmt!(f, Operand(&expr.expr) not " IN " Subquery(&expr.query));
            }
            IsNull(expr) => {
                let is_null = if expr.negate { " IS NOT NULL" } else { " IS NULL" };
                fmt!(f, Operand(&expr.expr) is_null);
            }
            Not(expr) => {
                fmt!(f, "NOT " Operand(expr));
            }
            Or(expr) => {
                fmt!(f, Delimited(expr.operands.iter().map(Condition), " OR "));
            }
        }

        Ok(())
    }
}

/// An expression nested in an operator, parenthesized when it is itself an
/// operator expression.
struct Operand<'a>(&'a stmt::Expr);

impl ToSql for Operand<'_> {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) -> Result<()> {
        if self.0.is_compound() {
            fmt!(f, "(" self.0 ")");
        } else {
            fmt!(f, self.0);
        }
        Ok(())
    }
}

/// An operand of `AND` or `OR`. Only nested `AND`/`OR` lists need
/// parentheses there, everything else binds tighter.
struct Condition<'a>(&'a stmt::Expr);

impl ToSql for Condition<'_> {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) -> Result<()> {
        if matches!(self.0, stmt::Expr::And(_) | stmt::Expr::Or(_)) {
            fmt!(f, "(" self.0 ")");
        } else {
            fmt!(f, self.0);
        }
        Ok(())
    }
}

impl ToSql for stmt::BinaryOp {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) -> Result<()> {
        write!(f.dst, "{self}")?;
        Ok(())
    }
}

impl ToSql for stmt::AggregateFunc {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) -> Result<()> {
        write!(f.dst, "{self}")?;
        Ok(())
    }
}
