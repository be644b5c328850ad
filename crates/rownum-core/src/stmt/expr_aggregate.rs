use super::Expr;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub struct ExprAggregate {
    pub func: AggregateFunc,

    /// `None` stands for `*`, only meaningful for `COUNT`.
    pub arg: Option<Box<Expr>>,

    pub distinct: bool,
}

#[derive(Copy, Clone, PartialEq, Eq)]
pub enum AggregateFunc {
    Count,
    Sum,
    Avg,
    Min,
    Max,
}

impl Expr {
    /// `COUNT(*)`
    pub fn count_star() -> Expr {
        ExprAggregate {
            func: AggregateFunc::Count,
            arg: None,
            distinct: false,
        }
        .into()
    }

    pub fn aggregate(func: AggregateFunc, arg: impl Into<Expr>) -> Expr {
        ExprAggregate {
            func,
            arg: Some(Box::new(arg.into())),
            distinct: false,
        }
        .into()
    }

    pub fn aggregate_distinct(func: AggregateFunc, arg: impl Into<Expr>) -> Expr {
        ExprAggregate {
            func,
            arg: Some(Box::new(arg.into())),
            distinct: true,
        }
        .into()
    }
}

impl From<ExprAggregate> for Expr {
    fn from(value: ExprAggregate) -> Self {
        Self::Aggregate(value)
    }
}

impl fmt::Display for AggregateFunc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use AggregateFunc::*;

        match self {
            Count => "COUNT".fmt(f),
            Sum => "SUM".fmt(f),
            Avg => "AVG".fmt(f),
            Min => "MIN".fmt(f),
            Max => "MAX".fmt(f),
        }
    }
}

impl fmt::Debug for AggregateFunc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
