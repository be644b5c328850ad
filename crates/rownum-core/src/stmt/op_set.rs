use std::fmt;

#[derive(Copy, Clone, PartialEq, Eq)]
pub enum SetOp {
    /// Combines both results, removing duplicate rows.
    Union,

    /// Combines both results, keeping duplicate rows.
    UnionAll,
}

impl fmt::Display for SetOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetOp::Union => "UNION".fmt(f),
            SetOp::UnionAll => "UNION ALL".fmt(f),
        }
    }
}

impl fmt::Debug for SetOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
