use super::{Expr, Join, JoinKind, Query, TableRef};

/// The `FROM` part of a query.
#[derive(Debug, Clone, PartialEq)]
pub enum Source {
    /// A named table
    Table(TableRef),

    /// Two sources joined together
    Join(Box<Join>),

    /// A derived table. It is aliased with the query's own table alias.
    Query(Box<Query>),
}

impl Source {
    pub fn table(table: impl Into<TableRef>) -> Source {
        Source::Table(table.into())
    }

    pub fn join(self, kind: JoinKind, right: impl Into<Source>, on: impl Into<Expr>) -> Source {
        Source::Join(Box::new(Join {
            kind,
            left: self,
            right: right.into(),
            condition: Some(on.into()),
        }))
    }

    pub fn inner_join(self, right: impl Into<Source>, on: impl Into<Expr>) -> Source {
        self.join(JoinKind::Inner, right, on)
    }

    pub fn left_join(self, right: impl Into<Source>, on: impl Into<Expr>) -> Source {
        self.join(JoinKind::Left, right, on)
    }

    pub fn cross_join(self, right: impl Into<Source>) -> Source {
        Source::Join(Box::new(Join {
            kind: JoinKind::Cross,
            left: self,
            right: right.into(),
            condition: None,
        }))
    }
}

impl From<TableRef> for Source {
    fn from(value: TableRef) -> Self {
        Source::Table(value)
    }
}

impl From<&str> for Source {
    fn from(value: &str) -> Self {
        Source::Table(TableRef::new(value))
    }
}

impl From<Query> for Source {
    fn from(value: Query) -> Self {
        Source::Query(Box::new(value))
    }
}
