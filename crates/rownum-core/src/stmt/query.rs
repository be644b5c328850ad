use super::{Select, SetOp, Union};

/// A query expression: either a single `SELECT` or a `UNION` of queries.
#[derive(Debug, Clone, PartialEq)]
pub enum Query {
    Select(Select),
    Union(Union),
}

impl Query {
    pub fn limit(&self) -> Option<u64> {
        match self {
            Query::Select(select) => select.limit,
            Query::Union(union) => union.limit,
        }
    }

    pub fn offset(&self) -> Option<u64> {
        match self {
            Query::Select(select) => select.offset,
            Query::Union(union) => union.offset,
        }
    }

    pub fn table_alias(&self) -> Option<&str> {
        match self {
            Query::Select(select) => select.table_alias.as_deref(),
            Query::Union(union) => union.table_alias.as_deref(),
        }
    }

    /// Returns true when the query has a limit or an offset.
    pub fn is_paginated(&self) -> bool {
        self.limit().is_some() || self.offset().is_some()
    }

    /// Returns true when the query locks the rows it selects. Unions never
    /// lock.
    pub fn for_update(&self) -> bool {
        match self {
            Query::Select(select) => select.for_update,
            Query::Union(_) => false,
        }
    }

    /// Returns a copy of the query with `limit` and `offset` cleared and the
    /// table alias replaced by `alias`. `self` is left as is.
    pub fn without_pagination(&self, alias: &str) -> Query {
        match self {
            Query::Select(select) => Query::Select(select.without_pagination(alias)),
            Query::Union(union) => Query::Union(union.without_pagination(alias)),
        }
    }

    pub fn union(self, other: impl Into<Query>) -> Union {
        Union::new(self, other, SetOp::Union)
    }

    pub fn union_all(self, other: impl Into<Query>) -> Union {
        Union::new(self, other, SetOp::UnionAll)
    }

    pub fn as_select(&self) -> Option<&Select> {
        match self {
            Query::Select(select) => Some(select),
            _ => None,
        }
    }

    #[track_caller]
    pub fn as_select_unwrap(&self) -> &Select {
        self.as_select()
            .unwrap_or_else(|| panic!("expected `Select`; actual={self:#?}"))
    }
}

impl From<Select> for Query {
    fn from(value: Select) -> Self {
        Query::Select(value)
    }
}

impl From<Union> for Query {
    fn from(value: Union) -> Self {
        Query::Union(value)
    }
}
