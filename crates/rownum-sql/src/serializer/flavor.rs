use super::Serializer;

use rownum_core::Capability;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(super) enum Flavor {
    Generic,
    Postgresql,
    Sqlite,
    Mysql,
    Oracle,
}

impl Serializer {
    /// Plain ANSI SQL, with `LIMIT`/`OFFSET` pagination.
    pub fn generic() -> Serializer {
        Serializer::new(Flavor::Generic, Capability::GENERIC)
    }

    pub fn sqlite() -> Serializer {
        Serializer::new(Flavor::Sqlite, Capability::SQLITE)
    }

    pub fn postgresql() -> Serializer {
        Serializer::new(Flavor::Postgresql, Capability::POSTGRESQL)
    }

    pub fn mysql() -> Serializer {
        Serializer::new(Flavor::Mysql, Capability::MYSQL)
    }

    /// Oracle, where paginated queries are rewritten to filter on `ROWNUM`.
    pub fn oracle() -> Serializer {
        Serializer::new(Flavor::Oracle, Capability::ORACLE)
    }

    fn new(flavor: Flavor, capability: Capability) -> Serializer {
        Serializer {
            flavor,
            capability,
            indent_size: None,
        }
    }
}

impl Flavor {
    /// Character wrapping quoted identifiers
    pub(super) fn quote_char(self) -> char {
        match self {
            Flavor::Mysql => '`',
            _ => '"',
        }
    }
}
