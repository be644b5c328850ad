/// Properties of a database engine that change how queries are written for it.
///
/// The constants describe the engines out of the box. Values the engine only
/// reports once connected, like the maximum identifier length, can be
/// overridden on the serializer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Capability {
    /// Supports row-level locking with `SELECT ... FOR UPDATE`.
    pub select_for_update: bool,

    /// The SQL dialect has a `LIMIT`/`OFFSET` style clause. When false,
    /// pagination must be expressed some other way.
    pub native_limit: bool,

    /// Maximum length of an identifier, in characters. Zero means the limit
    /// is unknown and names are not checked.
    pub max_name_length: usize,

    /// Unquoted identifiers keep their case. When false, the engine folds
    /// unquoted names and mixed-case names must be quoted to survive.
    pub mixed_case_identifiers: bool,
}

impl Capability {
    /// Capabilities of a generic ANSI SQL database.
    pub const GENERIC: Self = Self {
        select_for_update: true,
        native_limit: true,
        max_name_length: 0,
        mixed_case_identifiers: false,
    };

    /// SQLite capabilities.
    pub const SQLITE: Self = Self {
        select_for_update: false,
        mixed_case_identifiers: true,
        ..Self::GENERIC
    };

    /// PostgreSQL capabilities
    pub const POSTGRESQL: Self = Self {
        // NAMEDATALEN - 1
        max_name_length: 63,
        ..Self::GENERIC
    };

    /// MySQL capabilities
    pub const MYSQL: Self = Self {
        max_name_length: 64,
        mixed_case_identifiers: true,
        ..Self::GENERIC
    };

    /// Oracle capabilities.
    ///
    /// Oracle has no `LIMIT` clause before 12c, only the `ROWNUM`
    /// pseudo-column. Identifiers are limited to 30 bytes up to 12.1 and to
    /// 128 from 12.2 on; the conservative value is used until the connected
    /// engine reports otherwise.
    pub const ORACLE: Self = Self {
        select_for_update: true,
        native_limit: false,
        max_name_length: 30,
        mixed_case_identifiers: false,
    };
}
