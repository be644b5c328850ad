use super::Flavor;

/// Reserved words of SQL:2003 that are reserved by every supported engine.
const SQL: &[&str] = &[
    "ALL", "ALTER", "AND", "ANY", "AS", "ASC", "BETWEEN", "BY", "CASE", "CAST", "CHECK",
    "COLUMN", "CONSTRAINT", "CREATE", "CROSS", "CURRENT", "CURRENT_DATE", "CURRENT_TIME",
    "CURRENT_TIMESTAMP", "CURRENT_USER", "DEFAULT", "DELETE", "DESC", "DISTINCT", "DROP",
    "ELSE", "END", "EXCEPT", "EXISTS", "FALSE", "FETCH", "FOR", "FOREIGN", "FROM", "FULL",
    "GRANT", "GROUP", "HAVING", "IN", "INNER", "INSERT", "INTERSECT", "INTO", "IS", "JOIN",
    "LEFT", "LIKE", "NATURAL", "NOT", "NULL", "OF", "ON", "OR", "ORDER", "OUTER",
    "PRIMARY", "REFERENCES", "RIGHT", "SELECT", "SET", "SOME", "TABLE", "THEN", "TO",
    "TRUE", "UNION", "UNIQUE", "UPDATE", "USER", "USING", "VALUES", "WHEN", "WHERE",
    "WITH",
];

const ORACLE: &[&str] = &[
    "ACCESS", "ADD", "AUDIT", "CHAR", "CLUSTER", "COMMENT", "COMPRESS", "CONNECT", "DATE",
    "DECIMAL", "EXCLUSIVE", "FILE", "FLOAT", "IDENTIFIED", "IMMEDIATE", "INCREMENT", "INDEX",
    "INITIAL", "INTEGER", "LEVEL", "LOCK", "LONG", "MAXEXTENTS", "MINUS", "MLSLABEL", "MODE",
    "MODIFY", "NOAUDIT", "NOCOMPRESS", "NOWAIT", "NUMBER", "OFFLINE", "ONLINE", "OPTION",
    "PCTFREE", "PRIOR", "PUBLIC", "RAW", "RENAME", "RESOURCE", "REVOKE", "ROW", "ROWID",
    "ROWNUM", "ROWS", "SESSION", "SHARE", "SIZE", "SMALLINT", "START", "SUCCESSFUL",
    "SYNONYM", "SYSDATE", "TRIGGER", "UID", "VALIDATE", "VARCHAR", "VARCHAR2", "VIEW",
    "WHENEVER",
];

const MYSQL: &[&str] = &[
    "ADD", "DATABASE", "DATABASES", "DIV", "DUAL", "ESCAPED", "EXPLAIN", "FORCE", "INDEX",
    "INTERVAL", "KEY", "KEYS", "KILL", "LIMIT", "LOCK", "MOD", "OPTION", "RANGE", "READ",
    "REGEXP", "RENAME", "REPLACE", "RLIKE", "SCHEMA", "SHOW", "STRAIGHT_JOIN", "USE",
    "WRITE", "XOR",
];

const POSTGRESQL: &[&str] = &[
    "ANALYSE", "ANALYZE", "ARRAY", "ASYMMETRIC", "BOTH", "COLLATE", "DEFERRABLE", "DO",
    "LATERAL", "LEADING", "LIMIT", "LOCALTIME", "LOCALTIMESTAMP", "OFFSET", "ONLY",
    "PLACING", "RETURNING", "SYMMETRIC", "TRAILING", "VARIADIC", "WINDOW",
];

const SQLITE: &[&str] = &[
    "ABORT", "AUTOINCREMENT", "COLLATE", "GLOB", "INDEX", "ISNULL", "LIMIT", "NOTNULL",
    "OFFSET", "PRAGMA", "RAISE", "REGEXP", "VACUUM",
];

/// Returns true if `identifier` is a reserved word of the flavor, ignoring
/// case.
pub(super) fn is_reserved(flavor: Flavor, identifier: &str) -> bool {
    let extra: &[&str] = match flavor {
        Flavor::Generic => &[],
        Flavor::Postgresql => POSTGRESQL,
        Flavor::Sqlite => SQLITE,
        Flavor::Mysql => MYSQL,
        Flavor::Oracle => ORACLE,
    };

    SQL.iter()
        .chain(extra)
        .any(|keyword| keyword.eq_ignore_ascii_case(identifier))
}
