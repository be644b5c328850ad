use std::fmt;

/// SQL type tag describing how a bound argument is passed to the driver.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub enum Type {
    Boolean,

    /// 32-bit integer
    Integer,

    /// 64-bit integer
    Long,

    Double,
    Text,
    Bytes,
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Type::*;

        match self {
            Boolean => "boolean".fmt(f),
            Integer => "int".fmt(f),
            Long => "bigint".fmt(f),
            Double => "double".fmt(f),
            Text => "varchar".fmt(f),
            Bytes => "bytes".fmt(f),
        }
    }
}

impl fmt::Debug for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
