use super::{Flavor, Formatter, ToSql};

use rownum_core::{stmt::Argument, Result};
use std::fmt::Write;

/// Collects the arguments of a statement as it is serialized.
pub trait Params {
    /// Appends an argument and returns the placeholder referencing it.
    fn push(&mut self, arg: &Argument) -> Placeholder;
}

/// One-based position of an argument in the parameter list.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Placeholder(pub usize);

impl Params for Vec<Argument> {
    fn push(&mut self, arg: &Argument) -> Placeholder {
        self.push(arg.clone());
        Placeholder(self.len())
    }
}

impl ToSql for Placeholder {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        match f.serializer.flavor {
            Flavor::Postgresql => write!(f.dst, "${}", self.0)?,
            Flavor::Sqlite => write!(f.dst, "?{}", self.0)?,
            Flavor::Generic | Flavor::Mysql | Flavor::Oracle => f.dst.push('?'),
        }
        Ok(())
    }
}
