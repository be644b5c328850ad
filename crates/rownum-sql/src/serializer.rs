#[macro_use]
mod fmt;
use fmt::ToSql;

mod delim;
use delim::{Comma, Delimited};

mod flavor;
use flavor::Flavor;

mod ident;
pub use ident::check_name_length;
use ident::Ident;

mod keywords;

mod params;
pub use params::{Params, Placeholder};

mod rownum;

// Fragment serializers
mod expr;
mod statement;
mod value;

use rownum_core::{
    stmt::{Argument, Query},
    Capability, Result,
};

/// Serialize a query expression to a SQL string and its arguments.
///
/// A serializer holds no per-call state; the same instance can serialize any
/// number of queries, from any number of threads.
#[derive(Debug, Clone)]
pub struct Serializer {
    /// The database flavor handles the differences between SQL dialects and
    /// supported features.
    flavor: Flavor,

    /// Properties of the target database
    capability: Capability,

    /// When set, output is broken into lines indented by this many spaces.
    indent_size: Option<usize>,
}

/// Where the next line starts relative to the current one.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Indentation {
    /// Same level as the current line
    Same,

    /// One level deeper
    Inner,

    /// One level shallower
    Outer,
}

struct Formatter<'a, T> {
    /// Handle to the serializer
    serializer: &'a Serializer,

    /// Where to write the serialized SQL
    dst: &'a mut String,

    /// Where to store parameters
    params: &'a mut T,

    /// Current indentation level, only tracked for pretty output
    depth: usize,
}

impl Serializer {
    /// Serializes `query`, pushing every bound argument to `params` in the
    /// order its placeholder appears in the returned SQL.
    pub fn serialize(&self, query: &Query, params: &mut impl Params) -> Result<String> {
        let mut ret = String::new();

        let mut fmt = Formatter {
            serializer: self,
            dst: &mut ret,
            params,
            depth: 0,
        };

        query.to_sql(&mut fmt)?;
        fmt.remove_last_blank();

        tracing::trace!(flavor = ?self.flavor, sql = %ret, "serialized query");
        Ok(ret)
    }

    /// Serializes `query` and collects its arguments.
    pub fn render(&self, query: &Query) -> Result<(String, Vec<Argument>)> {
        let mut params = vec![];
        let sql = self.serialize(query, &mut params)?;
        Ok((sql, params))
    }

    /// Breaks the output into indented lines, `indent_size` spaces per level.
    pub fn pretty(mut self, indent_size: usize) -> Serializer {
        self.indent_size = Some(indent_size);
        self
    }

    /// Sets the maximum identifier length reported by the connected database.
    /// Zero disables the check.
    pub fn max_name_length(mut self, max_name_length: usize) -> Serializer {
        self.capability.max_name_length = max_name_length;
        self
    }
}

impl<T> Formatter<'_, T> {
    /// Starts a new line when pretty printing, otherwise does nothing. The
    /// blanks ending the current line are dropped.
    fn newline(&mut self, indentation: Indentation) {
        let Some(indent_size) = self.serializer.indent_size else {
            return;
        };

        match indentation {
            Indentation::Same => {}
            Indentation::Inner => self.depth += 1,
            Indentation::Outer => self.depth = self.depth.saturating_sub(1),
        }

        self.remove_last_blank();
        self.dst.push('\n');
        for _ in 0..indent_size * self.depth {
            self.dst.push(' ');
        }
    }

    fn remove_last_blank(&mut self) {
        let len = self.dst.trim_end_matches(|c: char| c == ' ' || c == '\n').len();
        self.dst.truncate(len);
    }
}
