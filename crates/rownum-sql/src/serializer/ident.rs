use super::{keywords, Flavor, Formatter, Params, Serializer, ToSql};

use rownum_core::{Error, Result};

/// An identifier, checked against the name length limit and quoted when the
/// flavor requires it.
pub(super) struct Ident<S>(pub(super) S);

impl<S: AsRef<str>> ToSql for Ident<S> {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) -> Result<()> {
        let name = self.0.as_ref();

        f.serializer.check_name(name)?;

        if f.serializer.should_quote(name) {
            let quote = f.serializer.flavor.quote_char();
            f.dst.push(quote);
            for c in name.chars() {
                if c == quote {
                    f.dst.push(quote);
                }
                f.dst.push(c);
            }
            f.dst.push(quote);
        } else {
            f.dst.push_str(name);
        }

        Ok(())
    }
}

impl Serializer {
    /// Returns true if `identifier` must be wrapped in quotes to be read back
    /// as written.
    pub fn should_quote(&self, identifier: &str) -> bool {
        match self.flavor {
            // Oracle doesn't accept `_` as the first character of an unquoted
            // identifier.
            Flavor::Oracle => identifier.starts_with('_') || self.should_quote_default(identifier),
            _ => self.should_quote_default(identifier),
        }
    }

    fn should_quote_default(&self, identifier: &str) -> bool {
        if is_mixed_case(identifier) && !self.capability.mixed_case_identifiers {
            return true;
        }

        keywords::is_reserved(self.flavor, identifier) || !is_plain_identifier(identifier)
    }

    /// Fails if `name` is longer than the maximum identifier length of the
    /// database.
    pub fn check_name(&self, name: &str) -> Result<()> {
        check_name_length(name, self.capability.max_name_length)
    }
}

/// Fails if `name` has more than `max_length` characters. A `max_length` of
/// zero means the limit is unknown and every name passes.
pub fn check_name_length(name: &str, max_length: usize) -> Result<()> {
    if max_length > 0 && name.chars().count() > max_length {
        return Err(Error::invalid_identifier(name, max_length));
    }
    Ok(())
}

fn is_mixed_case(identifier: &str) -> bool {
    identifier.chars().any(|c| c.is_ascii_uppercase())
        && identifier.chars().any(|c| c.is_ascii_lowercase())
}

/// `[A-Za-z_][A-Za-z0-9_$#]*`
fn is_plain_identifier(identifier: &str) -> bool {
    let mut chars = identifier.chars();

    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }

    chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '$' | '#'))
}
