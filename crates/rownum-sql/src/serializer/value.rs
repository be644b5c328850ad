use super::{Params, ToSql};

use rownum_core::{stmt, Result};

impl ToSql for &stmt::Argument {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) -> Result<()> {
        // The placeholder is written right after the push so the argument
        // order follows the text order.
        let placeholder = f.params.push(self);
        fmt!(f, placeholder);
        Ok(())
    }
}
