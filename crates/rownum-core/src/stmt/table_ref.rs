/// A named table, optionally schema qualified and aliased.
#[derive(Debug, Clone, PartialEq)]
pub struct TableRef {
    /// Owning schema, written as `schema.name`
    pub schema: Option<String>,

    pub name: String,

    pub alias: Option<String>,
}

impl TableRef {
    pub fn new(name: impl Into<String>) -> TableRef {
        TableRef {
            schema: None,
            name: name.into(),
            alias: None,
        }
    }

    pub fn schema(mut self, schema: impl Into<String>) -> TableRef {
        self.schema = Some(schema.into());
        self
    }

    pub fn alias(mut self, alias: impl Into<String>) -> TableRef {
        self.alias = Some(alias.into());
        self
    }
}

impl From<&str> for TableRef {
    fn from(value: &str) -> Self {
        TableRef::new(value)
    }
}
