pub mod serializer;
pub use serializer::{check_name_length, Indentation, Params, Placeholder, Serializer};

pub use rownum_core::{stmt, Capability, Error, Result};
