use tb_core::Fields;

/// A schemaless document: an opaque id plus a JSON field map.
/// The id is assigned by the store and never appears inside the fields.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: String,
    pub fields: Fields,
}

impl Document {
    pub fn new(id: impl Into<String>, fields: Fields) -> Self {
        Self {
            id: id.into(),
            fields,
        }
    }
}
