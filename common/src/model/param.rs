use serde::{Deserialize, Serialize};

/// A named field the editor renders and lets the user edit.
///
/// Parameters are declared by the host page and are immutable for the
/// lifetime of the editor: the component never creates or deletes them, it
/// only tracks their current text values.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct Param {
    /// Unique identity of the parameter. Values and change records are keyed
    /// by this id.
    pub id: u32,
    /// Label shown next to the input field.
    pub name: String,
    /// Value kind. Serialized as `"type"` for compatibility with the
    /// external JSON shape.
    #[serde(rename = "type")]
    pub param_type: ParamType,
}

/// The kind of value a parameter holds. Only plain text exists today; the
/// enum leaves room for further kinds without changing the wire shape.
#[derive(Deserialize, Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParamType {
    #[serde(rename = "string")]
    Text,
}
