use serde::{Deserialize, Serialize};

/// One (parameter id, text value) pair in a [`Model`](crate::model::Model)'s
/// value list. Produced fresh on every model export.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ParamValue {
    pub param_id: u32,
    pub value: String,
}
