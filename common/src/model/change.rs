use serde::{Deserialize, Serialize};

/// One entry in the editor's change log.
///
/// A record is created the first time a parameter is edited and is then
/// updated in place on every later edit of the same parameter: `old_value`
/// keeps the value the parameter held before its first edit, `new_value`
/// always reflects the latest one. There is at most one record per parameter
/// id, and records keep the order in which parameters were first edited.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChangeRecord {
    pub param_id: u32,
    /// Display name of the parameter, snapshotted when the record is created.
    pub name: String,
    /// Value the parameter held before its first edit.
    pub old_value: String,
    /// Latest edited value.
    pub new_value: String,
}
