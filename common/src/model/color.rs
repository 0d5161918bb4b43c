use serde::{Deserialize, Serialize};

/// Passthrough model entry. The editor carries colors through from the model
/// it was constructed with and never inspects them.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct Color {
    pub id: u32,
    pub name: String,
    pub code: String,
}
