pub mod change;
pub mod color;
pub mod param;
pub mod param_value;

use serde::{Deserialize, Serialize};

use crate::model::color::Color;
use crate::model::param_value::ParamValue;

/// The aggregate payload exchanged with the host page.
///
/// A `Model` carries the current value of every declared parameter together
/// with a list of colors the editor never inspects or modifies. The editor
/// receives one `Model` at construction time to seed its fields, and
/// reassembles a fresh one on every export: `param_values` is rebuilt from
/// the live field values (one entry per declared parameter, in declared
/// order), while `colors` is carried through verbatim from the model the
/// editor was constructed with.
///
/// Serialized with camelCase keys (`paramValues`, `colors`) to keep the
/// external JSON shape stable.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Model {
    /// Current value per parameter. On export this covers every declared
    /// parameter, including those the user never touched (empty string when
    /// the initial model carried no value for them).
    pub param_values: Vec<ParamValue>,
    /// Opaque passthrough entries. Never read or written by the editor.
    pub colors: Vec<Color>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::change::ChangeRecord;
    use crate::model::param::{Param, ParamType};

    #[test]
    fn model_serializes_with_camel_case_keys() {
        let model = Model {
            param_values: vec![ParamValue {
                param_id: 1,
                value: "casual".to_string(),
            }],
            colors: vec![Color {
                id: 7,
                name: "Burgundy".to_string(),
                code: "#800020".to_string(),
            }],
        };

        let json = serde_json::to_string(&model).unwrap();
        assert_eq!(
            json,
            r##"{"paramValues":[{"paramId":1,"value":"casual"}],"colors":[{"id":7,"name":"Burgundy","code":"#800020"}]}"##
        );
    }

    #[test]
    fn param_type_serializes_as_string_keyword() {
        let param = Param {
            id: 2,
            name: "Length".to_string(),
            param_type: ParamType::Text,
        };

        let json = serde_json::to_string(&param).unwrap();
        assert_eq!(json, r#"{"id":2,"name":"Length","type":"string"}"#);
    }

    #[test]
    fn change_record_round_trips_through_json() {
        let change = ChangeRecord {
            param_id: 1,
            name: "Purpose".to_string(),
            old_value: "casual".to_string(),
            new_value: "formal".to_string(),
        };

        let json = serde_json::to_string(&change).unwrap();
        assert_eq!(
            json,
            r#"{"paramId":1,"name":"Purpose","oldValue":"casual","newValue":"formal"}"#
        );
        let back: ChangeRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, change);
    }
}
