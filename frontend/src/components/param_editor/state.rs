//! Component state for the parameter editor.
//!
//! This module defines the state struct that holds the editor's runtime data
//! (current value per parameter, the ordered change log, and the passthrough
//! colors), along with the two core operations: applying an edit and
//! reassembling the external model. Both operations are plain methods with no
//! DOM access, so the whole state machine is unit-testable on the host.
//!
//! Invariant: the key set of `values` equals the declared parameter id set
//! for the lifetime of the component, and `changes` holds at most one record
//! per parameter id, ordered by first edit.

use std::collections::HashMap;

use common::model::change::ChangeRecord;
use common::model::color::Color;
use common::model::param::Param;
use common::model::param_value::ParamValue;
use common::model::Model;

/// Main state container for the `ParamEditorComponent`.
///
/// Fields are `pub` because they are accessed by the `view` and `update`
/// modules.
pub struct ParamEditorComponent {
    /// Declared parameters in display order. Never mutated.
    pub params: Vec<Param>,

    /// Current text value per declared parameter id.
    pub values: HashMap<u32, String>,

    /// Change log ordered by first-edit time. At most one record per
    /// parameter id; re-edits update the existing record in place.
    pub changes: Vec<ChangeRecord>,

    /// Colors carried verbatim from the model supplied at construction.
    pub colors: Vec<Color>,

    /// Pretty-printed JSON of the last exported model, shown in the result
    /// panel. `None` until the first export or after the panel is closed.
    pub exported_json: Option<String>,
}

impl ParamEditorComponent {
    /// Seeds the editor from the declared parameters and the initial model.
    ///
    /// Every declared parameter gets an entry in `values`: the text of the
    /// matching `param_values` entry if the model has one, the empty string
    /// otherwise. Model entries whose id matches no declared parameter are
    /// ignored. The change log starts empty.
    pub fn new(params: Vec<Param>, model: &Model) -> Self {
        let mut values = HashMap::with_capacity(params.len());
        for param in &params {
            let value = model
                .param_values
                .iter()
                .find(|pv| pv.param_id == param.id)
                .map(|pv| pv.value.clone())
                .unwrap_or_default();
            values.insert(param.id, value);
        }

        Self {
            params,
            values,
            changes: Vec::new(),
            colors: model.colors.clone(),
            exported_json: None,
        }
    }

    /// Applies one edit: replaces the parameter's current value and upserts
    /// the change log.
    ///
    /// The first edit of a parameter appends a record capturing the pre-edit
    /// value as `old_value`; later edits only overwrite that record's
    /// `new_value`, leaving `old_value` and the record's position untouched.
    /// Any string is a valid value, including the empty string.
    pub fn apply_edit(&mut self, param_id: u32, name: &str, value: String) {
        let old_value = self.values.get(&param_id).cloned().unwrap_or_default();
        self.values.insert(param_id, value.clone());

        match self.changes.iter_mut().find(|c| c.param_id == param_id) {
            Some(change) => change.new_value = value,
            None => self.changes.push(ChangeRecord {
                param_id,
                name: name.to_string(),
                old_value,
                new_value: value,
            }),
        }
    }

    /// Reassembles the external model from the current state.
    ///
    /// Emits one `ParamValue` per declared parameter, in declared order, with
    /// its current value; `colors` is the list supplied at construction,
    /// unchanged. Pure: repeated calls without intervening edits return equal
    /// models.
    pub fn model(&self) -> Model {
        let param_values = self
            .params
            .iter()
            .map(|param| ParamValue {
                param_id: param.id,
                value: self.values.get(&param.id).cloned().unwrap_or_default(),
            })
            .collect();

        Model {
            param_values,
            colors: self.colors.clone(),
        }
    }

    /// Current text of one parameter, for rendering its input field.
    pub fn current_value(&self, param_id: u32) -> &str {
        self.values.get(&param_id).map(String::as_str).unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::model::param::ParamType;

    fn param(id: u32, name: &str) -> Param {
        Param {
            id,
            name: name.to_string(),
            param_type: ParamType::Text,
        }
    }

    fn pv(param_id: u32, value: &str) -> ParamValue {
        ParamValue {
            param_id,
            value: value.to_string(),
        }
    }

    fn sample_params() -> Vec<Param> {
        vec![
            param(1, "Purpose"),
            param(2, "Length"),
            param(3, "Material"),
        ]
    }

    fn sample_model() -> Model {
        Model {
            param_values: vec![pv(1, "casual"), pv(2, "maxi")],
            colors: vec![Color {
                id: 7,
                name: "Burgundy".to_string(),
                code: "#800020".to_string(),
            }],
        }
    }

    #[test]
    fn seeds_values_from_initial_model() {
        let editor = ParamEditorComponent::new(sample_params(), &sample_model());
        assert_eq!(editor.current_value(1), "casual");
        assert_eq!(editor.current_value(2), "maxi");
        assert!(editor.changes.is_empty());
    }

    #[test]
    fn missing_initial_value_defaults_to_empty() {
        let editor = ParamEditorComponent::new(sample_params(), &sample_model());
        assert_eq!(editor.current_value(3), "");
    }

    #[test]
    fn model_entries_for_unknown_params_are_ignored() {
        let mut model = sample_model();
        model.param_values.push(pv(99, "stray"));

        let editor = ParamEditorComponent::new(sample_params(), &model);
        assert_eq!(editor.values.len(), 3);
        assert!(!editor.values.contains_key(&99));
        let exported = editor.model();
        assert!(exported.param_values.iter().all(|v| v.param_id != 99));
    }

    #[test]
    fn export_right_after_construction_matches_seed() {
        let editor = ParamEditorComponent::new(sample_params(), &sample_model());
        let exported = editor.model();
        assert_eq!(
            exported.param_values,
            vec![pv(1, "casual"), pv(2, "maxi"), pv(3, "")]
        );
    }

    #[test]
    fn export_is_idempotent() {
        let mut editor = ParamEditorComponent::new(sample_params(), &sample_model());
        editor.apply_edit(1, "Purpose", "formal".to_string());
        assert_eq!(editor.model(), editor.model());
    }

    #[test]
    fn first_edit_appends_one_change_record() {
        let mut editor = ParamEditorComponent::new(sample_params(), &sample_model());
        editor.apply_edit(1, "Purpose", "formal".to_string());

        assert_eq!(editor.changes.len(), 1);
        let change = &editor.changes[0];
        assert_eq!(change.param_id, 1);
        assert_eq!(change.name, "Purpose");
        assert_eq!(change.old_value, "casual");
        assert_eq!(change.new_value, "formal");
    }

    #[test]
    fn repeated_edits_keep_the_first_original_value() {
        let mut editor = ParamEditorComponent::new(sample_params(), &sample_model());
        editor.apply_edit(1, "Purpose", "formal".to_string());
        editor.apply_edit(1, "Purpose", "sport".to_string());

        assert_eq!(editor.changes.len(), 1);
        let change = &editor.changes[0];
        assert_eq!(change.old_value, "casual");
        assert_eq!(change.new_value, "sport");
        assert_eq!(editor.current_value(1), "sport");
    }

    #[test]
    fn edits_to_distinct_params_keep_first_edit_order() {
        let mut editor = ParamEditorComponent::new(sample_params(), &sample_model());
        editor.apply_edit(3, "Material", "cotton".to_string());
        editor.apply_edit(1, "Purpose", "formal".to_string());
        editor.apply_edit(3, "Material", "linen".to_string());

        let ids: Vec<u32> = editor.changes.iter().map(|c| c.param_id).collect();
        assert_eq!(ids, vec![3, 1]);
    }

    #[test]
    fn export_reflects_all_edits_in_declared_order() {
        let mut editor = ParamEditorComponent::new(sample_params(), &sample_model());
        editor.apply_edit(1, "Purpose", "formal".to_string());
        editor.apply_edit(3, "Material", "cotton".to_string());

        let exported = editor.model();
        assert_eq!(
            exported.param_values,
            vec![pv(1, "formal"), pv(2, "maxi"), pv(3, "cotton")]
        );
    }

    #[test]
    fn empty_string_is_a_valid_edit() {
        let mut editor = ParamEditorComponent::new(sample_params(), &sample_model());
        editor.apply_edit(2, "Length", String::new());

        assert_eq!(editor.current_value(2), "");
        assert_eq!(editor.changes[0].old_value, "maxi");
        assert_eq!(editor.changes[0].new_value, "");
    }

    #[test]
    fn colors_pass_through_unchanged() {
        let model = sample_model();
        let mut editor = ParamEditorComponent::new(sample_params(), &model);
        editor.apply_edit(1, "Purpose", "formal".to_string());
        editor.apply_edit(2, "Length", "mini".to_string());

        assert_eq!(editor.model().colors, model.colors);
    }
}
