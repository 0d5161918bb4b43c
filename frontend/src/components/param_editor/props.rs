//! Defines the properties for the `ParamEditorComponent`.
//!
//! This module contains the `ParamEditorProps` struct, which specifies the
//! data a parent component passes to the parameter editor. Both properties
//! are read once, when the component is created, to seed its internal state.

use common::model::param::Param;
use common::model::Model;
use yew::prelude::*;

/// Properties for the `ParamEditorComponent`.
#[derive(Properties, PartialEq, Clone)]
pub struct ParamEditorProps {
    /// The declared parameters, in display order. One text input is rendered
    /// per entry. The editor never adds or removes parameters.
    pub params: Vec<Param>,

    /// The initial model. Each declared parameter whose id matches an entry
    /// in `model.param_values` is seeded with that entry's text; parameters
    /// with no matching entry start empty, and entries referencing unknown
    /// parameter ids are ignored. The `colors` list is carried through to
    /// every exported model unchanged.
    ///
    /// Later changes to these props are not observed; the editor owns its
    /// state from creation onward.
    pub model: Model,
}
