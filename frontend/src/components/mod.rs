pub mod param_editor;
