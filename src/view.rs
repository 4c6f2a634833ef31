//! Rendering instructions derived from the form state.
//!
//! A renderer (terminal, HTML, native widgets) only needs a [`FormView`]; it
//! never reads [`LoginForm`] directly.

use serde::Serialize;

use crate::application::LoginForm;
use crate::domain::entities::{Field, SubmissionStatus};

pub const HEADING: &str = "Login";
pub const SUBMIT_LABEL: &str = "Login";
pub const BUSY_LABEL: &str = "Logging in...";
/// CSS-style class put on inputs that currently have an error.
pub const ERROR_CLASS: &str = "error";

/// Everything a renderer needs to draw the form once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormView {
    pub heading: &'static str,
    pub status: SubmissionStatus,
    /// Form-level banner, shown above the inputs.
    pub server_error: Option<String>,
    pub fields: Vec<FieldView>,
    pub submit: ButtonView,
}

/// One input with its label and inline error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldView {
    pub name: Field,
    pub label: &'static str,
    pub input_type: InputType,
    /// Current text. Always `None` for password inputs.
    pub value: Option<String>,
    /// Number of characters typed, for masked rendering.
    pub char_count: usize,
    pub error: Option<String>,
    pub class: Option<&'static str>,
    pub disabled: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InputType {
    Text,
    Password,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ButtonView {
    pub label: &'static str,
    pub disabled: bool,
}

impl FormView {
    pub fn render(state: &LoginForm) -> Self {
        let busy = state.status().is_submitting();
        let errors = state.errors();

        let fields = Field::INPUTS
            .into_iter()
            .map(|field| {
                let value = state.form().value(field).unwrap_or_default();
                let input_type = match field {
                    Field::Password => InputType::Password,
                    _ => InputType::Text,
                };
                let error = errors.get(field).map(str::to_string);

                FieldView {
                    name: field,
                    label: field.label().unwrap_or_default(),
                    input_type,
                    value: (input_type == InputType::Text).then(|| value.to_string()),
                    char_count: value.chars().count(),
                    class: error.as_ref().map(|_| ERROR_CLASS),
                    error,
                    disabled: busy,
                }
            })
            .collect();

        Self {
            heading: HEADING,
            status: state.status(),
            server_error: errors.get(Field::Server).map(str::to_string),
            fields,
            submit: ButtonView {
                label: if busy { BUSY_LABEL } else { SUBMIT_LABEL },
                disabled: busy,
            },
        }
    }

    pub fn field(&self, name: Field) -> Option<&FieldView> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Whether any input or banner currently shows an error.
    pub fn has_errors(&self) -> bool {
        self.server_error.is_some() || self.fields.iter().any(|f| f.error.is_some())
    }
}
