use askama::Template;

use crate::models::FormField;

#[derive(Debug, Clone, Copy)]
pub struct SelectOption<'a> {
    pub value: &'a str,
    pub label: &'a str,
    pub selected: bool,
}

/// Markup for the field's input element alone: no label, help or errors.
/// Hidden fields are rendered with only this.
#[derive(Template)]
#[template(path = "widgets/widget.html")]
pub struct WidgetTemplate<'a> {
    pub field: &'a FormField,
    /// `Some` for widgets rendered as `<input>`.
    pub input_type: Option<&'static str>,
    pub value: Option<&'a str>,
    /// Set only for text-like inputs.
    pub max_length: Option<usize>,
    pub checked: bool,
    pub is_select: bool,
    pub options: Vec<SelectOption<'a>>,
}
