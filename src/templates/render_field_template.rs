use askama::Template;

use crate::filters;
use crate::models::FormField;
use crate::templates::{FieldLabelTemplate, WidgetTemplate};

#[derive(Template)]
#[template(path = "common_tags/render_field.html")]
pub struct RenderFieldTemplate<'a> {
    pub field: &'a FormField,
    pub label: FieldLabelTemplate<'a>,
    pub widget: WidgetTemplate<'a>,
    pub no_fieldset: bool,
}
