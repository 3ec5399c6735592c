use askama::Template;

use crate::filters;
use crate::models::FormField;

#[derive(Template)]
#[template(path = "common_tags/field_label.html")]
pub struct FieldLabelTemplate<'a> {
    pub field: &'a FormField,
}
