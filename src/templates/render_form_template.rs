use askama::Template;

use crate::models::{Form, FormMethod};
use crate::templates::{CsrfInputTemplate, RenderFieldTemplate, SubmitButtonTemplate, WidgetTemplate};

/// Projection of a `render_form` call. The arguments pass through
/// unchanged; the template decides what the method and flags suppress.
#[derive(Template)]
#[template(path = "common_tags/render_form.html")]
pub struct RenderFormTemplate<'a> {
    pub form: &'a Form,
    pub method: FormMethod,
    pub submit_text: &'a str,
    pub action: &'a str,
    pub class_name: &'a str,
    pub id: &'a str,
    pub no_csrf: bool,
    /// Non-field errors followed by hidden-field errors.
    pub top_errors: Vec<String>,
    pub visible_fields: Vec<RenderFieldTemplate<'a>>,
    pub hidden_fields: Vec<WidgetTemplate<'a>>,
    /// `None` when the render context carries no token.
    pub csrf: Option<CsrfInputTemplate<'a>>,
    pub submit: SubmitButtonTemplate<'a>,
}
