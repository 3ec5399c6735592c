use askama::Template;
use chrono::NaiveDateTime;

use crate::context::RenderContext;
use crate::filters;
use crate::templates::{RenderFormTemplate, RenderMessagesTemplate};

#[derive(Template)]
#[template(path = "demo/signup.html")]
pub struct SignupPageTemplate<'a> {
    pub ctx: &'a RenderContext,
    pub messages: RenderMessagesTemplate<'a>,
    pub form: RenderFormTemplate<'a>,
    pub updated: NaiveDateTime,
}
