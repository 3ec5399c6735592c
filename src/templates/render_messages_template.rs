use askama::Template;

use crate::models::Message;

#[derive(Template, Clone, Copy)]
#[template(path = "common_tags/render_messages.html")]
pub struct RenderMessagesTemplate<'a> {
    pub messages: &'a [Message],
}
