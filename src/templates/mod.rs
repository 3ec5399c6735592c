// Widget markup (a field's own input element)
pub mod widget_template;
pub use widget_template::{SelectOption, WidgetTemplate};

// One template per tag
pub mod field_label_template;
pub mod render_field_template;
pub mod submit_button_template;
pub mod csrf_input_template;
pub mod render_form_template;
pub mod render_messages_template;

pub use field_label_template::FieldLabelTemplate;
pub use render_field_template::RenderFieldTemplate;
pub use submit_button_template::SubmitButtonTemplate;
pub use csrf_input_template::CsrfInputTemplate;
pub use render_form_template::RenderFormTemplate;
pub use render_messages_template::RenderMessagesTemplate;

// Demo site pages
pub mod page_layout_template;
pub mod signup_page_template;

pub use page_layout_template::PageLayoutTemplate;
pub use signup_page_template::SignupPageTemplate;
