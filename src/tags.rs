//! The tag surface: presenters that build a template projection, and
//! `render_*` helpers that build and render it in one call.
//!
//! | tag               | template                             |
//! |-------------------|--------------------------------------|
//! | `render_form`     | `common_tags/render_form.html`       |
//! | `render_field`    | `common_tags/render_field.html`      |
//! | `field_label`     | `common_tags/field_label.html`       |
//! | `submit_button`   | `common_tags/submit_button.html`     |
//! | `render_messages` | `common_tags/render_messages.html`   |
//!
//! `page_title` lives on [`RenderContext`]; the `checkbox_or_radio` and
//! `smart_date` filters live in [`crate::filters`].

use askama::Template;

use crate::context::RenderContext;
use crate::error::Result;
use crate::models::{Form, FormField, FormMethod, Message, WidgetKind};
use crate::templates::{
    CsrfInputTemplate, FieldLabelTemplate, RenderFieldTemplate, RenderFormTemplate,
    RenderMessagesTemplate, SelectOption, SubmitButtonTemplate, WidgetTemplate,
};

/// Arguments of `render_form`. Defaults: `post`, empty strings, CSRF on.
#[derive(Debug, Clone, Copy)]
pub struct FormRenderRequest<'a> {
    pub form: &'a Form,
    pub method: FormMethod,
    pub submit_text: &'a str,
    pub action: &'a str,
    pub class_name: &'a str,
    pub id: &'a str,
    pub no_csrf: bool,
}

impl<'a> FormRenderRequest<'a> {
    pub fn new(form: &'a Form) -> Self {
        Self {
            form,
            method: FormMethod::default(),
            submit_text: "",
            action: "",
            class_name: "",
            id: "",
            no_csrf: false,
        }
    }

    pub fn method(mut self, method: FormMethod) -> Self {
        self.method = method;
        self
    }

    pub fn submit_text(mut self, submit_text: &'a str) -> Self {
        self.submit_text = submit_text;
        self
    }

    pub fn action(mut self, action: &'a str) -> Self {
        self.action = action;
        self
    }

    pub fn class_name(mut self, class_name: &'a str) -> Self {
        self.class_name = class_name;
        self
    }

    pub fn id(mut self, id: &'a str) -> Self {
        self.id = id;
        self
    }

    pub fn no_csrf(mut self, no_csrf: bool) -> Self {
        self.no_csrf = no_csrf;
        self
    }
}

pub fn present_widget(field: &FormField) -> WidgetTemplate<'_> {
    let value = match field.widget {
        WidgetKind::CheckboxInput | WidgetKind::PasswordInput => None,
        WidgetKind::RadioInput => Some(field.radio_value()),
        _ => field.value(),
    };
    let options = if field.widget == WidgetKind::Select {
        let current = field.value();
        field
            .choices
            .iter()
            .map(|c| SelectOption {
                value: &c.value,
                label: &c.label,
                selected: current == Some(c.value.as_str()),
            })
            .collect()
    } else {
        Vec::new()
    };
    WidgetTemplate {
        field,
        input_type: field.widget.input_type(),
        value,
        max_length: field.max_length.filter(|_| field.widget.takes_max_length()),
        checked: field.is_checked(),
        is_select: field.widget == WidgetKind::Select,
        options,
    }
}

pub fn present_field(field: &FormField, no_fieldset: bool) -> RenderFieldTemplate<'_> {
    RenderFieldTemplate {
        field,
        label: FieldLabelTemplate { field },
        widget: present_widget(field),
        no_fieldset,
    }
}

pub fn present_form<'a>(ctx: &'a RenderContext, request: FormRenderRequest<'a>) -> RenderFormTemplate<'a> {
    let form = request.form;
    let csrf = ctx.csrf_token().map(|token| CsrfInputTemplate {
        name: ctx.csrf_field_name(),
        token: token.as_str(),
    });
    if csrf.is_none() && !request.no_csrf && !request.method.is_inner() {
        tracing::warn!("render_form: no CSRF token in render context, omitting hidden input");
    }
    RenderFormTemplate {
        form,
        method: request.method,
        submit_text: request.submit_text,
        action: request.action,
        class_name: request.class_name,
        id: request.id,
        no_csrf: request.no_csrf,
        top_errors: form.top_errors(),
        visible_fields: form.visible_fields().map(|f| present_field(f, false)).collect(),
        hidden_fields: form.hidden_fields().map(present_widget).collect(),
        csrf,
        submit: SubmitButtonTemplate {
            text: request.submit_text,
            no_fieldset: false,
        },
    }
}

pub fn present_messages(messages: &[Message]) -> RenderMessagesTemplate<'_> {
    RenderMessagesTemplate { messages }
}

/// Whole form: fields in declaration order, hidden inputs, CSRF input and
/// submit button, wrapped in `<form>` unless the method is `inner`.
pub fn render_form(ctx: &RenderContext, request: FormRenderRequest<'_>) -> Result<String> {
    let view = present_form(ctx, request);
    tracing::debug!(
        method = %view.method,
        visible = view.visible_fields.len(),
        hidden = view.hidden_fields.len(),
        "render_form"
    );
    Ok(view.render()?)
}

/// One field: label, input, help text and errors, in a `<fieldset>`
/// unless `no_fieldset`.
pub fn render_field(field: &FormField, no_fieldset: bool) -> Result<String> {
    tracing::trace!(field = %field.name, no_fieldset, "render_field");
    Ok(present_field(field, no_fieldset).render()?)
}

/// Label with a required marker.
pub fn field_label(field: &FormField) -> Result<String> {
    Ok(FieldLabelTemplate { field }.render()?)
}

pub fn submit_button(text: &str, no_fieldset: bool) -> Result<String> {
    Ok(SubmitButtonTemplate { text, no_fieldset }.render()?)
}

/// `<ul class="messages">`, or nothing at all for an empty list.
pub fn render_messages(messages: &[Message]) -> Result<String> {
    tracing::trace!(count = messages.len(), "render_messages");
    Ok(present_messages(messages).render()?)
}

/// Write the page title for the rest of the pass and return it.
pub fn page_title(ctx: &RenderContext, title: &str) -> String {
    ctx.page_title(title)
}
