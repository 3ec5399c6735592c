use std::collections::HashMap;

use askama::Template;
use axum::{
    extract::{Form as FormData, State},
    http::{header, StatusCode},
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::CookieJar;

use crate::context::RenderContext;
use crate::error::Result;
use crate::models::{AppState, Choice, Form, FormField, Message, WidgetKind};
use crate::tags::{present_form, present_messages, FormRenderRequest};
use crate::templates::SignupPageTemplate;

use super::helpers::{ensure_session, into_html_response, plain_html, render_page, take_flash_messages};

const DEFAULT_STYLESHEET: &str = include_str!("../../static/styles.css");

/// The demo form: one field of each presentation shape.
pub fn signup_form() -> Form {
    Form::new()
        .with_field(
            FormField::text("name")
                .with_label("Your name")
                .with_help_text("Real name, please")
                .with_max_length(20),
        )
        .with_field(FormField::new("email", WidgetKind::EmailInput))
        .with_field(
            FormField::new("age", WidgetKind::NumberInput)
                .with_label("Your age")
                .with_initial("10")
                .optional(),
        )
        .with_field(
            FormField::new("plan", WidgetKind::Select)
                .with_choices(vec![Choice::new("free", "Free"), Choice::new("pro", "Pro")])
                .with_initial("free"),
        )
        .with_field(FormField::new("about", WidgetKind::Textarea).optional())
        .with_field(FormField::checkbox("agreed").with_label("I am agreed"))
        .with_field(FormField::hidden("source").with_initial("demo").optional())
}

/// Full signup page for one render pass.
pub fn render_signup_page(
    state: &AppState,
    ctx: RenderContext,
    form: &Form,
    messages: &[Message],
) -> Result<String> {
    render_page(state, ctx, |ctx| {
        SignupPageTemplate {
            ctx,
            messages: present_messages(messages),
            form: present_form(ctx, FormRenderRequest::new(form).submit_text("Sign up").id("signup")),
            updated: state.started_at,
        }
        .render()
    })
}

pub async fn signup_get(State(state): State<AppState>, jar: CookieJar) -> Response {
    let (jar, sid) = ensure_session(jar);
    let messages = take_flash_messages(&state, &sid);
    let ctx = state.render_context(&sid);
    let page = render_signup_page(&state, ctx, &signup_form(), &messages);
    (jar, into_html_response(page)).into_response()
}

pub async fn signup_post(
    State(state): State<AppState>,
    jar: CookieJar,
    FormData(data): FormData<HashMap<String, String>>,
) -> Response {
    let (jar, sid) = ensure_session(jar);
    let submitted = data.get(&state.csrf_field_name).map(String::as_str).unwrap_or("");
    if !state.csrf_token_for(&sid).verify(submitted) {
        tracing::warn!(session = %sid, "CSRF verification failed");
        return (StatusCode::FORBIDDEN, jar, plain_html("CSRF verification failed.")).into_response();
    }

    let mut form = signup_form();
    form.bind(&data);
    if form.validate() {
        let name = form.field("name").and_then(|f| f.value()).unwrap_or("").to_string();
        tracing::info!(%name, "Signup accepted");
        state.flash_store.push(&sid, Message::success(format!("Welcome, {}!", name)));
        return (jar, Redirect::to("/")).into_response();
    }

    tracing::info!("Signup rejected with validation errors");
    let messages = vec![Message::error("Please correct the errors below.")];
    let ctx = state.render_context(&sid);
    let page = render_signup_page(&state, ctx, &form, &messages);
    (jar, into_html_response(page)).into_response()
}

pub async fn stylesheet_get() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css")], DEFAULT_STYLESHEET)
}
