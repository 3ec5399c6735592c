use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use hex::encode as hex_encode;
use rand::RngCore;

use crate::config::SESSION_COOKIE_NAME;
use crate::context::{RenderContext, RenderPass};
use crate::error::Result;
use crate::models::{AppState, Message};
use crate::templates::PageLayoutTemplate;

pub fn random_session_id() -> String {
    let mut b = [0u8; 16];
    rand::rngs::OsRng.fill_bytes(&mut b);
    hex_encode(b)
}

pub fn session_id_from_jar(jar: &CookieJar) -> Option<String> {
    jar.get(SESSION_COOKIE_NAME).map(|c| c.value().to_string())
}

/// Existing session id, or a new one with its cookie added to the jar.
pub fn ensure_session(jar: CookieJar) -> (CookieJar, String) {
    if let Some(sid) = session_id_from_jar(&jar) {
        return (jar, sid);
    }
    let sid = random_session_id();
    let mut cookie = Cookie::new(SESSION_COOKIE_NAME, sid.clone());
    cookie.set_path("/");
    cookie.set_http_only(true);
    (jar.add(cookie), sid)
}

pub fn take_flash_messages(state: &AppState, session_id: &str) -> Vec<Message> {
    state.flash_store.take(session_id)
}

pub fn plain_html<S: AsRef<str>>(s: S) -> Response {
    Html(format!("<!DOCTYPE html><html><body><p>{}</p></body></html>", s.as_ref())).into_response()
}

/// Render `body` as the page's body region, then the layout around it.
pub fn render_page<F>(state: &AppState, ctx: RenderContext, body: F) -> Result<String>
where
    F: FnOnce(&RenderContext) -> askama::Result<String>,
{
    let mut pass = RenderPass::new(ctx);
    pass.region("body", body)?;
    pass.finish(|ctx, regions| {
        askama::Template::render(&PageLayoutTemplate {
            ctx,
            regions,
            base_url: &state.public_base_url,
        })
    })
}

pub fn into_html_response(rendered: Result<String>) -> Response {
    match rendered {
        Ok(body) => Html(body).into_response(),
        Err(e) => {
            tracing::error!(%e, "Template render error");
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
        }
    }
}
