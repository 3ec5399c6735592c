use std::env;
use std::path::Path;

// Default configuration constants
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_PUBLIC_BASE_URL: &str = "";
pub const DEFAULT_CSRF_FIELD_NAME: &str = "csrfmiddlewaretoken";
pub const DEFAULT_LOCALE: &str = "ru";
pub const SESSION_COOKIE_NAME: &str = "session_id";

pub fn load_env_file(env_file: Option<&str>) {
    if let Some(path) = env_file {
        dotenvy::from_path(Path::new(path)).ok();
    } else {
        dotenvy::dotenv().ok();
    }
}

pub fn get_public_base_url() -> String {
    sanitize_base_url(&env::var("PUBLIC_BASE_URL").unwrap_or_else(|_| DEFAULT_PUBLIC_BASE_URL.to_string()))
}

/// Name of the hidden input carrying the CSRF token.
pub fn get_csrf_field_name() -> String {
    match env::var("CSRF_FIELD_NAME") {
        Ok(v) if !v.trim().is_empty() => v.trim().to_string(),
        _ => DEFAULT_CSRF_FIELD_NAME.to_string(),
    }
}

/// Locale code used by `smart_date` when rendering through a context.
pub fn get_locale_code() -> String {
    match env::var("SMART_DATE_LOCALE") {
        Ok(v) if !v.trim().is_empty() => v.trim().to_lowercase(),
        _ => DEFAULT_LOCALE.to_string(),
    }
}

/// Secret mixed into per-session CSRF tokens. `None` when unset, in which
/// case the server generates a random one at startup.
pub fn get_csrf_secret() -> Option<String> {
    env::var("CSRF_SECRET")
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Strips whitespace and trailing slashes. An empty base keeps asset links
/// root-relative, so they follow whatever host and port the server binds.
pub fn sanitize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}
