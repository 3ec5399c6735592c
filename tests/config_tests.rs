use common_tags::config;
use common_tags::context::RenderContext;
use common_tags::models::AppState;
use common_tags::Locale;
use once_cell::sync::Lazy;
use std::env;
use std::io::Write;
use std::sync::Mutex;

// Tests below mutate process-wide env vars.
static ENV_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

#[test]
fn test_sanitize_base_url_removes_trailing_slash() {
    assert_eq!(
        config::sanitize_base_url("https://example.com/app/"),
        "https://example.com/app"
    );
}

#[test]
fn test_sanitize_base_url_multiple_trailing_slashes() {
    assert_eq!(
        config::sanitize_base_url("https://example.com/app///"),
        "https://example.com/app"
    );
}

#[test]
fn test_sanitize_base_url_with_whitespace() {
    assert_eq!(
        config::sanitize_base_url("  https://example.com/app/  "),
        "https://example.com/app"
    );
}

#[test]
fn test_sanitize_base_url_empty_string() {
    assert_eq!(config::sanitize_base_url(""), "");
    assert_eq!(config::sanitize_base_url("   "), "");
    assert_eq!(config::sanitize_base_url("/"), "");
}

#[test]
fn test_public_base_url_defaults_to_root_relative() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    env::remove_var("PUBLIC_BASE_URL");
    assert_eq!(config::get_public_base_url(), "");
}

#[test]
fn test_csrf_field_name_default_and_override() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    env::remove_var("CSRF_FIELD_NAME");
    assert_eq!(config::get_csrf_field_name(), "csrfmiddlewaretoken");

    env::set_var("CSRF_FIELD_NAME", " _token ");
    assert_eq!(config::get_csrf_field_name(), "_token");

    env::set_var("CSRF_FIELD_NAME", "  ");
    assert_eq!(config::get_csrf_field_name(), "csrfmiddlewaretoken");
    env::remove_var("CSRF_FIELD_NAME");
}

#[test]
fn test_locale_code_default_and_override() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    env::remove_var("SMART_DATE_LOCALE");
    assert_eq!(config::get_locale_code(), "ru");

    env::set_var("SMART_DATE_LOCALE", "EN");
    assert_eq!(config::get_locale_code(), "en");
    env::remove_var("SMART_DATE_LOCALE");
}

#[test]
fn test_render_context_from_env() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    env::set_var("SMART_DATE_LOCALE", "en");
    env::set_var("CSRF_FIELD_NAME", "_csrf");

    let ctx = RenderContext::from_env().unwrap();
    assert_eq!(*ctx.locale(), Locale::EN);
    assert_eq!(ctx.csrf_field_name(), "_csrf");

    env::set_var("SMART_DATE_LOCALE", "xx");
    assert!(RenderContext::from_env().is_err());

    env::remove_var("SMART_DATE_LOCALE");
    env::remove_var("CSRF_FIELD_NAME");
}

#[test]
fn test_csrf_secret_unset_is_none() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    env::remove_var("CSRF_SECRET");
    assert_eq!(config::get_csrf_secret(), None);

    env::set_var("CSRF_SECRET", "s3cret");
    assert_eq!(config::get_csrf_secret().as_deref(), Some("s3cret"));
    env::remove_var("CSRF_SECRET");
}

#[test]
fn test_load_env_file() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    env::remove_var("CSRF_SECRET");
    env::remove_var("PUBLIC_BASE_URL");

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("test.env");
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(file, "CSRF_SECRET=from-file").unwrap();
    writeln!(file, "PUBLIC_BASE_URL=https://demo.example.com/").unwrap();
    drop(file);

    config::load_env_file(path.to_str());
    assert_eq!(config::get_csrf_secret().as_deref(), Some("from-file"));

    let state = AppState::from_env().unwrap();
    assert_eq!(state.public_base_url, "https://demo.example.com");
    assert_eq!(*state.csrf_secret, "from-file");

    env::remove_var("CSRF_SECRET");
    env::remove_var("PUBLIC_BASE_URL");
}
