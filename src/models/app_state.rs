use std::sync::Arc;

use chrono::{Local, NaiveDateTime};

use crate::config;
use crate::context::RenderContext;
use crate::csrf::CsrfToken;
use crate::error::{Result, TagsError};
use crate::locale::Locale;
use crate::models::FlashStore;

/// Shared state of the demo server.
#[derive(Clone, Debug)]
pub struct AppState {
    pub flash_store: FlashStore,
    pub csrf_secret: Arc<String>,
    pub csrf_field_name: String,
    pub locale: Locale,
    pub public_base_url: String,
    pub started_at: NaiveDateTime,
}

impl AppState {
    pub fn new(csrf_secret: impl Into<String>) -> Self {
        Self {
            flash_store: FlashStore::new(),
            csrf_secret: Arc::new(csrf_secret.into()),
            csrf_field_name: config::DEFAULT_CSRF_FIELD_NAME.to_string(),
            locale: Locale::default(),
            public_base_url: String::new(),
            started_at: Local::now().naive_local(),
        }
    }

    /// State configured from the environment. Without `CSRF_SECRET` a
    /// random secret is used, so tokens do not survive a restart.
    pub fn from_env() -> Result<Self> {
        let secret = match config::get_csrf_secret() {
            Some(secret) => secret,
            None => {
                tracing::warn!("CSRF_SECRET not set, using a random secret");
                CsrfToken::generate().as_str().to_string()
            }
        };
        let csrf_field_name = config::get_csrf_field_name();
        if !is_valid_field_name(&csrf_field_name) {
            return Err(TagsError::Config(format!(
                "CSRF_FIELD_NAME must be letters, digits, '_' or '-': {:?}",
                csrf_field_name
            )));
        }
        let mut state = Self::new(secret);
        state.csrf_field_name = csrf_field_name;
        state.locale = Locale::from_code(&config::get_locale_code())?;
        state.public_base_url = config::get_public_base_url();
        Ok(state)
    }

    pub fn csrf_token_for(&self, session_id: &str) -> CsrfToken {
        CsrfToken::for_session(&self.csrf_secret, session_id)
    }

    /// Fresh context for one page render in `session_id`.
    pub fn render_context(&self, session_id: &str) -> RenderContext {
        RenderContext::new()
            .with_csrf_token(self.csrf_token_for(session_id))
            .with_csrf_field_name(self.csrf_field_name.clone())
            .with_locale(self.locale)
    }
}

fn is_valid_field_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}
