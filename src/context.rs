//! Per-render state shared by every region of one page.
//!
//! A [`RenderContext`] lives for exactly one render pass. It owns the
//! page-title slot that `page_title` writes and the layout reads, the CSRF
//! token forms embed, and the locale `smart_date` uses. It is not `Sync`:
//! concurrent requests each build their own.

use std::cell::RefCell;

use crate::config;
use crate::csrf::CsrfToken;
use crate::error::Result;
use crate::humanize::SmartDate;
use crate::locale::Locale;

#[derive(Debug)]
pub struct RenderContext {
    title: RefCell<Option<String>>,
    csrf_token: Option<CsrfToken>,
    csrf_field_name: String,
    locale: Locale,
}

impl Default for RenderContext {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderContext {
    pub fn new() -> Self {
        Self {
            title: RefCell::new(None),
            csrf_token: None,
            csrf_field_name: config::DEFAULT_CSRF_FIELD_NAME.to_string(),
            locale: Locale::default(),
        }
    }

    /// Context configured from `CSRF_FIELD_NAME` and `SMART_DATE_LOCALE`.
    pub fn from_env() -> Result<Self> {
        Ok(Self::new()
            .with_csrf_field_name(config::get_csrf_field_name())
            .with_locale(Locale::from_code(&config::get_locale_code())?))
    }

    pub fn with_csrf_token(mut self, token: CsrfToken) -> Self {
        self.csrf_token = Some(token);
        self
    }

    pub fn with_csrf_field_name(mut self, name: impl Into<String>) -> Self {
        self.csrf_field_name = name.into();
        self
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    pub fn csrf_token(&self) -> Option<&CsrfToken> {
        self.csrf_token.as_ref()
    }

    pub fn csrf_field_name(&self) -> &str {
        &self.csrf_field_name
    }

    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    /// Store `title` for the rest of the pass and hand it back so the
    /// call site can print it too. Last write wins.
    pub fn page_title<S: AsRef<str>>(&self, title: S) -> String {
        let title = title.as_ref().to_string();
        tracing::trace!(%title, "page title set");
        *self.title.borrow_mut() = Some(title.clone());
        title
    }

    /// The stored title, or an empty string when nothing set it.
    pub fn title(&self) -> String {
        self.current_title().unwrap_or_default()
    }

    pub fn current_title(&self) -> Option<String> {
        self.title.borrow().clone()
    }

    /// `smart_date` in this context's locale. Returns markup.
    pub fn smart_date<D: SmartDate + ?Sized>(&self, date: &D) -> String {
        date.humanize_with(&self.locale)
    }
}

/// Rendered regions of a page, by name.
#[derive(Debug, Default)]
pub struct Regions {
    rendered: Vec<(String, String)>,
}

impl Regions {
    /// Markup of region `name`; empty if it was never rendered.
    pub fn get(&self, name: &str) -> &str {
        self.rendered
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, html)| html.as_str())
            .unwrap_or("")
    }

    pub fn len(&self) -> usize {
        self.rendered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rendered.is_empty()
    }

    fn insert(&mut self, name: &str, html: String) {
        match self.rendered.iter_mut().find(|(n, _)| n == name) {
            Some(slot) => slot.1 = html,
            None => self.rendered.push((name.to_string(), html)),
        }
    }
}

/// One page render: regions are evaluated first, in the order given, and
/// the layout last. Anything a region writes into the context (the page
/// title) is therefore visible everywhere in the layout, including parts
/// that come before the region textually.
///
/// # Examples
///
/// ```
/// use common_tags::context::{RenderContext, RenderPass};
///
/// let mut pass = RenderPass::new(RenderContext::new());
/// pass.region("body", |ctx| Ok(format!("<h1>{}</h1>", ctx.page_title("Home"))))
///     .unwrap();
/// let html = pass
///     .finish(|ctx, regions| Ok(format!("<title>{}</title>{}", ctx.title(), regions.get("body"))))
///     .unwrap();
/// assert_eq!(html, "<title>Home</title><h1>Home</h1>");
/// ```
#[derive(Debug)]
pub struct RenderPass {
    ctx: RenderContext,
    regions: Regions,
}

impl RenderPass {
    pub fn new(ctx: RenderContext) -> Self {
        Self {
            ctx,
            regions: Regions::default(),
        }
    }

    pub fn context(&self) -> &RenderContext {
        &self.ctx
    }

    /// Render one region now. Rendering a name twice replaces the first result.
    pub fn region<F>(&mut self, name: &str, render: F) -> Result<&mut Self>
    where
        F: FnOnce(&RenderContext) -> askama::Result<String>,
    {
        let html = render(&self.ctx)?;
        tracing::trace!(region = name, bytes = html.len(), "region rendered");
        self.regions.insert(name, html);
        Ok(self)
    }

    /// Render the layout against the finished regions and end the pass.
    pub fn finish<F>(self, layout: F) -> Result<String>
    where
        F: FnOnce(&RenderContext, &Regions) -> askama::Result<String>,
    {
        let html = layout(&self.ctx, &self.regions)?;
        tracing::debug!(
            regions = self.regions.len(),
            title = ?self.ctx.current_title(),
            "render pass finished"
        );
        Ok(html)
    }
}
