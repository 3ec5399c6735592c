//! Template tags for server-rendered HTML: forms, single fields, submit
//! buttons, flash messages, human readable dates and a page title that
//! any region of a page can set and the layout can read.
//!
//! Tags are compiled askama templates. [`tags`] builds and renders them,
//! [`filters`] exposes `checkbox_or_radio` and `smart_date` to your own
//! templates, and [`context::RenderContext`] carries per-render state.

pub mod config;
pub mod error;
pub mod locale;
pub mod humanize;
pub mod utils;
pub mod models;
pub mod csrf;
pub mod context;
pub mod filters;
pub mod templates;
pub mod tags;
pub mod handlers;
pub mod routes;

pub use context::{RenderContext, RenderPass};
pub use error::{Result, TagsError};
pub use locale::Locale;
pub use models::{Form, FormField, FormMethod, Level, Message, WidgetKind};
pub use tags::{
    field_label, page_title, render_field, render_form, render_messages, submit_button,
    FormRenderRequest,
};
