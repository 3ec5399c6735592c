//! Custom askama filters.
//!
//! Bring this module into scope next to a `#[derive(Template)]` struct
//! (`use common_tags::filters;`) to use the filters from its template:
//!
//! ```text
//! {% if field|checkbox_or_radio %}...{% endif %}
//! {{ created|smart_date|safe }}
//! {{ created|smart_date_in("en")|safe }}
//! ```
//!
//! `smart_date` produces markup (`15&nbsp;января`), hence `|safe`.

use crate::humanize::SmartDate;
use crate::locale::Locale;
use crate::models::{FormField, WidgetKind};

/// Anything that knows which widget it renders with.
pub trait HasWidget {
    fn widget_kind(&self) -> WidgetKind;
}

impl HasWidget for WidgetKind {
    fn widget_kind(&self) -> WidgetKind {
        *self
    }
}

impl HasWidget for FormField {
    fn widget_kind(&self) -> WidgetKind {
        self.widget
    }
}

impl<T: HasWidget + ?Sized> HasWidget for &T {
    fn widget_kind(&self) -> WidgetKind {
        (**self).widget_kind()
    }
}

/// True iff the field renders as a checkbox or a radio button.
pub fn checkbox_or_radio<F: HasWidget + ?Sized>(field: &F) -> askama::Result<bool> {
    Ok(field.widget_kind().is_checkbox_or_radio())
}

/// Human readable date in the default (Russian) locale, relative to now.
pub fn smart_date<D: SmartDate + ?Sized>(date: &D) -> askama::Result<String> {
    Ok(date.humanize_with(&Locale::default()))
}

/// `smart_date` with an explicit locale code.
pub fn smart_date_in<D: SmartDate + ?Sized>(date: &D, code: &str) -> askama::Result<String> {
    let locale = Locale::from_code(code).map_err(|e| e.into_askama())?;
    Ok(date.humanize_with(&locale))
}
