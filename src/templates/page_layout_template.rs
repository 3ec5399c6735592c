use askama::Template;

use crate::context::{Regions, RenderContext};

/// Outer page, rendered last in a [`RenderPass`](crate::context::RenderPass)
/// so `<title>` sees whatever a region passed to `page_title`.
#[derive(Template)]
#[template(path = "demo/layout.html")]
pub struct PageLayoutTemplate<'a> {
    pub ctx: &'a RenderContext,
    pub regions: &'a Regions,
    pub base_url: &'a str,
}
