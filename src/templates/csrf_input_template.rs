use askama::Template;

#[derive(Template, Clone, Copy)]
#[template(path = "common_tags/csrf_input.html")]
pub struct CsrfInputTemplate<'a> {
    pub name: &'a str,
    pub token: &'a str,
}
