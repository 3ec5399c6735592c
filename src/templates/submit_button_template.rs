use askama::Template;

#[derive(Template, Clone, Copy)]
#[template(path = "common_tags/submit_button.html")]
pub struct SubmitButtonTemplate<'a> {
    pub text: &'a str,
    pub no_fieldset: bool,
}
