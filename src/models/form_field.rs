use serde::{Deserialize, Serialize};

use crate::models::{Choice, WidgetKind};
use crate::utils::{parse_flag, pretty_name};

/// One field of a [`Form`](crate::models::Form): its declaration plus
/// whatever was bound to it from submitted data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormField {
    pub name: String,
    pub label: Option<String>,
    pub required: bool,
    pub widget: WidgetKind,
    pub help_text: Option<String>,
    pub max_length: Option<usize>,
    pub initial: Option<String>,
    pub choices: Vec<Choice>,
    /// Submitted value; `None` until the form is bound.
    pub data: Option<String>,
    pub errors: Vec<String>,
}

impl FormField {
    pub fn new(name: impl Into<String>, widget: WidgetKind) -> Self {
        Self {
            name: name.into(),
            label: None,
            required: true,
            widget,
            help_text: None,
            max_length: None,
            initial: None,
            choices: Vec::new(),
            data: None,
            errors: Vec::new(),
        }
    }

    pub fn text(name: impl Into<String>) -> Self {
        Self::new(name, WidgetKind::TextInput)
    }

    pub fn checkbox(name: impl Into<String>) -> Self {
        Self::new(name, WidgetKind::CheckboxInput)
    }

    pub fn hidden(name: impl Into<String>) -> Self {
        Self::new(name, WidgetKind::HiddenInput)
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_help_text(mut self, help_text: impl Into<String>) -> Self {
        self.help_text = Some(help_text.into());
        self
    }

    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }

    pub fn with_initial(mut self, initial: impl Into<String>) -> Self {
        self.initial = Some(initial.into());
        self
    }

    pub fn with_choices(mut self, choices: Vec<Choice>) -> Self {
        self.choices = choices;
        self
    }

    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    pub fn label_text(&self) -> String {
        match &self.label {
            Some(label) => label.clone(),
            None => pretty_name(&self.name),
        }
    }

    pub fn id_for_label(&self) -> String {
        format!("id_{}", self.name)
    }

    pub fn help_text(&self) -> Option<&str> {
        self.help_text.as_deref().filter(|h| !h.is_empty())
    }

    /// Bound data if present, otherwise the initial value.
    pub fn value(&self) -> Option<&str> {
        self.data.as_deref().or(self.initial.as_deref())
    }

    /// The `value` a radio input submits: its initial value, or `on`.
    pub fn radio_value(&self) -> &str {
        self.initial.as_deref().unwrap_or("on")
    }

    /// Checkboxes follow the truthiness of their value. A radio is checked
    /// when its bound data (or, unbound, its initial value) equals the
    /// value it submits.
    pub fn is_checked(&self) -> bool {
        match self.widget {
            WidgetKind::CheckboxInput => parse_flag(self.value(), false),
            WidgetKind::RadioInput => self.value() == Some(self.radio_value()),
            _ => false,
        }
    }

    pub fn is_hidden(&self) -> bool {
        self.widget.is_hidden()
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn add_error(&mut self, error: impl Into<String>) {
        self.errors.push(error.into());
    }

    /// Run the built-in checks against the bound data, replacing any
    /// previous errors. Returns `true` when the field is clean.
    pub fn validate(&mut self) -> bool {
        self.errors.clear();
        let raw = self.data.as_deref().unwrap_or("").trim().to_string();

        if self.widget == WidgetKind::CheckboxInput {
            if self.required && !parse_flag(Some(raw.as_str()), false) {
                self.add_error("This field is required.");
            }
            return self.errors.is_empty();
        }

        if raw.is_empty() {
            if self.required {
                self.add_error("This field is required.");
            }
            return self.errors.is_empty();
        }

        if let Some(max) = self.max_length {
            let len = raw.chars().count();
            if len > max {
                self.add_error(format!(
                    "Ensure this value has at most {} characters (it has {}).",
                    max, len
                ));
            }
        }

        match self.widget {
            WidgetKind::NumberInput if raw.parse::<f64>().is_err() => {
                self.add_error("Enter a number.");
            }
            WidgetKind::EmailInput if !looks_like_email(&raw) => {
                self.add_error("Enter a valid email address.");
            }
            WidgetKind::Select if !self.choices.iter().any(|c| c.value == raw) => {
                self.add_error(format!(
                    "Select a valid choice. {} is not one of the available choices.",
                    raw
                ));
            }
            _ => {}
        }
        self.errors.is_empty()
    }
}

fn looks_like_email(value: &str) -> bool {
    match value.split_once('@') {
        Some((local, domain)) => !local.is_empty() && domain.contains('.') && !domain.ends_with('.'),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_defaults_to_pretty_name() {
        let field = FormField::text("first_name");
        assert_eq!(field.label_text(), "First name");
        assert_eq!(field.with_label("Name").label_text(), "Name");
    }

    #[test]
    fn test_id_for_label() {
        assert_eq!(FormField::text("name").id_for_label(), "id_name");
    }

    #[test]
    fn test_value_prefers_data_over_initial() {
        let mut field = FormField::text("age").with_initial("10");
        assert_eq!(field.value(), Some("10"));
        field.data = Some("12".into());
        assert_eq!(field.value(), Some("12"));
    }

    #[test]
    fn test_empty_help_text_is_absent() {
        assert_eq!(FormField::text("a").with_help_text("").help_text(), None);
    }

    #[test]
    fn test_checked_only_for_boolean_widgets() {
        let mut checkbox = FormField::checkbox("agreed");
        checkbox.data = Some("on".into());
        assert!(checkbox.is_checked());

        let mut text = FormField::text("name");
        text.data = Some("on".into());
        assert!(!text.is_checked());
    }

    #[test]
    fn test_radio_checked_by_matching_value() {
        let mut radio = FormField::new("color", WidgetKind::RadioInput).with_initial("red");
        assert_eq!(radio.radio_value(), "red");
        assert!(radio.is_checked());
        radio.data = Some("red".into());
        assert!(radio.is_checked());
        radio.data = Some("blue".into());
        assert!(!radio.is_checked());
        radio.data = Some(String::new());
        assert!(!radio.is_checked());
    }

    #[test]
    fn test_radio_without_initial_submits_on() {
        let mut radio = FormField::new("subscribe", WidgetKind::RadioInput);
        assert_eq!(radio.radio_value(), "on");
        assert!(!radio.is_checked());
        radio.data = Some("on".into());
        assert!(radio.is_checked());
    }

    #[test]
    fn test_validate_required() {
        let mut field = FormField::text("name");
        assert!(!field.validate());
        assert_eq!(field.errors, vec!["This field is required."]);

        let mut optional = FormField::text("age").optional();
        assert!(optional.validate());
    }

    #[test]
    fn test_validate_required_checkbox() {
        let mut field = FormField::checkbox("agreed");
        field.data = Some("".into());
        assert!(!field.validate());
        field.data = Some("on".into());
        assert!(field.validate());
    }

    #[test]
    fn test_validate_max_length() {
        let mut field = FormField::text("name").with_max_length(3);
        field.data = Some("abcd".into());
        assert!(!field.validate());
        assert!(field.errors[0].contains("at most 3 characters (it has 4)"));
    }

    #[test]
    fn test_validate_number_and_email() {
        let mut age = FormField::new("age", WidgetKind::NumberInput);
        age.data = Some("ten".into());
        assert!(!age.validate());

        let mut email = FormField::new("email", WidgetKind::EmailInput);
        email.data = Some("someone@example.com".into());
        assert!(email.validate());
        email.data = Some("someone".into());
        assert!(!email.validate());
    }

    #[test]
    fn test_validate_select_choice() {
        let mut field = FormField::new("color", WidgetKind::Select)
            .with_choices(vec![Choice::new("r", "Red"), Choice::new("g", "Green")]);
        field.data = Some("g".into());
        assert!(field.validate());
        field.data = Some("b".into());
        assert!(!field.validate());
    }

    #[test]
    fn test_validate_clears_previous_errors() {
        let mut field = FormField::text("name");
        field.add_error("stale");
        field.data = Some("Bob".into());
        assert!(field.validate());
        assert!(!field.has_errors());
    }
}
