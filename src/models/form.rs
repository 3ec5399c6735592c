use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::FormField;

/// An ordered set of fields. Declaration order is rendering order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Form {
    pub fields: Vec<FormField>,
    pub non_field_errors: Vec<String>,
    bound: bool,
}

impl Form {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_field(mut self, field: FormField) -> Self {
        self.fields.push(field);
        self
    }

    pub fn field(&self, name: &str) -> Option<&FormField> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn visible_fields(&self) -> impl Iterator<Item = &FormField> {
        self.fields.iter().filter(|f| !f.is_hidden())
    }

    pub fn hidden_fields(&self) -> impl Iterator<Item = &FormField> {
        self.fields.iter().filter(|f| f.is_hidden())
    }

    pub fn is_bound(&self) -> bool {
        self.bound
    }

    /// Attach submitted data. Browsers omit unchecked checkboxes and
    /// unselected radios, so either one missing from `data` is bound as
    /// an empty value.
    pub fn bind(&mut self, data: &HashMap<String, String>) {
        for field in &mut self.fields {
            field.data = match data.get(&field.name) {
                Some(v) => Some(v.clone()),
                None if field.widget.is_checkbox_or_radio() => Some(String::new()),
                None => None,
            };
        }
        self.bound = true;
    }

    pub fn add_error(&mut self, error: impl Into<String>) {
        self.non_field_errors.push(error.into());
    }

    /// Errors shown above the fields: the form's own errors, then the
    /// errors of hidden fields, which have nowhere else to appear.
    pub fn top_errors(&self) -> Vec<String> {
        let mut errors = self.non_field_errors.clone();
        for field in self.hidden_fields() {
            errors.extend(
                field
                    .errors
                    .iter()
                    .map(|e| format!("(Hidden field {}) {}", field.name, e)),
            );
        }
        errors
    }

    pub fn has_non_field_errors(&self) -> bool {
        !self.non_field_errors.is_empty()
    }

    /// Validate every field; an unbound form is never valid.
    pub fn validate(&mut self) -> bool {
        if !self.bound {
            return false;
        }
        let mut ok = true;
        for field in &mut self.fields {
            ok &= field.validate();
        }
        ok && self.non_field_errors.is_empty()
    }

    pub fn is_valid(&self) -> bool {
        self.bound
            && self.non_field_errors.is_empty()
            && self.fields.iter().all(|f| !f.has_errors())
    }
}
