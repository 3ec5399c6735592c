use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TagsError;

/// How `render_form` wraps the fields.
///
/// `Inner` renders the fields only: no `<form>` tag, no submit button and
/// no CSRF input, for forms nested inside another form's markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormMethod {
    Get,
    #[default]
    Post,
    Inner,
}

impl FormMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            FormMethod::Get => "get",
            FormMethod::Post => "post",
            FormMethod::Inner => "inner",
        }
    }

    pub fn is_inner(self) -> bool {
        self == FormMethod::Inner
    }
}

impl fmt::Display for FormMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FormMethod {
    type Err = TagsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "get" => Ok(FormMethod::Get),
            "post" => Ok(FormMethod::Post),
            "inner" => Ok(FormMethod::Inner),
            other => Err(TagsError::InvalidMethod(other.to_string())),
        }
    }
}
