use serde::{Deserialize, Serialize};

/// The control a field renders as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WidgetKind {
    TextInput,
    PasswordInput,
    EmailInput,
    NumberInput,
    HiddenInput,
    Textarea,
    Select,
    CheckboxInput,
    RadioInput,
}

impl WidgetKind {
    /// Boolean-style controls get the inline label layout.
    pub fn is_checkbox_or_radio(self) -> bool {
        self == WidgetKind::CheckboxInput || self == WidgetKind::RadioInput
    }

    pub fn is_hidden(self) -> bool {
        self == WidgetKind::HiddenInput
    }

    /// Text-like inputs carry a `maxlength` attribute.
    pub fn takes_max_length(self) -> bool {
        matches!(
            self,
            WidgetKind::TextInput | WidgetKind::PasswordInput | WidgetKind::EmailInput
        )
    }

    /// `type` attribute for widgets rendered as `<input>`; `None` otherwise.
    pub fn input_type(self) -> Option<&'static str> {
        match self {
            WidgetKind::TextInput => Some("text"),
            WidgetKind::PasswordInput => Some("password"),
            WidgetKind::EmailInput => Some("email"),
            WidgetKind::NumberInput => Some("number"),
            WidgetKind::HiddenInput => Some("hidden"),
            WidgetKind::CheckboxInput => Some("checkbox"),
            WidgetKind::RadioInput => Some("radio"),
            WidgetKind::Textarea | WidgetKind::Select => None,
        }
    }
}
