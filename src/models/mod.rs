pub mod widget;
pub mod choice;
pub mod form_field;
pub mod form;
pub mod form_method;
pub mod message;
pub mod flash_store;
pub mod app_state;

pub use widget::WidgetKind;
pub use choice::Choice;
pub use form_field::FormField;
pub use form::Form;
pub use form_method::FormMethod;
pub use message::{Level, Message};
pub use flash_store::FlashStore;
pub use app_state::AppState;
