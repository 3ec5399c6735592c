pub mod helpers;
pub mod signup;

pub use signup::{signup_get, signup_post, stylesheet_get};
