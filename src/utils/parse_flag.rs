/// Parse a boolean flag from an optional string value
pub fn parse_flag(value: Option<&str>, default: bool) -> bool {
    match value {
        Some(v) => {
            let t = v.trim().to_lowercase();
            if t.is_empty() {
                default
            } else {
                is_truthy(&t)
            }
        }
        None => default,
    }
}

/// True for the values browsers and query strings use to mean "checked".
pub fn is_truthy(value: &str) -> bool {
    matches!(value.trim().to_lowercase().as_str(), "1" | "true" | "yes" | "on")
}
