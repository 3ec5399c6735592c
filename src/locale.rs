use crate::error::{Result, TagsError};

/// Literals `humanize` needs for one language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Locale {
    pub code: &'static str,
    pub yesterday: &'static str,
    /// Month names in the form used after a day number ("15 января").
    pub months: [&'static str; 12],
}

impl Locale {
    pub const RU: Locale = Locale {
        code: "ru",
        yesterday: "Вчера",
        months: [
            "января", "февраля", "марта", "апреля", "мая", "июня",
            "июля", "августа", "сентября", "октября", "ноября", "декабря",
        ],
    };

    pub const EN: Locale = Locale {
        code: "en",
        yesterday: "Yesterday",
        months: [
            "January", "February", "March", "April", "May", "June",
            "July", "August", "September", "October", "November", "December",
        ],
    };

    pub fn from_code(code: &str) -> Result<Locale> {
        match code.trim().to_lowercase().as_str() {
            "ru" => Ok(Locale::RU),
            "en" => Ok(Locale::EN),
            other => Err(TagsError::UnknownLocale(other.to_string())),
        }
    }

    /// `month` is 1-based, as returned by `chrono::Datelike::month`.
    pub fn month(&self, month: u32) -> &'static str {
        self.months[(month.clamp(1, 12) - 1) as usize]
    }
}

impl Default for Locale {
    fn default() -> Self {
        Locale::RU
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code_known() {
        assert_eq!(Locale::from_code("ru").unwrap(), Locale::RU);
        assert_eq!(Locale::from_code(" EN ").unwrap(), Locale::EN);
    }

    #[test]
    fn test_from_code_unknown() {
        assert!(matches!(Locale::from_code("de"), Err(TagsError::UnknownLocale(c)) if c == "de"));
    }

    #[test]
    fn test_month_lookup() {
        assert_eq!(Locale::RU.month(1), "января");
        assert_eq!(Locale::RU.month(12), "декабря");
        assert_eq!(Locale::EN.month(3), "March");
    }

    #[test]
    fn test_default_is_russian() {
        assert_eq!(Locale::default().yesterday, "Вчера");
    }
}
