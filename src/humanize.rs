//! Human readable dates relative to "now".
//!
//! Output is markup: the current-year form joins day and month with a
//! literal `&nbsp;` entity, so templates must print it with `|safe`.

use chrono::{DateTime, Datelike, Local, NaiveDateTime, TimeZone, Utc};

use crate::locale::Locale;

/// Format `date` relative to `now`.
///
/// First match wins:
/// - same calendar day: `HH:MM`
/// - the day before `now`: the locale's "yesterday"
/// - same year: `<day>&nbsp;<month>`
/// - otherwise: `DD.MM.YYYY`
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use common_tags::humanize::humanize;
/// use common_tags::locale::Locale;
///
/// let now = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap().and_hms_opt(12, 0, 0).unwrap();
/// let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap().and_hms_opt(8, 30, 0).unwrap();
/// assert_eq!(humanize(date, now, &Locale::RU), "5&nbsp;января");
/// ```
pub fn humanize(date: NaiveDateTime, now: NaiveDateTime, locale: &Locale) -> String {
    let day = date.date();
    let today = now.date();
    if day == today {
        return date.format("%H:%M").to_string();
    }
    if today.pred_opt() == Some(day) {
        return locale.yesterday.to_string();
    }
    if date.year() == now.year() {
        return format!("{}&nbsp;{}", date.day(), locale.month(date.month()));
    }
    date.format("%d.%m.%Y").to_string()
}

/// Values the `smart_date` filter accepts.
///
/// Each implementation pairs the wall-clock reading of the value with
/// "now" observed in the same zone.
pub trait SmartDate {
    fn wall_clock(&self) -> NaiveDateTime;
    fn now_in_zone(&self) -> NaiveDateTime;

    fn humanize_with(&self, locale: &Locale) -> String {
        humanize(self.wall_clock(), self.now_in_zone(), locale)
    }
}

impl SmartDate for NaiveDateTime {
    fn wall_clock(&self) -> NaiveDateTime {
        *self
    }

    fn now_in_zone(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

impl<Tz: TimeZone> SmartDate for DateTime<Tz> {
    fn wall_clock(&self) -> NaiveDateTime {
        self.naive_local()
    }

    fn now_in_zone(&self) -> NaiveDateTime {
        Utc::now().with_timezone(&self.timezone()).naive_local()
    }
}

impl<T: SmartDate + ?Sized> SmartDate for &T {
    fn wall_clock(&self) -> NaiveDateTime {
        (**self).wall_clock()
    }

    fn now_in_zone(&self) -> NaiveDateTime {
        (**self).now_in_zone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(h, min, 0).unwrap()
    }

    #[test]
    fn test_same_day_gives_time() {
        let now = at(2024, 6, 10, 18, 45);
        assert_eq!(humanize(at(2024, 6, 10, 7, 5), now, &Locale::RU), "07:05");
        assert_eq!(humanize(now, now, &Locale::RU), "18:45");
    }

    #[test]
    fn test_yesterday() {
        let now = at(2024, 6, 10, 0, 1);
        assert_eq!(humanize(at(2024, 6, 9, 23, 59), now, &Locale::RU), "Вчера");
        assert_eq!(humanize(now - Duration::days(1), now, &Locale::EN), "Yesterday");
    }

    #[test]
    fn test_yesterday_across_year_boundary() {
        let now = at(2024, 1, 1, 9, 0);
        assert_eq!(humanize(at(2023, 12, 31, 9, 0), now, &Locale::RU), "Вчера");
    }

    #[test]
    fn test_same_year_day_and_month() {
        let now = at(2024, 6, 10, 12, 0);
        assert_eq!(humanize(at(2024, 1, 15, 12, 0), now, &Locale::RU), "15&nbsp;января");
        assert_eq!(humanize(at(2024, 3, 1, 12, 0), now, &Locale::RU), "1&nbsp;марта");
        assert_eq!(humanize(at(2024, 12, 31, 12, 0), now, &Locale::EN), "31&nbsp;December");
    }

    #[test]
    fn test_previous_year_full_date() {
        let now = at(2024, 6, 10, 12, 0);
        assert_eq!(humanize(at(2023, 6, 10, 12, 0), now, &Locale::RU), "10.06.2023");
        assert_eq!(humanize(at(2019, 2, 3, 12, 0), now, &Locale::RU), "03.02.2019");
    }

    #[test]
    fn test_two_days_ago_same_year() {
        let now = at(2024, 6, 10, 12, 0);
        assert_eq!(humanize(at(2024, 6, 8, 12, 0), now, &Locale::RU), "8&nbsp;июня");
    }

    #[test]
    fn test_smart_date_trait_on_current_time() {
        let now = Local::now().naive_local();
        assert_eq!(now.humanize_with(&Locale::RU), now.format("%H:%M").to_string());
        let utc_now = Utc::now();
        assert_eq!(utc_now.humanize_with(&Locale::RU), utc_now.format("%H:%M").to_string());
    }
}
