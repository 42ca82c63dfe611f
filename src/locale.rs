//! Locale catalog: week start and day/month labels for the supported locales.

use std::str::FromStr;

use chrono::Weekday;
use clap::ValueEnum;

use crate::types::CalendarError;

/// Supported locale, a closed set.
///
/// Adding a locale means adding a catalog entry here, not looking up
/// arbitrary tags at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum Locale {
    /// Russian: week starts on Monday.
    Ru,
    /// English: week starts on Sunday.
    En,
}

impl FromStr for Locale {
    type Err = CalendarError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag {
            "ru" => Ok(Locale::Ru),
            "en" => Ok(Locale::En),
            _ => Err(CalendarError::UnsupportedLocale(tag.to_string())),
        }
    }
}

/// Label and week-start data for one locale.
///
/// `day_labels` is indexed by days from Sunday (0 = Sunday), independent of
/// the locale's week start. Array lengths enforce the 7-day/12-month shape.
pub struct LocaleMetadata {
    pub week_start: Weekday,
    pub day_labels: [&'static str; 7],
    pub month_labels: [&'static str; 12],
}

impl LocaleMetadata {
    /// Label for a weekday, regardless of week start.
    pub fn day_label(&self, weekday: Weekday) -> &'static str {
        self.day_labels[weekday.num_days_from_sunday() as usize]
    }

    /// Label for a month (1-12).
    pub fn month_label(&self, month: u32) -> &'static str {
        self.month_labels[(month - 1) as usize]
    }

    /// The seven weekdays in display order, starting from `week_start`.
    pub fn weekday_order(&self) -> [Weekday; 7] {
        let mut order = [self.week_start; 7];
        let mut weekday = self.week_start;
        for slot in order.iter_mut() {
            *slot = weekday;
            weekday = weekday.succ();
        }
        order
    }
}

static RU: LocaleMetadata = LocaleMetadata {
    week_start: Weekday::Mon,
    day_labels: ["Вс", "Пн", "Вт", "Ср", "Чт", "Пт", "Сб"],
    month_labels: [
        "Январь",
        "Февраль",
        "Март",
        "Апрель",
        "Май",
        "Июнь",
        "Июль",
        "Август",
        "Сентябрь",
        "Октябрь",
        "Ноябрь",
        "Декабрь",
    ],
};

static EN: LocaleMetadata = LocaleMetadata {
    week_start: Weekday::Sun,
    day_labels: ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"],
    month_labels: [
        "January",
        "February",
        "March",
        "April",
        "May",
        "June",
        "July",
        "August",
        "September",
        "October",
        "November",
        "December",
    ],
};

/// Resolve the metadata for a locale. Total over the enumerated set.
pub fn lookup(locale: Locale) -> &'static LocaleMetadata {
    match locale {
        Locale::Ru => &RU,
        Locale::En => &EN,
    }
}
