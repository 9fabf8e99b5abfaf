//! Document date in the institute's time zone, written out in Portuguese

use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, Offset, Utc};

const MONTHS: [&str; 12] = [
    "janeiro",
    "fevereiro",
    "março",
    "abril",
    "maio",
    "junho",
    "julho",
    "agosto",
    "setembro",
    "outubro",
    "novembro",
    "dezembro",
];

/// Brasília time; no daylight saving since 2019
const DEFAULT_OFFSET_SECS: i32 = -3 * 3600;

/// Fixed offset for `hours`, falling back to Brasília time when out of range
pub fn offset_from_hours(hours: i32) -> FixedOffset {
    FixedOffset::east_opt(hours.saturating_mul(3600))
        .or_else(|| FixedOffset::east_opt(DEFAULT_OFFSET_SECS))
        .unwrap_or_else(|| Utc.fix())
}

/// Current time at the given UTC offset
pub fn now_at_offset(hours: i32) -> DateTime<FixedOffset> {
    Utc::now().with_timezone(&offset_from_hours(hours))
}

/// `19 de outubro de 2026`; the first day of a month is written `1º`
pub fn long_date(date: NaiveDate) -> String {
    let month = MONTHS[date.month0() as usize];
    if date.day() == 1 {
        format!("1º de {} de {}", month, date.year())
    } else {
        format!("{} de {} de {}", date.day(), month, date.year())
    }
}
