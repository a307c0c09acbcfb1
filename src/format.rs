//! Display Formatting
//!
//! Prices, dates and Russian relative times.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

const NBSP: char = '\u{a0}';

/// `2499` -> `"2 499 ₽"` (grouped with non-breaking spaces)
pub fn format_price(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(NBSP);
        }
        grouped.push(ch);
    }
    let sign = if amount < 0 { "-" } else { "" };
    format!("{}{}{}₽", sign, grouped, NBSP)
}

/// Parse backend timestamps: RFC 3339, `YYYY-MM-DD HH:MM:SS[.f]` (UTC) or a bare date
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// `dd.mm.yyyy`, or the raw string when it cannot be parsed
pub fn format_date(raw: &str) -> String {
    parse_timestamp(raw)
        .map(|dt| dt.format("%d.%m.%Y").to_string())
        .unwrap_or_else(|| raw.to_string())
}

/// Russian plural form: 1 минуту / 2 минуты / 5 минут
pub fn plural_ru<'a>(n: i64, one: &'a str, few: &'a str, many: &'a str) -> &'a str {
    let n = n.abs();
    let (last, last_two) = (n % 10, n % 100);
    if last == 1 && last_two != 11 {
        one
    } else if (2..=4).contains(&last) && !(12..=14).contains(&last_two) {
        few
    } else {
        many
    }
}

/// "5 минут назад" style phrase relative to `now`
pub fn relative_time(raw: &str, now: DateTime<Utc>) -> String {
    let Some(then) = parse_timestamp(raw) else {
        return raw.to_string();
    };
    let secs = (now - then).num_seconds();
    if secs < 60 {
        return "только что".to_string();
    }
    let minutes = secs / 60;
    if minutes < 60 {
        return format!("{} {} назад", minutes, plural_ru(minutes, "минуту", "минуты", "минут"));
    }
    let hours = minutes / 60;
    if hours < 24 {
        return format!("{} {} назад", hours, plural_ru(hours, "час", "часа", "часов"));
    }
    let days = hours / 24;
    if days <= 7 {
        return format!("{} {} назад", days, plural_ru(days, "день", "дня", "дней"));
    }
    then.format("%d.%m.%Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(0), "0\u{a0}₽");
        assert_eq!(format_price(899), "899\u{a0}₽");
        assert_eq!(format_price(2499), "2\u{a0}499\u{a0}₽");
        assert_eq!(format_price(1234567), "1\u{a0}234\u{a0}567\u{a0}₽");
        assert_eq!(format_price(-100), "-100\u{a0}₽");
    }

    #[test]
    fn test_format_date_variants() {
        assert_eq!(format_date("2024-11-05"), "05.11.2024");
        assert_eq!(format_date("2024-11-05 14:30:00"), "05.11.2024");
        assert_eq!(format_date("2024-11-05 14:30:00.123456"), "05.11.2024");
        assert_eq!(format_date("2024-11-05T14:30:00+00:00"), "05.11.2024");
        assert_eq!(format_date("yesterday"), "yesterday");
    }

    #[test]
    fn test_plural_ru() {
        let forms = |n| plural_ru(n, "минуту", "минуты", "минут");
        assert_eq!(forms(1), "минуту");
        assert_eq!(forms(21), "минуту");
        assert_eq!(forms(2), "минуты");
        assert_eq!(forms(24), "минуты");
        assert_eq!(forms(5), "минут");
        assert_eq!(forms(11), "минут");
        assert_eq!(forms(12), "минут");
        assert_eq!(forms(111), "минут");
    }

    #[test]
    fn test_relative_time() {
        let now = Utc.with_ymd_and_hms(2024, 11, 10, 12, 0, 0).unwrap();
        assert_eq!(relative_time("2024-11-10 11:59:30", now), "только что");
        assert_eq!(relative_time("2024-11-10 11:55:00", now), "5 минут назад");
        assert_eq!(relative_time("2024-11-10 11:00:00", now), "1 час назад");
        assert_eq!(relative_time("2024-11-10 09:00:00", now), "3 часа назад");
        assert_eq!(relative_time("2024-11-08 12:00:00", now), "2 дня назад");
        assert_eq!(relative_time("2024-10-01 12:00:00", now), "01.10.2024");
        assert_eq!(relative_time("garbage", now), "garbage");
    }
}
