use chrono::NaiveDate;
use std::time::{Duration, UNIX_EPOCH};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const DATE_FORMAT_TODAY: &str = "Azi, %H:%M";
const DATE_FORMAT_YESTERDAY: &str = "Ieri, %H:%M";
const DATE_FORMAT_OTHER: &str = "%d.%m.%Y";

/// Cuts `s` to at most `max_width` terminal columns, ending in "...".
pub fn truncate_string(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    let budget = max_width.saturating_sub(3);
    let mut out = String::new();
    let mut width = 0;
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if width + w > budget {
            break;
        }
        out.push(ch);
        width += w;
    }
    out.push_str("...");
    out
}

pub fn format_timestamp(timestamp: u64, today: NaiveDate) -> String {
    let time = UNIX_EPOCH + Duration::from_secs(timestamp);
    let datetime: chrono::DateTime<chrono::Local> = time.into();
    let date = datetime.date_naive();

    if date == today {
        datetime.format(DATE_FORMAT_TODAY).to_string()
    } else if date == today - chrono::Duration::days(1) {
        datetime.format(DATE_FORMAT_YESTERDAY).to_string()
    } else {
        datetime.format(DATE_FORMAT_OTHER).to_string()
    }
}

/// Text-mode progress bar such as `[████░░░░░░]`.
pub fn progress_bar(percent: u16, width: usize) -> String {
    let filled = (percent.min(100) as usize * width) / 100;
    format!("[{}{}]", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_string_no_truncation() {
        assert_eq!(truncate_string("Scurt", 20), "Scurt");
    }

    #[test]
    fn test_truncate_string_with_truncation() {
        let result = truncate_string("Acesta este un text foarte lung", 20);
        assert_eq!(result, "Acesta este un te...");
        assert!(result.width() <= 20);
    }

    #[test]
    fn test_truncate_string_counts_wide_chars() {
        let result = truncate_string("⚡⚡⚡⚡⚡⚡", 7);
        assert_eq!(result, "⚡⚡...");
    }

    #[test]
    fn test_truncate_string_multibyte_safe() {
        let result = truncate_string("ăîșțâăîșțâăîșțâ", 8);
        assert_eq!(result, "ăîșțâ...");
    }

    #[test]
    fn test_format_timestamp_older_date() {
        let today = NaiveDate::from_ymd_opt(2030, 1, 1).unwrap();
        let formatted = format_timestamp(1_000_000_000, today);
        assert_eq!(formatted.len(), 10);
        assert!(formatted.ends_with(".2001"));
    }

    #[test]
    fn test_progress_bar() {
        assert_eq!(progress_bar(0, 4), "[░░░░]");
        assert_eq!(progress_bar(50, 4), "[██░░]");
        assert_eq!(progress_bar(250, 4), "[████]");
    }
}
