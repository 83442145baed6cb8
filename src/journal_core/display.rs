//! Text formatting for entries, previews and the calendar grid.

use crate::constants::{
    DAYS_PER_WEEK, DEFAULT_COUNSELOR_LABEL, PREVIEW_CHAR_LIMIT, PREVIEW_ELLIPSIS, WEEKDAY_LABELS,
};
use crate::journal_core::calendar::CalendarCell;
use crate::journal_core::highlight::Segment;
use crate::journal_core::JournalEntry;
use chrono::{Datelike, NaiveDate};
use std::fmt::Write as _;

/// Formats a date as `M月D日 (曜)`.
///
/// # Examples
///
/// ```
/// use moodlog::journal_core::display::format_entry_date;
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
/// assert_eq!(format_entry_date(date), "1月10日 (水)");
/// ```
pub fn format_entry_date(date: NaiveDate) -> String {
    let weekday = WEEKDAY_LABELS[date.weekday().num_days_from_sunday() as usize];
    format!("{}月{}日 ({})", date.month(), date.day(), weekday)
}

/// Calendar header, `YYYY年M月`.
pub fn month_title(reference: NaiveDate) -> String {
    format!("{}年{}月", reference.year(), reference.month())
}

/// Truncates `text` to the preview length, counted in characters.
pub fn preview(text: &str) -> String {
    if text.chars().count() > PREVIEW_CHAR_LIMIT {
        let head: String = text.chars().take(PREVIEW_CHAR_LIMIT).collect();
        format!("{}{}", head, PREVIEW_ELLIPSIS)
    } else {
        text.to_string()
    }
}

/// Who a counselor memo is attributed to.
pub fn counselor_label(entry: &JournalEntry) -> &str {
    entry
        .assigned_counselor
        .as_deref()
        .filter(|name| !name.is_empty())
        .unwrap_or(DEFAULT_COUNSELOR_LABEL)
}

/// Renders segments, wrapping matches in `open`/`close` markers.
pub fn render_segments(segments: &[Segment<'_>], open: &str, close: &str) -> String {
    let mut out = String::new();
    for segment in segments {
        if segment.is_match {
            out.push_str(open);
            out.push_str(segment.text);
            out.push_str(close);
        } else {
            out.push_str(segment.text);
        }
    }
    out
}

/// Renders a grid as a text table, one week per line.
///
/// Out-of-month days are shown in parentheses, the selected day in square
/// brackets and today with a trailing `*`.
pub fn render_calendar(reference: NaiveDate, cells: &[CalendarCell]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", month_title(reference));
    let header: Vec<String> = WEEKDAY_LABELS.iter().map(|d| format!("{:^5}", d)).collect();
    let _ = writeln!(out, "{}", header.join(""));
    for week in cells.chunks(DAYS_PER_WEEK) {
        let line: String = week.iter().map(render_cell).collect();
        let _ = writeln!(out, "{}", line.trim_end());
    }
    out
}

fn render_cell(cell: &CalendarCell) -> String {
    let day = cell.date.day();
    let body = if cell.is_selected {
        format!("[{}]", day)
    } else if cell.in_month {
        day.to_string()
    } else {
        format!("({})", day)
    };
    let marked = if cell.is_today {
        format!("{}*", body)
    } else {
        body
    };
    format!("{:>5}", marked)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::journal_core::calendar::generate;
    use crate::journal_core::Emotion;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_format_entry_date_weekdays() {
        assert_eq!(format_entry_date(date(2024, 1, 7)), "1月7日 (日)");
        assert_eq!(format_entry_date(date(2024, 1, 13)), "1月13日 (土)");
        assert_eq!(format_entry_date(date(2024, 12, 25)), "12月25日 (水)");
    }

    #[test]
    fn test_month_title() {
        assert_eq!(month_title(date(2024, 1, 31)), "2024年1月");
    }

    #[test]
    fn test_preview_truncates_by_characters() {
        let short = "short text";
        assert_eq!(preview(short), short);

        let exact: String = "あ".repeat(60);
        assert_eq!(preview(&exact), exact);

        let long: String = "あ".repeat(61);
        let shown = preview(&long);
        assert_eq!(shown.chars().count(), 63);
        assert!(shown.ends_with("..."));
    }

    #[test]
    fn test_counselor_label_falls_back() {
        let mut entry = JournalEntry::new(date(2024, 1, 1), Emotion::Guilt, "e", "r");
        assert_eq!(counselor_label(&entry), "カウンセラー");

        entry.assigned_counselor = Some("Sato".to_string());
        assert_eq!(counselor_label(&entry), "Sato");
    }

    #[test]
    fn test_render_segments() {
        let segments = [Segment::plain("a "), Segment::matched("b"), Segment::plain(" c")];
        assert_eq!(render_segments(&segments, "[", "]"), "a [b] c");
    }

    #[test]
    fn test_render_calendar_has_header_and_six_weeks() {
        let reference = date(2024, 1, 10);
        let cells = generate(reference, Some(reference), date(2024, 1, 12));

        let text = render_calendar(reference, &cells);
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines.len(), 8);
        assert_eq!(lines[0], "2024年1月");
        assert!(lines[1].contains('日') && lines[1].contains('土'));
        assert!(lines[2].contains("(31)"));
        assert!(text.contains("[10]"));
        assert!(text.contains("12*"));
    }
}
