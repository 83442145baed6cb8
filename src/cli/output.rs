//! Plain-text rendering of workspace state for the terminal.

use crate::constants::{
    HEADING_RECENT, HIGHLIGHT_CLOSE, HIGHLIGHT_OPEN, MSG_NO_ENTRIES, MSG_NO_MATCHES,
};
use crate::journal_core::display::{counselor_label, format_entry_date, preview, render_segments};
use crate::journal_core::query::{ResultView, SearchSpec};
use crate::journal_core::JournalEntry;
use crate::ops::Status;
use std::fmt::Write as _;

pub fn render_status(status: &Status) -> String {
    format!(
        "User: {}\nEntries: {}\nSync: {}\n",
        status.user.display_name, status.entry_count, status.sync
    )
}

/// Renders what the journal list currently shows.
///
/// The recent view uses truncated previews; search results show full text
/// with keyword matches wrapped in highlight markers.
pub fn render_view(view: &ResultView<'_>, spec: &SearchSpec) -> String {
    let mut out = String::new();
    match view {
        ResultView::Recent(entries) => {
            let _ = writeln!(out, "{}", HEADING_RECENT);
            if entries.is_empty() {
                let _ = writeln!(out, "{}", MSG_NO_ENTRIES);
            }
            for entry in entries.iter() {
                out.push('\n');
                out.push_str(&render_card(entry, None));
            }
        }
        ResultView::Matches(entries) => {
            let _ = writeln!(out, "{} entries found", entries.len());
            for entry in entries {
                out.push('\n');
                out.push_str(&render_card(entry, Some(spec)));
            }
        }
        ResultView::NoMatches => {
            let _ = writeln!(out, "{}", MSG_NO_MATCHES);
        }
    }
    out
}

fn render_card(entry: &JournalEntry, spec: Option<&SearchSpec>) -> String {
    let text = |field: &str| match spec {
        Some(spec) => render_segments(&spec.highlight(field), HIGHLIGHT_OPEN, HIGHLIGHT_CLOSE),
        None => preview(field),
    };

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{}  {}  ({})",
        format_entry_date(entry.date),
        entry.emotion,
        entry.id
    );
    let _ = writeln!(out, "  Event: {}", text(&entry.event));
    let _ = writeln!(out, "  Realization: {}", text(&entry.realization));
    out.push_str(&render_scores(entry));
    out.push_str(&render_memo(entry));
    out
}

fn render_scores(entry: &JournalEntry) -> String {
    if !entry.emotion.has_scores() {
        return String::new();
    }
    format!(
        "  Self-esteem: {}  Worthlessness: {}\n",
        entry.self_esteem_score, entry.worthlessness_score
    )
}

fn render_memo(entry: &JournalEntry) -> String {
    match &entry.counselor_memo {
        Some(memo) if entry.has_counselor_memo() => {
            format!("  Comment from {}: {}\n", counselor_label(entry), memo)
        }
        _ => String::new(),
    }
}

/// Full entry, as shown by `show` and after an edit.
pub fn render_entry(entry: &JournalEntry) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Id: {}", entry.id);
    let _ = writeln!(
        out,
        "Date: {} ({})",
        format_entry_date(entry.date),
        entry.date
    );
    let _ = writeln!(out, "Emotion: {}", entry.emotion);
    let _ = writeln!(out, "Event: {}", entry.event);
    let _ = writeln!(out, "Realization: {}", entry.realization);
    if entry.emotion.has_scores() {
        let _ = writeln!(out, "Self-esteem: {}", entry.self_esteem_score);
        let _ = writeln!(out, "Worthlessness: {}", entry.worthlessness_score);
    }
    if let Some(memo) = entry.counselor_memo.as_deref().filter(|_| entry.has_counselor_memo()) {
        let _ = writeln!(out, "Comment from {}: {}", counselor_label(entry), memo);
    }
    out
}
