//! Terminal presentation for shorten results and history listings.

use colored::Colorize;

use crate::services::theme_engine::{Palette, Rgb};
use crate::types::history::HistoryEntry;
use crate::types::shorten::ShortenedLink;

/// Longest original-URL excerpt shown in a history row.
const LONG_URL_DISPLAY_MAX: usize = 60;

fn paint(text: &str, (r, g, b): Rgb) -> colored::ColoredString {
    text.truecolor(r, g, b)
}

/// Prints a successful shorten result: the short link, its source, the
/// stats page when enabled, and an optional QR code block.
pub fn render_result(palette: &Palette, link: &ShortenedLink, qr: Option<&str>) {
    println!();
    println!("  {}", paint(&link.short_url, palette.link).bold());
    println!("  {}", paint(&format!("from {}", link.long_url), palette.muted));
    if link.log_stats {
        println!(
            "  {}",
            paint(&format!("stats {}", link.stats_url()), palette.accent)
        );
    }
    if let Some(qr) = qr {
        println!();
        for line in qr.lines() {
            println!("  {}", line);
        }
    }
    println!();
}

/// Prints stored history entries, newest first.
pub fn render_history(palette: &Palette, entries: &[HistoryEntry]) {
    if entries.is_empty() {
        println!("{}", paint("No items", palette.muted));
        return;
    }
    for entry in entries {
        println!(
            "{}  {}",
            paint(&format_timestamp(entry.created_at), palette.muted),
            paint(&entry.short_url, palette.link).bold()
        );
        println!(
            "                    {}",
            paint(&truncate(&entry.long_url, LONG_URL_DISPLAY_MAX), palette.muted)
        );
    }
}

/// Prints an error notice to stderr.
pub fn render_error(palette: &Palette, message: &str) {
    eprintln!("{} {}", paint("error:", palette.danger).bold(), message);
}

/// Truncates a display string to `max` characters, ellipsis included.
fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let head: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{}…", head)
    }
}

/// Formats an epoch-millisecond timestamp as `YYYY-MM-DD HH:MM` UTC.
fn format_timestamp(epoch_ms: i64) -> String {
    let secs = epoch_ms.div_euclid(1000);
    let days = secs.div_euclid(86400);
    let tod = secs.rem_euclid(86400);
    let (year, month, day) = civil_from_days(days);
    format!(
        "{:04}-{:02}-{:02} {:02}:{:02}",
        year,
        month,
        day,
        tod / 3600,
        (tod % 3600) / 60
    )
}

/// Converts days since the UNIX epoch to a (year, month, day) civil date.
fn civil_from_days(z: i64) -> (i64, u32, u32) {
    let z = z + 719468;
    let era = z.div_euclid(146097);
    let doe = z.rem_euclid(146097);
    let yoe = (doe - doe / 1460 + doe / 36524 - doe / 146096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = (doy - (153 * mp + 2) / 5 + 1) as u32;
    let month = if mp < 10 { mp + 3 } else { mp - 9 } as u32;
    let year = yoe + era * 400 + if month <= 2 { 1 } else { 0 };
    (year, month, day)
}
